use super::{KPI_DEFINITIONS, KpiDef};
use std::collections::HashMap;

/// Immutable catalog of KPI definitions, keyed by name.
#[derive(Debug, Clone)]
pub struct KpiRegistry<'a> {
    defs: &'a [KpiDef],
    by_name: HashMap<&'a str, &'a KpiDef>,
}

impl<'a> KpiRegistry<'a> {
    /// Build a registry over a table of definitions.
    ///
    /// When two definitions share a name, the first one wins.
    #[must_use]
    pub fn new(defs: &'a [KpiDef]) -> Self {
        let mut by_name = HashMap::with_capacity(defs.len());
        for def in defs {
            if by_name.contains_key(def.name) {
                log::warn!("ignoring duplicate definition of KPI '{}'", def.name);
            } else {
                let _ = by_name.insert(def.name, def);
            }
        }

        Self { defs, by_name }
    }

    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&'a KpiDef> {
        self.by_name.get(name).copied()
    }

    /// Definitions for the requested names, in request order.
    ///
    /// Unknown names are logged and dropped; repeated names are kept once.
    #[must_use]
    pub fn select<'n, I>(&self, names: I) -> Vec<&'a KpiDef>
    where
        I: IntoIterator<Item = &'n str>,
    {
        let mut selected: Vec<&'a KpiDef> = Vec::new();
        for name in names {
            match self.lookup(name) {
                Some(def) if selected.iter().any(|d| d.name == def.name) => {}
                Some(def) => selected.push(def),
                None => log::warn!("ignoring unknown KPI '{name}'"),
            }
        }

        selected
    }

    /// All definitions in table order.
    pub fn iter(&self) -> impl Iterator<Item = &'a KpiDef> + '_ {
        self.defs.iter().filter(|def| self.lookup(def.name).is_some_and(|found| core::ptr::eq(found, *def)))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

impl KpiRegistry<'static> {
    /// Registry over the built-in KPI definitions.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(KPI_DEFINITIONS)
    }
}

impl Default for KpiRegistry<'static> {
    fn default() -> Self {
        Self::builtin()
    }
}
