use crate::Result;
use crate::dataset::{Dataset, Record};

/// Computes one observation for an element; `Ok(None)` means no observation.
pub type ValueFn = fn(&Dataset, &Record) -> Result<Option<f64>>;

/// Computes the full observation list for a timeline entry.
pub type ValuesFn = fn(&Dataset, &Record) -> Result<Vec<f64>>;

/// How a KPI reads its observations.
#[derive(Debug, Clone, Copy)]
pub enum KpiKey {
    /// Read a named field from each element.
    Field(&'static str),

    /// Compute one observation per element, with access to the whole dataset.
    Function(ValueFn),

    /// Compute every observation for a timeline entry in one call, bypassing element resolution.
    Values(ValuesFn),
}

impl KpiKey {
    #[must_use]
    pub const fn returns_values(&self) -> bool {
        matches!(self, Self::Values(_))
    }
}
