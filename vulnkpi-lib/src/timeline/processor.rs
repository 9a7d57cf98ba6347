use super::{extract_value, resolve_elements};
use crate::dataset::{Dataset, Record, parse_day, release_refs};
use crate::kpis::{KpiDef, KpiKey, KpiRegistry};
use crate::reports::KpiReport;
use chrono::NaiveDate;

/// Raw observation lists gathered by a timeline walk.
#[derive(Debug, Clone, Default)]
pub struct Observations<'r> {
    /// One slot per timeline entry, `None` when the entry has no parseable date.
    pub dates: Vec<Option<NaiveDate>>,

    /// For each requested KPI, one observation list per date.
    pub series: Vec<(&'r KpiDef, Vec<Vec<f64>>)>,
}

/// Walks a dataset's timeline, evaluating KPIs from an injected registry.
#[derive(Debug, Clone, Copy)]
pub struct TimelineProcessor<'p, 'r> {
    registry: &'p KpiRegistry<'r>,
}

impl<'p, 'r> TimelineProcessor<'p, 'r> {
    #[must_use]
    pub const fn new(registry: &'p KpiRegistry<'r>) -> Self {
        Self { registry }
    }

    /// Gather the per-date observation lists for the requested KPIs.
    ///
    /// Unknown KPI names are dropped. An entry whose release reference is
    /// malformed contributes an empty list to every KPI.
    pub fn observe<'n, I>(&self, data: &Dataset, names: I) -> Observations<'r>
    where
        I: IntoIterator<Item = &'n str>,
    {
        let defs = self.registry.select(names);
        let mut dates = Vec::with_capacity(data.timeline.len());
        let mut series: Vec<Vec<Vec<f64>>> = defs.iter().map(|_| Vec::with_capacity(data.timeline.len())).collect();

        for (index, entry) in data.timeline.iter().enumerate() {
            dates.push(entry_date(index, entry));

            if let Err(e) = release_refs(entry) {
                log::error!("skipping timeline entry {index}: {e}");
                for per_date in &mut series {
                    per_date.push(Vec::new());
                }
                continue;
            }

            for (def, per_date) in defs.iter().zip(&mut series) {
                per_date.push(observe_entry(def, data, entry, index));
            }
        }

        Observations {
            dates,
            series: defs.into_iter().zip(series).collect(),
        }
    }

    /// Walk the timeline and summarize every requested KPI.
    pub fn process<'n, I>(&self, data: &Dataset, names: I) -> KpiReport<'r>
    where
        I: IntoIterator<Item = &'n str>,
    {
        KpiReport::from(self.observe(data, names))
    }
}

/// Compute the requested KPIs over the dataset's timeline.
pub fn timeline_kpis<'r, 'n, I>(data: &Dataset, registry: &KpiRegistry<'r>, names: I) -> KpiReport<'r>
where
    I: IntoIterator<Item = &'n str>,
{
    TimelineProcessor::new(registry).process(data, names)
}

fn entry_date(index: usize, entry: &Record) -> Option<NaiveDate> {
    let date = entry.get("date").and_then(parse_day);
    if date.is_none() {
        log::warn!("timeline entry {index} has no usable date");
    }
    date
}

fn observe_entry(def: &KpiDef, data: &Dataset, entry: &Record, index: usize) -> Vec<f64> {
    if let KpiKey::Values(compute) = def.key {
        return compute(data, entry).unwrap_or_else(|e| {
            log::error!("could not compute KPI '{}' for timeline entry {index}: {e}", def.name);
            Vec::new()
        });
    }

    match resolve_elements(data, entry, def.element) {
        Ok(elements) => elements
            .into_iter()
            .filter_map(|element| extract_value(def, data, element))
            .collect(),
        Err(e) => {
            log::error!("KPI '{}' skipped for timeline entry {index}: {e}", def.name);
            Vec::new()
        }
    }
}
