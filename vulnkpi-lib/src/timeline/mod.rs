//! The timeline walk that turns a dataset into KPI series
//!
//! # Implementation Model
//!
//! For every timeline entry, in the order the caller supplied them, and for every
//! requested KPI:
//!
//! 1. A KPI whose key returns values is called once with the entry and its result
//!    becomes the date's observation list.
//! 2. Otherwise [`resolve_elements`] turns the entry into the CVEs, releases, or
//!    the entry itself, and [`extract_value`] reads one observation per element.
//! 3. The observation list, possibly empty, is appended to the KPI's series.
//!
//! Nothing in the walk is fatal. Missing references, missing fields, failing
//! extractors and malformed reference shapes are logged and turn into missing
//! observations, so every KPI always has exactly one slot per date. The
//! [`Statistics`](crate::stats::Statistics) for each KPI are then computed from
//! its series and bundled into a [`KpiReport`](crate::reports::KpiReport).

mod extractor;
mod processor;
mod resolver;

pub use extractor::{extract_value, field_value};
pub use processor::{Observations, TimelineProcessor, timeline_kpis};
pub use resolver::resolve_elements;
