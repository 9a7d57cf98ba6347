//! KPI definitions and the registry they are looked up in
//!
//! A KPI is a named recipe for turning a timeline entry into a list of numeric
//! observations. Each [`KpiDef`] states:
//! - **Element**: what an observation is taken from ([`ElementKind`]): each CVE
//!   on the entry, each release on the entry, or the entry itself
//! - **Key**: how the observation is read ([`KpiKey`]): a named field, a
//!   function of `(dataset, element)`, or a function returning the whole
//!   observation list for an entry
//! - **Default aggregation**: which statistic best summarizes the KPI
//! - **Display metadata**: title, axis label, optional upper bound
//!
//! The built-in definitions live in `kpi_def.rs` as a static table; the
//! functions behind computed keys live in [`extractors`]. A [`KpiRegistry`] is
//! built from a table of definitions and injected into the timeline walk, so
//! tests can register synthetic KPIs.

mod aggregation;
mod element_kind;
pub mod extractors;
mod kpi_def;
mod kpi_key;
mod registry;

pub use aggregation::Aggregation;
pub use element_kind::ElementKind;
pub use kpi_def::{KPI_DEFINITIONS, KpiDef};
pub use kpi_key::{KpiKey, ValueFn, ValuesFn};
pub use registry::KpiRegistry;
