//! The dataset the KPI engine walks over
//!
//! A [`Dataset`] is assembled upstream from persisted CVE and release records
//! and handed to the engine fully materialized. It holds three collections:
//!
//! - `cves`: CVE identifier to CVE [`Record`]
//! - `releases`: release identifier to release [`Record`]
//! - `timeline`: ordered timeline entries, each a [`Record`] with a `date`,
//!   one or more `release` identifiers, and zero or more `cves` identifiers
//!
//! Records are kept loosely typed because KPI definitions address fields by
//! name. Reference fields on timeline entries come in several shapes (a single
//! identifier or a list of identifiers); [`release_refs`] and [`cve_refs`]
//! normalize them into a list before any lookup happens.

mod data;
mod dates;
mod record;
mod refs;

pub use data::Dataset;
pub use dates::{days_between, parse_date, parse_day};
pub use record::Record;
pub use refs::{cve_refs, release_refs};
