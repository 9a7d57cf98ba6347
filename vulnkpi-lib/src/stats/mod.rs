//! Reduction of per-date observation lists into summary statistics
//!
//! The timeline walk produces, for each KPI, one list of observations per
//! date. [`Statistics::from_observations`] turns that list of lists into five
//! parallel series (sum, mean, standard deviation, min, max) with one slot per
//! date, leaving `None` in every series for dates without observations.
//!
//! The standard deviation is the population form (divide by `n`), so a single
//! observation has a deviation of zero.

mod statistic;
mod statistics;

pub use statistic::Statistic;
pub use statistics::{Statistics, Summary};
