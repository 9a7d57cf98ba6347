//! Multi-format report generation for computed KPI series
//!
//! This module turns a [`KpiReport`] into formats for human consumption and
//! programmatic processing.
//!
//! # Implementation Model
//!
//! Three report generators are provided, each accessed through a `generate` function:
//! - **Console**: Per-KPI tables of one statistic per date, with optional ANSI colors
//! - **CSV**: One row per date and one column per KPI statistic, with proper escaping
//! - **JSON**: The result bundle keyed by KPI name plus the shared `dates` axis
//!
//! All generators operate on the same input, so callers can emit several formats
//! from a single computation. Value and date formatting is shared through the
//! `common` module.

mod common;
mod console;
mod csv;
mod json;
mod kpi_report;

pub use console::{ConsoleOptions, generate as generate_console};
pub use csv::generate as generate_csv;
pub use json::{generate as generate_json, to_json};
pub use kpi_report::{KpiReport, KpiResult};
