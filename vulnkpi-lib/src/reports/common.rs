//! Common utilities shared across report generators.

use chrono::NaiveDate;

/// Format an optional statistic with a fixed number of decimals, or `missing` when absent.
pub fn format_value(value: Option<f64>, precision: usize, missing: &str) -> String {
    value.map_or_else(|| missing.to_string(), |v| format!("{v:.precision$}"))
}

/// Format a date axis slot as `YYYY-MM-DD`, or an empty string when the entry had no date.
pub fn format_date(date: Option<NaiveDate>) -> String {
    date.map_or_else(String::new, |d| d.format("%Y-%m-%d").to_string())
}
