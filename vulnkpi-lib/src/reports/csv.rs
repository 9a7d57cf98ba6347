use super::{KpiReport, common};
use crate::Result;
use crate::stats::Statistic;
use core::fmt::Write;
use std::borrow::Cow;
use strum::IntoEnumIterator;

/// Write one row per date with a `<kpi>.<statistic>` column for every KPI and statistic.
pub fn generate<W: Write>(report: &KpiReport<'_>, precision: usize, writer: &mut W) -> Result<()> {
    write!(writer, "date")?;
    for kpi in &report.kpis {
        for statistic in Statistic::iter() {
            write!(writer, ",{}", escape_csv(&format!("{}.{statistic}", kpi.name())))?;
        }
    }
    writeln!(writer)?;

    for (row, date) in report.dates.iter().enumerate() {
        write!(writer, "{}", common::format_date(*date))?;
        for kpi in &report.kpis {
            for statistic in Statistic::iter() {
                let value = kpi.series(statistic).get(row).copied().flatten();
                write!(writer, ",{}", common::format_value(value, precision, ""))?;
            }
        }
        writeln!(writer)?;
    }

    Ok(())
}

/// Escape a value for RFC compliant CSV output.
///
/// Wraps the value in double quotes if it contains commas, newlines, or double quotes.
/// Internal double quotes are doubled per the RFC.
fn escape_csv(s: &str) -> Cow<'_, str> {
    if s.contains('"') {
        Cow::Owned(format!("\"{}\"", s.replace('"', "\"\"")))
    } else if s.contains(',') || s.contains('\n') || s.contains('\r') {
        Cow::Owned(format!("\"{s}\""))
    } else {
        Cow::Borrowed(s)
    }
}
