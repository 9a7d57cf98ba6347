use super::{KpiReport, common};
use crate::Result;
use crate::stats::Statistic;
use core::fmt::Write;
use owo_colors::OwoColorize;

/// Controls what the console report shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleOptions {
    /// Statistic to show for every KPI, or each KPI's default aggregation when `None`.
    pub statistic: Option<Statistic>,
    pub precision: usize,
    pub use_colors: bool,
}

impl Default for ConsoleOptions {
    fn default() -> Self {
        Self {
            statistic: None,
            precision: 2,
            use_colors: false,
        }
    }
}

pub fn generate<W: Write>(report: &KpiReport<'_>, options: &ConsoleOptions, writer: &mut W) -> Result<()> {
    let dates: Vec<String> = report
        .dates
        .iter()
        .map(|date| date.map_or_else(|| "(no date)".to_string(), |d| common::format_date(Some(d))))
        .collect();
    let date_width = dates.iter().map(String::len).max().unwrap_or(0);

    for (index, kpi) in report.kpis.iter().enumerate() {
        if index > 0 {
            writeln!(writer)?;
        }

        let statistic = options.statistic.unwrap_or_else(|| kpi.aggregation().statistic());
        let heading = format!("{} ({}, {statistic})", kpi.title(), kpi.name());
        if options.use_colors {
            writeln!(writer, "{}", heading.bold())?;
        } else {
            writeln!(writer, "{heading}")?;
        }

        let series = kpi.series(statistic);
        for (date, value) in dates.iter().zip(series) {
            let formatted = common::format_value(*value, options.precision, "n/a");
            writeln!(writer, "  {date:<date_width$} : {formatted}")?;
        }
    }

    Ok(())
}
