use super::Host;
use super::common::{ColorMode, LogLevel, init_logging};
use super::config::Config;
use crate::Result;
use crate::dataset::Dataset;
use crate::kpis::KpiRegistry;
use crate::reports::{ConsoleOptions, KpiReport, generate_console, generate_csv, generate_json};
use crate::timeline::timeline_kpis;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ohno::IntoAppError;
use std::fs;
use std::io::Write;

#[derive(Parser, Debug)]
pub struct ComputeArgs {
    /// Path to the JSON dataset file
    #[arg(value_name = "DATASET")]
    pub dataset: Utf8PathBuf,

    /// KPI to compute; repeat for several (default is the configured list)
    #[arg(long = "kpi", value_name = "NAME")]
    pub kpis: Vec<String>,

    /// Path to configuration file (default is `vulnkpi.toml`)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    /// Control when to use colored output
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: ColorMode,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none")]
    pub log_level: LogLevel,

    /// Output KPI series to a CSV file
    #[arg(long, value_name = "PATH", help_heading = "Report Output")]
    pub csv: Option<Utf8PathBuf>,

    /// Output KPI series to a JSON file
    #[arg(long, value_name = "PATH", help_heading = "Report Output")]
    pub json: Option<Utf8PathBuf>,

    /// Output KPI series to the console. If omitted, console output is shown only when no other reports are generated.
    #[arg(long, help_heading = "Report Output")]
    pub console: bool,
}

/// Compute KPIs over a dataset file and write the requested reports
///
/// # Errors
///
/// Returns an error if the configuration or dataset cannot be loaded, or if a report cannot be written
pub fn compute<H: Host>(host: &mut H, args: &ComputeArgs) -> Result<()> {
    init_logging(args.log_level);

    let config = Config::load(Utf8Path::new("."), args.config.as_ref())?;
    let data = Dataset::load(&args.dataset)?;
    let registry = KpiRegistry::builtin();

    let names = config.kpi_names(&args.kpis, &registry);
    for name in &names {
        if registry.lookup(name).is_none() {
            let _ = writeln!(host.error(), "Ignoring unknown KPI '{name}'");
        }
    }

    log::info!(
        "computing {} KPI(s) over {} timeline entries from '{}'",
        names.len(),
        data.timeline.len(),
        args.dataset
    );
    let report = timeline_kpis(&data, &registry, names.iter().copied());

    write_reports(host, args, &config, &report)
}

fn write_reports<H: Host>(host: &mut H, args: &ComputeArgs, config: &Config, report: &KpiReport<'_>) -> Result<()> {
    let generating_reports = args.csv.is_some() || args.json.is_some();

    if args.console || !generating_reports {
        let options = ConsoleOptions {
            statistic: config.statistic,
            precision: config.precision,
            use_colors: args.color.use_colors(),
        };

        let mut console_output = String::new();
        generate_console(report, &options, &mut console_output)?;
        let _ = write!(host.output(), "{console_output}");
    }

    if let Some(filename) = &args.csv {
        let mut csv_output = String::new();
        generate_csv(report, config.precision, &mut csv_output)?;
        fs::write(filename, csv_output).into_app_err_with(|| format!("writing CSV report to '{filename}'"))?;
    }

    if let Some(filename) = &args.json {
        let mut json_output = String::new();
        generate_json(report, &mut json_output)?;
        fs::write(filename, json_output).into_app_err_with(|| format!("writing JSON report to '{filename}'"))?;
    }

    Ok(())
}
