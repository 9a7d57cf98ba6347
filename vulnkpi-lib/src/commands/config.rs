use crate::Result;
use crate::kpis::KpiRegistry;
use crate::stats::Statistic;
use camino::{Utf8Path, Utf8PathBuf};
use ohno::{IntoAppError, app_err};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;

/// The default configuration TOML content, embedded from `default_config.toml`
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../../default_config.toml");

/// Name of the configuration file looked up in the base directory
pub const CONFIG_FILE_NAME: &str = "vulnkpi.toml";

const MAX_PRECISION: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// KPIs computed when none are named on the command line (empty means every registered KPI)
    #[serde(default)]
    pub kpis: Vec<String>,

    /// Statistic shown by console output, or each KPI's default aggregation when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statistic: Option<Statistic>,

    /// Decimal places used by console and CSV output
    #[serde(default = "default_precision")]
    pub precision: usize,
}

const fn default_precision() -> usize {
    2
}

impl Config {
    /// Load configuration from a file or use defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or fails validation
    pub fn load(base_dir: &Utf8Path, config_path: Option<&Utf8PathBuf>) -> Result<Self> {
        let (final_path, text) = if let Some(path) = config_path {
            let text = fs::read_to_string(path).into_app_err_with(|| format!("reading vulnkpi configuration file '{path}'"))?;
            (path.clone(), text)
        } else {
            let path = base_dir.join(CONFIG_FILE_NAME);
            match fs::read_to_string(&path) {
                Ok(text) => (path, text),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    log::debug!("no configuration file at '{path}', using defaults");
                    return Self::from_toml(DEFAULT_CONFIG_TOML);
                }
                Err(e) => return Err(e).into_app_err_with(|| format!("reading vulnkpi configuration file '{path}'")),
            }
        };

        let config: Self = toml::from_str(&text).into_app_err_with(|| format!("parsing configuration file '{final_path}'"))?;
        config.validate()?;
        log::info!("loaded configuration from '{final_path}'");
        Ok(config)
    }

    /// Parse and validate configuration text
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML or fails validation
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).into_app_err("parsing configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Save the default configuration to a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_default(output_path: &Utf8Path) -> Result<()> {
        fs::write(output_path, DEFAULT_CONFIG_TOML).into_app_err_with(|| format!("writing default configuration to {output_path}"))?;
        Ok(())
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if the precision is out of range or a KPI name is not registered
    pub fn validate(&self) -> Result<()> {
        if self.precision > MAX_PRECISION {
            return Err(app_err!("precision must be between 0 and {MAX_PRECISION}, got {}", self.precision));
        }

        let registry = KpiRegistry::builtin();
        let unknown: Vec<&str> = self
            .kpis
            .iter()
            .map(String::as_str)
            .filter(|name| registry.lookup(name).is_none())
            .collect();

        if !unknown.is_empty() {
            return Err(app_err!("unknown KPI name(s) in configuration: {}", unknown.join(", ")));
        }

        Ok(())
    }

    /// The KPI names to compute: the given ones, else the configured ones, else every registered KPI.
    #[must_use]
    pub fn kpi_names<'a>(&'a self, requested: &'a [String], registry: &KpiRegistry<'a>) -> Vec<&'a str> {
        if !requested.is_empty() {
            return requested.iter().map(String::as_str).collect();
        }

        if !self.kpis.is_empty() {
            return self.kpis.iter().map(String::as_str).collect();
        }

        registry.iter().map(|def| def.name).collect()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            kpis: Vec::new(),
            statistic: None,
            precision: default_precision(),
        }
    }
}
