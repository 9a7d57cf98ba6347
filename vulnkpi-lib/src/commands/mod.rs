//! Command-line interface and orchestration for vulnkpi
//!
//! This module implements the CLI commands and ties the dataset loader, the
//! timeline engine, and the report generators together into end-to-end
//! workflows.
//!
//! ## Commands
//!
//! - **compute**: Load a dataset file, compute the requested KPIs over its
//!   timeline, and write console, CSV, or JSON reports
//! - **list**: Print every registered KPI with its metadata
//! - **init**: Generate a default configuration file
//! - **validate**: Check configuration file syntax and KPI names
//!
//! The `run` function parses command-line arguments using clap and routes
//! to the appropriate command handler. Configuration is managed through an
//! optional `vulnkpi.toml` file holding the default KPI selection and the
//! console/CSV formatting options.

mod common;
mod compute;
mod config;
mod host;
mod init;
mod list;
mod run;
mod validate;

pub use compute::{ComputeArgs, compute};
pub use config::Config;
pub use host::Host;
pub use init::{InitArgs, init_config};
pub use list::list_kpis;
pub use run::run;
pub use validate::{ValidateArgs, validate_config};
