#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core library for vulnkpi
//!
//! This library computes time-series Key Performance Indicators (KPIs) over a
//! security and code-quality dataset: a timeline of software releases, the CVEs
//! affecting them, and the static-analysis measurements taken on each release.
//!
//! # Module Organization
//!
//! - [`dataset`]: The in-memory dataset and its loosely-typed records
//! - [`kpis`]: KPI definitions, extraction functions, and the registry
//! - [`timeline`]: Element resolution, value extraction, and the timeline walk
//! - [`stats`]: Reduction of per-date observations into summary statistics
//! - [`reports`]: Report generation in multiple formats
//! - [`commands`]: Command-line interface and orchestration

pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

pub mod commands;
pub mod dataset;
pub mod kpis;
pub mod reports;
pub mod stats;
pub mod timeline;

pub use crate::commands::{Host, run};
