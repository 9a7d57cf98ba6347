//! Functions behind the computed KPI keys.
//!
//! Every function here has the shape of a [`ValueFn`](super::ValueFn) or a
//! [`ValuesFn`](super::ValuesFn), or is a pure helper used by one.

use crate::Result;
use crate::dataset::{Dataset, Record, cve_refs, days_between, parse_date, release_refs};
use ohno::app_err;
use serde_json::Value;

const NLOC_PER_UNIT: f64 = 10_000.0;

/// Map a categorical CVSS impact label to its integer level.
///
/// `none` is 0, `low` and `partial` are 1, `high` and `complete` are 2. Matching
/// ignores case; any other label has no level.
#[must_use]
pub fn impact_level(label: &str) -> Option<u8> {
    match label.to_lowercase().as_str() {
        "none" => Some(0),
        "low" | "partial" => Some(1),
        "high" | "complete" => Some(2),
        _ => None,
    }
}

/// Numeric impact for a CIA field that may hold a label or a number.
#[must_use]
pub fn impact_score(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(label) => impact_level(label).map(f64::from),
        _ => None,
    }
}

pub fn confidentiality_impact(_: &Dataset, cve: &Record) -> Result<Option<f64>> {
    Ok(impact_score(cve.get("cvss_confidentiality_impact")))
}

pub fn integrity_impact(_: &Dataset, cve: &Record) -> Result<Option<f64>> {
    Ok(impact_score(cve.get("cvss_integrity_impact")))
}

pub fn availability_impact(_: &Dataset, cve: &Record) -> Result<Option<f64>> {
    Ok(impact_score(cve.get("cvss_availability_impact")))
}

#[expect(clippy::cast_precision_loss, reason = "identifier counts are far below 2^52")]
pub fn cve_count(_: &Dataset, entry: &Record) -> Result<Option<f64>> {
    Ok(Some(cve_refs(entry)?.len() as f64))
}

#[expect(clippy::cast_precision_loss, reason = "identifier counts are far below 2^52")]
pub fn release_count(_: &Dataset, entry: &Record) -> Result<Option<f64>> {
    Ok(Some(release_refs(entry)?.len() as f64))
}

/// CVEs on the entry per 10,000 lines of code across the entry's releases.
///
/// Releases missing from the dataset or without `nloc_total` add nothing to the
/// line count. Yields no observation when the total line count is zero.
#[expect(clippy::cast_precision_loss, reason = "identifier counts are far below 2^52")]
pub fn cves_per_nloc(data: &Dataset, entry: &Record) -> Result<Option<f64>> {
    let total_nloc: f64 = release_refs(entry)?
        .into_iter()
        .filter_map(|id| data.release(id).and_then(|release| release.number("nloc_total")))
        .sum();
    let total_cves = cve_refs(entry)?.len() as f64;

    if total_nloc > 0.0 {
        Ok(Some(total_cves / (total_nloc / NLOC_PER_UNIT)))
    } else {
        Ok(None)
    }
}

/// Total issues reported by the security linter for a release.
pub fn linter_issues(_: &Dataset, release: &Record) -> Result<Option<f64>> {
    Ok(release.nested_number("bandit_report", "issues_total"))
}

pub fn linter_high_severity_issues(_: &Dataset, release: &Record) -> Result<Option<f64>> {
    Ok(release.nested_number("bandit_report", "severity_high_count"))
}

pub fn linter_medium_severity_issues(_: &Dataset, release: &Record) -> Result<Option<f64>> {
    Ok(release.nested_number("bandit_report", "severity_medium_count"))
}

pub fn linter_low_severity_issues(_: &Dataset, release: &Record) -> Result<Option<f64>> {
    Ok(release.nested_number("bandit_report", "severity_low_count"))
}

/// Date a patch lag is measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LagStart {
    /// The affected release's publish date.
    Release,

    /// The CVE's disclosure date.
    Cve,
}

/// Unit a patch lag is reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LagUnit {
    Days,
    Months,
    Years,
}

impl LagUnit {
    #[must_use]
    pub const fn days(self) -> f64 {
        match self {
            Self::Days => 1.0,
            Self::Months => 30.0,
            Self::Years => 365.0,
        }
    }
}

/// Patch lags for every (release, CVE) pair on a timeline entry.
///
/// For each release on the entry and each CVE on the entry, every applicability
/// item of the CVE naming that release yields `(patched_at - start)` in `unit`.
/// Items without a patch date, or pairs without a start date, yield nothing.
///
/// # Errors
///
/// Returns an error if the entry's references are malformed or name a CVE that is
/// not in the dataset.
#[expect(clippy::cast_precision_loss, reason = "day counts are far below 2^52")]
pub fn patch_lag(data: &Dataset, entry: &Record, unit: LagUnit, start: LagStart) -> Result<Vec<f64>> {
    let release_ids = release_refs(entry)?;
    let cve_ids = cve_refs(entry)?;
    let mut lags = Vec::new();

    for release_id in release_ids {
        let release_published_at = data.release(release_id).and_then(|release| release.date("published_at"));

        for &cve_id in &cve_ids {
            let cve = data
                .cve(cve_id)
                .ok_or_else(|| app_err!("CVE '{cve_id}' is not in the dataset"))?;

            let start_at = match start {
                LagStart::Release => release_published_at,
                LagStart::Cve => cve.date("published_at"),
            };

            for app in cve.items("applicability") {
                if !is_applicable(release_id, app) {
                    continue;
                }

                let patched_at = app.get("patched_at").and_then(parse_date);
                if let (Some(patched_at), Some(start_at)) = (patched_at, start_at) {
                    lags.push(days_between(start_at, patched_at) as f64 / unit.days());
                }
            }
        }
    }

    Ok(lags)
}

/// Whether an applicability item names the given release.
#[must_use]
pub fn is_applicable(release_id: &str, app: &Value) -> bool {
    match app.get("release_id") {
        Some(Value::String(id)) => id == release_id,
        Some(Value::Number(id)) => id.to_string() == release_id,
        _ => false,
    }
}

pub fn release_lag_days(data: &Dataset, entry: &Record) -> Result<Vec<f64>> {
    patch_lag(data, entry, LagUnit::Days, LagStart::Release)
}

pub fn cve_lag_days(data: &Dataset, entry: &Record) -> Result<Vec<f64>> {
    patch_lag(data, entry, LagUnit::Days, LagStart::Cve)
}

pub fn release_lag_months(data: &Dataset, entry: &Record) -> Result<Vec<f64>> {
    patch_lag(data, entry, LagUnit::Months, LagStart::Release)
}

pub fn cve_lag_months(data: &Dataset, entry: &Record) -> Result<Vec<f64>> {
    patch_lag(data, entry, LagUnit::Months, LagStart::Cve)
}
