//! End-to-end KPI computation over the dataset fixture.
//!
//! The fixture's third timeline entry has a malformed release reference and its
//! fourth entry names a CVE that is missing from the dataset.

use camino::Utf8PathBuf;
use chrono::NaiveDate;
use serde_json::json;
use vulnkpi_lib::dataset::Dataset;
use vulnkpi_lib::kpis::KpiRegistry;
use vulnkpi_lib::reports::{KpiReport, to_json};
use vulnkpi_lib::stats::Statistic;
use vulnkpi_lib::timeline::timeline_kpis;

fn fixture() -> Dataset {
    let path = Utf8PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/dataset.json"));
    Dataset::load(&path).expect("fixture should load")
}

fn compute<'r>(data: &Dataset, registry: &KpiRegistry<'r>, names: &[&str]) -> KpiReport<'r> {
    timeline_kpis(data, registry, names.iter().copied())
}

#[test]
fn test_dates_follow_timeline_order() {
    let data = fixture();
    let registry = KpiRegistry::builtin();
    let report = compute(&data, &registry, &["base"]);

    let expected: Vec<_> = [(1, 15), (2, 15), (3, 15), (4, 15), (5, 15)]
        .into_iter()
        .map(|(month, day)| NaiveDate::from_ymd_opt(2020, month, day))
        .collect();
    assert_eq!(report.dates, expected);
}

#[test]
fn test_cvss_scores() {
    let data = fixture();
    let registry = KpiRegistry::builtin();
    let report = compute(&data, &registry, &["base"]);
    let base = report.get("base").unwrap();

    assert_eq!(base.default_series(), &[Some(7.5), Some(7.5), None, Some(6.0), None]);
    assert_eq!(base.series(Statistic::Sum)[3], Some(12.0));
    assert_eq!(base.series(Statistic::Min)[3], Some(4.5));
    assert_eq!(base.series(Statistic::Max)[3], Some(7.5));
    assert_eq!(base.series(Statistic::Std)[3], Some(1.5));
    assert_eq!(base.series(Statistic::Std)[0], Some(0.0));
}

#[test]
fn test_impact_labels_map_to_levels() {
    let data = fixture();
    let registry = KpiRegistry::builtin();
    let report = compute(&data, &registry, &["confidentiality", "integrity", "availability"]);

    assert_eq!(report.get("confidentiality").unwrap().default_series()[3], Some(1.5));
    assert_eq!(report.get("integrity").unwrap().default_series()[0], Some(0.0));
    assert_eq!(report.get("integrity").unwrap().default_series()[3], Some(1.0));
    assert_eq!(report.get("availability").unwrap().default_series()[3], Some(0.5));
}

#[test]
fn test_counts_and_code_measurements() {
    let data = fixture();
    let registry = KpiRegistry::builtin();
    let report = compute(&data, &registry, &["cves", "releases", "nloc", "ccn", "cves/nloc"]);

    let sums = |name: &str| report.get(name).unwrap().series(Statistic::Sum).to_vec();
    assert_eq!(sums("cves"), vec![Some(1.0), Some(1.0), None, Some(3.0), Some(0.0)]);
    assert_eq!(sums("releases"), vec![Some(1.0), Some(2.0), None, Some(1.0), Some(1.0)]);
    assert_eq!(sums("nloc"), vec![Some(20_000.0), Some(50_000.0), None, Some(30_000.0), Some(30_000.0)]);
    assert_eq!(sums("cves/nloc"), vec![Some(0.5), Some(0.2), None, Some(1.0), Some(0.0)]);
    assert_eq!(report.get("ccn").unwrap().default_series()[1], Some(3.0));
}

#[test]
fn test_linter_issues() {
    let data = fixture();
    let registry = KpiRegistry::builtin();
    let report = compute(&data, &registry, &["issues", "issues/high", "issues/low"]);

    assert_eq!(report.get("issues").unwrap().default_series()[1], Some(10.0));
    assert_eq!(report.get("issues/high").unwrap().default_series()[4], Some(0.0));
    assert_eq!(report.get("issues/low").unwrap().default_series()[1], Some(6.0));
}

#[test]
fn test_patch_lags() {
    let data = fixture();
    let registry = KpiRegistry::builtin();
    let report = compute(&data, &registry, &["lag/release", "lag/cve", "lag/cve/months"]);

    let release_lag = report.get("lag/release").unwrap();
    assert_eq!(release_lag.series(Statistic::Max), &[Some(39.0), Some(39.0), None, None, None]);
    assert_eq!(release_lag.default_series()[1], Some(28.5));

    let cve_lag = report.get("lag/cve").unwrap();
    assert_eq!(cve_lag.default_series(), &[Some(30.0), Some(35.0), None, None, None]);

    let months = report.get("lag/cve/months").unwrap();
    assert_eq!(months.default_series()[0], Some(1.0));
}

#[test]
fn test_unknown_names_are_dropped_and_order_kept() {
    let data = fixture();
    let registry = KpiRegistry::builtin();
    let report = compute(&data, &registry, &["nloc", "does-not-exist", "base", "nloc"]);

    assert_eq!(report.names().collect::<Vec<_>>(), vec!["nloc", "base"]);
}

#[test]
fn test_every_series_is_aligned_with_dates() {
    let data = fixture();
    let registry = KpiRegistry::builtin();
    let names: Vec<&str> = registry.iter().map(|def| def.name).collect();
    let report = compute(&data, &registry, &names);

    assert_eq!(report.kpis.len(), registry.len());
    for kpi in &report.kpis {
        for statistic in [Statistic::Sum, Statistic::Mean, Statistic::Std, Statistic::Min, Statistic::Max] {
            assert_eq!(kpi.series(statistic).len(), report.dates.len(), "{}.{statistic}", kpi.name());
        }
    }
}

#[test]
fn test_json_bundle() {
    let data = fixture();
    let registry = KpiRegistry::builtin();
    let report = compute(&data, &registry, &["cves", "base"]);
    let value = to_json(&report);

    assert_eq!(value["dates"][0], "2020-01-15");
    assert_eq!(value["cves"]["suffix"], "total");
    assert_eq!(value["cves"]["default"], "sum");
    assert_eq!(value["cves"]["values"]["sum"], json!([1.0, 1.0, null, 3.0, 0.0]));
    assert_eq!(value["base"]["max"], 10.0);
    assert_eq!(value["base"]["element"], "cve");
}
