use super::extractors;
use super::{Aggregation, ElementKind, KpiKey};

#[derive(Debug, Clone, Copy)]
pub struct KpiDef {
    pub name: &'static str,
    pub title: &'static str,
    pub y_label: &'static str,
    pub element: ElementKind,
    pub key: KpiKey,
    pub default: Aggregation,

    /// Expected upper bound, used to scale displays. Values are never clamped to it.
    pub max: Option<f64>,

    /// Legend suffix, e.g. `total` for counts.
    pub suffix: Option<&'static str>,

    /// Whether plots should fill the area under the series.
    pub fill: bool,
}

impl KpiDef {
    #[must_use]
    pub const fn new(
        name: &'static str,
        title: &'static str,
        y_label: &'static str,
        element: ElementKind,
        default: Aggregation,
        key: KpiKey,
    ) -> Self {
        Self {
            name,
            title,
            y_label,
            element,
            key,
            default,
            max: None,
            suffix: None,
            fill: true,
        }
    }

    #[must_use]
    pub const fn with_max(self, max: f64) -> Self {
        Self { max: Some(max), ..self }
    }

    #[must_use]
    pub const fn with_suffix(self, suffix: &'static str) -> Self {
        Self {
            suffix: Some(suffix),
            ..self
        }
    }

    #[must_use]
    pub const fn without_fill(self) -> Self {
        Self { fill: false, ..self }
    }

    #[must_use]
    pub const fn returns_values(&self) -> bool {
        self.key.returns_values()
    }
}

macro_rules! kpi_def {
    ($name:expr, $title:expr, $y_label:expr, $element:ident, $default:ident, field $field:expr) => {
        KpiDef::new($name, $title, $y_label, ElementKind::$element, Aggregation::$default, KpiKey::Field($field))
    };
    ($name:expr, $title:expr, $y_label:expr, $element:ident, $default:ident, function $function:expr) => {
        KpiDef::new($name, $title, $y_label, ElementKind::$element, Aggregation::$default, KpiKey::Function($function))
    };
    ($name:expr, $title:expr, $y_label:expr, $element:ident, $default:ident, values $function:expr) => {
        KpiDef::new($name, $title, $y_label, ElementKind::$element, Aggregation::$default, KpiKey::Values($function))
    };
}

pub const KPI_DEFINITIONS: &[KpiDef] = &[
    kpi_def!("base", "CVSS Base Score", "Score", Cve, Mean, field "cvss_base_score").with_max(10.0),
    kpi_def!("impact", "CVSS Impact Score", "Score", Cve, Mean, field "cvss_impact_score").with_max(10.0),
    kpi_def!(
        "exploitability",
        "CVSS Exploitability Score",
        "Score",
        Cve,
        Mean,
        field "cvss_exploitability_score"
    )
    .with_max(10.0),
    kpi_def!(
        "confidentiality",
        "CVSS Confidentiality Impact",
        "Impact",
        Cve,
        Mean,
        function extractors::confidentiality_impact
    )
    .with_max(2.0),
    kpi_def!(
        "integrity",
        "CVSS Integrity Impact",
        "Impact",
        Cve,
        Mean,
        function extractors::integrity_impact
    )
    .with_max(2.0),
    kpi_def!(
        "availability",
        "CVSS Availability Impact",
        "Impact",
        Cve,
        Mean,
        function extractors::availability_impact
    )
    .with_max(2.0),
    kpi_def!("cves", "Number of CVEs", "Count", Entry, Sum, function extractors::cve_count).with_suffix("total"),
    kpi_def!("releases", "Number of Releases", "Count", Entry, Sum, function extractors::release_count).with_suffix("total"),
    kpi_def!("nloc", "Number of Lines of Code (NLOC)", "NLOC", Release, Sum, field "nloc_total"),
    kpi_def!("files", "Number of Files", "Count", Release, Sum, field "counted_files"),
    kpi_def!("functions", "Number of Functions", "Count", Release, Sum, field "counted_functions"),
    kpi_def!("ccn", "Cyclomatic Complexity (CCN) / Function", "CCN", Release, Mean, field "ccn_average"),
    kpi_def!(
        "cves/nloc",
        "CVEs per 10k NLOC",
        "CVEs per 10k NLOC",
        Entry,
        Sum,
        function extractors::cves_per_nloc
    ),
    kpi_def!("issues", "Bandit Issues", "Count", Release, Sum, function extractors::linter_issues),
    kpi_def!(
        "issues/high",
        "Bandit Issues (High Severity)",
        "Count",
        Release,
        Sum,
        function extractors::linter_high_severity_issues
    ),
    kpi_def!(
        "issues/medium",
        "Bandit Issues (Medium Severity)",
        "Count",
        Release,
        Sum,
        function extractors::linter_medium_severity_issues
    ),
    kpi_def!(
        "issues/low",
        "Bandit Issues (Low Severity)",
        "Count",
        Release,
        Sum,
        function extractors::linter_low_severity_issues
    ),
    kpi_def!(
        "lag/release",
        "Days: Release to Patched Release",
        "Days",
        Entry,
        Mean,
        values extractors::release_lag_days
    )
    .without_fill(),
    kpi_def!(
        "lag/cve",
        "Days: CVE Published to Patched Release",
        "Days",
        Entry,
        Mean,
        values extractors::cve_lag_days
    )
    .without_fill(),
    kpi_def!(
        "lag/release/months",
        "Months: Release to Patched Release",
        "Months",
        Entry,
        Mean,
        values extractors::release_lag_months
    )
    .without_fill(),
    kpi_def!(
        "lag/cve/months",
        "Months: CVE Published to Patched Release",
        "Months",
        Entry,
        Mean,
        values extractors::cve_lag_months
    )
    .without_fill(),
];
