use crate::kpis::{Aggregation, ElementKind, KpiDef};
use crate::stats::{Statistic, Statistics};
use crate::timeline::Observations;
use chrono::NaiveDate;

/// Summary series for one KPI.
#[derive(Debug, Clone)]
pub struct KpiResult<'a> {
    pub def: &'a KpiDef,
    pub values: Statistics,
}

impl<'a> KpiResult<'a> {
    #[must_use]
    pub const fn new(def: &'a KpiDef, values: Statistics) -> Self {
        Self { def, values }
    }

    // Convenience accessors for common fields
    #[must_use]
    pub const fn name(&self) -> &'a str {
        self.def.name
    }

    #[must_use]
    pub const fn title(&self) -> &'a str {
        self.def.title
    }

    #[must_use]
    pub const fn y_label(&self) -> &'a str {
        self.def.y_label
    }

    #[must_use]
    pub const fn element(&self) -> ElementKind {
        self.def.element
    }

    #[must_use]
    pub const fn aggregation(&self) -> Aggregation {
        self.def.default
    }

    /// The series for the KPI's default aggregation.
    #[must_use]
    pub fn default_series(&self) -> &[Option<f64>] {
        self.values.series(self.def.default.statistic())
    }

    #[must_use]
    pub fn series(&self, statistic: Statistic) -> &[Option<f64>] {
        self.values.series(statistic)
    }
}

/// KPI series over a shared date axis, in the order the KPIs were requested.
#[derive(Debug, Clone, Default)]
pub struct KpiReport<'a> {
    pub dates: Vec<Option<NaiveDate>>,
    pub kpis: Vec<KpiResult<'a>>,
}

impl<'a> KpiReport<'a> {
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&KpiResult<'a>> {
        self.kpis.iter().find(|kpi| kpi.name() == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.kpis.iter().map(KpiResult::name)
    }
}

impl<'a> From<Observations<'a>> for KpiReport<'a> {
    fn from(observations: Observations<'a>) -> Self {
        Self {
            dates: observations.dates,
            kpis: observations
                .series
                .into_iter()
                .map(|(def, per_date)| KpiResult::new(def, Statistics::from_observations(&per_date)))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kpis::KpiKey;

    static COUNT_DEF: KpiDef = KpiDef::new("count", "Count", "Count", ElementKind::Entry, Aggregation::Sum, KpiKey::Field("n"));
    static SCORE_DEF: KpiDef = KpiDef::new("score", "Score", "Score", ElementKind::Cve, Aggregation::Mean, KpiKey::Field("s"));

    fn observations() -> Observations<'static> {
        Observations {
            dates: vec![NaiveDate::from_ymd_opt(2020, 1, 1), NaiveDate::from_ymd_opt(2020, 2, 1)],
            series: vec![
                (&COUNT_DEF, vec![vec![1.0, 2.0], vec![]]),
                (&SCORE_DEF, vec![vec![2.0, 4.0], vec![6.0]]),
            ],
        }
    }

    #[test]
    fn test_from_observations_keeps_order() {
        let report = KpiReport::from(observations());
        assert_eq!(report.names().collect::<Vec<_>>(), vec!["count", "score"]);
        assert_eq!(report.dates.len(), 2);
    }

    #[test]
    fn test_default_series_follows_aggregation() {
        let report = KpiReport::from(observations());
        assert_eq!(report.get("count").unwrap().default_series(), &[Some(3.0), None]);
        assert_eq!(report.get("score").unwrap().default_series(), &[Some(3.0), Some(6.0)]);
    }

    #[test]
    fn test_every_series_matches_date_axis() {
        let report = KpiReport::from(observations());
        for kpi in &report.kpis {
            assert_eq!(kpi.values.len(), report.dates.len(), "KPI '{}'", kpi.name());
        }
    }

    #[test]
    fn test_accessors() {
        let report = KpiReport::from(observations());
        let score = report.get("score").unwrap();
        assert_eq!(score.title(), "Score");
        assert_eq!(score.y_label(), "Score");
        assert_eq!(score.element(), ElementKind::Cve);
        assert_eq!(score.aggregation(), Aggregation::Mean);
        assert_eq!(score.series(Statistic::Max), &[Some(4.0), Some(6.0)]);
        assert!(report.get("missing").is_none());
    }
}
