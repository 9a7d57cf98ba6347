use super::Statistic;
use serde::Serialize;

/// Summary of one non-empty observation list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub sum: f64,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub max: f64,
}

impl Summary {
    /// Summarize a list of observations, or `None` if the list is empty.
    #[must_use]
    #[expect(clippy::cast_precision_loss, reason = "observation counts are far below 2^52")]
    pub fn of(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let count = values.len() as f64;
        let sum: f64 = values.iter().sum();
        let mean = sum / count;

        // two-pass variance around the mean
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / count;

        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Some(Self {
            sum,
            mean,
            std: variance.sqrt(),
            min,
            max,
        })
    }

    #[must_use]
    pub const fn get(&self, statistic: Statistic) -> f64 {
        match statistic {
            Statistic::Sum => self.sum,
            Statistic::Mean => self.mean,
            Statistic::Std => self.std,
            Statistic::Min => self.min,
            Statistic::Max => self.max,
        }
    }
}

/// Five parallel series with one slot per date.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Statistics {
    pub sum: Vec<Option<f64>>,
    pub mean: Vec<Option<f64>>,
    pub std: Vec<Option<f64>>,
    pub min: Vec<Option<f64>>,
    pub max: Vec<Option<f64>>,
}

impl Statistics {
    /// Reduce each date's observation list into the five series.
    #[must_use]
    pub fn from_observations<V: AsRef<[f64]>>(per_date: &[V]) -> Self {
        let mut stats = Self {
            sum: Vec::with_capacity(per_date.len()),
            mean: Vec::with_capacity(per_date.len()),
            std: Vec::with_capacity(per_date.len()),
            min: Vec::with_capacity(per_date.len()),
            max: Vec::with_capacity(per_date.len()),
        };

        for values in per_date {
            let summary = Summary::of(values.as_ref());
            stats.sum.push(summary.map(|s| s.sum));
            stats.mean.push(summary.map(|s| s.mean));
            stats.std.push(summary.map(|s| s.std));
            stats.min.push(summary.map(|s| s.min));
            stats.max.push(summary.map(|s| s.max));
        }

        stats
    }

    #[must_use]
    pub fn series(&self, statistic: Statistic) -> &[Option<f64>] {
        match statistic {
            Statistic::Sum => &self.sum,
            Statistic::Mean => &self.mean,
            Statistic::Std => &self.std,
            Statistic::Min => &self.min,
            Statistic::Max => &self.max,
        }
    }

    /// Number of dates covered.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.sum.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.sum.is_empty()
    }
}
