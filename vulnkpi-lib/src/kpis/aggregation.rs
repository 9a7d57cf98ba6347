use crate::stats::Statistic;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

/// The statistic that best summarizes a KPI when only one is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, IntoStaticStr, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Aggregation {
    Sum,
    Mean,
}

impl Aggregation {
    #[must_use]
    pub const fn statistic(self) -> Statistic {
        match self {
            Self::Sum => Statistic::Sum,
            Self::Mean => Statistic::Mean,
        }
    }
}
