use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// What a KPI takes its observations from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, IntoStaticStr, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// Each CVE referenced by the timeline entry.
    Cve,

    /// Each release referenced by the timeline entry.
    Release,

    /// The timeline entry itself.
    Entry,
}
