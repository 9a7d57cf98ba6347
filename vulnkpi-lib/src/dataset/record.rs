use super::parse_date;
use crate::Result;
use chrono::NaiveDateTime;
use ohno::app_err;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A CVE, release, or timeline entry as produced by the ETL stage.
///
/// Fields are addressed by name, which is how field-keyed KPIs read them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    #[must_use]
    pub const fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    #[must_use]
    pub const fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Numeric value of a field, including zero.
    #[must_use]
    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Value::as_f64)
    }

    /// Numeric value of a field nested one level down, e.g. `bandit_report.issues_total`.
    #[must_use]
    pub fn nested_number(&self, section: &str, key: &str) -> Option<f64> {
        self.get(section)?.as_object()?.get(key)?.as_f64()
    }

    #[must_use]
    pub fn date(&self, key: &str) -> Option<NaiveDateTime> {
        self.get(key).and_then(parse_date)
    }

    /// Items of a list field, or an empty slice when the field is absent or not a list.
    #[must_use]
    pub fn items(&self, key: &str) -> &[Value] {
        self.get(key).and_then(Value::as_array).map_or(&[], Vec::as_slice)
    }
}

impl From<Map<String, Value>> for Record {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

impl TryFrom<Value> for Record {
    type Error = ohno::AppError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(fields) => Ok(Self(fields)),
            other => Err(app_err!("expected a JSON object for a record, found {other}")),
        }
    }
}
