use crate::dataset::{Dataset, Record};
use crate::kpis::{KpiDef, KpiKey};
use serde_json::Value;

/// Observation a field-keyed KPI reads from an element.
///
/// Absent and falsy values (null, `false`, zero, empty strings, lists, and
/// objects) are not observations. `true` counts as 1 and numeric strings are
/// parsed.
#[must_use]
pub fn field_value(element: &Record, key: &str) -> Option<f64> {
    match element.get(key)? {
        Value::Number(n) => n.as_f64().filter(|v| *v != 0.0),
        Value::Bool(true) => Some(1.0),
        Value::String(text) if !text.is_empty() => {
            let parsed = text.trim().parse::<f64>().ok();
            if parsed.is_none() {
                log::debug!("field '{key}' holds non-numeric text '{text}'");
            }
            parsed.filter(|v| *v != 0.0)
        }
        _ => None,
    }
}

/// One observation for one element, or `None` when the element yields nothing.
///
/// Extractor failures are logged and treated as a missing observation.
#[must_use]
pub fn extract_value(def: &KpiDef, data: &Dataset, element: &Record) -> Option<f64> {
    match def.key {
        KpiKey::Field(key) => {
            let value = field_value(element, key);
            if value.is_none() {
                log::debug!("KPI '{}': no value for field '{key}'", def.name);
            }
            value
        }
        KpiKey::Function(extract) => extract(data, element).unwrap_or_else(|e| {
            log::error!("could not compute KPI '{}': {e}", def.name);
            None
        }),
        KpiKey::Values(_) => {
            log::error!("KPI '{}' produces whole observation lists and has no per-element value", def.name);
            None
        }
    }
}
