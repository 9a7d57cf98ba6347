use super::Record;
use crate::Result;
use ohno::app_err;
use serde_json::Value;

/// Release identifiers referenced by a timeline entry.
///
/// The `release` field may hold a single identifier or a list of them. Any other
/// shape, including a missing field, is an error for the whole entry.
pub fn release_refs(entry: &Record) -> Result<Vec<&str>> {
    normalize("release", entry.get("release"), false)
}

/// CVE identifiers referenced by a timeline entry.
///
/// A missing or null `cves` field means the entry has no CVEs.
pub fn cve_refs(entry: &Record) -> Result<Vec<&str>> {
    normalize("cves", entry.get("cves"), true)
}

fn normalize<'a>(field: &str, value: Option<&'a Value>, absent_is_empty: bool) -> Result<Vec<&'a str>> {
    match value {
        Some(Value::String(id)) => Ok(vec![id.as_str()]),
        Some(Value::Array(items)) => Ok(items
            .iter()
            .filter_map(|item| {
                let id = item.as_str();
                if id.is_none() {
                    log::warn!("ignoring non-string identifier {item} in '{field}'");
                }
                id
            })
            .collect()),
        None | Some(Value::Null) if absent_is_empty => Ok(Vec::new()),
        None => Err(app_err!("timeline entry has no '{field}' reference")),
        Some(other) => Err(app_err!("unexpected '{field}' reference type: {}", shape_name(other))),
    }
}

const fn shape_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}
