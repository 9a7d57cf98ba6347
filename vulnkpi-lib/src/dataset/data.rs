use super::Record;
use crate::Result;
use camino::Utf8Path;
use ohno::IntoAppError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;

/// Root container handed to the KPI engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    /// CVE identifier to CVE record.
    #[serde(default)]
    pub cves: BTreeMap<String, Record>,

    /// Release identifier to release record.
    #[serde(default)]
    pub releases: BTreeMap<String, Record>,

    /// Timeline entries in the order the caller wants them reported.
    #[serde(default)]
    pub timeline: Vec<Record>,
}

impl Dataset {
    /// Load a dataset from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid dataset document
    pub fn load(path: &Utf8Path) -> Result<Self> {
        let text = fs::read_to_string(path).into_app_err_with(|| format!("reading dataset file '{path}'"))?;
        let dataset: Self = serde_json::from_str(&text).into_app_err_with(|| format!("parsing dataset file '{path}'"))?;
        dataset.log_summary();
        Ok(dataset)
    }

    /// Parse a dataset from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid dataset document
    pub fn from_json(text: &str) -> Result<Self> {
        let dataset: Self = serde_json::from_str(text).into_app_err("parsing dataset")?;
        dataset.log_summary();
        Ok(dataset)
    }

    fn log_summary(&self) {
        log::debug!(
            "loaded dataset with {} CVEs, {} releases and {} timeline entries",
            self.cves.len(),
            self.releases.len(),
            self.timeline.len()
        );
    }

    #[must_use]
    pub fn cve(&self, id: &str) -> Option<&Record> {
        self.cves.get(id)
    }

    #[must_use]
    pub fn release(&self, id: &str) -> Option<&Record> {
        self.releases.get(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;

    const SMALL: &str = r#"{
        "cves": {"CVE-2020-0001": {"cvss_base_score": 7.5}},
        "releases": {"r1": {"published_at": "2020-01-01", "nloc_total": 1000}},
        "timeline": [{"date": "2020-02-01", "release": "r1", "cves": ["CVE-2020-0001"]}]
    }"#;

    #[test]
    fn test_from_json() {
        let dataset = Dataset::from_json(SMALL).unwrap();
        assert_eq!(dataset.cves.len(), 1);
        assert_eq!(dataset.timeline.len(), 1);
        assert_eq!(dataset.release("r1").and_then(|r| r.number("nloc_total")), Some(1000.0));
        assert!(dataset.cve("CVE-2099-0001").is_none());
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let dataset = Dataset::from_json(r#"{"timeline": []}"#).unwrap();
        assert!(dataset.cves.is_empty());
        assert!(dataset.releases.is_empty());
    }

    #[test]
    fn test_malformed_root_is_an_error() {
        let _ = Dataset::from_json("[]").unwrap_err();
        let _ = Dataset::from_json(r#"{"timeline": {"a": 1}}"#).unwrap_err();
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_load_from_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().join("dataset.json")).unwrap();
        fs::write(&path, SMALL).unwrap();

        let dataset = Dataset::load(&path).unwrap();
        assert_eq!(dataset.releases.len(), 1);
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_load_missing_file_reports_context() {
        let tmp = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().join("nope.json")).unwrap();
        let err = Dataset::load(&path).unwrap_err();
        assert!(err.to_string().contains("reading dataset file"));
    }
}
