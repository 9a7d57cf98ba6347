use super::KpiReport;
use crate::Result;
use core::fmt::Write;
use serde_json::{Value, json};

/// Build the JSON result bundle: a `dates` axis plus one object per KPI.
#[must_use]
#[expect(unused_results, reason = "Map::insert intentionally overwrites values")]
pub fn to_json(report: &KpiReport<'_>) -> Value {
    let mut root = serde_json::Map::new();

    let dates: Vec<Value> = report
        .dates
        .iter()
        .map(|date| date.map_or(Value::Null, |d| json!(d.format("%Y-%m-%d").to_string())))
        .collect();

    for kpi in &report.kpis {
        let mut kpi_obj = serde_json::Map::new();
        kpi_obj.insert("title".to_string(), json!(kpi.title()));
        kpi_obj.insert("y_label".to_string(), json!(kpi.y_label()));
        kpi_obj.insert("element".to_string(), json!(kpi.element()));
        kpi_obj.insert("default".to_string(), json!(kpi.aggregation()));
        kpi_obj.insert("fill".to_string(), json!(kpi.def.fill));

        if let Some(max) = kpi.def.max {
            kpi_obj.insert("max".to_string(), json!(max));
        }

        if let Some(suffix) = kpi.def.suffix {
            kpi_obj.insert("suffix".to_string(), json!(suffix));
        }

        kpi_obj.insert("values".to_string(), json!(kpi.values));
        root.insert(kpi.name().to_string(), Value::Object(kpi_obj));
    }

    // the axis goes in last so a KPI can never shadow it
    root.insert("dates".to_string(), Value::Array(dates));
    Value::Object(root)
}

pub fn generate<W: Write>(report: &KpiReport<'_>, writer: &mut W) -> Result<()> {
    write!(writer, "{}", serde_json::to_string_pretty(&to_json(report))?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kpis::{Aggregation, ElementKind, KpiDef, KpiKey};
    use crate::timeline::Observations;
    use chrono::NaiveDate;

    static BASE_DEF: KpiDef =
        KpiDef::new("base", "CVSS Base Score", "Score", ElementKind::Cve, Aggregation::Mean, KpiKey::Field("cvss_base_score"))
            .with_max(10.0);
    static CVES_DEF: KpiDef =
        KpiDef::new("cves", "Number of CVEs", "Count", ElementKind::Entry, Aggregation::Sum, KpiKey::Field("n")).with_suffix("total");

    fn report() -> KpiReport<'static> {
        KpiReport::from(Observations {
            dates: vec![NaiveDate::from_ymd_opt(2020, 1, 1), None],
            series: vec![(&BASE_DEF, vec![vec![2.0, 4.0, 6.0], vec![]]), (&CVES_DEF, vec![vec![3.0], vec![0.0]])],
        })
    }

    #[test]
    fn test_to_json_contract() {
        let value = to_json(&report());

        assert_eq!(value["dates"], json!(["2020-01-01", null]));
        assert_eq!(value["base"]["title"], "CVSS Base Score");
        assert_eq!(value["base"]["y_label"], "Score");
        assert_eq!(value["base"]["element"], "cve");
        assert_eq!(value["base"]["default"], "mean");
        assert_eq!(value["base"]["max"], 10.0);
        assert_eq!(value["base"]["values"]["sum"], json!([12.0, null]));
        assert_eq!(value["base"]["values"]["mean"], json!([4.0, null]));
        assert_eq!(value["base"]["values"]["min"], json!([2.0, null]));
        assert_eq!(value["base"]["values"]["max"], json!([6.0, null]));
        assert!(value["base"].get("suffix").is_none());

        assert_eq!(value["cves"]["suffix"], "total");
        assert_eq!(value["cves"]["values"]["sum"], json!([3.0, 0.0]));
        assert!(value["cves"].get("max").is_none());
    }

    #[test]
    fn test_every_series_has_date_axis_length() {
        let value = to_json(&report());
        let dates = value["dates"].as_array().unwrap().len();
        for kpi in ["base", "cves"] {
            for stat in ["sum", "mean", "std", "min", "max"] {
                assert_eq!(value[kpi]["values"][stat].as_array().unwrap().len(), dates, "{kpi}.{stat}");
            }
        }
    }

    #[test]
    fn test_generate_empty_report() {
        let mut output = String::new();
        generate(&KpiReport::default(), &mut output).unwrap();
        let parsed: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, json!({"dates": []}));
    }

    #[test]
    fn test_generate_pretty_formatting() {
        let mut output = String::new();
        generate(&report(), &mut output).unwrap();
        assert!(output.contains('\n'));
        assert!(output.contains("  "));

        let parsed: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["dates"], json!(["2020-01-01", null]));
        assert_eq!(parsed["cves"]["title"], "Number of CVEs");
    }
}
