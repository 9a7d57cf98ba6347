use super::Host;
use crate::Result;
use crate::kpis::KpiRegistry;
use std::io::Write;

/// Print every registered KPI with its element, default aggregation, maximum, and title
///
/// # Errors
///
/// Returns an error if the output cannot be written
pub fn list_kpis<H: Host>(host: &mut H) -> Result<()> {
    let registry = KpiRegistry::builtin();
    let name_width = registry.iter().map(|def| def.name.len()).max().unwrap_or(0).max("NAME".len());

    let mut out = host.output();
    writeln!(out, "{:<name_width$}  {:<8}  {:<7}  {:>4}  TITLE", "NAME", "ELEMENT", "DEFAULT", "MAX")?;
    for def in registry.iter() {
        let max = def.max.map_or_else(|| "-".to_string(), |max| format!("{max}"));
        writeln!(
            out,
            "{:<name_width$}  {:<8}  {:<7}  {max:>4}  {}",
            def.name,
            def.element.to_string(),
            def.default.to_string(),
            def.title
        )?;
    }

    Ok(())
}
