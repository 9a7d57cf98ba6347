use crate::Result;
use crate::dataset::{Dataset, Record, cve_refs, release_refs};
use crate::kpis::ElementKind;

/// Concrete elements a KPI of the given kind is evaluated on for one entry.
///
/// Identifiers that are not in the dataset are logged and skipped.
///
/// # Errors
///
/// Returns an error if the entry's reference field for `kind` is neither an
/// identifier nor a list of identifiers.
pub fn resolve_elements<'d>(data: &'d Dataset, entry: &'d Record, kind: ElementKind) -> Result<Vec<&'d Record>> {
    match kind {
        ElementKind::Entry => Ok(vec![entry]),
        ElementKind::Cve => Ok(lookup(cve_refs(entry)?, kind, |id| data.cve(id))),
        ElementKind::Release => Ok(lookup(release_refs(entry)?, kind, |id| data.release(id))),
    }
}

fn lookup<'d>(ids: Vec<&str>, kind: ElementKind, find: impl Fn(&str) -> Option<&'d Record>) -> Vec<&'d Record> {
    ids.into_iter()
        .filter_map(|id| {
            let found = find(id);
            if found.is_none() {
                log::warn!("{kind} '{id}' referenced by the timeline is not in the dataset");
            }
            found
        })
        .collect()
}
