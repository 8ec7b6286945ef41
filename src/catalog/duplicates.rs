use std::collections::HashMap;

use serde::Serialize;

use crate::models::DrugRecord;

/// A drug name that appears more than once in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateName {
    pub name: String,
    /// Catalog positions of every occurrence, ascending.
    pub positions: Vec<usize>,
}

impl DuplicateName {
    pub fn occurrences(&self) -> usize {
        self.positions.len()
    }
}

/// Scan for names shared by more than one record.
///
/// Comparison is exact. Results are ordered by the position of the first
/// occurrence.
pub fn find_duplicate_names(records: &[DrugRecord]) -> Vec<DuplicateName> {
    let mut positions: HashMap<&str, Vec<usize>> = HashMap::new();
    let mut first_seen: Vec<&str> = Vec::new();

    for (idx, record) in records.iter().enumerate() {
        let entry = positions.entry(record.name.as_str()).or_default();
        if entry.is_empty() {
            first_seen.push(record.name.as_str());
        }
        entry.push(idx);
    }

    first_seen
        .into_iter()
        .filter_map(|name| {
            let found = positions.remove(name)?;
            (found.len() > 1).then(|| DuplicateName {
                name: name.to_string(),
                positions: found,
            })
        })
        .collect()
}
