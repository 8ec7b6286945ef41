use serde::Serialize;

use crate::models::DrugRecord;

/// One interaction entry of one record, flattened out of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InteractionEdge {
    pub drug_name: String,
    pub drug_category: String,
    pub interaction: String,
}

/// Records whose interaction list mentions `drug_name` (case-insensitive
/// substring). The referenced drug's own record is not consulted, so a
/// one-sided listing is enough to match. An empty name matches nothing.
pub fn find_interacting<'a>(records: &'a [DrugRecord], drug_name: &str) -> Vec<&'a DrugRecord> {
    let needle = drug_name.to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    records
        .iter()
        .filter(|r| {
            r.interactions
                .iter()
                .any(|i| i.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Every `(drug, interaction)` pair in catalog order, optionally narrowed to
/// pairs whose drug name or interaction text contains `search`. An empty
/// search keeps every pair.
pub fn interaction_edges(records: &[DrugRecord], search: Option<&str>) -> Vec<InteractionEdge> {
    let needle = search.filter(|s| !s.is_empty()).map(str::to_lowercase);

    records
        .iter()
        .flat_map(|r| r.interactions.iter().map(move |i| (r, i)))
        .filter(|(r, i)| match &needle {
            Some(n) => i.to_lowercase().contains(n) || r.name.to_lowercase().contains(n),
            None => true,
        })
        .map(|(r, i)| InteractionEdge {
            drug_name: r.name.clone(),
            drug_category: r.category.clone(),
            interaction: i.clone(),
        })
        .collect()
}
