use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::DrugRecord;

/// Counts used to populate the filter controls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FacetCounts {
    /// Records per distinct category.
    pub categories: BTreeMap<String, usize>,
    /// Records per initial, `A` through `Z`. Letters without records are
    /// present with a zero count.
    pub letters: BTreeMap<char, usize>,
    /// Records listing each condition.
    pub conditions: BTreeMap<String, usize>,
    /// Records whose name does not start with an ASCII letter.
    pub unlettered: usize,
}

impl FacetCounts {
    /// One pass over the catalog.
    pub fn compute(records: &[DrugRecord]) -> Self {
        let mut facets = Self {
            letters: ('A'..='Z').map(|l| (l, 0)).collect(),
            ..Self::default()
        };

        for record in records {
            *facets.categories.entry(record.category.clone()).or_default() += 1;

            match record.initial() {
                Some(l) if l.is_ascii_uppercase() => {
                    *facets.letters.entry(l).or_default() += 1;
                }
                _ => facets.unlettered += 1,
            }

            // A record listing a condition twice still counts once.
            let mut seen: Vec<&str> = Vec::with_capacity(record.conditions.len());
            for condition in &record.conditions {
                if seen.contains(&condition.as_str()) {
                    continue;
                }
                seen.push(condition.as_str());
                *facets.conditions.entry(condition.clone()).or_default() += 1;
            }
        }

        facets
    }

    /// Letters with at least one record.
    pub fn active_letters(&self) -> Vec<char> {
        self.letters
            .iter()
            .filter(|(_, count)| **count > 0)
            .map(|(letter, _)| *letter)
            .collect()
    }

    pub fn total_lettered(&self) -> usize {
        self.letters.values().sum()
    }
}
