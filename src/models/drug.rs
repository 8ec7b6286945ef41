use serde::{Deserialize, Serialize};

/// One entry of the drug reference catalog.
///
/// Records are loaded once and never mutated. List fields keep the order in
/// which the catalog lists them; `conditions` may be missing from the source
/// and then deserializes to an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrugRecord {
    pub name: String,
    pub category: String,
    pub drug_class: String,
    pub dosage: String,
    #[serde(default)]
    pub indications: Vec<String>,
    #[serde(default)]
    pub contraindications: Vec<String>,
    #[serde(default)]
    pub interactions: Vec<String>,
    #[serde(default)]
    pub side_effects: Vec<String>,
    #[serde(default)]
    pub monitoring: Vec<String>,
    #[serde(default)]
    pub conditions: Vec<String>,
}

impl DrugRecord {
    /// Upper-cased first character of the name, if any. Characters whose
    /// upper case spans several chars keep only the first one.
    pub fn initial(&self) -> Option<char> {
        self.name
            .chars()
            .next()
            .and_then(|c| c.to_uppercase().next())
    }

    /// All free-text values the search box matches against, in display order.
    pub fn searchable_text(&self) -> impl Iterator<Item = &str> {
        [
            self.name.as_str(),
            self.category.as_str(),
            self.drug_class.as_str(),
            self.dosage.as_str(),
        ]
        .into_iter()
        .chain(self.indications.iter().map(String::as_str))
        .chain(self.contraindications.iter().map(String::as_str))
        .chain(self.interactions.iter().map(String::as_str))
        .chain(self.side_effects.iter().map(String::as_str))
        .chain(self.monitoring.iter().map(String::as_str))
        .chain(self.conditions.iter().map(String::as_str))
    }

    pub fn has_condition(&self, condition: &str) -> bool {
        self.conditions.iter().any(|c| c == condition)
    }
}
