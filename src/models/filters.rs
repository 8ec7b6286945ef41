use serde::{Deserialize, Serialize};

/// Value the list screen sends for an unconstrained dropdown.
pub const ALL_SENTINEL: &str = "all";

/// Filter parameters for the drug list. `None` leaves a criterion unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrugFilter {
    pub search_term: Option<String>,
    pub category: Option<String>,
    pub letter: Option<char>,
    pub condition: Option<String>,
}

impl DrugFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a filter from raw UI values. For the dropdowns `"all"` and
    /// empty strings mean "no constraint"; the search box is taken verbatim
    /// and only an empty box is unconstrained. Only the first character of
    /// `letter` is used.
    pub fn from_sentinels(
        search_term: &str,
        category: &str,
        letter: &str,
        condition: &str,
    ) -> Self {
        Self {
            search_term: (!search_term.is_empty()).then(|| search_term.to_string()),
            category: unsentinel(category).map(str::to_string),
            letter: unsentinel(letter).and_then(|l| l.chars().next()),
            condition: unsentinel(condition).map(str::to_string),
        }
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search_term = Some(term.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn letter(mut self, letter: char) -> Self {
        self.letter = Some(letter);
        self
    }

    pub fn condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }

    /// Lower-cased search term, or `None` when it is missing or empty.
    /// Whitespace is part of the term.
    pub fn normalized_search(&self) -> Option<String> {
        self.search_term
            .as_deref()
            .filter(|t| !t.is_empty())
            .map(str::to_lowercase)
    }

    /// True when no criterion constrains the result.
    pub fn is_unconstrained(&self) -> bool {
        self.normalized_search().is_none()
            && self.category.is_none()
            && self.letter.is_none()
            && self.condition.is_none()
    }
}

fn unsentinel(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ALL_SENTINEL) {
        None
    } else {
        Some(trimmed)
    }
}
