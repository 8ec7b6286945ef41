use crate::models::{DrugFilter, DrugRecord};

/// Case-insensitive substring match over every searchable field.
/// `term` must already be lower-cased.
pub fn matches_search(record: &DrugRecord, term: &str) -> bool {
    record
        .searchable_text()
        .any(|text| text.to_lowercase().contains(term))
}

pub fn matches_category(record: &DrugRecord, category: &str) -> bool {
    record.category == category
}

pub fn matches_letter(record: &DrugRecord, letter: char) -> bool {
    record.initial() == letter.to_uppercase().next()
}

pub fn matches_condition(record: &DrugRecord, condition: &str) -> bool {
    record.has_condition(condition)
}

/// Apply every active criterion of `filter`, keeping catalog order.
pub fn filter_records<'a>(records: &'a [DrugRecord], filter: &DrugFilter) -> Vec<&'a DrugRecord> {
    let term = filter.normalized_search();

    records
        .iter()
        .filter(|r| term.as_deref().map_or(true, |t| matches_search(r, t)))
        .filter(|r| {
            filter
                .category
                .as_deref()
                .map_or(true, |c| matches_category(r, c))
        })
        .filter(|r| filter.letter.map_or(true, |l| matches_letter(r, l)))
        .filter(|r| {
            filter
                .condition
                .as_deref()
                .map_or(true, |c| matches_condition(r, c))
        })
        .collect()
}

/// Names containing `query` (case-insensitive): prefix matches first, then
/// the rest, each group in catalog order.
pub fn suggest_names<'a>(records: &'a [DrugRecord], query: &str, limit: usize) -> Vec<&'a str> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() || limit == 0 {
        return Vec::new();
    }

    let (prefix, inner): (Vec<&DrugRecord>, Vec<&DrugRecord>) = records
        .iter()
        .filter(|r| r.name.to_lowercase().contains(&needle))
        .partition(|r| r.name.to_lowercase().starts_with(&needle));

    prefix
        .into_iter()
        .chain(inner)
        .map(|r| r.name.as_str())
        .take(limit)
        .collect()
}
