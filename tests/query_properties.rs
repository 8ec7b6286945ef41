//! Property-based tests for the drug query engine
//!
//! Invariants that should hold for ANY catalog:
//! - Idempotence: filter(c, f) == filter(c, f)
//! - Conjunction: a combined filter equals the intersection of its parts
//! - Pass-through: an unconstrained filter returns the catalog in order
//! - Facet completeness: letter buckets account for every record
//! - Export round trip: quoting is reversible

use drug_reference::export::to_csv;
use drug_reference::{DrugFilter, DrugQueryEngine, DrugRecord, ExportColumn};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

const CATEGORIES: &[&str] = &["Analgesic", "NSAID", "Opioid", "Antibiotic"];
const CONDITIONS: &[&str] = &["Fever", "Headache", "Arthritis", "Infection"];

fn vocab_list(vocab: &'static [&'static str]) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(prop::sample::select(vocab), 0..3)
        .prop_map(|v| v.into_iter().map(String::from).collect())
}

fn free_text() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 ,;\"'-]{0,16}"
}

fn record() -> impl Strategy<Value = DrugRecord> {
    (
        "[A-Da-d][a-z]{0,6}",
        prop::sample::select(CATEGORIES),
        free_text(),
        free_text(),
        prop::collection::vec(free_text(), 0..3),
        prop::collection::vec(free_text(), 0..3),
        prop::collection::vec("[A-Da-d][a-z]{0,6}", 0..3),
        prop::collection::vec(free_text(), 0..3),
        prop::collection::vec(free_text(), 0..3),
        vocab_list(CONDITIONS),
    )
        .prop_map(
            |(
                name,
                category,
                drug_class,
                dosage,
                indications,
                contraindications,
                interactions,
                side_effects,
                monitoring,
                conditions,
            )| DrugRecord {
                name,
                category: category.to_string(),
                drug_class,
                dosage,
                indications,
                contraindications,
                interactions,
                side_effects,
                monitoring,
                conditions,
            },
        )
}

fn catalog() -> impl Strategy<Value = Vec<DrugRecord>> {
    prop::collection::vec(record(), 0..12)
}

fn filter() -> impl Strategy<Value = DrugFilter> {
    (
        prop::option::of("[a-d]{1,2}"),
        prop::option::of(prop::sample::select(CATEGORIES)),
        prop::option::of(prop::sample::select(vec!['A', 'B', 'c', 'd'])),
        prop::option::of(prop::sample::select(CONDITIONS)),
    )
        .prop_map(|(search_term, category, letter, condition)| DrugFilter {
            search_term,
            category: category.map(String::from),
            letter,
            condition: condition.map(String::from),
        })
}

// ============================================================================
// CSV reader (test-only)
// ============================================================================

/// Minimal RFC 4180 reader: quoted fields, doubled quotes, `\n` rows.
fn parse_csv(text: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut row = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match (c, in_quotes) {
            ('"', true) if chars.peek() == Some(&'"') => {
                chars.next();
                field.push('"');
            }
            ('"', true) => in_quotes = false,
            ('"', false) => in_quotes = true,
            (',', false) => row.push(std::mem::take(&mut field)),
            ('\n', false) => {
                row.push(std::mem::take(&mut field));
                rows.push(std::mem::take(&mut row));
            }
            (c, _) => field.push(c),
        }
    }
    row.push(field);
    rows.push(row);
    rows
}

fn same_records(a: &[&DrugRecord], b: &[&DrugRecord]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| std::ptr::eq(*x, *y))
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_filter_is_idempotent(records in catalog(), f in filter()) {
        let engine = DrugQueryEngine::from_records(records);
        let first = engine.filter(&f);
        let second = engine.filter(&f);
        prop_assert!(same_records(&first, &second));
    }

    #[test]
    fn prop_filter_is_conjunctive(records in catalog(), f in filter()) {
        let engine = DrugQueryEngine::from_records(records);

        let singles = [
            DrugFilter { search_term: f.search_term.clone(), ..DrugFilter::default() },
            DrugFilter { category: f.category.clone(), ..DrugFilter::default() },
            DrugFilter { letter: f.letter, ..DrugFilter::default() },
            DrugFilter { condition: f.condition.clone(), ..DrugFilter::default() },
        ];
        let single_results: Vec<Vec<&DrugRecord>> =
            singles.iter().map(|s| engine.filter(s)).collect();

        let expected: Vec<&DrugRecord> = engine
            .records()
            .iter()
            .filter(|r| {
                single_results
                    .iter()
                    .all(|res| res.iter().any(|x| std::ptr::eq(*x, *r)))
            })
            .collect();

        prop_assert!(same_records(&engine.filter(&f), &expected));
    }

    #[test]
    fn prop_filter_preserves_catalog_order(records in catalog(), f in filter()) {
        let engine = DrugQueryEngine::from_records(records);
        let positions: Vec<usize> = engine
            .filter(&f)
            .iter()
            .filter_map(|hit| engine.records().iter().position(|r| std::ptr::eq(r, *hit)))
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn prop_unconstrained_filter_returns_catalog(records in catalog()) {
        let engine = DrugQueryEngine::from_records(records);
        let all = DrugFilter::from_sentinels("", "all", "all", "all");
        let expected: Vec<&DrugRecord> = engine.records().iter().collect();
        prop_assert!(same_records(&engine.filter(&all), &expected));
    }

    #[test]
    fn prop_facets_are_complete(records in catalog()) {
        let engine = DrugQueryEngine::from_records(records);
        let facets = engine.facet_counts();

        let lettered: usize = facets.letters.values().sum();
        prop_assert_eq!(lettered + facets.unlettered, engine.records().len());
        prop_assert_eq!(facets.letters.len(), 26);

        for record in engine.records() {
            let count = facets.categories.get(&record.category).copied().unwrap_or(0);
            prop_assert!(count >= 1);
        }

        let category_total: usize = facets.categories.values().sum();
        prop_assert_eq!(category_total, engine.records().len());
    }

    #[test]
    fn prop_export_round_trip(r in record()) {
        let text = String::from_utf8(to_csv(std::iter::once(&r), &ExportColumn::ALL)).unwrap();
        let rows = parse_csv(&text);
        prop_assert_eq!(rows.len(), 2);

        let header: Vec<&str> = ExportColumn::ALL.iter().map(|c| c.as_str()).collect();
        prop_assert_eq!(&rows[0], &header);

        let row = &rows[1];
        prop_assert_eq!(row.len(), 10);
        prop_assert_eq!(&row[0], &r.name);
        prop_assert_eq!(&row[1], &r.category);
        prop_assert_eq!(&row[2], &r.drug_class);
        prop_assert_eq!(&row[3], &r.dosage);
        prop_assert_eq!(&row[4], &r.indications.join("; "));
        prop_assert_eq!(&row[5], &r.contraindications.join("; "));
        prop_assert_eq!(&row[6], &r.interactions.join("; "));
        prop_assert_eq!(&row[7], &r.side_effects.join("; "));
        prop_assert_eq!(&row[8], &r.monitoring.join("; "));
        prop_assert_eq!(&row[9], &r.conditions.join("; "));
    }

    #[test]
    fn prop_interacting_drugs_mention_name(records in catalog(), name in "[a-d]{1,3}") {
        let engine = DrugQueryEngine::from_records(records);
        for record in engine.find_interacting_drugs(&name) {
            prop_assert!(record
                .interactions
                .iter()
                .any(|i| i.to_lowercase().contains(&name)));
        }
    }
}
