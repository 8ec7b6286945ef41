//! Catalog loading: the `DrugRecordStore` seam, the immutable `Catalog`
//! handed to the query engine, and the load-time duplicate-name scan.

pub mod duplicates;
pub mod store;

pub use duplicates::{find_duplicate_names, DuplicateName};
pub use store::{parse_catalog, BundledStore, DrugRecordStore, InMemoryStore, JsonFileStore};

use thiserror::Error;

use crate::models::DrugRecord;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalog load failed ({0}): {1}")]
    Io(String, String),

    #[error("Catalog parse failed ({0}): {1}")]
    Parse(String, String),
}

/// The read-only drug list plus diagnostics gathered when it was built.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<DrugRecord>,
    duplicates: Vec<DuplicateName>,
}

impl Catalog {
    /// Wrap an ordered record list. Duplicate names are reported, not removed.
    pub fn new(records: Vec<DrugRecord>) -> Self {
        let duplicates = find_duplicate_names(&records);

        for dup in &duplicates {
            tracing::warn!(
                drug = %dup.name,
                occurrences = dup.occurrences(),
                positions = ?dup.positions,
                "Duplicate drug name in catalog"
            );
        }

        Self {
            records,
            duplicates,
        }
    }

    /// Load from a store and run the duplicate scan.
    pub fn load(store: &dyn DrugRecordStore) -> Result<Self, CatalogError> {
        let records = store.load()?;
        let catalog = Self::new(records);

        tracing::info!(
            source = %store.source(),
            records = catalog.len(),
            duplicates = catalog.duplicates.len(),
            "Drug catalog loaded"
        );

        Ok(catalog)
    }

    pub fn records(&self) -> &[DrugRecord] {
        &self.records
    }

    pub fn duplicates(&self) -> &[DuplicateName] {
        &self.duplicates
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
