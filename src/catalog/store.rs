use std::path::{Path, PathBuf};

use crate::models::DrugRecord;

use super::CatalogError;

/// Catalog bundled with the crate.
const BUNDLED_CATALOG: &str = include_str!("../../resources/drugs.json");

/// Supplies the full catalog, in display order, once at startup.
///
/// Where the records come from (file, API, database) is up to the
/// implementation; the query engine only sees the ordered list.
pub trait DrugRecordStore {
    fn load(&self) -> Result<Vec<DrugRecord>, CatalogError>;

    /// Short label for log events.
    fn source(&self) -> String;
}

/// Parse a JSON array of records.
pub fn parse_catalog(json: &str, source: &str) -> Result<Vec<DrugRecord>, CatalogError> {
    serde_json::from_str(json).map_err(|e| CatalogError::Parse(source.into(), e.to_string()))
}

/// Reads the catalog from a JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DrugRecordStore for JsonFileStore {
    fn load(&self) -> Result<Vec<DrugRecord>, CatalogError> {
        let json = std::fs::read_to_string(&self.path)
            .map_err(|e| CatalogError::Io(self.path.display().to_string(), e.to_string()))?;
        parse_catalog(&json, &self.source())
    }

    fn source(&self) -> String {
        self.path.display().to_string()
    }
}

/// The static catalog compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledStore;

impl DrugRecordStore for BundledStore {
    fn load(&self) -> Result<Vec<DrugRecord>, CatalogError> {
        parse_catalog(BUNDLED_CATALOG, "drugs.json")
    }

    fn source(&self) -> String {
        "bundled".into()
    }
}

/// Store over records already in memory (fixtures, records fetched elsewhere).
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    records: Vec<DrugRecord>,
}

impl InMemoryStore {
    pub fn new(records: Vec<DrugRecord>) -> Self {
        Self { records }
    }
}

impl DrugRecordStore for InMemoryStore {
    fn load(&self) -> Result<Vec<DrugRecord>, CatalogError> {
        Ok(self.records.clone())
    }

    fn source(&self) -> String {
        "memory".into()
    }
}
