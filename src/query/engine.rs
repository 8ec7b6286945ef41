use chrono::NaiveDate;

use crate::catalog::{Catalog, CatalogError, DrugRecordStore, DuplicateName};
use crate::export::{build_export, to_csv, ExportFile, ExportScope};
use crate::models::{DrugFilter, DrugRecord, ExportColumn};

use super::facets::FacetCounts;
use super::interactions::{find_interacting, interaction_edges, InteractionEdge};
use super::search::{filter_records, suggest_names};

/// Query surface over an immutable catalog.
///
/// Every query is a pure function of the catalog and its arguments, so a
/// shared engine can serve concurrent callers without locking. Facets are
/// computed once at construction.
#[derive(Debug, Clone)]
pub struct DrugQueryEngine {
    catalog: Catalog,
    facets: FacetCounts,
}

impl DrugQueryEngine {
    pub fn new(catalog: Catalog) -> Self {
        let facets = FacetCounts::compute(catalog.records());
        Self { catalog, facets }
    }

    /// Load the catalog from `store` and build an engine over it.
    pub fn from_store(store: &dyn DrugRecordStore) -> Result<Self, CatalogError> {
        Ok(Self::new(Catalog::load(store)?))
    }

    pub fn from_records(records: Vec<DrugRecord>) -> Self {
        Self::new(Catalog::new(records))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn records(&self) -> &[DrugRecord] {
        self.catalog.records()
    }

    /// Records matching every active criterion, in catalog order.
    pub fn filter(&self, filter: &DrugFilter) -> Vec<&DrugRecord> {
        let result = filter_records(self.records(), filter);
        tracing::debug!(
            search = ?filter.search_term,
            category = ?filter.category,
            letter = ?filter.letter,
            condition = ?filter.condition,
            matched = result.len(),
            "Drug filter applied"
        );
        result
    }

    pub fn facet_counts(&self) -> &FacetCounts {
        &self.facets
    }

    /// Distinct categories, sorted.
    pub fn categories(&self) -> Vec<&str> {
        self.facets.categories.keys().map(String::as_str).collect()
    }

    /// Distinct conditions, sorted.
    pub fn conditions(&self) -> Vec<&str> {
        self.facets.conditions.keys().map(String::as_str).collect()
    }

    pub fn find_interacting_drugs(&self, drug_name: &str) -> Vec<&DrugRecord> {
        find_interacting(self.records(), drug_name)
    }

    pub fn all_interaction_entries(&self, search: Option<&str>) -> Vec<InteractionEdge> {
        interaction_edges(self.records(), search)
    }

    /// Case-insensitive exact lookup. With duplicate names the first record
    /// in catalog order wins.
    pub fn get(&self, name: &str) -> Option<&DrugRecord> {
        let wanted = name.trim().to_lowercase();
        self.records()
            .iter()
            .find(|r| r.name.to_lowercase() == wanted)
    }

    /// Name autocomplete.
    pub fn suggest(&self, query: &str, limit: usize) -> Vec<&str> {
        suggest_names(self.records(), query, limit)
    }

    pub fn duplicate_names(&self) -> &[DuplicateName] {
        self.catalog.duplicates()
    }

    pub fn export_csv<'a, I>(&self, records: I, columns: &[ExportColumn]) -> Vec<u8>
    where
        I: IntoIterator<Item = &'a DrugRecord>,
    {
        to_csv(records, columns)
    }

    pub fn export_catalog(&self, date: NaiveDate) -> ExportFile {
        build_export(ExportScope::Catalog, self.records(), &ExportColumn::ALL, date)
    }

    pub fn export_filtered(&self, filter: &DrugFilter, date: NaiveDate) -> ExportFile {
        let records = self.filter(filter);
        build_export(
            ExportScope::Filtered(filter),
            records,
            &ExportColumn::ALL,
            date,
        )
    }

    /// Export a single record by name; `None` when no record has that name.
    pub fn export_record(&self, name: &str, date: NaiveDate) -> Option<ExportFile> {
        let record = self.get(name)?;
        Some(build_export(
            ExportScope::Record(record),
            std::iter::once(record),
            &ExportColumn::ALL,
            date,
        ))
    }
}
