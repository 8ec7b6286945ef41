//! CSV export of drug records.
//!
//! Every data field is quoted, with embedded quotes doubled, whether or not
//! it contains a delimiter. List fields are joined with `"; "` first. The
//! header row carries the plain column labels. Rows are separated by `\n`
//! with no trailing newline.

use chrono::NaiveDate;
use serde::Serialize;

use crate::config::{EXPORT_BASE_NAME, EXPORT_DATE_FORMAT, LIST_SEPARATOR};
use crate::models::{DrugFilter, DrugRecord, ExportColumn};

/// A finished export, ready for the platform's download primitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// What an export covers; determines the file's base name.
#[derive(Debug, Clone, Copy)]
pub enum ExportScope<'a> {
    Catalog,
    Filtered(&'a DrugFilter),
    Record(&'a DrugRecord),
}

impl ExportScope<'_> {
    pub fn base_name(&self) -> String {
        match self {
            Self::Catalog => EXPORT_BASE_NAME.to_string(),
            Self::Filtered(filter) => filtered_base_name(filter),
            Self::Record(record) => match slugify(&record.name) {
                slug if slug.is_empty() => "drug-details".to_string(),
                slug => format!("{slug}-details"),
            },
        }
    }
}

/// Serialize `records` to CSV with the given columns, in the given order.
pub fn to_csv<'a, I>(records: I, columns: &[ExportColumn]) -> Vec<u8>
where
    I: IntoIterator<Item = &'a DrugRecord>,
{
    let header = columns
        .iter()
        .map(|c| c.as_str())
        .collect::<Vec<_>>()
        .join(",");

    let mut lines = vec![header];
    for record in records {
        let row = columns
            .iter()
            .map(|&c| quote_field(&column_value(record, c)))
            .collect::<Vec<_>>()
            .join(",");
        lines.push(row);
    }

    tracing::debug!(rows = lines.len() - 1, columns = columns.len(), "CSV export built");

    lines.join("\n").into_bytes()
}

/// Export file name: `<base>-<YYYY-MM-DD>.csv`.
pub fn export_file_name(base_name: &str, date: NaiveDate) -> String {
    format!("{}-{}.csv", base_name, date.format(EXPORT_DATE_FORMAT))
}

/// Build a named export for `scope` dated `date`.
pub fn build_export<'a, I>(
    scope: ExportScope<'_>,
    records: I,
    columns: &[ExportColumn],
    date: NaiveDate,
) -> ExportFile
where
    I: IntoIterator<Item = &'a DrugRecord>,
{
    ExportFile {
        file_name: export_file_name(&scope.base_name(), date),
        bytes: to_csv(records, columns),
    }
}

/// Flat text of one column for one record.
pub fn column_value(record: &DrugRecord, column: ExportColumn) -> String {
    match column {
        ExportColumn::DrugName => record.name.clone(),
        ExportColumn::Category => record.category.clone(),
        ExportColumn::Class => record.drug_class.clone(),
        ExportColumn::Dosage => record.dosage.clone(),
        ExportColumn::Indications => record.indications.join(LIST_SEPARATOR),
        ExportColumn::Contraindications => record.contraindications.join(LIST_SEPARATOR),
        ExportColumn::Interactions => record.interactions.join(LIST_SEPARATOR),
        ExportColumn::SideEffects => record.side_effects.join(LIST_SEPARATOR),
        ExportColumn::Monitoring => record.monitoring.join(LIST_SEPARATOR),
        ExportColumn::Conditions => record.conditions.join(LIST_SEPARATOR),
    }
}

pub fn quote_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Criteria whose value has no ASCII alphanumerics are left out of the name.
fn filtered_base_name(filter: &DrugFilter) -> String {
    let criteria = [
        ("search", filter.normalized_search()),
        ("category", filter.category.clone()),
        ("letter", filter.letter.map(String::from)),
        ("condition", filter.condition.clone()),
    ];

    let mut parts = vec![EXPORT_BASE_NAME.to_string()];
    for (label, value) in criteria {
        let slug = value.as_deref().map(slugify).unwrap_or_default();
        if !slug.is_empty() {
            parts.push(format!("{label}-{slug}"));
        }
    }

    parts.join("-")
}

/// Lower-case ASCII alphanumerics separated by single dashes.
pub fn slugify(value: &str) -> String {
    value
        .to_lowercase()
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}
