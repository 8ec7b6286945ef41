use std::path::PathBuf;

use crate::catalog::{BundledStore, DrugRecordStore, JsonFileStore};

/// Application-level constants
pub const APP_NAME: &str = "DrugReference";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable pointing at a catalog JSON file.
pub const CATALOG_PATH_ENV: &str = "DRUG_REFERENCE_CATALOG";

/// Base name of full-catalog export files.
pub const EXPORT_BASE_NAME: &str = "drug-database";
/// Date stamp appended to export file names.
pub const EXPORT_DATE_FORMAT: &str = "%Y-%m-%d";
/// Separator used when flattening list fields into one export cell.
pub const LIST_SEPARATOR: &str = "; ";

/// Log filter used when `RUST_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    "info,drug_reference=info"
}

/// Get the application data directory
/// ~/DrugReference/ on all platforms
pub fn app_data_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(APP_NAME))
}

/// Catalog file location: `$DRUG_REFERENCE_CATALOG` if set, else
/// `~/DrugReference/catalog.json`.
pub fn catalog_path() -> Option<PathBuf> {
    match std::env::var_os(CATALOG_PATH_ENV) {
        Some(path) if !path.is_empty() => Some(PathBuf::from(path)),
        _ => app_data_dir().map(|dir| dir.join("catalog.json")),
    }
}

/// Store for the running process: the catalog file when one exists, the
/// bundled catalog otherwise.
pub fn default_store() -> Box<dyn DrugRecordStore> {
    match catalog_path() {
        Some(path) if path.is_file() => {
            tracing::info!(path = %path.display(), "Using catalog file");
            Box::new(JsonFileStore::new(path))
        }
        _ => {
            tracing::info!("No catalog file found, using bundled catalog");
            Box::new(BundledStore)
        }
    }
}
