pub mod catalog;
pub mod config;
pub mod export;
pub mod models;
pub mod query;

pub use catalog::{
    BundledStore, Catalog, CatalogError, DrugRecordStore, DuplicateName, InMemoryStore,
    JsonFileStore,
};
pub use export::{ExportFile, ExportScope};
pub use models::{DrugFilter, DrugRecord, ExportColumn};
pub use query::{DrugQueryEngine, FacetCounts, InteractionEdge};

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber. `RUST_LOG` overrides the default
/// filter. Calling it again after a subscriber is installed does nothing.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter()));

    if tracing_subscriber::fmt().with_env_filter(filter).try_init().is_ok() {
        tracing::info!("{} v{}", config::APP_NAME, config::APP_VERSION);
    }
}

/// Build an engine over the process's default catalog.
pub fn open_default() -> Result<DrugQueryEngine, CatalogError> {
    let store = config::default_store();
    DrugQueryEngine::from_store(store.as_ref())
}
