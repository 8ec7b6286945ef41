//! Filtering, facets and interaction lookups over the drug catalog.

pub mod engine;
pub mod facets;
pub mod interactions;
pub mod search;

pub use engine::DrugQueryEngine;
pub use facets::FacetCounts;
pub use interactions::InteractionEdge;
