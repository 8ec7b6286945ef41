pub mod drug;
pub mod enums;
pub mod filters;

pub use drug::DrugRecord;
pub use enums::ExportColumn;
pub use filters::{DrugFilter, ALL_SENTINEL};
