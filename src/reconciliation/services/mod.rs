//! Pure domain services: the building blocks the reconciliation engine
//! composes into one run.

pub mod catalog_index;
pub mod collapse;
pub mod exclusion;

pub use catalog_index::CatalogIndex;
pub use collapse::{collapse_by_article, CollapseOutcome};
pub use exclusion::{build_exclusion_set, filter_superseded};
