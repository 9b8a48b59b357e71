use crate::reconciliation::domain::{CatalogNode, DiagnosticSink};
use crate::shared::Result;

/// CatalogSource port for loading the model/category catalog.
///
/// Implementations load every record they can and skip the ones they
/// cannot: a malformed record is recorded on the diagnostic sink and must
/// not stop the remaining records from loading. An error return is reserved
/// for the store itself being unusable (missing directory, unreadable
/// root).
pub trait CatalogSource {
    fn load_nodes(&self, diagnostics: &DiagnosticSink) -> Result<Vec<CatalogNode>>;
}
