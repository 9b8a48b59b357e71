//! Pure domain types for catalog reconciliation.

pub mod catalog;
pub mod descriptor;
pub mod diagnostics;
pub mod identity;
pub mod inventory;
pub mod reconciled;
pub mod run_state;

pub use catalog::CatalogNode;
pub use descriptor::UpdateDescriptor;
pub use diagnostics::{Diagnostic, DiagnosticKind, DiagnosticSink};
pub use identity::{ArticleNumber, RecordId};
pub use inventory::{StatusBatch, UpdateStatus, ValidUpdate};
pub use reconciled::ReconciledUpdate;
pub use run_state::RunState;
