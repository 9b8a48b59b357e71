use crate::reconciliation::domain::{Diagnostic, ReconciledUpdate, RecordId, RunState};

/// ReconResponse - Internal response DTO from one reconciliation run.
///
/// An aborted run is represented here, not as an `Err`: `state` is
/// `Aborted`, `abort_reason` names the source that failed, and `updates`
/// is empty. Only infrastructure problems outside the run itself (unusable
/// catalog directory, a second run while one is in flight) surface as
/// errors.
#[derive(Debug, Clone)]
pub struct ReconResponse {
    pub model_name: String,
    /// Resolved model identity; `None` when the model was not found.
    pub model_id: Option<RecordId>,
    /// Final collection, sorted by article number for stable output.
    pub updates: Vec<ReconciledUpdate>,
    /// Member identities contributing to the final collection, for audit.
    pub contributing_members: Vec<RecordId>,
    pub state: RunState,
    /// Set when `state` is `Aborted`.
    pub abort_reason: Option<String>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ReconResponse {
    pub fn is_aborted(&self) -> bool {
        self.state == RunState::Aborted
    }
}
