use async_trait::async_trait;

use crate::reconciliation::domain::{StatusBatch, ValidUpdate};
use crate::shared::Result;

/// UpdateInventory port (Source A): the authority on which articles are
/// currently valid.
///
/// Queried exactly once per run. Failure here is fatal to the run - the
/// engine maps it to the aborted state - so implementations surface
/// `ReconError::UpdateInventoryUnavailable` when the backing source cannot
/// be reached or the query errors.
#[async_trait]
pub trait UpdateInventory: Send + Sync {
    /// Returns every currently valid, externally-sourced, non-declined
    /// update.
    async fn fetch_valid_updates(&self) -> Result<Vec<ValidUpdate>>;
}

/// ComplianceInventory port (Source B): best-effort status enrichment.
///
/// Asymmetric to [`UpdateInventory`] by design: total failure surfaces
/// `ReconError::ComplianceInventoryUnavailable`, which the engine maps to
/// "proceed with empty enrichment for this run", never to an abort.
#[async_trait]
pub trait ComplianceInventory: Send + Sync {
    /// Fetches status rows for the given internal update identifiers.
    ///
    /// Identifiers with no matching record are simply absent from the
    /// batch's status map; per-identifier query failures are reported in
    /// the batch's failure list.
    async fn fetch_status(&self, update_ids: &[String]) -> Result<StatusBatch>;
}
