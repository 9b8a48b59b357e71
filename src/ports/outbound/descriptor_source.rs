use async_trait::async_trait;

use crate::reconciliation::domain::{RecordId, UpdateDescriptor};
use crate::shared::Result;

/// A descriptor title that matched a keyword search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleMatch {
    pub id: RecordId,
    pub title: String,
}

/// DescriptorSource port for resolving per-update descriptor records.
///
/// # Async Support
/// Resolution is async so the engine can fan out across member identities
/// with bounded concurrency. Implementations must be `Send + Sync`.
#[async_trait]
pub trait DescriptorSource: Send + Sync {
    /// Resolves one member identity to its descriptor.
    ///
    /// Returns `Ok(None)` when no record exists for the identity - a normal
    /// outcome the engine skips over, not an error. Errors are reserved for
    /// records that exist but cannot be used (parse failure, missing
    /// required title).
    async fn resolve(&self, id: &RecordId) -> Result<Option<UpdateDescriptor>>;

    /// Case-insensitive substring search over every descriptor title.
    ///
    /// Troubleshooting aid for operators chasing updates the inventories
    /// have re-flagged; unreadable records are skipped.
    async fn search_titles(&self, keyword: &str) -> Result<Vec<TitleMatch>>;
}
