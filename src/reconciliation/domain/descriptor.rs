use std::collections::HashSet;

use super::identity::{ArticleNumber, RecordId};

/// Per-update descriptor resolved from the descriptor store.
///
/// `supersedes` lists the identities this update renders obsolete. Filtering
/// is union-based: the union of every resolved descriptor's `supersedes` set
/// forms one global exclusion set applied against member identities, so an
/// update can be knocked out by any other descriptor, not only by itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateDescriptor {
    pub id: RecordId,
    /// Required; a descriptor without a title is rejected at the source.
    pub title: String,
    /// Optional; an absent article makes the entry impossible to
    /// cross-reference and it is dropped at the collapse step.
    pub article: Option<ArticleNumber>,
    pub severity: Option<String>,
    pub supersedes: HashSet<RecordId>,
}
