use super::identity::ArticleNumber;

/// One row from the update inventory (Source A): a currently valid,
/// externally-sourced, non-declined update.
///
/// Produced once per run. The engine uses the article numbers as the valid
/// set and `update_id` to prime the article-to-internal-identifier lookup
/// consumed by the compliance query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidUpdate {
    pub article: ArticleNumber,
    pub title: String,
    pub description: String,
    pub severity: Option<String>,
    pub revision: String,
    /// Internal update identifier, the join key into the compliance
    /// inventory.
    pub update_id: String,
}

/// Per-update status row from the compliance inventory (Source B).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateStatus {
    /// Internal content identifier needed for downstream deployment actions.
    pub content_id: String,
    /// The inventory's own supersession verdict.
    pub superseded: bool,
    /// True when no managed device currently requires the update.
    pub none_required: bool,
}

impl UpdateStatus {
    /// An update is deployable only when it is neither superseded nor
    /// required by zero devices. Either condition alone excludes it.
    pub fn is_deployable(&self) -> bool {
        !self.superseded && !self.none_required
    }
}

/// Result of one compliance inventory batch query.
///
/// Three outcomes per queried identifier: a status row in `statuses`, a
/// per-identifier query failure in `failures` (entry excluded from the final
/// result), or absence from both (no matching record, entry retained without
/// enrichment).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusBatch {
    pub statuses: std::collections::HashMap<String, UpdateStatus>,
    /// (internal update identifier, error detail)
    pub failures: Vec<(String, String)>,
}

impl StatusBatch {
    pub fn empty() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(superseded: bool, none_required: bool) -> UpdateStatus {
        UpdateStatus {
            content_id: "16791234".to_string(),
            superseded,
            none_required,
        }
    }

    #[test]
    fn test_deployable_requires_both_flags_clear() {
        assert!(status(false, false).is_deployable());
        assert!(!status(true, false).is_deployable());
        assert!(!status(false, true).is_deployable());
        assert!(!status(true, true).is_deployable());
    }
}
