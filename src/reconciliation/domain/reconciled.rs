use super::identity::{ArticleNumber, RecordId};

/// One entry of the final reconciled collection, keyed by article number.
///
/// The article number, not the member identity, is the dedup key: when two
/// member identities map to the same article, the later one in catalog
/// enumeration order wins and replaces the earlier entry wholesale
/// (last-write-wins, carried over from the original workflow as documented
/// behavior).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconciledUpdate {
    pub article: ArticleNumber,
    pub title: String,
    pub severity: Option<String>,
    /// Internal content identifier from the compliance inventory; `None`
    /// when the inventory had no row for this update (which does not
    /// exclude the entry) or when enrichment was degraded for the run.
    pub content_id: Option<String>,
    /// The member identity that contributed this entry, kept for audit.
    pub member: RecordId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reconciled_update_fields() {
        let entry = ReconciledUpdate {
            article: ArticleNumber::new("KB100").unwrap(),
            title: "BIOS Update".to_string(),
            severity: None,
            content_id: Some("16791234".to_string()),
            member: RecordId::new("g1").unwrap(),
        };
        assert_eq!(entry.article.as_str(), "KB100");
        assert_eq!(entry.content_id.as_deref(), Some("16791234"));
    }
}
