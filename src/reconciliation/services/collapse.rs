use std::collections::{HashMap, HashSet};

use crate::reconciliation::domain::{ArticleNumber, ReconciledUpdate, RecordId, UpdateDescriptor};

/// Result of the article-number collapse.
#[derive(Debug, Default)]
pub struct CollapseOutcome {
    /// Working collection re-keyed by article number. Content identifiers
    /// are filled in by the compliance query afterwards.
    pub collapsed: HashMap<ArticleNumber, ReconciledUpdate>,
    /// Members dropped because their descriptor carries no article number;
    /// they cannot be cross-referenced against the update inventory.
    pub missing_article: Vec<RecordId>,
}

/// Re-keys the working collection from member identity to article number,
/// retaining only articles present in the update inventory's valid set.
///
/// On duplicate article numbers the later entry in enumeration order
/// replaces the earlier one wholesale (last-write-wins). Articles absent
/// from the valid set are filtered out without a diagnostic; that is the
/// normal inventory intersection, not an anomaly.
pub fn collapse_by_article(
    working: Vec<(RecordId, UpdateDescriptor)>,
    valid_articles: &HashSet<ArticleNumber>,
) -> CollapseOutcome {
    let mut outcome = CollapseOutcome::default();

    for (member, descriptor) in working {
        let Some(article) = descriptor.article.clone() else {
            outcome.missing_article.push(member);
            continue;
        };
        if !valid_articles.contains(&article) {
            continue;
        }
        outcome.collapsed.insert(
            article.clone(),
            ReconciledUpdate {
                article,
                title: descriptor.title,
                severity: descriptor.severity,
                content_id: None,
                member,
            },
        );
    }

    outcome
}
