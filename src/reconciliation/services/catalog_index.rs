use std::collections::HashSet;

use crate::reconciliation::domain::{CatalogNode, RecordId};

/// In-memory index over the loaded catalog, answering the two queries the
/// engine needs: model name to node identity, and model identity to the
/// union of member identities declared under its direct children.
#[derive(Debug, Clone)]
pub struct CatalogIndex {
    nodes: Vec<CatalogNode>,
}

impl CatalogIndex {
    pub fn new(nodes: Vec<CatalogNode>) -> Self {
        Self { nodes }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Resolves a model display name to its node identity.
    ///
    /// Only root nodes (no parent reference) qualify as models; the match is
    /// exact string equality. The catalog is expected to hold at most one
    /// root per display name; if it does not, the first match in load order
    /// wins. `None` is an expected outcome (model absent from the current
    /// catalog), reported by the caller rather than treated as fatal.
    pub fn find_model(&self, name: &str) -> Option<&RecordId> {
        self.nodes
            .iter()
            .filter(|node| node.is_model())
            .find(|node| node.display_name.as_deref() == Some(name))
            .map(|node| &node.id)
    }

    /// Collects the member identities of every direct child of `model_id`.
    ///
    /// Member lists are unioned; the first occurrence of an identity fixes
    /// its position, and that enumeration order is what "later" means for
    /// the last-write-wins collapse downstream. Zero qualifying children
    /// yields an empty collection ("no updates for this model").
    pub fn collect_members(&self, model_id: &RecordId) -> Vec<RecordId> {
        let mut seen = HashSet::new();
        let mut members = Vec::new();

        for node in &self.nodes {
            if node.parent_id.as_ref() != Some(model_id) {
                continue;
            }
            for member in &node.members {
                if seen.insert(member.clone()) {
                    members.push(member.clone());
                }
            }
        }

        members
    }

    /// Identities of the category nodes under `model_id`, in load order.
    pub fn category_ids(&self, model_id: &RecordId) -> Vec<RecordId> {
        self.nodes
            .iter()
            .filter(|node| node.parent_id.as_ref() == Some(model_id))
            .map(|node| node.id.clone())
            .collect()
    }
}
