use super::identity::RecordId;

/// One record of the model/category catalog.
///
/// A node with no parent reference is a model node (selectable hardware
/// model); a node with a parent reference is a category node grouping the
/// member identities of candidate updates (BIOS, drivers, software in the
/// vendor's catalog).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogNode {
    pub id: RecordId,
    /// Present on model-level nodes only.
    pub display_name: Option<String>,
    /// Absent on root/model nodes.
    pub parent_id: Option<RecordId>,
    /// Ordered member identities; present on category nodes only.
    pub members: Vec<RecordId>,
}

impl CatalogNode {
    pub fn is_model(&self) -> bool {
        self.parent_id.is_none()
    }
}
