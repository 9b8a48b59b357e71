use patch_recon::prelude::*;

/// Mock CatalogSource for testing
pub struct MockCatalogSource {
    pub nodes: Vec<CatalogNode>,
    pub should_fail: bool,
}

impl MockCatalogSource {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            should_fail: false,
        }
    }

    pub fn with_model(mut self, node_id: &str, display_name: &str) -> Self {
        self.nodes.push(CatalogNode {
            id: RecordId::new(node_id).unwrap(),
            display_name: Some(display_name.to_string()),
            parent_id: None,
            members: vec![],
        });
        self
    }

    pub fn with_category(mut self, node_id: &str, parent_id: &str, members: &[&str]) -> Self {
        self.nodes.push(CatalogNode {
            id: RecordId::new(node_id).unwrap(),
            display_name: None,
            parent_id: Some(RecordId::new(parent_id).unwrap()),
            members: members.iter().map(|m| RecordId::new(*m).unwrap()).collect(),
        });
        self
    }

    pub fn with_failure() -> Self {
        Self {
            nodes: Vec::new(),
            should_fail: true,
        }
    }
}

impl Default for MockCatalogSource {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogSource for MockCatalogSource {
    fn load_nodes(&self, _diagnostics: &DiagnosticSink) -> Result<Vec<CatalogNode>> {
        if self.should_fail {
            anyhow::bail!("Mock catalog source failure");
        }
        Ok(self.nodes.clone())
    }
}
