use async_trait::async_trait;
use patch_recon::prelude::*;

/// Mock UpdateInventory (Source A) for testing
pub struct MockUpdateInventory {
    pub rows: Vec<ValidUpdate>,
    pub should_fail: bool,
}

impl MockUpdateInventory {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            should_fail: false,
        }
    }

    pub fn with_update(mut self, article: &str, update_id: &str) -> Self {
        self.rows.push(ValidUpdate {
            article: ArticleNumber::new(article).unwrap(),
            title: format!("Inventory title for {}", article),
            description: String::new(),
            severity: None,
            revision: "200".to_string(),
            update_id: update_id.to_string(),
        });
        self
    }

    pub fn with_failure() -> Self {
        Self {
            rows: Vec::new(),
            should_fail: true,
        }
    }
}

impl Default for MockUpdateInventory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UpdateInventory for MockUpdateInventory {
    async fn fetch_valid_updates(&self) -> Result<Vec<ValidUpdate>> {
        if self.should_fail {
            return Err(ReconError::UpdateInventoryUnavailable {
                endpoint: "http://wsus.test:8530".to_string(),
                details: "mock connection failure".to_string(),
            }
            .into());
        }
        Ok(self.rows.clone())
    }
}

/// Mock ComplianceInventory (Source B) for testing
pub struct MockComplianceInventory {
    pub batch: StatusBatch,
    pub should_fail: bool,
}

impl MockComplianceInventory {
    pub fn new() -> Self {
        Self {
            batch: StatusBatch::empty(),
            should_fail: false,
        }
    }

    pub fn with_status(
        mut self,
        update_id: &str,
        content_id: &str,
        superseded: bool,
        none_required: bool,
    ) -> Self {
        self.batch.statuses.insert(
            update_id.to_string(),
            UpdateStatus {
                content_id: content_id.to_string(),
                superseded,
                none_required,
            },
        );
        self
    }

    pub fn with_query_failure(mut self, update_id: &str, detail: &str) -> Self {
        self.batch
            .failures
            .push((update_id.to_string(), detail.to_string()));
        self
    }

    pub fn with_failure() -> Self {
        Self {
            batch: StatusBatch::empty(),
            should_fail: true,
        }
    }
}

impl Default for MockComplianceInventory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ComplianceInventory for MockComplianceInventory {
    async fn fetch_status(&self, _update_ids: &[String]) -> Result<StatusBatch> {
        if self.should_fail {
            return Err(ReconError::ComplianceInventoryUnavailable {
                endpoint: "http://sccm.test:8000".to_string(),
                details: "mock connection failure".to_string(),
            }
            .into());
        }
        Ok(self.batch.clone())
    }
}
