use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::ports::outbound::ComplianceInventory;
use crate::reconciliation::domain::{StatusBatch, UpdateStatus};
use crate::shared::error::ReconError;
use crate::shared::Result;

#[derive(Debug, Serialize)]
struct StatusQuery<'a> {
    update_ids: &'a [String],
}

/// One status row from the compliance inventory gateway, which fronts the
/// site database's update and compliance-summary views.
#[derive(Debug, Deserialize)]
struct StatusRow {
    update_id: String,
    content_id: String,
    #[serde(default)]
    superseded: bool,
    /// Devices still missing the update per the compliance summary.
    #[serde(default)]
    missing_count: u64,
}

/// Per-identifier query failure reported by the gateway.
#[derive(Debug, Deserialize)]
struct FailureRow {
    update_id: String,
    error: String,
}

#[derive(Debug, Deserialize)]
struct StatusResponse {
    #[serde(default)]
    rows: Vec<StatusRow>,
    #[serde(default)]
    failures: Vec<FailureRow>,
}

/// SccmGateway adapter for the compliance inventory (Source B).
///
/// One batch query per run. Total failure maps to
/// `ReconError::ComplianceInventoryUnavailable`; the engine degrades to
/// empty enrichment rather than aborting, the asymmetry the workflow
/// depends on.
pub struct SccmGateway {
    client: reqwest::Client,
    base_url: String,
}

impl SccmGateway {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(format!("patch-recon/{}", version))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn unavailable(&self, details: impl std::fmt::Display) -> anyhow::Error {
        ReconError::ComplianceInventoryUnavailable {
            endpoint: self.base_url.clone(),
            details: details.to_string(),
        }
        .into()
    }
}

#[async_trait]
impl ComplianceInventory for SccmGateway {
    async fn fetch_status(&self, update_ids: &[String]) -> Result<StatusBatch> {
        if update_ids.is_empty() {
            return Ok(StatusBatch::empty());
        }

        let url = format!("{}/api/v1/update-status", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&StatusQuery { update_ids })
            .send()
            .await
            .map_err(|e| self.unavailable(e))?;

        if !response.status().is_success() {
            return Err(self.unavailable(format!(
                "compliance inventory returned status code {}",
                response.status()
            )));
        }

        let decoded: StatusResponse = response.json().await.map_err(|e| self.unavailable(e))?;

        let mut batch = StatusBatch::empty();
        for row in decoded.rows {
            batch.statuses.insert(
                row.update_id,
                UpdateStatus {
                    content_id: row.content_id,
                    superseded: row.superseded,
                    none_required: row.missing_count == 0,
                },
            );
        }
        for failure in decoded.failures {
            batch.failures.push((failure.update_id, failure.error));
        }

        Ok(batch)
    }
}
