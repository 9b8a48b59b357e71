use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::ports::outbound::UpdateInventory;
use crate::reconciliation::domain::{ArticleNumber, ValidUpdate};
use crate::shared::error::ReconError;
use crate::shared::Result;

/// One row from the update inventory gateway. The gateway fronts the WSUS
/// public views and pre-filters to externally-sourced, non-declined
/// updates.
#[derive(Debug, Deserialize)]
struct UpdateRow {
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    severity: Option<String>,
    article: String,
    #[serde(default)]
    revision: String,
    update_id: String,
}

/// WsusGateway adapter for the update inventory (Source A).
///
/// A thin JSON shim over the inventory's read-only query endpoint. Every
/// failure mode - connect, timeout, HTTP status, decode - maps to
/// `ReconError::UpdateInventoryUnavailable`, which the engine treats as
/// fatal for the run.
pub struct WsusGateway {
    client: reqwest::Client,
    base_url: String,
    max_retries: u32,
}

impl WsusGateway {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(format!("patch-recon/{}", version))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            max_retries: 3,
        })
    }

    fn unavailable(&self, details: impl std::fmt::Display) -> anyhow::Error {
        ReconError::UpdateInventoryUnavailable {
            endpoint: self.base_url.clone(),
            details: details.to_string(),
        }
        .into()
    }

    async fn fetch_rows_once(&self) -> Result<Vec<UpdateRow>> {
        let url = format!("{}/api/v1/updates", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.unavailable(e))?;

        if !response.status().is_success() {
            return Err(self.unavailable(format!(
                "update inventory returned status code {}",
                response.status()
            )));
        }

        response.json().await.map_err(|e| self.unavailable(e))
    }

    /// Fetches rows with a short retry ladder; transient gateway hiccups
    /// should not abort an entire run.
    async fn fetch_rows(&self) -> Result<Vec<UpdateRow>> {
        let mut last_error = None;

        for attempt in 1..=self.max_retries {
            match self.fetch_rows_once().await {
                Ok(rows) => return Ok(rows),
                Err(e) => {
                    tracing::warn!(attempt, error = %e, "update inventory fetch failed");
                    last_error = Some(e);
                    if attempt < self.max_retries {
                        tokio::time::sleep(Duration::from_millis(100 * attempt as u64)).await;
                    }
                }
            }
        }

        Err(last_error.expect("at least one attempt"))
    }
}

#[async_trait]
impl UpdateInventory for WsusGateway {
    async fn fetch_valid_updates(&self) -> Result<Vec<ValidUpdate>> {
        let rows = self.fetch_rows().await?;

        let mut updates = Vec::with_capacity(rows.len());
        for row in rows {
            // A row without a usable article number cannot participate in
            // the article join; drop it rather than failing the fetch.
            let article = match ArticleNumber::from_raw(&row.article) {
                Ok(Some(article)) => article,
                Ok(None) => {
                    tracing::warn!(update_id = %row.update_id, "inventory row without article number");
                    continue;
                }
                Err(e) => {
                    tracing::warn!(update_id = %row.update_id, error = %e, "inventory row with invalid article number");
                    continue;
                }
            };

            updates.push(ValidUpdate {
                article,
                title: row.title,
                description: row.description,
                severity: row.severity.filter(|s| !s.trim().is_empty()),
                revision: row.revision,
                update_id: row.update_id,
            });
        }

        Ok(updates)
    }
}
