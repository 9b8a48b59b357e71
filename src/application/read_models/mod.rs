//! Read models: the flattened, serialization-friendly view of a run's
//! outcome that formatters consume.

use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

use crate::application::dto::ReconResponse;

/// Report metadata: who produced the report and when.
#[derive(Debug, Clone, Serialize)]
pub struct ReportMetadata {
    pub tool: String,
    pub version: String,
    pub run_id: String,
    pub generated_at: String,
    pub run_state: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ModelView {
    pub name: String,
    pub id: Option<String>,
}

/// One deployable update in the report.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateView {
    pub article: String,
    pub title: String,
    pub severity: Option<String>,
    pub content_id: Option<String>,
    pub member: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticView {
    pub kind: String,
    pub detail: String,
}

/// The unified read model for one reconciliation report.
#[derive(Debug, Clone, Serialize)]
pub struct ReconReadModel {
    pub metadata: ReportMetadata,
    pub model: ModelView,
    pub updates: Vec<UpdateView>,
    pub contributing_members: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abort_reason: Option<String>,
    pub diagnostics: Vec<DiagnosticView>,
}

pub struct ReconReadModelBuilder;

impl ReconReadModelBuilder {
    pub fn build(response: &ReconResponse) -> ReconReadModel {
        ReconReadModel {
            metadata: ReportMetadata {
                tool: "patch-recon".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                run_id: Uuid::new_v4().to_string(),
                generated_at: Utc::now().to_rfc3339(),
                run_state: response.state.to_string(),
            },
            model: ModelView {
                name: response.model_name.clone(),
                id: response.model_id.as_ref().map(|id| id.to_string()),
            },
            updates: response
                .updates
                .iter()
                .map(|update| UpdateView {
                    article: update.article.to_string(),
                    title: update.title.clone(),
                    severity: update.severity.clone(),
                    content_id: update.content_id.clone(),
                    member: update.member.to_string(),
                })
                .collect(),
            contributing_members: response
                .contributing_members
                .iter()
                .map(|member| member.to_string())
                .collect(),
            abort_reason: response.abort_reason.clone(),
            diagnostics: response
                .diagnostics
                .iter()
                .map(|diagnostic| DiagnosticView {
                    kind: diagnostic.kind.to_string(),
                    detail: diagnostic.detail.clone(),
                })
                .collect(),
        }
    }
}
