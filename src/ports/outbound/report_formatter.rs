use crate::application::read_models::ReconReadModel;
use crate::shared::Result;

/// ReportFormatter port for rendering a reconciliation report.
///
/// The engine's output is format-agnostic; adapters turn the read model
/// into JSON, Markdown, or whatever a downstream exporter wants.
pub trait ReportFormatter {
    fn format(&self, model: &ReconReadModel) -> Result<String>;
}
