use crate::application::read_models::ReconReadModel;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// Markdown table header for deployable updates
const TABLE_HEADER: &str = "| Article | Severity | Title | Content ID | Member |\n";

/// Markdown table separator line
const TABLE_SEPARATOR: &str = "|---------|----------|-------|------------|--------|\n";

/// MarkdownFormatter adapter: renders the reconciliation report as a
/// human-readable Markdown document with the update table up front and
/// diagnostics at the end.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, model: &ReconReadModel) -> Result<String> {
        let mut output = String::new();

        output.push_str("# Update Reconciliation Report\n\n");
        output.push_str(&format!("- Model: {}", model.model.name));
        if let Some(id) = &model.model.id {
            output.push_str(&format!(" (`{}`)", id));
        }
        output.push('\n');
        output.push_str(&format!("- Run: `{}`\n", model.metadata.run_id));
        output.push_str(&format!("- Generated: {}\n", model.metadata.generated_at));
        output.push_str(&format!("- State: {}\n\n", model.metadata.run_state));

        if let Some(reason) = &model.abort_reason {
            output.push_str(&format!("**Run aborted:** {}\n\n", Self::escape_cell(reason)));
        }

        output.push_str("## Deployable Updates\n\n");
        if model.updates.is_empty() {
            output.push_str("No deployable updates for this model.\n\n");
        } else {
            output.push_str(TABLE_HEADER);
            output.push_str(TABLE_SEPARATOR);
            for update in &model.updates {
                output.push_str(&format!(
                    "| {} | {} | {} | {} | {} |\n",
                    Self::escape_cell(&update.article),
                    Self::escape_cell(update.severity.as_deref().unwrap_or("")),
                    Self::escape_cell(&update.title),
                    Self::escape_cell(update.content_id.as_deref().unwrap_or("-")),
                    Self::escape_cell(&update.member),
                ));
            }
            output.push('\n');
        }

        if !model.diagnostics.is_empty() {
            output.push_str("## Diagnostics\n\n");
            for diagnostic in &model.diagnostics {
                output.push_str(&format!(
                    "- `{}`: {}\n",
                    diagnostic.kind,
                    Self::escape_cell(&diagnostic.detail)
                ));
            }
            output.push('\n');
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::ReconResponse;
    use crate::application::read_models::ReconReadModelBuilder;
    use crate::reconciliation::domain::{
        ArticleNumber, Diagnostic, DiagnosticKind, ReconciledUpdate, RecordId, RunState,
    };

    fn build_model(updates: Vec<ReconciledUpdate>) -> ReconReadModel {
        let response = ReconResponse {
            model_name: "M1".to_string(),
            model_id: Some(RecordId::new("m1").unwrap()),
            contributing_members: updates.iter().map(|u| u.member.clone()).collect(),
            updates,
            state: RunState::Done,
            abort_reason: None,
            diagnostics: vec![Diagnostic {
                kind: DiagnosticKind::MissingArticle,
                detail: "member g7 has no article number".to_string(),
            }],
        };
        ReconReadModelBuilder::build(&response)
    }

    #[test]
    fn test_format_renders_update_table() {
        let model = build_model(vec![ReconciledUpdate {
            article: ArticleNumber::new("KB100").unwrap(),
            title: "BIOS | Firmware Update".to_string(),
            severity: Some("Critical".to_string()),
            content_id: Some("16791234".to_string()),
            member: RecordId::new("g1").unwrap(),
        }]);

        let output = MarkdownFormatter::new().format(&model).unwrap();
        assert!(output.contains("# Update Reconciliation Report"));
        assert!(output.contains("| KB100 | Critical | BIOS \\| Firmware Update | 16791234 | g1 |"));
        assert!(output.contains("`missing-article`"));
    }

    #[test]
    fn test_format_empty_collection() {
        let output = MarkdownFormatter::new().format(&build_model(vec![])).unwrap();
        assert!(output.contains("No deployable updates for this model."));
    }

    #[test]
    fn test_missing_content_id_renders_dash() {
        let model = build_model(vec![ReconciledUpdate {
            article: ArticleNumber::new("KB100").unwrap(),
            title: "BIOS Update".to_string(),
            severity: None,
            content_id: None,
            member: RecordId::new("g1").unwrap(),
        }]);

        let output = MarkdownFormatter::new().format(&model).unwrap();
        assert!(output.contains("| KB100 |  | BIOS Update | - | g1 |"));
    }
}
