use crate::application::read_models::ReconReadModel;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// JsonFormatter adapter: renders the reconciliation report as pretty JSON.
///
/// The JSON shape is the read model itself, which keeps the report stable
/// for downstream exporters that build deployment artifacts from it.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, model: &ReconReadModel) -> Result<String> {
        let mut output = serde_json::to_string_pretty(model)
            .map_err(|e| anyhow::anyhow!("Failed to serialize report: {}", e))?;
        output.push('\n');
        Ok(output)
    }
}
