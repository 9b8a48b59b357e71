use crate::ports::outbound::{DescriptorSource, ProgressReporter, TitleMatch};
use crate::shared::Result;

/// SearchDescriptorsUseCase - keyword search over descriptor titles.
///
/// Troubleshooting aid: when the inventories re-flag a previously valid
/// update, an operator can locate the descriptor records mentioning it by
/// title and walk the pipeline by hand from there.
pub struct SearchDescriptorsUseCase<DS, PR> {
    descriptor_source: DS,
    progress_reporter: PR,
}

impl<DS, PR> SearchDescriptorsUseCase<DS, PR>
where
    DS: DescriptorSource,
    PR: ProgressReporter,
{
    pub fn new(descriptor_source: DS, progress_reporter: PR) -> Self {
        Self {
            descriptor_source,
            progress_reporter,
        }
    }

    pub async fn execute(&self, keyword: &str) -> Result<Vec<TitleMatch>> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            anyhow::bail!("Search keyword cannot be empty");
        }

        self.progress_reporter.report(&format!(
            "🔎 Searching descriptor titles for \"{}\"...",
            keyword
        ));

        let matches = self.descriptor_source.search_titles(keyword).await?;

        self.progress_reporter.report_completion(&format!(
            "✅ {} matching descriptor(s)",
            matches.len()
        ));
        Ok(matches)
    }
}
