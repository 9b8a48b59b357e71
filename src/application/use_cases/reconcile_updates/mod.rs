use std::collections::{HashMap, HashSet};

use futures::stream::{self, StreamExt};
use tokio::sync::Mutex;

use crate::application::dto::{ReconRequest, ReconResponse};
use crate::ports::outbound::{
    CatalogSource, ComplianceInventory, DescriptorSource, ProgressReporter, UpdateInventory,
};
use crate::reconciliation::domain::{
    ArticleNumber, DiagnosticKind, DiagnosticSink, ReconciledUpdate, RecordId, RunState,
    StatusBatch, UpdateDescriptor,
};
use crate::reconciliation::services::{
    build_exclusion_set, collapse_by_article, filter_superseded, CatalogIndex,
};
use crate::shared::error::ReconError;
use crate::shared::Result;

/// Concurrency cap for descriptor resolution fan-out.
const DESCRIPTOR_FETCH_CONCURRENCY: usize = 10;

/// ReconcileUpdatesUseCase - the reconciliation engine.
///
/// Owns all run-scoped state for one walk through the pipeline:
/// model resolution, member collection, descriptor resolution, union-based
/// supersession filtering, the update-inventory intersection, the
/// article-number collapse, and the compliance filter. Every collection is
/// rebuilt from empty per run; nothing carries across invocations.
///
/// At most one run executes at a time. The collections are run-scoped and
/// non-reentrant, so a second invocation while one is in flight is
/// rejected with `ReconError::RunInFlight` rather than interleaved.
///
/// # Type Parameters
/// * `CS` - CatalogSource implementation
/// * `DS` - DescriptorSource implementation
/// * `UI` - UpdateInventory implementation (Source A, must-succeed)
/// * `CI` - ComplianceInventory implementation (Source B, best-effort)
/// * `PR` - ProgressReporter implementation
pub struct ReconcileUpdatesUseCase<CS, DS, UI, CI, PR> {
    catalog_source: CS,
    descriptor_source: DS,
    update_inventory: UI,
    compliance_inventory: CI,
    progress_reporter: PR,
    run_guard: Mutex<()>,
}

impl<CS, DS, UI, CI, PR> ReconcileUpdatesUseCase<CS, DS, UI, CI, PR>
where
    CS: CatalogSource,
    DS: DescriptorSource,
    UI: UpdateInventory,
    CI: ComplianceInventory,
    PR: ProgressReporter,
{
    pub fn new(
        catalog_source: CS,
        descriptor_source: DS,
        update_inventory: UI,
        compliance_inventory: CI,
        progress_reporter: PR,
    ) -> Self {
        Self {
            catalog_source,
            descriptor_source,
            update_inventory,
            compliance_inventory,
            progress_reporter,
            run_guard: Mutex::new(()),
        }
    }

    /// Executes one reconciliation run.
    ///
    /// Returns `Ok` for every completed run, including runs that finish in
    /// the `Aborted` state (update inventory unreachable); callers inspect
    /// `ReconResponse::state`. Errors are reserved for problems outside
    /// the run: an unusable catalog store, or a run already in flight.
    pub async fn execute(&self, request: ReconRequest) -> Result<ReconResponse> {
        let _guard = self
            .run_guard
            .try_lock()
            .map_err(|_| ReconError::RunInFlight)?;

        let diagnostics = DiagnosticSink::new();
        let mut state = RunState::Idle;

        // ResolvingModel
        Self::advance(&mut state, RunState::ResolvingModel);
        self.progress_reporter.report(&format!(
            "🔎 Resolving model \"{}\" in the catalog...",
            request.model_name
        ));
        let index = CatalogIndex::new(self.catalog_source.load_nodes(&diagnostics)?);
        self.progress_reporter
            .report(&format!("   {} catalog record(s) loaded", index.node_count()));

        let Some(model_id) = index.find_model(&request.model_name).cloned() else {
            // Expected outcome, not a failure: the run completes empty.
            diagnostics.push(
                DiagnosticKind::ModelNotFound,
                format!("model \"{}\" not found among root nodes", request.model_name),
            );
            self.progress_reporter.report_error(&format!(
                "Model \"{}\" not found in the catalog; nothing to reconcile",
                request.model_name
            ));
            Self::advance(&mut state, RunState::Done);
            return Ok(Self::build_response(
                request.model_name,
                None,
                vec![],
                state,
                None,
                diagnostics,
            ));
        };

        // CollectingMembers
        Self::advance(&mut state, RunState::CollectingMembers);
        let members = index.collect_members(&model_id);
        let category_count = index.category_ids(&model_id).len();
        self.progress_reporter.report(&format!(
            "📦 Collected {} member identit{} across {} categor{}",
            members.len(),
            if members.len() == 1 { "y" } else { "ies" },
            category_count,
            if category_count == 1 { "y" } else { "ies" },
        ));

        // ResolvingDescriptors
        Self::advance(&mut state, RunState::ResolvingDescriptors);
        let mut resolved = self.resolve_descriptors(&members, &diagnostics).await;
        let working: Vec<(RecordId, UpdateDescriptor)> = members
            .iter()
            .filter_map(|member| resolved.remove(member).map(|d| (member.clone(), d)))
            .collect();

        // FilteringSuperseded: one tagged pass builds the union exclusion
        // set before any per-identity filtering happens.
        Self::advance(&mut state, RunState::FilteringSuperseded);
        let excluded = build_exclusion_set(working.iter().map(|(_, descriptor)| descriptor));
        let before = working.len();
        let working = filter_superseded(working, &excluded);
        if before > working.len() {
            self.progress_reporter.report(&format!(
                "🚫 Dropped {} superseded member(s)",
                before - working.len()
            ));
        }

        // QueryingInventoryA: the one stage whose failure aborts the run.
        Self::advance(&mut state, RunState::QueryingInventoryA);
        self.progress_reporter.report("🌐 Querying update inventory...");
        let valid_updates = match self.update_inventory.fetch_valid_updates().await {
            Ok(rows) => rows,
            Err(e) => {
                Self::advance(&mut state, RunState::Aborted);
                self.progress_reporter
                    .report_error(&format!("❌ Run aborted: {}", e));
                return Ok(Self::build_response(
                    request.model_name,
                    Some(model_id),
                    vec![],
                    state,
                    Some(e.to_string()),
                    diagnostics,
                ));
            }
        };
        self.progress_reporter.report(&format!(
            "   {} valid update(s) in inventory",
            valid_updates.len()
        ));

        let mut valid_articles: HashSet<ArticleNumber> = HashSet::new();
        let mut article_to_update_id: HashMap<ArticleNumber, String> = HashMap::new();
        for row in &valid_updates {
            valid_articles.insert(row.article.clone());
            // First row wins if the inventory ever reports an article twice.
            article_to_update_id
                .entry(row.article.clone())
                .or_insert_with(|| row.update_id.clone());
        }

        // CollapsingByArticle
        Self::advance(&mut state, RunState::CollapsingByArticle);
        let outcome = collapse_by_article(working, &valid_articles);
        for member in &outcome.missing_article {
            diagnostics.push(
                DiagnosticKind::MissingArticle,
                format!("member {} has no article number to cross-reference", member),
            );
        }
        self.progress_reporter.report(&format!(
            "🔗 {} update(s) matched the valid article set",
            outcome.collapsed.len()
        ));

        // QueryingInventoryB: best-effort; total failure degrades the run
        // to empty enrichment instead of aborting.
        Self::advance(&mut state, RunState::QueryingInventoryB);
        let mut update_ids: Vec<String> = outcome
            .collapsed
            .keys()
            .filter_map(|article| article_to_update_id.get(article).cloned())
            .collect();
        update_ids.sort();
        update_ids.dedup();
        self.progress_reporter.report(&format!(
            "🌐 Querying compliance inventory for {} identifier(s)...",
            update_ids.len()
        ));
        let batch = match self.compliance_inventory.fetch_status(&update_ids).await {
            Ok(batch) => batch,
            Err(e) => {
                diagnostics.push(DiagnosticKind::EnrichmentDegraded, e.to_string());
                self.progress_reporter.report_error(&format!(
                    "⚠️  Compliance inventory unavailable; continuing without enrichment: {}",
                    e
                ));
                StatusBatch::empty()
            }
        };
        let mut failed_ids: HashSet<String> = HashSet::new();
        for (update_id, detail) in &batch.failures {
            diagnostics.push(
                DiagnosticKind::StatusQueryFailed,
                format!("{}: {}", update_id, detail),
            );
            failed_ids.insert(update_id.clone());
        }

        // FilteringRequired
        Self::advance(&mut state, RunState::FilteringRequired);
        let mut updates: Vec<ReconciledUpdate> = Vec::with_capacity(outcome.collapsed.len());
        for (article, mut entry) in outcome.collapsed {
            let Some(update_id) = article_to_update_id.get(&article) else {
                // Collapse retains valid articles only, so the lookup
                // cannot miss; skip defensively rather than panic.
                continue;
            };
            if failed_ids.contains(update_id) {
                continue;
            }
            match batch.statuses.get(update_id) {
                Some(status) if !status.is_deployable() => continue,
                Some(status) => entry.content_id = Some(status.content_id.clone()),
                // No matching record: retained without enrichment.
                None => {}
            }
            updates.push(entry);
        }
        updates.sort_by(|a, b| a.article.cmp(&b.article));

        // Done
        Self::advance(&mut state, RunState::Done);
        self.progress_reporter.report_completion(&format!(
            "✅ Reconciliation complete: {} deployable update(s), {} diagnostic(s)",
            updates.len(),
            diagnostics.len()
        ));

        Ok(Self::build_response(
            request.model_name,
            Some(model_id),
            updates,
            state,
            None,
            diagnostics,
        ))
    }

    /// Resolves descriptors for every member with bounded concurrency.
    ///
    /// Results land in an identity-keyed map, so downstream processing
    /// stays in catalog enumeration order no matter which fetch finishes
    /// first. Absent records are skipped silently; unusable records are
    /// classified onto the diagnostic sink.
    async fn resolve_descriptors(
        &self,
        members: &[RecordId],
        diagnostics: &DiagnosticSink,
    ) -> HashMap<RecordId, UpdateDescriptor> {
        let total = members.len();
        if total == 0 {
            return HashMap::new();
        }
        self.progress_reporter
            .report("📄 Resolving update descriptors...");

        let descriptor_source = &self.descriptor_source;
        let mut results = stream::iter(members.iter().cloned())
            .map(|member| async move {
                let outcome = descriptor_source.resolve(&member).await;
                (member, outcome)
            })
            .buffer_unordered(DESCRIPTOR_FETCH_CONCURRENCY);

        let mut resolved = HashMap::new();
        let mut completed = 0usize;
        while let Some((member, outcome)) = results.next().await {
            completed += 1;
            self.progress_reporter
                .report_progress(completed, total, Some("descriptors"));
            match outcome {
                Ok(Some(descriptor)) => {
                    resolved.insert(member, descriptor);
                }
                Ok(None) => {
                    // No record for this identity; a normal outcome.
                }
                Err(e) => {
                    let kind = match e.downcast_ref::<ReconError>() {
                        Some(ReconError::MissingRequiredField { .. }) => {
                            DiagnosticKind::DescriptorMissingTitle
                        }
                        _ => DiagnosticKind::DescriptorParseError,
                    };
                    diagnostics.push(kind, format!("{}: {}", member, e));
                }
            }
        }

        self.progress_reporter.report_completion(&format!(
            "   {} of {} descriptor(s) resolved",
            resolved.len(),
            total
        ));
        resolved
    }

    fn advance(state: &mut RunState, next: RunState) {
        tracing::debug!(from = %state, to = %next, "run state");
        *state = next;
    }

    fn build_response(
        model_name: String,
        model_id: Option<RecordId>,
        updates: Vec<ReconciledUpdate>,
        state: RunState,
        abort_reason: Option<String>,
        diagnostics: DiagnosticSink,
    ) -> ReconResponse {
        let mut contributing_members: Vec<RecordId> =
            updates.iter().map(|update| update.member.clone()).collect();
        contributing_members.sort();
        contributing_members.dedup();

        ReconResponse {
            model_name,
            model_id,
            updates,
            contributing_members,
            state,
            abort_reason,
            diagnostics: diagnostics.into_vec(),
        }
    }
}
