use std::fmt;
use std::sync::Mutex;

/// Classification of per-item anomalies recorded during a run.
///
/// None of these abort the run; they are accumulated and returned alongside
/// the result so an operator can audit what was skipped and why.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// Operator-selected model absent from the catalog (empty result, not
    /// an error).
    ModelNotFound,
    /// Catalog record skipped because it could not be parsed.
    MalformedCatalogRecord,
    /// Descriptor record skipped because it could not be parsed.
    DescriptorParseError,
    /// Descriptor skipped because it lacks the required title field.
    DescriptorMissingTitle,
    /// Entry dropped at the collapse step because its descriptor carries no
    /// article number to cross-reference.
    MissingArticle,
    /// Compliance status query failed for one internal identifier; the
    /// entry is excluded from the final result.
    StatusQueryFailed,
    /// Compliance inventory unreachable; the run completed with empty
    /// enrichment.
    EnrichmentDegraded,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DiagnosticKind::ModelNotFound => "model-not-found",
            DiagnosticKind::MalformedCatalogRecord => "malformed-catalog-record",
            DiagnosticKind::DescriptorParseError => "descriptor-parse-error",
            DiagnosticKind::DescriptorMissingTitle => "descriptor-missing-title",
            DiagnosticKind::MissingArticle => "missing-article",
            DiagnosticKind::StatusQueryFailed => "status-query-failed",
            DiagnosticKind::EnrichmentDegraded => "enrichment-degraded",
        };
        write!(f, "{}", label)
    }
}

/// One recorded anomaly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub detail: String,
}

/// Append-only diagnostic collector for one run.
///
/// Descriptor resolution fans out across identities, so the sink must accept
/// appends from concurrent workers; a mutex over the vector is enough at the
/// volumes a catalog produces.
#[derive(Debug, Default)]
pub struct DiagnosticSink {
    entries: Mutex<Vec<Diagnostic>>,
}

impl DiagnosticSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, kind: DiagnosticKind, detail: impl Into<String>) {
        let diagnostic = Diagnostic {
            kind,
            detail: detail.into(),
        };
        tracing::debug!(kind = %diagnostic.kind, detail = %diagnostic.detail, "diagnostic");
        self.entries
            .lock()
            .expect("diagnostic sink poisoned")
            .push(diagnostic);
    }

    pub fn len(&self) -> usize {
        self.entries.lock().expect("diagnostic sink poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Consumes the sink, yielding the diagnostics in append order.
    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.entries
            .into_inner()
            .expect("diagnostic sink poisoned")
    }
}
