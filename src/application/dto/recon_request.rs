/// ReconRequest - Internal request DTO for one reconciliation run.
#[derive(Debug, Clone)]
pub struct ReconRequest {
    /// Display name of the model to reconcile, exactly as it appears in
    /// the catalog.
    pub model_name: String,
}

impl ReconRequest {
    pub fn new(model_name: impl Into<String>) -> Self {
        Self {
            model_name: model_name.into(),
        }
    }
}
