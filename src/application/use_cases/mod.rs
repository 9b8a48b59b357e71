pub mod reconcile_updates;
pub mod search_descriptors;

pub use reconcile_updates::ReconcileUpdatesUseCase;
pub use search_descriptors::SearchDescriptorsUseCase;
