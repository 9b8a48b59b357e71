pub mod mock_catalog_source;
pub mod mock_descriptor_source;
pub mod mock_inventories;
pub mod mock_progress_reporter;

pub use mock_catalog_source::MockCatalogSource;
pub use mock_descriptor_source::MockDescriptorSource;
pub use mock_inventories::{MockComplianceInventory, MockUpdateInventory};
pub use mock_progress_reporter::MockProgressReporter;
