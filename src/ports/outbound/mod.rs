/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces the application core uses to reach
/// external systems (catalog directories, inventory gateways, console,
/// file system).
pub mod catalog_source;
pub mod descriptor_source;
pub mod inventory;
pub mod output_presenter;
pub mod progress_reporter;
pub mod report_formatter;

pub use catalog_source::CatalogSource;
pub use descriptor_source::{DescriptorSource, TitleMatch};
pub use inventory::{ComplianceInventory, UpdateInventory};
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use report_formatter::ReportFormatter;
