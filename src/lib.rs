//! patch-recon - reconcile vendor patch catalogs against update inventories
//!
//! Given an extracted vendor catalog (model/category nodes plus per-update
//! descriptors) and two inventory gateways (the WSUS-style update inventory
//! and the SCCM-style compliance inventory), this library computes the
//! minimal set of non-superseded, currently-required updates for a selected
//! hardware model, annotated with the identifiers a deployment pipeline
//! needs.
//!
//! # Architecture
//!
//! The library follows a hexagonal layout:
//!
//! - **Domain Layer** (`reconciliation`): pure types and services
//! - **Application Layer** (`application`): use cases and DTOs
//! - **Ports** (`ports`): interface definitions for infrastructure
//! - **Adapters** (`adapters`): concrete implementations of ports
//! - **Shared** (`shared`): error taxonomy and result alias
//!
//! # Example
//!
//! ```no_run
//! use patch_recon::prelude::*;
//! use std::path::PathBuf;
//! use std::time::Duration;
//!
//! # async fn run() -> Result<()> {
//! let catalog = DirCatalogSource::new(PathBuf::from("extracted/v3"));
//! let descriptors =
//!     CachingDescriptorSource::new(DirDescriptorSource::new(PathBuf::from("extracted/v2")));
//! let updates = WsusGateway::new("http://wsus.local:8530", Duration::from_secs(30))?;
//! let compliance = SccmGateway::new("http://sccm.local:8000", Duration::from_secs(30))?;
//! let reporter = StderrProgressReporter::new();
//!
//! let use_case =
//!     ReconcileUpdatesUseCase::new(catalog, descriptors, updates, compliance, reporter);
//! let response = use_case
//!     .execute(ReconRequest::new("ThinkPad T14s Gen 2 Type 20XF 20XG"))
//!     .await?;
//!
//! let report = JsonFormatter::new().format(&ReconReadModelBuilder::build(&response))?;
//! println!("{}", report);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod reconciliation;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        DirCatalogSource, DirDescriptorSource, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::adapters::outbound::network::{
        CachingDescriptorSource, SccmGateway, WsusGateway,
    };
    pub use crate::application::dto::{ReconRequest, ReconResponse};
    pub use crate::application::read_models::{ReconReadModel, ReconReadModelBuilder};
    pub use crate::application::use_cases::{ReconcileUpdatesUseCase, SearchDescriptorsUseCase};
    pub use crate::ports::outbound::{
        CatalogSource, ComplianceInventory, DescriptorSource, OutputPresenter, ProgressReporter,
        ReportFormatter, TitleMatch, UpdateInventory,
    };
    pub use crate::reconciliation::domain::{
        ArticleNumber, CatalogNode, Diagnostic, DiagnosticKind, DiagnosticSink, ReconciledUpdate,
        RecordId, RunState, StatusBatch, UpdateDescriptor, UpdateStatus, ValidUpdate,
    };
    pub use crate::reconciliation::services::CatalogIndex;
    pub use crate::shared::error::{ExitCode, ReconError};
    pub use crate::shared::Result;
}
