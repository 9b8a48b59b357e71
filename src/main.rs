mod adapters;
mod application;
mod cli;
mod config;
mod ports;
mod reconciliation;
mod shared;

use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;

use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

use adapters::outbound::console::StderrProgressReporter;
use adapters::outbound::filesystem::{
    DirCatalogSource, DirDescriptorSource, FileSystemWriter, StdoutPresenter,
};
use adapters::outbound::network::{CachingDescriptorSource, SccmGateway, WsusGateway};
use application::dto::ReconRequest;
use application::read_models::ReconReadModelBuilder;
use application::use_cases::{ReconcileUpdatesUseCase, SearchDescriptorsUseCase};
use cli::{Args, Command, FindDescriptorsArgs, ReconcileArgs};
use config::ConfigFile;
use ports::outbound::OutputPresenter;
use shared::error::{ExitCode, ReconError};
use shared::Result;

/// Default bound on inventory call latency.
const DEFAULT_SOURCE_TIMEOUT_SECS: u64 = 30;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run().await {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n{}\n", "❌ An error occurred:".red());
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }
            eprintln!();

            let code = e
                .downcast_ref::<ReconError>()
                .map(ReconError::exit_code)
                .unwrap_or(ExitCode::ApplicationError);
            process::exit(code.as_i32());
        }
    }
}

async fn run() -> Result<ExitCode> {
    let args = Args::parse_args();

    let config = match &args.config {
        Some(path) => config::load_config_from_path(path)?,
        None => config::discover_config(Path::new("."))?.unwrap_or_default(),
    };

    match args.command {
        Command::Reconcile(reconcile) => run_reconcile(reconcile, &config).await,
        Command::FindDescriptors(find) => run_find_descriptors(find, &config).await,
    }
}

async fn run_reconcile(args: ReconcileArgs, config: &ConfigFile) -> Result<ExitCode> {
    let catalog_dir = resolve_data_dir(
        args.catalog_dir.as_ref(),
        config.catalog_dir.as_ref(),
        "--catalog-dir",
    )?;
    let descriptor_dir = resolve_data_dir(
        args.descriptor_dir.as_ref(),
        config.descriptor_dir.as_ref(),
        "--descriptor-dir",
    )?;

    let tenancy = config.resolve_tenancy(args.tenancy.as_deref())?;
    let wsus_url = args
        .wsus_url
        .or_else(|| tenancy.map(|t| t.wsus_url.clone()))
        .ok_or_else(|| {
            anyhow::anyhow!(
                "No update inventory URL.\n\n💡 Hint: Pass --wsus-url, or select a tenancy with --tenancy / default_tenancy in the config file"
            )
        })?;
    let sccm_url = args
        .sccm_url
        .or_else(|| tenancy.map(|t| t.sccm_url.clone()))
        .ok_or_else(|| {
            anyhow::anyhow!(
                "No compliance inventory URL.\n\n💡 Hint: Pass --sccm-url, or select a tenancy with --tenancy / default_tenancy in the config file"
            )
        })?;

    let timeout = Duration::from_secs(
        args.timeout_secs
            .or(config.source_timeout_secs)
            .unwrap_or(DEFAULT_SOURCE_TIMEOUT_SECS),
    );

    // Create adapters (Dependency Injection)
    let catalog_source = DirCatalogSource::new(catalog_dir);
    let descriptor_source =
        CachingDescriptorSource::new(DirDescriptorSource::new(descriptor_dir));
    let update_inventory = WsusGateway::new(wsus_url, timeout)?;
    let compliance_inventory = SccmGateway::new(sccm_url, timeout)?;
    let progress_reporter = StderrProgressReporter::new();

    let use_case = ReconcileUpdatesUseCase::new(
        catalog_source,
        descriptor_source,
        update_inventory,
        compliance_inventory,
        progress_reporter,
    );

    let response = use_case.execute(ReconRequest::new(args.model)).await?;
    let aborted = response.is_aborted();

    eprintln!("{}", args.format.progress_message());
    let formatter = args.format.create_formatter();
    let report = formatter.format(&ReconReadModelBuilder::build(&response))?;

    let presenter: Box<dyn OutputPresenter> = match args.output {
        Some(output_path) => Box::new(FileSystemWriter::new(output_path)),
        None => Box::new(StdoutPresenter::new()),
    };
    presenter.present(&report)?;

    Ok(if aborted {
        ExitCode::SourceFailure
    } else {
        ExitCode::Success
    })
}

async fn run_find_descriptors(args: FindDescriptorsArgs, config: &ConfigFile) -> Result<ExitCode> {
    let descriptor_dir = resolve_data_dir(
        args.descriptor_dir.as_ref(),
        config.descriptor_dir.as_ref(),
        "--descriptor-dir",
    )?;

    let use_case = SearchDescriptorsUseCase::new(
        DirDescriptorSource::new(descriptor_dir),
        StderrProgressReporter::new(),
    );

    let matches = use_case.execute(&args.keyword).await?;
    for title_match in &matches {
        println!("{}  |  {}", title_match.title, title_match.id);
    }

    Ok(ExitCode::Success)
}

/// Resolves a data directory from the CLI flag or the config file and
/// validates it the usual way: must exist, must be a directory, must not
/// be a symlink.
fn resolve_data_dir(
    from_args: Option<&PathBuf>,
    from_config: Option<&PathBuf>,
    flag: &str,
) -> Result<PathBuf> {
    let path = from_args.or(from_config).cloned().ok_or_else(|| {
        anyhow::anyhow!(
            "No data directory given.\n\n💡 Hint: Pass {} or set it in the config file",
            flag
        )
    })?;

    validate_data_dir(&path)?;
    Ok(path)
}

fn validate_data_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(ReconError::InvalidDataPath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    let metadata =
        std::fs::symlink_metadata(path).map_err(|e| ReconError::InvalidDataPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read path metadata: {}", e),
        })?;

    if metadata.is_symlink() {
        return Err(ReconError::InvalidDataPath {
            path: path.to_path_buf(),
            reason: "Security: Data path is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
        }
        .into());
    }

    if !path.is_dir() {
        return Err(ReconError::InvalidDataPath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}
