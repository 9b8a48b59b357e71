use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
use crate::ports::outbound::ReportFormatter;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Markdown,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'json' or 'markdown'",
                s
            )),
        }
    }
}

impl OutputFormat {
    /// Creates a formatter instance for the specified output format
    pub fn create_formatter(&self) -> Box<dyn ReportFormatter> {
        match self {
            OutputFormat::Json => Box::new(JsonFormatter::new()),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    pub fn progress_message(&self) -> &'static str {
        match self {
            OutputFormat::Json => "📝 Rendering JSON report...",
            OutputFormat::Markdown => "📝 Rendering Markdown report...",
        }
    }
}

/// Reconcile vendor patch catalogs against update inventories
#[derive(Parser, Debug)]
#[command(name = "patch-recon")]
#[command(version)]
#[command(
    about = "Reconcile vendor patch catalogs against WSUS/SCCM-style update inventories",
    long_about = None
)]
pub struct Args {
    /// Path to a config file (defaults to ./patch-recon.config.yml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Reconcile updates for a model into a deployable set
    Reconcile(ReconcileArgs),
    /// Search descriptor titles by keyword (troubleshooting aid)
    FindDescriptors(FindDescriptorsArgs),
}

#[derive(clap::Args, Debug)]
pub struct ReconcileArgs {
    /// Model display name exactly as it appears in the catalog
    #[arg(short, long)]
    pub model: String,

    /// Tenancy name from the config file's tenancy table
    #[arg(short, long)]
    pub tenancy: Option<String>,

    /// Directory of catalog node records
    #[arg(long)]
    pub catalog_dir: Option<PathBuf>,

    /// Directory of update descriptor records
    #[arg(long)]
    pub descriptor_dir: Option<PathBuf>,

    /// Update inventory gateway URL (overrides the tenancy's)
    #[arg(long)]
    pub wsus_url: Option<String>,

    /// Compliance inventory gateway URL (overrides the tenancy's)
    #[arg(long)]
    pub sccm_url: Option<String>,

    /// Bound on inventory call latency, in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Output format: json or markdown
    #[arg(short, long, default_value = "json")]
    pub format: OutputFormat,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct FindDescriptorsArgs {
    /// Keyword to match against descriptor titles (case-insensitive)
    #[arg(short, long)]
    pub keyword: String,

    /// Directory of update descriptor records
    #[arg(long)]
    pub descriptor_dir: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_output_format_from_str_json() {
        assert!(matches!(
            OutputFormat::from_str("json").unwrap(),
            OutputFormat::Json
        ));
        assert!(matches!(
            OutputFormat::from_str("JSON").unwrap(),
            OutputFormat::Json
        ));
    }

    #[test]
    fn test_output_format_from_str_markdown() {
        assert!(matches!(
            OutputFormat::from_str("markdown").unwrap(),
            OutputFormat::Markdown
        ));
        assert!(matches!(
            OutputFormat::from_str("md").unwrap(),
            OutputFormat::Markdown
        ));
    }

    #[test]
    fn test_output_format_from_str_invalid() {
        let error = OutputFormat::from_str("xml").unwrap_err();
        assert!(error.contains("Invalid format"));
        assert!(error.contains("xml"));
    }

    #[test]
    fn test_parse_reconcile_subcommand() {
        let args = Args::try_parse_from([
            "patch-recon",
            "reconcile",
            "--model",
            "ThinkPad T14s Gen 2",
            "--catalog-dir",
            "/data/v3",
            "--descriptor-dir",
            "/data/v2",
            "--wsus-url",
            "http://wsus:8530",
            "--sccm-url",
            "http://sccm:8000",
            "--format",
            "markdown",
        ])
        .unwrap();

        let Command::Reconcile(reconcile) = args.command else {
            panic!("expected reconcile subcommand");
        };
        assert_eq!(reconcile.model, "ThinkPad T14s Gen 2");
        assert!(matches!(reconcile.format, OutputFormat::Markdown));
        assert_eq!(reconcile.wsus_url.as_deref(), Some("http://wsus:8530"));
    }

    #[test]
    fn test_parse_find_descriptors_subcommand() {
        let args = Args::try_parse_from([
            "patch-recon",
            "find-descriptors",
            "--keyword",
            "intel",
            "--descriptor-dir",
            "/data/v2",
        ])
        .unwrap();

        let Command::FindDescriptors(find) = args.command else {
            panic!("expected find-descriptors subcommand");
        };
        assert_eq!(find.keyword, "intel");
    }

    #[test]
    fn test_reconcile_requires_model() {
        let result = Args::try_parse_from(["patch-recon", "reconcile"]);
        assert!(result.is_err());
    }
}
