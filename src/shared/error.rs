use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow schedulers and CI systems to distinguish "nothing to
/// deploy" from "could not reach a required backing source".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - reconciliation completed, possibly with an empty result
    Success = 0,
    /// The run aborted because a required inventory source was unreachable
    SourceFailure = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (bad paths, config errors, file I/O errors, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::SourceFailure => write!(f, "Source Failure (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for catalog reconciliation.
///
/// Uses thiserror to derive Display and Error traits automatically.
/// The two inventory variants are deliberately separate: the engine aborts
/// the run when the update inventory is unreachable but degrades to empty
/// enrichment when the compliance inventory is unreachable.
#[derive(Debug, Error)]
pub enum ReconError {
    #[error("Model \"{model}\" was not found in the catalog\n\n💡 Hint: Check the spelling against the catalog's DisplayName values, and confirm the catalog extract is current")]
    ModelNotFound { model: String },

    #[error("Failed to parse record {path}\nDetails: {details}")]
    RecordParseError { path: PathBuf, details: String },

    #[error("Record \"{id}\" is missing required field \"{field}\"")]
    MissingRequiredField { id: String, field: &'static str },

    #[error("Update inventory at {endpoint} is unavailable\nDetails: {details}\n\n💡 Hint: The update inventory is the source of truth for valid articles; the run cannot continue without it")]
    UpdateInventoryUnavailable { endpoint: String, details: String },

    #[error("Compliance inventory at {endpoint} is unavailable\nDetails: {details}")]
    ComplianceInventoryUnavailable { endpoint: String, details: String },

    #[error("A reconciliation run is already in flight; concurrent runs are not supported")]
    RunInFlight,

    #[error("Invalid data directory: {path}\nReason: {reason}\n\n💡 Hint: Point --catalog-dir/--descriptor-dir at the extracted catalog directories")]
    InvalidDataPath { path: PathBuf, reason: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },
}

impl ReconError {
    /// Exit code this error maps to at the CLI boundary.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            ReconError::UpdateInventoryUnavailable { .. } => ExitCode::SourceFailure,
            _ => ExitCode::ApplicationError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::SourceFailure.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(format!("{}", ExitCode::SourceFailure), "Source Failure (1)");
    }

    #[test]
    fn test_model_not_found_display() {
        let error = ReconError::ModelNotFound {
            model: "ThinkPad T14s Gen 3".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("ThinkPad T14s Gen 3"));
        assert!(display.contains("was not found in the catalog"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_record_parse_error_display() {
        let error = ReconError::RecordParseError {
            path: PathBuf::from("/data/v3/abc.json"),
            details: "expected value at line 1".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("/data/v3/abc.json"));
        assert!(display.contains("expected value at line 1"));
    }

    #[test]
    fn test_missing_required_field_display() {
        let error = ReconError::MissingRequiredField {
            id: "9f0c".to_string(),
            field: "Title",
        };
        let display = format!("{}", error);
        assert!(display.contains("9f0c"));
        assert!(display.contains("Title"));
    }

    #[test]
    fn test_inventory_errors_map_to_distinct_exit_codes() {
        let abort = ReconError::UpdateInventoryUnavailable {
            endpoint: "http://wsus.local".to_string(),
            details: "connection refused".to_string(),
        };
        let degrade = ReconError::ComplianceInventoryUnavailable {
            endpoint: "http://sccm.local".to_string(),
            details: "connection refused".to_string(),
        };
        assert_eq!(abort.exit_code(), ExitCode::SourceFailure);
        assert_eq!(degrade.exit_code(), ExitCode::ApplicationError);
    }

    #[test]
    fn test_run_in_flight_display() {
        let display = format!("{}", ReconError::RunInFlight);
        assert!(display.contains("already in flight"));
    }
}
