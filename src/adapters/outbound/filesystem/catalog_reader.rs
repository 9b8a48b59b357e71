use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::ports::outbound::CatalogSource;
use crate::reconciliation::domain::{CatalogNode, DiagnosticKind, DiagnosticSink, RecordId};
use crate::shared::error::ReconError;
use crate::shared::Result;

/// Maximum size for a single catalog record file (security limit)
const MAX_RECORD_SIZE: u64 = 4 * 1024 * 1024;

/// Raw catalog record as stored on disk. Field names follow the vendor
/// catalog's vocabulary; an empty ParentId marks a root node.
#[derive(Debug, Deserialize)]
struct NodeRecord {
    #[serde(rename = "Id")]
    id: String,
    #[serde(rename = "DisplayName", default)]
    display_name: Option<String>,
    #[serde(rename = "ParentId", default)]
    parent_id: Option<String>,
    #[serde(rename = "Members", default)]
    members: Vec<String>,
}

/// DirCatalogSource adapter: loads catalog nodes from a directory of JSON
/// records, one node per file.
///
/// A record that cannot be read or parsed is skipped with a diagnostic so
/// the remaining records still load; only an unusable directory is an
/// error. Files are visited in name order to keep catalog enumeration
/// order stable across runs.
pub struct DirCatalogSource {
    dir: PathBuf,
}

impl DirCatalogSource {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn record_paths(&self) -> Result<Vec<PathBuf>> {
        let entries = fs::read_dir(&self.dir).map_err(|e| ReconError::InvalidDataPath {
            path: self.dir.clone(),
            reason: format!("Failed to read catalog directory: {}", e),
        })?;

        let mut paths: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
            .collect();
        paths.sort();
        Ok(paths)
    }

    fn parse_record(path: &Path) -> Result<CatalogNode> {
        let content = safe_read_file(path, "catalog record")?;
        let record: NodeRecord =
            serde_json::from_str(&content).map_err(|e| ReconError::RecordParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;

        let id = RecordId::new(record.id)?;
        // The raw catalog writes root nodes with ParentId = "".
        let parent_id = match record.parent_id.as_deref() {
            None => None,
            Some(raw) if raw.trim().is_empty() => None,
            Some(raw) => Some(RecordId::new(raw)?),
        };
        let members = record
            .members
            .into_iter()
            .map(RecordId::new)
            .collect::<Result<Vec<_>>>()?;

        Ok(CatalogNode {
            id,
            display_name: record.display_name.filter(|name| !name.trim().is_empty()),
            parent_id,
            members,
        })
    }
}

impl CatalogSource for DirCatalogSource {
    fn load_nodes(&self, diagnostics: &DiagnosticSink) -> Result<Vec<CatalogNode>> {
        let mut nodes = Vec::new();

        for path in self.record_paths()? {
            match Self::parse_record(&path) {
                Ok(node) => nodes.push(node),
                Err(e) => {
                    diagnostics.push(
                        DiagnosticKind::MalformedCatalogRecord,
                        format!("{}: {}", path.display(), e),
                    );
                }
            }
        }

        tracing::debug!(count = nodes.len(), dir = %self.dir.display(), "catalog loaded");
        Ok(nodes)
    }
}

/// Read a file after the usual checks: reject symlinks, reject non-regular
/// files, cap the size.
pub(crate) fn safe_read_file(path: &Path, file_type: &str) -> Result<String> {
    let metadata = fs::symlink_metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", file_type, e))?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    let file_size = metadata.len();
    if file_size > MAX_RECORD_SIZE {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            MAX_RECORD_SIZE
        );
    }

    fs::read_to_string(path).map_err(|e| anyhow::anyhow!("Failed to read {}: {}", file_type, e))
}
