use std::collections::HashSet;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Deserialize;

use crate::ports::outbound::{DescriptorSource, TitleMatch};
use crate::reconciliation::domain::{ArticleNumber, RecordId, UpdateDescriptor};
use crate::shared::error::ReconError;
use crate::shared::Result;

/// Maximum size for a single descriptor file (security limit)
const MAX_DESCRIPTOR_SIZE: u64 = 4 * 1024 * 1024;

/// Raw descriptor record as stored on disk, one file per member identity.
/// Field names carry over the vendor's distribution-package vocabulary.
#[derive(Debug, Deserialize)]
struct DescriptorRecord {
    #[serde(rename = "Title", default)]
    title: Option<String>,
    #[serde(rename = "KBArticleID", default)]
    article: Option<String>,
    #[serde(rename = "MsrcSeverity", default)]
    severity: Option<String>,
    #[serde(rename = "SupersededPackages", default)]
    superseded: Vec<String>,
}

/// DirDescriptorSource adapter: resolves `<identity>.json` descriptor
/// records from a directory.
///
/// Absence of the file is a normal outcome (`Ok(None)`); a file that exists
/// but cannot be used surfaces a typed error the engine converts into a
/// skip-with-diagnostic.
pub struct DirDescriptorSource {
    dir: PathBuf,
}

impl DirDescriptorSource {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn record_path(&self, id: &RecordId) -> PathBuf {
        // RecordId's character set already forbids path separators.
        self.dir.join(format!("{}.json", id))
    }

    async fn safe_read(path: &Path) -> Result<String> {
        let metadata = tokio::fs::symlink_metadata(path)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to read descriptor metadata: {}", e))?;

        if metadata.is_symlink() {
            anyhow::bail!(
                "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
                path.display()
            );
        }
        if !metadata.is_file() {
            anyhow::bail!("{} is not a regular file", path.display());
        }
        if metadata.len() > MAX_DESCRIPTOR_SIZE {
            anyhow::bail!(
                "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
                path.display(),
                metadata.len(),
                MAX_DESCRIPTOR_SIZE
            );
        }

        tokio::fs::read_to_string(path)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to read descriptor: {}", e))
    }

    fn parse_descriptor(id: &RecordId, path: &Path, content: &str) -> Result<UpdateDescriptor> {
        let record: DescriptorRecord =
            serde_json::from_str(content).map_err(|e| ReconError::RecordParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;

        let title = record
            .title
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ReconError::MissingRequiredField {
                id: id.to_string(),
                field: "Title",
            })?;

        let article = match record.article.as_deref() {
            None => None,
            Some(raw) => {
                ArticleNumber::from_raw(raw).map_err(|e| ReconError::RecordParseError {
                    path: path.to_path_buf(),
                    details: format!("KBArticleID: {}", e),
                })?
            }
        };

        // Entries that fail identity validation could never match a member
        // identity, so they are dropped rather than failing the record.
        let supersedes: HashSet<RecordId> = record
            .superseded
            .iter()
            .filter_map(|raw| RecordId::new(raw.as_str()).ok())
            .collect();

        Ok(UpdateDescriptor {
            id: id.clone(),
            title,
            article,
            severity: record
                .severity
                .filter(|severity| !severity.trim().is_empty()),
            supersedes,
        })
    }
}

#[async_trait]
impl DescriptorSource for DirDescriptorSource {
    async fn resolve(&self, id: &RecordId) -> Result<Option<UpdateDescriptor>> {
        let path = self.record_path(id);
        if !path.exists() {
            return Ok(None);
        }

        let content = Self::safe_read(&path).await?;
        Self::parse_descriptor(id, &path, &content).map(Some)
    }

    async fn search_titles(&self, keyword: &str) -> Result<Vec<TitleMatch>> {
        let needle = keyword.to_lowercase();

        let mut paths: Vec<PathBuf> = std::fs::read_dir(&self.dir)
            .map_err(|e| ReconError::InvalidDataPath {
                path: self.dir.clone(),
                reason: format!("Failed to read descriptor directory: {}", e),
            })?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
            .collect();
        paths.sort();

        let mut matches = Vec::new();
        for path in paths {
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let Ok(id) = RecordId::new(stem) else {
                continue;
            };
            let Ok(content) = Self::safe_read(&path).await else {
                tracing::debug!(path = %path.display(), "skipping unreadable descriptor");
                continue;
            };
            let Ok(descriptor) = Self::parse_descriptor(&id, &path, &content) else {
                tracing::debug!(path = %path.display(), "skipping unparsable descriptor");
                continue;
            };
            if descriptor.title.to_lowercase().contains(&needle) {
                matches.push(TitleMatch {
                    id,
                    title: descriptor.title,
                });
            }
        }

        Ok(matches)
    }
}
