use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

use async_trait::async_trait;
use patch_recon::prelude::*;

/// Mock DescriptorSource for testing
pub struct MockDescriptorSource {
    pub descriptors: HashMap<RecordId, UpdateDescriptor>,
    pub parse_failures: HashSet<RecordId>,
    pub missing_titles: HashSet<RecordId>,
}

impl MockDescriptorSource {
    pub fn new() -> Self {
        Self {
            descriptors: HashMap::new(),
            parse_failures: HashSet::new(),
            missing_titles: HashSet::new(),
        }
    }

    pub fn with_descriptor(
        mut self,
        member: &str,
        title: &str,
        article: Option<&str>,
        severity: Option<&str>,
        supersedes: &[&str],
    ) -> Self {
        let id = RecordId::new(member).unwrap();
        self.descriptors.insert(
            id.clone(),
            UpdateDescriptor {
                id,
                title: title.to_string(),
                article: article.map(|a| ArticleNumber::new(a).unwrap()),
                severity: severity.map(String::from),
                supersedes: supersedes
                    .iter()
                    .map(|s| RecordId::new(*s).unwrap())
                    .collect(),
            },
        );
        self
    }

    pub fn with_parse_failure(mut self, member: &str) -> Self {
        self.parse_failures.insert(RecordId::new(member).unwrap());
        self
    }

    pub fn with_missing_title(mut self, member: &str) -> Self {
        self.missing_titles.insert(RecordId::new(member).unwrap());
        self
    }
}

impl Default for MockDescriptorSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DescriptorSource for MockDescriptorSource {
    async fn resolve(&self, id: &RecordId) -> Result<Option<UpdateDescriptor>> {
        if self.parse_failures.contains(id) {
            return Err(ReconError::RecordParseError {
                path: PathBuf::from(format!("{}.json", id)),
                details: "mock parse failure".to_string(),
            }
            .into());
        }
        if self.missing_titles.contains(id) {
            return Err(ReconError::MissingRequiredField {
                id: id.to_string(),
                field: "Title",
            }
            .into());
        }
        Ok(self.descriptors.get(id).cloned())
    }

    async fn search_titles(&self, keyword: &str) -> Result<Vec<TitleMatch>> {
        let needle = keyword.to_lowercase();
        let mut matches: Vec<TitleMatch> = self
            .descriptors
            .values()
            .filter(|descriptor| descriptor.title.to_lowercase().contains(&needle))
            .map(|descriptor| TitleMatch {
                id: descriptor.id.clone(),
                title: descriptor.title.clone(),
            })
            .collect();
        matches.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(matches)
    }
}
