use crate::shared::Result;

/// Maximum length for record identities (security limit)
const MAX_RECORD_ID_LENGTH: usize = 255;

/// Maximum length for article numbers (security limit)
const MAX_ARTICLE_LENGTH: usize = 100;

/// NewType wrapper for a catalog record identity.
///
/// Catalog nodes, category member references and update descriptors all
/// share one identity namespace (opaque keys, GUIDs in practice), so a
/// single type covers all three.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        let id = id.trim().to_string();

        if id.is_empty() {
            anyhow::bail!("Record identity cannot be empty");
        }

        // Length limit to prevent DoS via pathological catalog data
        if id.len() > MAX_RECORD_ID_LENGTH {
            anyhow::bail!(
                "Record identity is too long ({} bytes). Maximum allowed: {} bytes",
                id.len(),
                MAX_RECORD_ID_LENGTH
            );
        }

        // Identities become file names in the descriptor store, so path
        // separators and traversal sequences are rejected outright.
        if !id
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_' || c == '{' || c == '}')
        {
            anyhow::bail!(
                "Record identity \"{}\" contains invalid characters. Only alphanumeric, hyphens, underscores, and braces are allowed.",
                id
            );
        }

        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// NewType wrapper for a vendor article number (e.g. a KB number).
///
/// The article number is the dedup key of the final collection and the join
/// key into the update inventory. Descriptors may omit it; an omitted or
/// empty article is modelled as `None` at the descriptor level, never as an
/// empty `ArticleNumber`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArticleNumber(String);

impl ArticleNumber {
    pub fn new(article: impl Into<String>) -> Result<Self> {
        let article = article.into();
        let article = article.trim().to_string();

        if article.is_empty() {
            anyhow::bail!("Article number cannot be empty");
        }

        if article.len() > MAX_ARTICLE_LENGTH {
            anyhow::bail!(
                "Article number is too long ({} bytes). Maximum allowed: {} bytes",
                article.len(),
                MAX_ARTICLE_LENGTH
            );
        }

        if !article
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_' || c == '.')
        {
            anyhow::bail!(
                "Article number \"{}\" contains invalid characters. Only alphanumeric, hyphens, underscores, and dots are allowed.",
                article
            );
        }

        Ok(Self(article))
    }

    /// Parses a raw article field from a record, mapping empty/whitespace
    /// input to `None` rather than an error.
    pub fn from_raw(raw: &str) -> Result<Option<Self>> {
        if raw.trim().is_empty() {
            return Ok(None);
        }
        Self::new(raw).map(Some)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ArticleNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
