use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;

use crate::ports::outbound::{DescriptorSource, TitleMatch};
use crate::reconciliation::domain::{RecordId, UpdateDescriptor};
use crate::shared::Result;

/// CachingDescriptorSource wraps a DescriptorSource and memoizes
/// resolutions per identity.
///
/// The descriptor store is immutable between catalog extractions, so both
/// hits and definitive absences are cached; errors are not, letting a
/// transient read failure retry on the next resolve. Decorator pattern:
/// the engine neither knows nor cares whether a descriptor came from disk
/// or cache.
pub struct CachingDescriptorSource<D: DescriptorSource> {
    inner: D,
    cache: Arc<DashMap<RecordId, Option<UpdateDescriptor>>>,
}

impl<D: DescriptorSource> CachingDescriptorSource<D> {
    pub fn new(inner: D) -> Self {
        Self {
            inner,
            cache: Arc::new(DashMap::new()),
        }
    }

    #[cfg(test)]
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

#[async_trait]
impl<D: DescriptorSource> DescriptorSource for CachingDescriptorSource<D> {
    async fn resolve(&self, id: &RecordId) -> Result<Option<UpdateDescriptor>> {
        if let Some(cached) = self.cache.get(id) {
            return Ok(cached.clone());
        }

        let resolved = self.inner.resolve(id).await?;
        self.cache.insert(id.clone(), resolved.clone());
        Ok(resolved)
    }

    async fn search_titles(&self, keyword: &str) -> Result<Vec<TitleMatch>> {
        // Whole-store scans bypass the per-identity cache.
        self.inner.search_titles(keyword).await
    }
}
