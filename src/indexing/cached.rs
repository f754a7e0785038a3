use crate::indexing::error::IndexUnavailableError;
use crate::indexing::provider::{FileIndexProvider, MetaIndexProvider};
use crate::types::dataset_key::DatasetKey;
use log::{debug, info};
use polars::prelude::DataFrame;
use std::collections::{hash_map::Entry, HashMap};
use tokio::sync::Mutex;

/// In-memory cache in front of an index provider.
///
/// Frames are kept per [`DatasetKey`] until the provider trait's `invalidate_cache` is
/// called, which also forwards the invalidation to the wrapped provider. Failed loads
/// are never cached.
pub struct CachedIndex<P> {
    inner: P,
    frames: Mutex<HashMap<DatasetKey, DataFrame>>,
}

impl<P> CachedIndex<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            frames: Mutex::new(HashMap::new()),
        }
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }

    /// Number of cached frames.
    pub async fn len(&self) -> usize {
        self.frames.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.frames.lock().await.is_empty()
    }

    async fn invalidate(&self) {
        let mut frames = self.frames.lock().await;
        info!("Dropping {} cached index frames", frames.len());
        frames.clear();
    }

    async fn get_or_load<F, Fut>(
        &self,
        key: DatasetKey,
        load: F,
    ) -> Result<DataFrame, IndexUnavailableError>
    where
        F: FnOnce() -> Fut,
        Fut: std::future::Future<Output = Result<DataFrame, IndexUnavailableError>>,
    {
        {
            let frames = self.frames.lock().await;
            if let Some(frame) = frames.get(&key) {
                debug!("Index cache hit for {}", key);
                return Ok(frame.clone());
            }
        }

        debug!("Index cache miss for {}, loading", key);
        let loaded = load().await?;

        let mut frames = self.frames.lock().await;
        // Another caller may have loaded the same key while the lock was released.
        match frames.entry(key) {
            Entry::Occupied(entry) => Ok(entry.get().clone()),
            Entry::Vacant(entry) => {
                entry.insert(loaded.clone());
                Ok(loaded)
            }
        }
    }
}

impl<P: MetaIndexProvider> MetaIndexProvider for CachedIndex<P> {
    async fn get_meta_index(&self, key: DatasetKey) -> Result<DataFrame, IndexUnavailableError> {
        self.get_or_load(key, || self.inner.get_meta_index(key)).await
    }

    async fn invalidate_cache(&self) {
        self.invalidate().await;
        MetaIndexProvider::invalidate_cache(&self.inner).await;
    }
}

impl<P: FileIndexProvider> FileIndexProvider for CachedIndex<P> {
    async fn get_file_index(&self, key: DatasetKey) -> Result<DataFrame, IndexUnavailableError> {
        self.get_or_load(key, || self.inner.get_file_index(key)).await
    }

    async fn invalidate_cache(&self) {
        self.invalidate().await;
        FileIndexProvider::invalidate_cache(&self.inner).await;
    }
}
