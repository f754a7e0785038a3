//! In-memory index provider for tests, recording every call it receives.

use crate::indexing::error::{IndexKind, IndexUnavailableError};
use crate::indexing::provider::{FileIndexProvider, MetaIndexProvider};
use crate::types::dataset_key::DatasetKey;
use polars::prelude::DataFrame;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

#[derive(Default)]
pub(crate) struct MockIndex {
    frames: HashMap<DatasetKey, DataFrame>,
    pub fetches: AtomicUsize,
    pub invalidations: AtomicUsize,
    pub fetched_keys: Mutex<Vec<DatasetKey>>,
}

impl MockIndex {
    pub fn with_frame(mut self, key: DatasetKey, frame: DataFrame) -> Self {
        self.frames.insert(key, frame);
        self
    }

    pub fn fetched_keys(&self) -> Vec<DatasetKey> {
        self.fetched_keys.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.fetches.load(Ordering::SeqCst) + self.invalidations.load(Ordering::SeqCst)
    }

    fn fetch(&self, kind: IndexKind, key: DatasetKey) -> Result<DataFrame, IndexUnavailableError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.fetched_keys.lock().unwrap().push(key);
        self.frames
            .get(&key)
            .cloned()
            .ok_or_else(|| IndexUnavailableError::new(kind, key, "no such dataset in mock"))
    }
}

impl MetaIndexProvider for MockIndex {
    async fn get_meta_index(&self, key: DatasetKey) -> Result<DataFrame, IndexUnavailableError> {
        self.fetch(IndexKind::Meta, key)
    }

    async fn invalidate_cache(&self) {
        self.invalidations.fetch_add(1, Ordering::SeqCst);
    }
}

impl FileIndexProvider for MockIndex {
    async fn get_file_index(&self, key: DatasetKey) -> Result<DataFrame, IndexUnavailableError> {
        self.fetch(IndexKind::File, key)
    }

    async fn invalidate_cache(&self) {
        self.invalidations.fetch_add(1, Ordering::SeqCst);
    }
}
