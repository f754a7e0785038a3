use crate::types::dataset_key::DatasetKey;
use std::fmt;
use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Which of the two indexes a provider failed to deliver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexKind {
    Meta,
    File,
}

impl fmt::Display for IndexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexKind::Meta => write!(f, "meta"),
            IndexKind::File => write!(f, "file"),
        }
    }
}

/// An index provider could not produce the requested index (network failure, missing
/// remote folder, unreadable cache, ...).
#[derive(Debug, Error)]
#[error("The {kind} index for '{key}' is unavailable")]
pub struct IndexUnavailableError {
    pub kind: IndexKind,
    pub key: DatasetKey,
    #[source]
    pub source: BoxError,
}

impl IndexUnavailableError {
    pub fn new(kind: IndexKind, key: DatasetKey, source: impl Into<BoxError>) -> Self {
        Self {
            kind,
            key,
            source: source.into(),
        }
    }
}
