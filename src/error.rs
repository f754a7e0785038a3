use crate::classification::error::ClassificationError;
use crate::indexing::error::IndexUnavailableError;
use crate::types::error::InvalidParameterError;
use crate::validation::InvalidCombinationError;
use polars::error::PolarsError;
use std::convert::Infallible;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DwdError {
    #[error(transparent)]
    Classification(#[from] ClassificationError),

    #[error(transparent)]
    InvalidParameter(#[from] InvalidParameterError),

    #[error(transparent)]
    InvalidCombination(#[from] InvalidCombinationError),

    #[error(transparent)]
    IndexUnavailable(#[from] IndexUnavailableError),

    #[error("Failed to create folder '{0}'")]
    FolderCreation(PathBuf, #[source] std::io::Error),

    #[error("Failed to determine data directory")]
    DataDirResolution,

    #[error("Required column '{0}' not found in index")]
    MissingColumn(String),

    #[error("Failed processing DataFrame: {0}")]
    DataFrame(#[from] PolarsError),
}

// Lets already-typed enum values go through the same `TryInto` coercion as raw strings.
impl From<Infallible> for DwdError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}
