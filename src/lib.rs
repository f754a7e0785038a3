mod classification;
pub mod constants;
mod dwd;
mod error;
mod indexing;
mod metadata;
mod types;
mod utils;
mod validation;

pub use dwd::*;
pub use error::DwdError;

pub use classification::error::{ClassificationError, ClassificationStage};
pub use classification::filename::{
    classify, parameter_from_filename, period_type_from_filename, time_resolution_from_filename,
};
pub use validation::{check_parameters, InvalidCombinationError};

pub use types::dataset_key::DatasetKey;
pub use types::error::InvalidParameterError;
pub use types::parameter::Parameter;
pub use types::period_type::PeriodType;
pub use types::station::*;
pub use types::time_resolution::TimeResolution;

pub use indexing::cached::CachedIndex;
pub use indexing::error::{BoxError, IndexKind, IndexUnavailableError};
pub use indexing::file_index::{
    build_file_index, create_file_list, station_id_from_filename, ListingFileIndex, ListingSource,
};
pub use indexing::provider::{FileIndexProvider, MetaIndexProvider};

pub use metadata::builder::{build_metadata_index, STATE_REFERENCE};
pub use metadata::normalize::normalize_column_names;
pub use metadata::table::MetadataTable;

pub use utils::{correct_folder_path, create_folder, get_data_dir, remove_old_file};
