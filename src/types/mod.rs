pub mod dataset_key;
pub mod error;
pub mod parameter;
pub mod period_type;
pub mod station;
pub mod time_resolution;
