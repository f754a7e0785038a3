pub mod error;
pub mod filename;
