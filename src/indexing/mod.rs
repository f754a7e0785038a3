pub mod cached;
pub mod error;
pub mod file_index;
#[cfg(test)]
pub(crate) mod mock;
pub mod provider;
