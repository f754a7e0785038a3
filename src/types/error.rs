use thiserror::Error;

/// A raw value (e.g. from configuration or a command line) that does not name a member
/// of one of the taxonomy enumerations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{value}' is not a valid {kind}")]
pub struct InvalidParameterError {
    /// Which enumeration was being parsed ("parameter", "time resolution", "period type").
    pub kind: &'static str,
    /// The rejected input, as given.
    pub value: String,
}

impl InvalidParameterError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}
