use std::fmt;
use thiserror::Error;

/// The decoding step of [`crate::classify`] that found no marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassificationStage {
    TimeResolution,
    Parameter,
    PeriodType,
}

impl fmt::Display for ClassificationStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stage = match self {
            ClassificationStage::TimeResolution => "time resolution",
            ClassificationStage::Parameter => "parameter",
            ClassificationStage::PeriodType => "period type",
        };
        write!(f, "{}", stage)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Could not determine {stage} from filename '{filename}'")]
pub struct ClassificationError {
    pub stage: ClassificationStage,
    pub filename: String,
}
