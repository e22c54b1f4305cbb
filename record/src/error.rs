use thiserror::Error;

use crate::DurationError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("expected {expected} comma separated fields, found {found}")]
    FieldCount { expected: usize, found: usize },
    #[error("step count must be an integer, got {0:?}")]
    InvalidSteps(String),
    #[error("invalid duration: {0}")]
    InvalidDuration(#[from] DurationError),
}
