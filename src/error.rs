use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("weights must sum to 1.0, got {sum}")]
    InvalidWeights { sum: f64 },

    #[error("weight {value} for criterion {index} is outside [0, 1]")]
    WeightOutOfRange { index: usize, value: f64 },

    #[error("expected {expected} scores, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}
