use sitegrid::GridError;
use thiserror::Error;

/// Failures while building or exchanging an objective.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ModelError {
    /// Bad grid, weights, or target count. Raised before any bias is computed.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The vectorized computer disagreed with the reference computer.
    /// This is an internal fault, never a consequence of user input.
    #[error("vectorized {term} bias diverged from reference: {detail}")]
    NumericDivergence { term: &'static str, detail: String },

    /// An objective read from outside breaks the pair/variable invariants.
    #[error("malformed objective: {0}")]
    MalformedObjective(String),
}

impl From<GridError> for ModelError {
    fn from(err: GridError) -> Self { ModelError::InvalidConfiguration(err.to_string()) }
}

pub type Result<T> = std::result::Result<T, ModelError>;
