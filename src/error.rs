//! Typed failure taxonomy for the scoring core.
//!
//! Failures here are local and deterministic. The engine never retries and
//! never substitutes a default value for a failed computation; callers decide
//! whether to surface the error or fall back.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// A collection that must hold at least one element was empty.
    #[error("empty input: at least one {0} is required")]
    EmptyInput(&'static str),

    /// Cosine similarity was requested on a zero-magnitude weighted vector.
    /// Reporting 0 instead would be indistinguishable from true orthogonality.
    #[error("weighted vector has zero magnitude; similarity is undefined")]
    DegenerateVector,

    /// Prediction generation was requested for a model with no decision table.
    #[error("no prediction table registered for model '{model_id}'")]
    UnknownModel { model_id: String },

    /// A caller-supplied score reached a non-clamping function out of range.
    #[error("score {value} for factor '{factor}' is outside [0, 100]")]
    InvalidScore { factor: String, value: f64 },

    /// A review was applied to a prediction that already left `Pending`.
    #[error("prediction {id} has already been resolved")]
    AlreadyResolved { id: String },
}

pub type Result<T> = std::result::Result<T, EngineError>;
