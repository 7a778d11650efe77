use thiserror::Error;

/// Errors surfaced by the evaluation operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EvalError {
    /// The predicted and actual label sequences are not aligned by index.
    #[error("predicted and actual label sequences differ in length ({predicted} vs {actual})")]
    LengthMismatch { predicted: usize, actual: usize },
    /// Zero samples to evaluate, so accuracy is undefined.
    #[error("no samples to evaluate")]
    DegenerateInput,
}
