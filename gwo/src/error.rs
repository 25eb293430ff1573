use crate::objective::BoxedError;

/// The errors that can occur when constructing or running the optimizer
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A constructor invariant was violated. Detected eagerly at
    /// construction, never at iteration time.
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),

    /// The supplied objective failed. Terminates the run immediately; the
    /// convergence curve keeps the entries of fully completed iterations.
    #[error("objective evaluation failed: {0}")]
    ObjectiveEvaluation(#[source] BoxedError),
}
