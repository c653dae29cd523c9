use thiserror::Error;

/// Reasons a problem or solver configuration is rejected before any iteration starts.
///
/// Terminal states of the algorithms themselves (unboundedness, numerical breakdown,
/// exhausted iteration budget) are not errors, see [`Outcome`](crate::solvers::Outcome).
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LinearProgramError {
    #[error("The problem is unconstrained, meaning the solution is the all-zeros vector if `c` is nonpositive (when maximizing), or unbounded otherwise.")]
    Unconstrained,
    #[error("The dimensions of your cost- and constraint arrays do not align.")]
    IncompatibleInputDimensions,
    #[error("The cost vector, constraint matrix or constraint vector contains NaN or infinite values.")]
    NonFiniteInput,
    #[error("A parameter was set to an invalid value: {0}")]
    InvalidParameter(&'static str),
    #[error("The origin is not feasible: every right-hand side must be nonnegative for the slack basis to be a valid starting basis.")]
    InfeasibleOrigin,
    #[error("The starting point is not a strictly interior point of the slack form: {0}")]
    InvalidStartingPoint(&'static str),
}
