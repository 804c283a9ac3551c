//! Root-finding error types.
//!
//! ┌ [`ConfigError`]         : invalid solver configuration
//! │   ├ non-positive or non-finite `epsilon`
//! │   └ `max_iter` of zero
//! │
//! ├ [`NoResult`]            : expected algorithmic failure ("no result")
//! │   ├ bad bounds or missing sign change
//! │   ├ zero secant denominator, zero derivative, zero step
//! │   └ evaluator failure under [`OnEvalFailure::NoResult`]
//! │
//! ├ [`RootFindingError`]    : what a solver call returns on failure
//! │   ├ [`RootFindingError::NoResult`]
//! │   └ [`RootFindingError::Evaluation`] under [`OnEvalFailure::Propagate`]
//! │
//! └ [`NonFiniteEvaluation`] : raised by the [`Finite`] evaluator adapter
//!
//! [`OnEvalFailure::NoResult`]:  super::config::OnEvalFailure::NoResult
//! [`OnEvalFailure::Propagate`]: super::config::OnEvalFailure::Propagate
//! [`Finite`]:                   super::evaluate::Finite

use thiserror::Error;


/// Configuration errors, returned by the `set_*` builders.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("invalid `epsilon` tolerance: must be finite and > 0. got {got}")]
    InvalidEpsilon { got: f64 },

    #[error("invalid max_iter: must be >= 1. got max_iter={got}")]
    InvalidMaxIter { got: usize },
}


/// Reasons a computation produced no result.
///
/// ┌ Interval and sign problems (`InvalidBounds`, `NoSignChange`)
/// ├ Undefined update steps (`ZeroDenominator`, `ZeroDerivative`, `ZeroStep`)
/// └ Evaluator failure swallowed by policy (`EvaluationFailed`)
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum NoResult {
    #[error("invalid bounds: a must be less than b. got [{a}, {b}]")]
    InvalidBounds { a: f64, b: f64 },

    #[error("no sign change on [{a}, {b}]: f(a)={fa}, f(b)={fb}")]
    NoSignChange { a: f64, b: f64, fa: f64, fb: f64 },

    #[error("degenerate secant: f(a) == f(b) on [{a}, {b}]")]
    ZeroDenominator { a: f64, b: f64 },

    #[error("vanishing derivative at x={x}; newton step undefined")]
    ZeroDerivative { x: f64 },

    #[error("difference quotient step must be non-zero")]
    ZeroStep,

    #[error("function evaluation failed at x={x}")]
    EvaluationFailed { x: f64 },
}


/// Failure of a root-finding call with an evaluator whose error type is `E`.
#[derive(Debug, Error)]
pub enum RootFindingError<E> {
    #[error(transparent)]
    NoResult(#[from] NoResult),

    #[error("function evaluation failed at x={x}")]
    Evaluation {
        x: f64,
        #[source]
        source: E,
    },
}

impl<E> RootFindingError<E> {
    /// The "no result" reason, if this is not a propagated evaluator error.
    pub fn no_result(&self) -> Option<NoResult> {
        match self {
            RootFindingError::NoResult(reason) => Some(*reason),
            RootFindingError::Evaluation { .. } => None,
        }
    }

    pub fn is_no_result(&self) -> bool {
        self.no_result().is_some()
    }
}


/// Error raised by the [`Finite`](super::evaluate::Finite) adapter.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[error("function non-finite at x={x}, f(x)={fx}")]
pub struct NonFiniteEvaluation {
    pub x:  f64,
    pub fx: f64,
}
