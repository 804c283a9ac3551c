//! Root-finding algorithm definitions.
//!
//! Provides the [`Algorithm`] enum, which enumerates all supported methods,
//! along with the per-method defaults used when a config field is unset.

use super::config::OnEvalFailure;


/// Root-finding algorithm variants.
/// - [`Algorithm::Bracket`] contains bracket methods for root-finding
/// - [`Algorithm::Open`]    contains open methods for root-finding
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm {
    Bracket(BracketFamily),
    Open(OpenFamily),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BracketFamily {
    Bisection,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OpenFamily {
    Secant,
    Newton
}

impl Algorithm {
    /// Default iteration count if `max_iter` is unset in config.
    pub const fn default_max_iter(self) -> usize {
        match self {
            Algorithm::Bracket(BracketFamily::Bisection) => 100,
            Algorithm::Open(OpenFamily::Secant)          => 100,
            Algorithm::Open(OpenFamily::Newton)          => 50,
        }
    }

    /// Default handling of a failing evaluator.
    ///
    /// # Notes
    /// - Bisection gives up with [`OnEvalFailure::NoResult`].
    /// - Open methods hand the evaluator's error back to the caller.
    pub const fn default_eval_failure(self) -> OnEvalFailure {
        match self {
            Algorithm::Bracket(..) => OnEvalFailure::NoResult,
            Algorithm::Open(..)    => OnEvalFailure::Propagate,
        }
    }

    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Bracket(BracketFamily::Bisection) => "bisection",
            Algorithm::Open(OpenFamily::Secant)          => "secant",
            Algorithm::Open(OpenFamily::Newton)          => "newton",
        }
    }
}
impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}
