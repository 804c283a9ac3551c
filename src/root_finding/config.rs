//! Shared configuration for root-finding algorithms.
//!
//! Provides [`CommonCfg`] with the tolerance, iteration limit and
//! evaluator-failure policy used by all root-finding configs.
//!
//! [`CommonCfg`] fields
//! ├ `epsilon`         : tolerance on |f(x)| and on the step size
//! ├ `max_iter`        : iteration cap
//! └ `on_eval_failure` : what a failing evaluator turns into ([`OnEvalFailure`])
//!
//! [`CommonCfg::new`] initializes configuration with the defaults of the
//! given [`Algorithm`].

use super::algorithms::Algorithm;


pub const DEFAULT_EPSILON: f64 = 1e-12;


/// What a solver does when the evaluator returns an error.
///
/// - [`OnEvalFailure::NoResult`]  : abandon the run and report
///   [`NoResult::EvaluationFailed`](super::errors::NoResult::EvaluationFailed)
/// - [`OnEvalFailure::Propagate`] : hand the evaluator's own error back via
///   [`RootFindingError::Evaluation`](super::errors::RootFindingError::Evaluation)
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OnEvalFailure {
    NoResult,
    Propagate,
}


#[derive(Debug, Copy, Clone)]
pub struct CommonCfg {
    epsilon:         f64,
    max_iter:        usize,
    on_eval_failure: OnEvalFailure,
}

impl CommonCfg {
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            epsilon         : DEFAULT_EPSILON,
            max_iter        : algorithm.default_max_iter(),
            on_eval_failure : algorithm.default_eval_failure(),
        }
    }

    // getters
    pub fn epsilon(&self)         -> f64 { self.epsilon }
    pub fn max_iter(&self)        -> usize { self.max_iter }
    pub fn on_eval_failure(&self) -> OnEvalFailure { self.on_eval_failure }

    // setters (internal)
    pub(crate) fn with_epsilon        (&mut self, v: f64)           { self.epsilon         = v; }
    pub(crate) fn with_max_iter       (&mut self, v: usize)         { self.max_iter        = v; }
    pub(crate) fn with_on_eval_failure(&mut self, v: OnEvalFailure) { self.on_eval_failure = v; }
}

macro_rules! impl_common_cfg {
    ($cfg:ty) => {
        impl $cfg {
            pub fn set_epsilon(
                mut self, v: f64
            ) -> Result<Self, $crate::root_finding::errors::ConfigError> {
                if !v.is_finite() || v <= 0.0 {
                    return Err(
                        $crate::root_finding::errors::ConfigError::InvalidEpsilon { got: v }
                    );
                }
                self.common.with_epsilon(v);
                Ok(self)
            }
            pub fn set_max_iter(
                mut self, v: usize
            ) -> Result<Self, $crate::root_finding::errors::ConfigError> {
                if v == 0 {
                    return Err(
                        $crate::root_finding::errors::ConfigError::InvalidMaxIter { got: v }
                    );
                }
                self.common.with_max_iter(v);
                Ok(self)
            }
            #[must_use]
            pub fn set_on_eval_failure(
                mut self, v: $crate::root_finding::config::OnEvalFailure
            ) -> Self {
                self.common.with_on_eval_failure(v);
                self
            }

            #[inline] #[must_use] pub fn epsilon(&self)  -> f64   { self.common.epsilon() }
            #[inline] #[must_use] pub fn max_iter(&self) -> usize { self.common.max_iter() }
            #[inline] #[must_use]
            pub fn on_eval_failure(&self) -> $crate::root_finding::config::OnEvalFailure {
                self.common.on_eval_failure()
            }
        }
    };
}
pub(crate) use impl_common_cfg;
