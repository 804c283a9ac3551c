//! Evaluator interface for real-valued functions of one real variable.
//!
//! ┌ [`Evaluate`]          : `f(x) -> Result<f64, Error>`, plus element-wise
//! │                         evaluation over a slice via [`Evaluate::eval_many`]
//! ├ closures              : any `Fn(f64) -> Result<f64, E>` is an evaluator
//! ├ [`Plain`]             : adapts an infallible `Fn(f64) -> f64`
//! ├ [`Finite`]            : adapts `Fn(f64) -> f64`, failing on NaN/inf
//! └ [`ForwardDifference`] : forward-difference derivative of an evaluator

use std::convert::Infallible;

use super::config::OnEvalFailure;
use super::errors::{NoResult, NonFiniteEvaluation, RootFindingError};


/// A real-valued function of one real variable that may fail.
pub trait Evaluate {
    type Error;

    fn eval(&self, x: f64) -> Result<f64, Self::Error>;

    /// Evaluates `xs` element-wise, stopping at the first failure.
    fn eval_many(&self, xs: &[f64]) -> Result<Vec<f64>, Self::Error> {
        xs.iter().map(|&x| self.eval(x)).collect()
    }
}

impl<F, E> Evaluate for F
where
    F: Fn(f64) -> Result<f64, E>,
{
    type Error = E;

    fn eval(&self, x: f64) -> Result<f64, E> {
        self(x)
    }
}


/// Infallible evaluator around a plain `Fn(f64) -> f64`.
#[derive(Debug, Copy, Clone)]
pub struct Plain<F>(pub F);

impl<F> Evaluate for Plain<F>
where
    F: Fn(f64) -> f64,
{
    type Error = Infallible;

    #[inline]
    fn eval(&self, x: f64) -> Result<f64, Infallible> {
        Ok((self.0)(x))
    }
}


/// Evaluator around `Fn(f64) -> f64` that rejects NaN and infinite values.
#[derive(Debug, Copy, Clone)]
pub struct Finite<F>(pub F);

impl<F> Evaluate for Finite<F>
where
    F: Fn(f64) -> f64,
{
    type Error = NonFiniteEvaluation;

    #[inline]
    fn eval(&self, x: f64) -> Result<f64, NonFiniteEvaluation> {
        let fx = (self.0)(x);
        if !fx.is_finite() {
            return Err(NonFiniteEvaluation { x, fx });
        }

        Ok(fx)
    }
}


/// Forward-difference derivative `(f(x + h) - f(x)) / h` of an evaluator.
///
/// The step is fixed at construction and is never zero, so every
/// evaluation is well defined. Usable wherever an analytic derivative is
/// expected, e.g. as `df` or `ddf` in [`newton`](super::newton::newton).
#[derive(Debug, Copy, Clone)]
pub struct ForwardDifference<F> {
    func: F,
    h:    f64,
}

impl<F> ForwardDifference<F> {
    /// # Errors
    /// - [`NoResult::ZeroStep`] if `h == 0`.
    pub fn new(func: F, h: f64) -> Result<Self, NoResult> {
        if h == 0.0 {
            return Err(NoResult::ZeroStep);
        }

        Ok(Self { func, h })
    }

    pub fn step(&self) -> f64 { self.h }
}

impl<F> Evaluate for ForwardDifference<F>
where
    F: Evaluate,
{
    type Error = F::Error;

    fn eval(&self, x: f64) -> Result<f64, F::Error> {
        forward_difference(&self.func, x, self.h)
    }
}


/// `(f(x + h) - f(x)) / h`, with `h` assumed non-zero.
#[inline]
pub(crate) fn forward_difference<F>(func: &F, x: f64, h: f64) -> Result<f64, F::Error>
where
    F: Evaluate + ?Sized,
{
    let fxh = func.eval(x + h)?;
    let fx  = func.eval(x)?;

    Ok((fxh - fx) / h)
}


/// Wraps an evaluator for a single solver run.
///
/// ┌ counts evaluations for the report
/// └ applies the [`OnEvalFailure`] policy to evaluator errors
pub(crate) struct Counted<'f, F: ?Sized> {
    func:   &'f F,
    policy: OnEvalFailure,
    evals:  usize,
}

impl<'f, F> Counted<'f, F>
where
    F: Evaluate + ?Sized,
{
    pub(crate) fn new(func: &'f F, policy: OnEvalFailure) -> Self {
        Self { func, policy, evals: 0 }
    }

    pub(crate) fn evals(&self) -> usize { self.evals }

    pub(crate) fn eval(&mut self, x: f64) -> Result<f64, RootFindingError<F::Error>> {
        self.evals += 1;
        let policy = self.policy;
        self.func.eval(x).map_err(|source| match policy {
            OnEvalFailure::NoResult  => NoResult::EvaluationFailed { x }.into(),
            OnEvalFailure::Propagate => RootFindingError::Evaluation { x, source },
        })
    }
}
