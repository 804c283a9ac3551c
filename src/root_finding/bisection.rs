use super::algorithms::{Algorithm, BracketFamily};
use super::config::{CommonCfg, impl_common_cfg};
use super::errors::{NoResult, RootFindingError};
use super::evaluate::{Counted, Evaluate};
use super::observe::{Event, Observer};
use super::report::{RootFindingReport, Stencil, TerminationReason, ToleranceSatisfied};
use super::signs::{opposite_sign, same_sign};

const ALGORITHM: Algorithm = Algorithm::Bracket(BracketFamily::Bisection);


/// Bisection Configuration
///
/// # Defaults
///
/// ┌ epsilon         - [`DEFAULT_EPSILON`](super::config::DEFAULT_EPSILON)
/// ├ max_iter        - [`Algorithm::default_max_iter`] (100)
/// └ on_eval_failure - [`OnEvalFailure::NoResult`](super::config::OnEvalFailure::NoResult)
///
/// # Validation:
/// └ Performed by the setters.
///    ├ `epsilon`  > 0 and finite
///    └ `max_iter` >= 1
#[derive(Debug, Copy, Clone)]
pub struct BisectionCfg {
    common: CommonCfg,
}
impl BisectionCfg {
    #[must_use]
    pub fn new() -> Self { Self::default() }
}
impl Default for BisectionCfg {
    fn default() -> Self {
        Self { common: CommonCfg::new(ALGORITHM) }
    }
}
impl_common_cfg!(BisectionCfg);


/// Calculates midpoint of [a, b]
#[inline]
fn calculate_bisection(a: f64, b: f64) -> f64 {
    0.5 * (a + b)
}


/// Finds a root of a function using the
/// [bisection method](https://en.wikipedia.org/wiki/Bisection_method).
///
/// This method assumes that the function `func` is continuous on the interval `[a, b]`
/// and that `func(a)` and `func(b)` have opposite signs, guaranteeing a root exists
/// within the interval.
///
/// # Arguments
///
/// ┌ `func` - The function whose root is to be found.
/// ├ `a`    - Lower bound of the search interval. Must be less than `b`.
/// ├ `b`    - Upper bound of the search interval.
/// └ `cfg`  - [`BisectionCfg`] (tolerance, iteration cap, evaluator-failure policy)
///
/// # Returns
///
/// [`RootFindingReport`] with
/// ├ `root`                : approximate root
/// ├ `f_root`              : `f(root)`; `None` after the iteration limit,
/// │                         where the final midpoint is not evaluated
/// ├ `iterations`          : iterations performed, 0 if an endpoint is already a root
/// ├ `evaluations`         : function evaluations performed
/// ├ `termination_reason`
/// │  ├ [`TerminationReason::Converged`]
/// │  └ [`TerminationReason::ExhaustedWithNotice`]
/// ├ `tolerance_satisfied`
/// │  ├ [`ToleranceSatisfied::AbsFxReached`]
/// │  ├ [`ToleranceSatisfied::SignChangeLost`]
/// │  └ [`ToleranceSatisfied::ToleranceNotReached`]
/// ├ `stencil`             : last bracket `[a, b]`
/// └ `algorithm_name`      : "bisection"
///
/// # Errors
///
/// ┌ [`NoResult::InvalidBounds`]    - `a >= b` (or either is NaN).
/// ├ [`NoResult::NoSignChange`]     - `f(a) * f(b) > 0`.
/// └ [`NoResult::EvaluationFailed`] - `func` failed; all progress is dropped.
///   With [`OnEvalFailure::Propagate`](super::config::OnEvalFailure::Propagate)
///   this is [`RootFindingError::Evaluation`] instead.
///
/// # Notes
/// ├ Sign tests use the product `f(a) * f(b)`; an underflow to zero passes the
/// │ bracket check and is left to the endpoint checks.
/// ├ Endpoints are checked against `epsilon` before any bisection step, `a` first.
/// └ Exhausting `max_iter` is not an error: the midpoint of the final bracket is
///   returned and the report carries a [`RootFindingReport::notice`]. This entry
///   point does not print it; pass [`PrintNotices`](super::observe::PrintNotices)
///   to [`bisection_observed`] to show it on stderr.
pub fn bisection<F>(
    func: F,
    a: f64,
    b: f64,
    cfg: BisectionCfg
) -> Result<RootFindingReport, RootFindingError<F::Error>>
where F: Evaluate {
    bisection_observed(func, a, b, cfg, ())
}


/// [`bisection`] reporting each midpoint, and the exhaustion notice, to `observer`.
pub fn bisection_observed<F, O>(
    func: F,
    mut a: f64,
    mut b: f64,
    cfg: BisectionCfg,
    mut observer: O,
) -> Result<RootFindingReport, RootFindingError<F::Error>>
where
    F: Evaluate,
    O: Observer,
{
    if a.is_nan() || b.is_nan() || a >= b {
        return Err(NoResult::InvalidBounds { a, b }.into());
    }

    let epsilon  = cfg.epsilon();
    let max_iter = cfg.max_iter();
    let mut eval = Counted::new(&func, cfg.on_eval_failure());

    let mut fa = eval.eval(a)?;
    let mut fb = eval.eval(b)?;

    if same_sign(fa, fb) {
        return Err(NoResult::NoSignChange { a, b, fa, fb }.into());
    }

    // immediate bounds are roots
    if fa.abs() < epsilon {
        return Ok(converged(a, fa, 0, eval.evals(), ToleranceSatisfied::AbsFxReached, a, b));
    }
    if fb.abs() < epsilon {
        return Ok(converged(b, fb, 0, eval.evals(), ToleranceSatisfied::AbsFxReached, a, b));
    }

    for iter in 1..=max_iter {
        let c  = calculate_bisection(a, b);
        let fc = eval.eval(c)?;
        observer.observe(&Event::Iteration { algorithm: ALGORITHM, iter, x: c, fx: fc });

        if fc.abs() < epsilon {
            return Ok(converged(c, fc, iter, eval.evals(), ToleranceSatisfied::AbsFxReached, a, b));
        }

        // shrink interval
        if opposite_sign(fa, fc) {
            b  = c;
            fb = fc;
        } else if opposite_sign(fc, fb) {
            a  = c;
            fa = fc;
        } else {
            // e.g. f(c) is NaN
            return Ok(converged(c, fc, iter, eval.evals(), ToleranceSatisfied::SignChangeLost, a, b));
        }
    }

    observer.observe(&Event::Notice { algorithm: ALGORITHM, max_iter });

    Ok(RootFindingReport {
        root                : calculate_bisection(a, b),
        f_root              : None,
        iterations          : max_iter,
        evaluations         : eval.evals(),
        termination_reason  : TerminationReason::ExhaustedWithNotice,
        tolerance_satisfied : ToleranceSatisfied::ToleranceNotReached,
        stencil             : Stencil::bracket(a, b),
        algorithm_name      : ALGORITHM.algorithm_name(),
    })
}


#[inline]
fn converged(
    root: f64,
    f_root: f64,
    iterations: usize,
    evaluations: usize,
    tolerance_satisfied: ToleranceSatisfied,
    a: f64,
    b: f64,
) -> RootFindingReport {
    RootFindingReport {
        root,
        f_root              : Some(f_root),
        iterations,
        evaluations,
        termination_reason  : TerminationReason::Converged,
        tolerance_satisfied,
        stencil             : Stencil::bracket(a, b),
        algorithm_name      : ALGORITHM.algorithm_name(),
    }
}
