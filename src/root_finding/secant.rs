use super::algorithms::{Algorithm, OpenFamily};
use super::config::{CommonCfg, impl_common_cfg};
use super::errors::{NoResult, RootFindingError};
use super::evaluate::{Counted, Evaluate};
use super::observe::{Event, Observer};
use super::report::{RootFindingReport, Stencil, TerminationReason, ToleranceSatisfied};
use super::signs::{opposite_sign, sign_change_ruled_out};

const ALGORITHM: Algorithm = Algorithm::Open(OpenFamily::Secant);


/// Secant configuration
///
/// # Fields
/// - `common` : [`CommonCfg`] with tolerance, `max_iter` and evaluator-failure policy.
///
/// # Construction
/// - Use [`SecantCfg::new`] then optional setters.
///
/// # Defaults
/// - `max_iter` from [`Algorithm::default_max_iter`] for [`OpenFamily::Secant`]
/// - evaluator errors are propagated to the caller
#[derive(Debug, Copy, Clone)]
pub struct SecantCfg {
    common: CommonCfg,
}
impl SecantCfg {
    #[must_use]
    pub fn new() -> Self { Self::default() }
}
impl Default for SecantCfg {
    fn default() -> Self {
        Self { common: CommonCfg::new(ALGORITHM) }
    }
}
impl_common_cfg!(SecantCfg);


/// Calculates the secant x-intercept for the line
/// connecting `(a, fa)` and `(b, fb)`
///
/// # Returns
/// - `Ok(x_secant)` : `b - fb * (b - a) / (fb - fa)`
/// - `Err(ZeroDenominator)` if `fb == fa` exactly
#[inline]
pub(crate) fn calculate_secant_x_intercept(
    (a, fa): (f64, f64),
    (b, fb): (f64, f64),
) -> Result<f64, NoResult> {
    if fb == fa {
        return Err(NoResult::ZeroDenominator { a, b });
    }

    Ok(b - fb * (b - a) / (fb - fa))
}


/// Finds a root of a function using the
/// [secant method](https://en.wikipedia.org/wiki/Secant_method).
///
/// The two starting points must straddle a sign change. Each step replaces
/// the endpoint whose function value shares the sign of the new iterate, so
/// the pair keeps bracketing the root.
///
/// # Arguments
/// - `func` : The function whose root is to be found
/// - `a`    : First initial point
/// - `b`    : Second initial point
/// - `cfg`  : [`SecantCfg`] (tolerance, `max_iter`, evaluator-failure policy)
///
/// # Returns
/// [`RootFindingReport`] with
/// - `root`                : approximate root (last iterate `c`)
/// - `f_root`              : `f(c)`
/// - `iterations`          : number of iterations performed
/// - `evaluations`         : total function evaluations
/// - `termination_reason`  : [`TerminationReason::Converged`] or
///                           [`TerminationReason::ExhaustedSilent`]
/// - `tolerance_satisfied` : which tolerance triggered
/// - `stencil`             : the pair `{a, b}` the last step was formed from
/// - `algorithm_name`      : "secant"
///
/// # Errors
/// - [`NoResult::NoSignChange`]    : `f(a) * f(b) >= 0`, a zero (or underflowed) product included
/// - [`NoResult::ZeroDenominator`] : `f(a) == f(b)` at some step
/// - [`RootFindingError::Evaluation`] : `func` failed (default policy)
///
/// # Behavior
/// - Update:
///     - c = b - f(b) * (b - a) / (f(b) - f(a))
/// - Tolerances, first match wins:
///     - |f(c)| < epsilon, [`ToleranceSatisfied::AbsFxReached`]
///     - |c - b| < epsilon, [`ToleranceSatisfied::StepSizeReached`]
/// - Exhaustion:
///     - the last `c` is returned with `max_iter`, no notice
pub fn secant<F>(
    func: F,
    a: f64,
    b: f64,
    cfg: SecantCfg
) -> Result<RootFindingReport, RootFindingError<F::Error>>
where F: Evaluate {
    secant_observed(func, a, b, cfg, ())
}


/// [`secant`] reporting each iterate to `observer`.
pub fn secant_observed<F, O>(
    func: F,
    mut a: f64,
    mut b: f64,
    cfg: SecantCfg,
    mut observer: O,
) -> Result<RootFindingReport, RootFindingError<F::Error>>
where
    F: Evaluate,
    O: Observer,
{
    let epsilon  = cfg.epsilon();
    let max_iter = cfg.max_iter();
    let mut eval = Counted::new(&func, cfg.on_eval_failure());

    let mut fa = eval.eval(a)?;
    let mut fb = eval.eval(b)?;

    // a NaN product is let through
    if sign_change_ruled_out(fa, fb) {
        return Err(NoResult::NoSignChange { a, b, fa, fb }.into());
    }

    // max_iter >= 1, so these are always overwritten
    let mut c  = b;
    let mut fc = fb;
    let mut stencil = Stencil::doubleton(a, b);

    for iter in 1..=max_iter {
        c  = calculate_secant_x_intercept((a, fa), (b, fb))?;
        fc = eval.eval(c)?;
        stencil = Stencil::doubleton(a, b);
        observer.observe(&Event::Iteration { algorithm: ALGORITHM, iter, x: c, fx: fc });

        // check |f(x)| tolerance, then step tolerance
        let tolerance = if fc.abs() < epsilon {
            Some(ToleranceSatisfied::AbsFxReached)
        } else if (c - b).abs() < epsilon {
            Some(ToleranceSatisfied::StepSizeReached)
        } else {
            None
        };

        if let Some(tolerance_satisfied) = tolerance {
            return Ok(RootFindingReport {
                root                : c,
                f_root              : Some(fc),
                iterations          : iter,
                evaluations         : eval.evals(),
                termination_reason  : TerminationReason::Converged,
                tolerance_satisfied,
                stencil,
                algorithm_name      : ALGORITHM.algorithm_name(),
            });
        }

        if opposite_sign(fa, fc) {
            b  = c;
            fb = fc;
        } else {
            a  = c;
            fa = fc;
        }
    }

    Ok(RootFindingReport {
        root                : c,
        f_root              : Some(fc),
        iterations          : max_iter,
        evaluations         : eval.evals(),
        termination_reason  : TerminationReason::ExhaustedSilent,
        tolerance_satisfied : ToleranceSatisfied::ToleranceNotReached,
        stencil,
        algorithm_name      : ALGORITHM.algorithm_name(),
    })
}
