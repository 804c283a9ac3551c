//! Newton-Raphson method with a Fourier-condition starting point

use super::algorithms::{Algorithm, OpenFamily};
use super::config::{CommonCfg, OnEvalFailure, impl_common_cfg};
use super::errors::{NoResult, RootFindingError};
use super::evaluate::{Counted, Evaluate};
use super::observe::{Event, Observer};
use super::report::{RootFindingReport, Stencil, TerminationReason, ToleranceSatisfied};
use super::signs::same_sign;

const ALGORITHM: Algorithm = Algorithm::Open(OpenFamily::Newton);


/// Newton configuration.
///
/// # Fields
/// - `common` : [`CommonCfg`] with tolerance, `max_iter` and evaluator-failure policy.
///
/// # Defaults
/// - `max_iter` from [`Algorithm::default_max_iter`] for [`OpenFamily::Newton`]
/// - evaluator errors are propagated to the caller
#[derive(Debug, Copy, Clone)]
pub struct NewtonCfg {
    common: CommonCfg,
}
impl NewtonCfg {
    #[must_use]
    pub fn new() -> Self { Self::default() }
}
impl Default for NewtonCfg {
    fn default() -> Self {
        Self { common: CommonCfg::new(ALGORITHM) }
    }
}
impl_common_cfg!(NewtonCfg);


/// Which point of `[a, b]` Newton starts from.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StartSide {
    /// `f(a) * f''(a) > 0`
    Left,
    /// `f(b) * f''(b) > 0`
    Right,
    /// neither endpoint satisfies the condition
    Midpoint,
}

/// Starting point chosen by [`starting_point`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StartingPoint {
    pub x:    f64,
    pub side: StartSide,
}


/// Picks the starting point via the Fourier condition: start from an
/// endpoint where `f` and `f''` share a sign, falling back to the midpoint.
///
/// Endpoints are tried in order `a`, `b`. Evaluator errors are propagated.
pub fn starting_point<F, DD>(
    func: F,
    ddfunc: DD,
    a: f64,
    b: f64,
) -> Result<StartingPoint, RootFindingError<F::Error>>
where
    F: Evaluate,
    DD: Evaluate<Error = F::Error>,
{
    let mut f   = Counted::new(&func, OnEvalFailure::Propagate);
    let mut ddf = Counted::new(&ddfunc, OnEvalFailure::Propagate);
    select_start(&mut f, &mut ddf, a, b).map(|(start, _)| start)
}


/// Returns the start and, when it is an endpoint, the already computed `f(x0)`.
fn select_start<F, DD>(
    f: &mut Counted<'_, F>,
    ddf: &mut Counted<'_, DD>,
    a: f64,
    b: f64,
) -> Result<(StartingPoint, Option<f64>), RootFindingError<F::Error>>
where
    F: Evaluate,
    DD: Evaluate<Error = F::Error>,
{
    let fa = f.eval(a)?;
    if same_sign(fa, ddf.eval(a)?) {
        return Ok((StartingPoint { x: a, side: StartSide::Left }, Some(fa)));
    }

    let fb = f.eval(b)?;
    if same_sign(fb, ddf.eval(b)?) {
        return Ok((StartingPoint { x: b, side: StartSide::Right }, Some(fb)));
    }

    Ok((StartingPoint { x: 0.5 * (a + b), side: StartSide::Midpoint }, None))
}


/// Finds a root of `func` using the
/// [Newton–Raphson method](https://en.wikipedia.org/wiki/Newton_method).
///
/// `[a, b]` is only used to choose the starting point (see [`starting_point`]);
/// it is not maintained as a bracket.
///
/// # Arguments
/// - `func`   : function whose root is sought
/// - `dfunc`  : first derivative
/// - `ddfunc` : second derivative, only used to choose the start
/// - `a`, `b` : interval the start is chosen from
/// - `cfg`    : [`NewtonCfg`] (tolerance, `max_iter`, evaluator-failure policy)
///
/// Derivatives can be estimated with
/// [`ForwardDifference`](super::evaluate::ForwardDifference) when no analytic
/// form is at hand.
///
/// # Returns
/// [`RootFindingReport`] with:
/// - `root`                : approximate root
/// - `f_root`              : `f(root)`, `None` when the step test stopped the run
///                           before `f(root)` was evaluated
/// - `iterations`          : number of iterations performed
/// - `evaluations`         : total evaluations (f, f' and f'')
/// - `termination_reason`  : [`TerminationReason::Converged`] or
///                           [`TerminationReason::ExhaustedSilent`]
/// - `tolerance_satisfied` : which tolerance triggered
/// - `stencil`             : previous iterate used to form the step
/// - `algorithm_name`      : "newton"
///
/// # Errors
/// - [`NoResult::ZeroDerivative`]     : `f'(x) == 0` at some iterate
/// - [`RootFindingError::Evaluation`] : any evaluator failed (default policy)
///
/// # Behavior
/// - Step: x_{k+1} = x_k - f(x_k) / f'(x_k)
/// - Tolerances, first match wins:
///     - |x_{k+1} - x_k| < epsilon, [`ToleranceSatisfied::StepSizeReached`]
///     - |f(x_{k+1})| < epsilon,    [`ToleranceSatisfied::AbsFxReached`]
/// - Exhaustion: the last iterate is returned with `max_iter`, no notice.
///
/// # Notes
/// - Only an exactly-zero derivative is rejected; a tiny one yields a huge
///   (possibly non-finite) step that is taken as-is.
/// - Convergence is *local only*. For guaranteed convergence, use
///   [`bisection`](super::bisection::bisection).
pub fn newton<F, D, DD>(
    func: F,
    dfunc: D,
    ddfunc: DD,
    a: f64,
    b: f64,
    cfg: NewtonCfg,
) -> Result<RootFindingReport, RootFindingError<F::Error>>
where
    F: Evaluate,
    D: Evaluate<Error = F::Error>,
    DD: Evaluate<Error = F::Error>,
{
    newton_observed(func, dfunc, ddfunc, a, b, cfg, ())
}


/// [`newton`] reporting each iterate it steps from to `observer`.
pub fn newton_observed<F, D, DD, O>(
    func: F,
    dfunc: D,
    ddfunc: DD,
    a: f64,
    b: f64,
    cfg: NewtonCfg,
    mut observer: O,
) -> Result<RootFindingReport, RootFindingError<F::Error>>
where
    F: Evaluate,
    D: Evaluate<Error = F::Error>,
    DD: Evaluate<Error = F::Error>,
    O: Observer,
{
    let epsilon  = cfg.epsilon();
    let max_iter = cfg.max_iter();
    let policy   = cfg.on_eval_failure();

    let mut f   = Counted::new(&func, policy);
    let mut df  = Counted::new(&dfunc, policy);
    let mut ddf = Counted::new(&ddfunc, policy);

    let (start, mut cached_fx) = select_start(&mut f, &mut ddf, a, b)?;
    let mut x = start.x;
    let mut prev_x = x;

    for iter in 1..=max_iter {
        let dfx = df.eval(x)?;
        if dfx == 0.0 {
            return Err(NoResult::ZeroDerivative { x }.into());
        }

        let fx = match cached_fx.take() {
            Some(v) => v,
            None    => f.eval(x)?,
        };
        observer.observe(&Event::Iteration { algorithm: ALGORITHM, iter, x, fx });

        let x_next = x - fx / dfx;

        // check step tolerance
        if (x_next - x).abs() < epsilon {
            return Ok(RootFindingReport {
                root                : x_next,
                f_root              : None,
                iterations          : iter,
                evaluations         : f.evals() + df.evals() + ddf.evals(),
                termination_reason  : TerminationReason::Converged,
                tolerance_satisfied : ToleranceSatisfied::StepSizeReached,
                stencil             : Stencil::singleton(x),
                algorithm_name      : ALGORITHM.algorithm_name(),
            });
        }

        // check |f(x)| tolerance
        let fx_next = f.eval(x_next)?;
        if fx_next.abs() < epsilon {
            return Ok(RootFindingReport {
                root                : x_next,
                f_root              : Some(fx_next),
                iterations          : iter,
                evaluations         : f.evals() + df.evals() + ddf.evals(),
                termination_reason  : TerminationReason::Converged,
                tolerance_satisfied : ToleranceSatisfied::AbsFxReached,
                stencil             : Stencil::singleton(x),
                algorithm_name      : ALGORITHM.algorithm_name(),
            });
        }

        prev_x    = x;
        x         = x_next;
        cached_fx = Some(fx_next);
    }

    Ok(RootFindingReport {
        root                : x,
        f_root              : cached_fx,
        iterations          : max_iter,
        evaluations         : f.evals() + df.evals() + ddf.evals(),
        termination_reason  : TerminationReason::ExhaustedSilent,
        tolerance_satisfied : ToleranceSatisfied::ToleranceNotReached,
        stencil             : Stencil::singleton(prev_x),
        algorithm_name      : ALGORITHM.algorithm_name(),
    })
}
