//! Forward-difference derivative estimate.

use super::errors::{NoResult, RootFindingError};
use super::evaluate::Evaluate;


/// Estimates `f'(x)` with the forward difference `(f(x + h) - f(x)) / h`.
///
/// The truncation error is O(h) for twice-differentiable `f`; very small
/// `|h|` trades that for cancellation error in `f(x + h) - f(x)`.
///
/// # Errors
/// - [`NoResult::ZeroStep`] if `h == 0` (division undefined).
/// - [`RootFindingError::Evaluation`] if `func` fails at `x + h` or `x`,
///   in that order.
///
/// See [`ForwardDifference`](super::evaluate::ForwardDifference) for the
/// same estimate packaged as an evaluator.
pub fn difference_quotient<F>(
    func: F,
    x: f64,
    h: f64,
) -> Result<f64, RootFindingError<F::Error>>
where F: Evaluate {
    if h == 0.0 {
        return Err(NoResult::ZeroStep.into());
    }

    let xh  = x + h;
    let fxh = func.eval(xh).map_err(|source| RootFindingError::Evaluation { x: xh, source })?;
    let fx  = func.eval(x).map_err(|source| RootFindingError::Evaluation { x, source })?;

    Ok((fxh - fx) / h)
}
