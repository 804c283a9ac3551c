//! tests for the forward-difference derivative estimate
use approx::assert_abs_diff_eq;
use numroot::root_finding::difference_quotient::difference_quotient;
use numroot::root_finding::errors::{NoResult, NonFiniteEvaluation, RootFindingError};
use numroot::root_finding::evaluate::{Finite, Plain};

use super::functions::{dfunc, func};

#[test]
fn approximates_derivative() {
    let approx = difference_quotient(Plain(func), 1.0, 1e-6).unwrap();
    assert_abs_diff_eq!(approx, dfunc(1.0), epsilon = 1e-5);
}

#[test]
fn error_shrinks_linearly_with_step() {
    let err = |h: f64| (difference_quotient(Plain(func), 1.0, h).unwrap() - dfunc(1.0)).abs();

    let ratio = err(1e-2) / err(1e-3);
    assert!((8.0..12.0).contains(&ratio), "ratio = {ratio}");
}

#[test]
fn exact_on_coarse_step() {
    let sq = |x: f64| x * x;

    // (3.5^2 - 3^2) / 0.5 and (2.5^2 - 3^2) / -0.5
    assert_eq!(difference_quotient(Plain(sq), 3.0, 0.5).unwrap(), 6.5);
    assert_eq!(difference_quotient(Plain(sq), 3.0, -0.5).unwrap(), 5.5);
}

#[test]
fn zero_step_is_no_result() {
    let err = difference_quotient(Plain(func), 1.0, 0.0).unwrap_err();
    assert_eq!(err.no_result(), Some(NoResult::ZeroStep));
}

#[test]
fn failure_reports_offending_point() {
    let f = Finite(|x: f64| if x > 1.0 { f64::INFINITY } else { x });
    let err = difference_quotient(f, 1.0, 0.5).unwrap_err();
    assert!(matches!(err, RootFindingError::Evaluation { x, .. } if x == 1.5));

    let f = Finite(|x: f64| if x == 1.0 { f64::NAN } else { x });
    let err = difference_quotient(f, 1.0, 0.5).unwrap_err();
    assert!(matches!(
        err,
        RootFindingError::Evaluation { x, source: NonFiniteEvaluation { x: at, .. } } if x == 1.0 && at == 1.0
    ));
}
