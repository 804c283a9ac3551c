//! tests for the secant root-finding algorithm
use approx::assert_abs_diff_eq;
use numroot::root_finding::config::OnEvalFailure;
use numroot::root_finding::errors::{ConfigError, NoResult, NonFiniteEvaluation, RootFindingError};
use numroot::root_finding::evaluate::{Finite, Plain};
use numroot::root_finding::observe::Event;
use numroot::root_finding::report::{Stencil, TerminationReason, ToleranceSatisfied};
use numroot::root_finding::secant::{secant, secant_observed, SecantCfg};

use super::functions::{func, ROOT};

type TestResult = Result<(), ConfigError>;

#[test]
fn finds_exp_quadratic_root() -> TestResult {
    let cfg = SecantCfg::new()
        .set_epsilon(1e-6)?
        .set_max_iter(100)?;

    let res = secant(Plain(func), 0.5, 1.0, cfg).unwrap();

    assert_eq!(res.termination_reason, TerminationReason::Converged);
    assert_abs_diff_eq!(res.root, ROOT, epsilon = 1e-5);
    assert!(res.iterations > 0 && res.iterations < 100);
    assert_eq!(res.evaluations, res.iterations + 2);
    assert_eq!(res.algorithm_name, "secant");
    Ok(())
}

#[test]
fn agrees_with_bisection_interval() -> TestResult {
    let cfg = SecantCfg::new().set_epsilon(1e-12)?;
    let res = secant(Plain(func), 0.5, 1.0, cfg).unwrap();

    assert!(res.is_converged());
    assert_abs_diff_eq!(res.root, ROOT, epsilon = 1e-10);
    Ok(())
}

#[test]
fn zero_product_is_rejected() {
    // f(0) = 0, so f(0) * f(1) == 0
    let err = secant(Plain(func), 0.0, 1.0, SecantCfg::new()).unwrap_err();

    assert!(matches!(
        err.no_result(),
        Some(NoResult::NoSignChange { a, b, fa, .. }) if a == 0.0 && b == 1.0 && fa == 0.0
    ));
}

#[test]
fn same_sign_is_rejected() {
    let f   = Plain(|x: f64| x * x + 1.0);
    let err = secant(f, -1.0, 2.0, SecantCfg::new()).unwrap_err();

    assert!(matches!(err.no_result(), Some(NoResult::NoSignChange { .. })));
}

#[test]
fn underflowed_product_is_rejected() {
    // 1e-200 * -1e-200 rounds to -0, which is >= 0
    let f   = Plain(|x: f64| if x <= 0.0 { 1e-200 } else { -1e-200 });
    let cfg = SecantCfg::new().set_epsilon(1e-6).unwrap();
    let err = secant(f, 0.0, 1.0, cfg).unwrap_err();

    assert!(matches!(err.no_result(), Some(NoResult::NoSignChange { .. })));
}

#[test]
fn nan_start_value_is_not_rejected() -> TestResult {
    // a NaN product rules out nothing, the NaN then spreads to every iterate
    let f   = Plain(|x: f64| if x == 0.0 { f64::NAN } else { x - 0.5 });
    let cfg = SecantCfg::new().set_max_iter(3)?;
    let res = secant(f, 0.0, 1.0, cfg).unwrap();

    assert_eq!(res.termination_reason, TerminationReason::ExhaustedSilent);
    assert_eq!(res.iterations, 3);
    assert!(res.root.is_nan());
    Ok(())
}

#[test]
fn finds_linear_root_in_one_step() -> TestResult {
    let f   = Plain(|x: f64| x);
    let cfg = SecantCfg::new().set_epsilon(1e-9)?;
    let res = secant(f, -1.0, 2.0, cfg).unwrap();

    assert_eq!(res.root_and_iterations(), (0.0, 1));
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::AbsFxReached);
    assert_eq!(res.stencil, Stencil::doubleton(-1.0, 2.0));
    assert_eq!(res.stencil.stencil(), &[-1.0, 2.0]);
    Ok(())
}

#[test]
fn step_tolerance_stops_iteration() -> TestResult {
    // residual is ~1e9 times the root error, so the step test fires first
    let f   = Plain(|x: f64| 1e9 * (0.5 - x * x));
    let cfg = SecantCfg::new().set_epsilon(1e-3)?;
    let res = secant(f, 1.0, 0.0, cfg).unwrap();

    assert_eq!(res.termination_reason, TerminationReason::Converged);
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::StepSizeReached);
    assert!(res.f_root.unwrap().abs() >= 1e-3);
    assert_abs_diff_eq!(res.root, 0.5_f64.sqrt(), epsilon = 1e-3);
    Ok(())
}

#[test]
fn exhausts_silently() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let cfg = SecantCfg::new()
        .set_epsilon(1e-10)?
        .set_max_iter(3)?;

    let res = secant(Plain(f), 0.0, 2.0, cfg).unwrap();

    assert_eq!(res.termination_reason, TerminationReason::ExhaustedSilent);
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::ToleranceNotReached);
    assert_eq!(res.iterations, 3);
    assert_abs_diff_eq!(res.root, 1.4, epsilon = 1e-12);
    assert_abs_diff_eq!(res.f_root.unwrap(), f(1.4), epsilon = 1e-12);
    assert_eq!(res.notice(), None);
    Ok(())
}

#[test]
fn finds_sqrt_2() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let cfg = SecantCfg::new().set_epsilon(1e-10)?;
    let res = secant(Plain(f), 0.0, 2.0, cfg).unwrap();

    assert!(res.is_converged());
    assert_abs_diff_eq!(res.root, 2.0_f64.sqrt(), epsilon = 1e-9);
    Ok(())
}

#[test]
fn evaluator_failure_propagates() {
    // first secant point is c = 0.5
    let f   = Finite(|x: f64| if x == 0.5 { f64::INFINITY } else { x - 0.5 });
    let err = secant(f, 0.0, 1.0, SecantCfg::new()).unwrap_err();

    assert!(matches!(
        err,
        RootFindingError::Evaluation { x, source: NonFiniteEvaluation { fx, .. } }
        if x == 0.5 && fx == f64::INFINITY
    ));
}

#[test]
fn evaluator_failure_as_no_result_when_configured() {
    let f   = Finite(|x: f64| if x == 0.5 { f64::INFINITY } else { x - 0.5 });
    let cfg = SecantCfg::new().set_on_eval_failure(OnEvalFailure::NoResult);
    let err = secant(f, 0.0, 1.0, cfg).unwrap_err();

    assert_eq!(err.no_result(), Some(NoResult::EvaluationFailed { x: 0.5 }));
}

#[test]
fn observer_sees_each_iterate() -> TestResult {
    let cfg = SecantCfg::new().set_epsilon(1e-12)?;

    let mut iters = Vec::new();
    let res = secant_observed(Plain(func), 0.5, 1.0, cfg, |e: &Event| {
        if let Event::Iteration { iter, x, fx, .. } = *e {
            iters.push((iter, x, fx));
        }
    })
    .unwrap();

    assert_eq!(iters.len(), res.iterations);
    let (_, last_x, last_fx) = iters[iters.len() - 1];
    assert_eq!(last_x, res.root);
    assert_eq!(Some(last_fx), res.f_root);
    Ok(())
}

#[test]
fn repeated_calls_are_identical() {
    let first  = secant(Plain(func), 0.5, 1.0, SecantCfg::new()).unwrap();
    let second = secant(Plain(func), 0.5, 1.0, SecantCfg::new()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn default_config() {
    let cfg = SecantCfg::default();

    assert_eq!(cfg.max_iter(), 100);
    assert_eq!(cfg.on_eval_failure(), OnEvalFailure::Propagate);
}
