//! Scalar root finding.
//!
//! ┌ [`root_finding::bisection`]           : interval halving on a sign change
//! ├ [`root_finding::secant`]              : two-point secant iteration
//! ├ [`root_finding::newton`]              : Newton-Raphson from a Fourier-condition start
//! └ [`root_finding::difference_quotient`] : forward-difference derivative estimate
//!
//! Functions are supplied through [`root_finding::evaluate::Evaluate`];
//! wrap plain `Fn(f64) -> f64` closures in [`root_finding::evaluate::Plain`].
//!
//! ```
//! use numroot::root_finding::bisection::{bisection, BisectionCfg};
//! use numroot::root_finding::evaluate::Plain;
//!
//! let f   = |x: f64| x * x - 2.0;
//! let cfg = BisectionCfg::new().set_epsilon(1e-10).unwrap();
//! let res = bisection(Plain(f), 0.0, 2.0, cfg).unwrap();
//!
//! assert!((res.root - 2.0_f64.sqrt()).abs() < 1e-9);
//! ```

pub mod root_finding;
