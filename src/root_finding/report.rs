//! Outcome of a solver run: [`RootFindingReport`] and the enums it carries.

/// Why a solver stopped.
///
/// - [`TerminationReason::Converged`]           : a tolerance test passed
/// - [`TerminationReason::ExhaustedWithNotice`] : iteration budget used up,
///   the solver flags the result as possibly imprecise (bisection)
/// - [`TerminationReason::ExhaustedSilent`]     : iteration budget used up,
///   the last iterate is returned as-is (secant, newton)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    Converged,
    ExhaustedWithNotice,
    ExhaustedSilent,
}


/// Stopping test that ended the run.
/// - [`ToleranceSatisfied::AbsFxReached`]
///     - every solver
///     - |f(x)| < epsilon
/// - [`ToleranceSatisfied::StepSizeReached`]
///     - [`Algorithm::Open`](super::algorithms::Algorithm::Open)
///     - |x_n - x_{n - 1}| < epsilon
/// - [`ToleranceSatisfied::SignChangeLost`]
///     - bisection only
///     - neither half of the interval brackets a sign change
/// - [`ToleranceSatisfied::ToleranceNotReached`]
///     - every solver
///     - the iteration budget ran out first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToleranceSatisfied {
    AbsFxReached,
    StepSizeReached,
    SignChangeLost,
    ToleranceNotReached
}


/// Points the final update was computed from.
/// - [`Stencil::Bracket`] : bisection, the last `[a, b]`
/// - [`Stencil::Open`]    : secant pair or newton's previous iterate
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Stencil {
    Bracket { bounds: [f64; 2] },
    Open    { x: [f64; 2], len: usize },
}
impl Stencil {
    pub fn stencil(&self) -> &[f64] {
        match self {
            Stencil::Bracket { bounds } => &bounds[..],
            Stencil::Open { x, len }    => &x[..*len],
        }
    }
    pub fn bracket(a: f64, b: f64) -> Self {
        Stencil::Bracket { bounds: [a, b] }
    }
    pub fn singleton(x: f64) -> Self {
        Stencil::Open { x: [x, 0.0], len: 1 }
    }
    pub fn doubleton(x1: f64, x2: f64) -> Self {
        Stencil::Open { x: [x1, x2], len: 2 }
    }
}


/// Returned by every solver on success.
///
/// - `root`                : approximate root
/// - `f_root`              : function value at `root`, `None` if the solver
///                           stopped without evaluating it
/// - `iterations`          : iterations performed
/// - `evaluations`         : total evaluator calls (f, f' and f'')
/// - `termination_reason`  : see [`TerminationReason`]
/// - `tolerance_satisfied` : see [`ToleranceSatisfied`]
/// - `stencil`             : see [`Stencil`]
/// - `algorithm_name`      : `"bisection"`, `"secant"` or `"newton"`
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RootFindingReport {
    pub root                : f64,
    pub f_root              : Option<f64>,
    pub iterations          : usize,
    pub evaluations         : usize,
    pub termination_reason  : TerminationReason,
    pub tolerance_satisfied : ToleranceSatisfied,
    pub stencil             : Stencil,
    pub algorithm_name      : &'static str,
}

impl RootFindingReport {
    /// `(root, iterations)` pair.
    pub fn root_and_iterations(&self) -> (f64, usize) {
        (self.root, self.iterations)
    }

    pub fn is_converged(&self) -> bool {
        self.termination_reason == TerminationReason::Converged
    }

    /// Advisory text for runs that ended with
    /// [`TerminationReason::ExhaustedWithNotice`].
    pub fn notice(&self) -> Option<String> {
        match self.termination_reason {
            TerminationReason::ExhaustedWithNotice => Some(exhaustion_notice(self.iterations)),
            _                                      => None,
        }
    }
}


pub(crate) fn exhaustion_notice(max_iter: usize) -> String {
    format!("maximum number of iterations ({max_iter}) reached; the result may not be exact")
}
