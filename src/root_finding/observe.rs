//! Solver observation.
//!
//! Observers let callers watch a solver run without changing its API:
//! logging iterates, collecting a trace, or surfacing the bisection
//! advisory notice to a user.
//!
//! Any `FnMut(&Event)` closure is an [`Observer`]; `()` ignores every event.

use super::algorithms::Algorithm;
use super::report::exhaustion_notice;


/// Event emitted by a solver.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Event {
    /// A new iterate was evaluated.
    Iteration {
        algorithm: Algorithm,
        /// 1-based iteration counter.
        iter: usize,
        x: f64,
        fx: f64,
    },
    /// The iteration budget ran out; the result may be imprecise.
    Notice {
        algorithm: Algorithm,
        max_iter: usize,
    },
}

impl Event {
    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        match self {
            Event::Iteration { algorithm, .. } | Event::Notice { algorithm, .. } => *algorithm,
        }
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Event::Iteration { algorithm, iter, x, fx } => {
                write!(f, "{algorithm} iter {iter}: x={x}, f(x)={fx}")
            }
            Event::Notice { algorithm, max_iter } => {
                write!(f, "{algorithm}: {}", exhaustion_notice(*max_iter))
            }
        }
    }
}


/// Receives solver events.
pub trait Observer {
    fn observe(&mut self, event: &Event);
}

/// Blanket implementation for observer closures.
impl<F> Observer for F
where
    F: FnMut(&Event),
{
    fn observe(&mut self, event: &Event) {
        self(event)
    }
}

/// A no-op observer.
impl Observer for () {
    fn observe(&mut self, _event: &Event) {}
}


/// Writes [`Event::Notice`] events to stderr and ignores everything else.
#[derive(Debug, Default, Copy, Clone)]
pub struct PrintNotices;

impl Observer for PrintNotices {
    fn observe(&mut self, event: &Event) {
        if let Event::Notice { .. } = event {
            eprintln!("{event}");
        }
    }
}
