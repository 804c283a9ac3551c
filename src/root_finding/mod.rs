// common helpers
pub mod algorithms;
pub mod config;
pub mod errors;
pub mod evaluate;
pub mod observe;
pub mod report;
pub(crate) mod signs;

// algorithms
pub mod difference_quotient;
pub mod bisection;
pub mod secant;
pub mod newton;
