//! # Fracbond Math
//!
//! Numerical utilities for the Fracbond pricing services.
//!
//! This crate provides:
//!
//! - **Solvers**: Bracketing bisection with optional one-shot bracket widening
//!   and a configurable policy for iteration exhaustion
//!
//! Everything is plain `f64` arithmetic; there is no linear algebra or
//! external numerical dependency.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]

pub mod error;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::solvers::{
        bisection, bisection_widening, Exhaustion, SolverConfig, SolverResult,
    };
}

pub use error::{MathError, MathResult};
