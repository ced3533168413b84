//! Root-finding algorithms.
//!
//! Only bracketing methods live here. The pricing functions inverted by the
//! services are monotone in the unknown, so a valid bracket is enough to
//! guarantee a root:
//!
//! - [`bisection`]: halve a sign-changing interval until the residual is small
//! - [`bisection_widening`]: same, with a single retry on a wider upper bound
//!   when the initial interval does not bracket a root
//!
//! # Example: Implied Yield
//!
//! ```rust
//! use fracbond_math::solvers::{bisection, SolverConfig};
//!
//! // Bond: 5% annual coupon, 5 years, price 95
//! let price_fn = |y: f64| {
//!     let mut pv = 0.0;
//!     for t in 1..=5 {
//!         pv += 5.0 / (1.0 + y).powi(t);
//!     }
//!     pv += 100.0 / (1.0 + y).powi(5);
//!     pv - 95.0
//! };
//!
//! let result = bisection(price_fn, 0.0, 0.20, &SolverConfig::default()).unwrap();
//! assert!(result.root > 0.05); // discount bond yields more than its coupon
//! ```

mod bisection;

pub use bisection::{bisection, bisection_widening};

/// Default tolerance on the residual `|f(x)|`.
pub const DEFAULT_TOLERANCE: f64 = 1e-8;

/// Default maximum iterations for root-finding algorithms.
pub const DEFAULT_MAX_ITERATIONS: u32 = 200;

/// What a solver does when it runs out of iterations before the residual
/// drops below tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Exhaustion {
    /// Return the final midpoint, marked as not converged.
    #[default]
    BestEffort,
    /// Return [`MathError::ConvergenceFailed`](crate::MathError::ConvergenceFailed).
    Strict,
}

/// Configuration for root-finding algorithms.
#[derive(Debug, Clone, Copy)]
pub struct SolverConfig {
    /// Tolerance on the absolute residual.
    pub tolerance: f64,
    /// Maximum number of iterations.
    pub max_iterations: u32,
    /// Behaviour once `max_iterations` is reached.
    pub exhaustion: Exhaustion,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            exhaustion: Exhaustion::BestEffort,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration with the best-effort exhaustion policy.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
            exhaustion: Exhaustion::BestEffort,
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the exhaustion policy.
    #[must_use]
    pub fn with_exhaustion(mut self, exhaustion: Exhaustion) -> Self {
        self.exhaustion = exhaustion;
        self
    }
}

/// Result of a root-finding iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverResult {
    /// The root found.
    pub root: f64,
    /// Number of iterations used.
    pub iterations: u32,
    /// Final residual (function value at root).
    pub residual: f64,
    /// False when the iteration budget ran out before `|residual| < tolerance`.
    pub converged: bool,
}
