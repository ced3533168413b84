//! Bisection root-finding algorithm.

use crate::error::{MathError, MathResult};
use crate::solvers::{Exhaustion, SolverConfig, SolverResult};

/// Bisection root-finding algorithm.
///
/// Repeatedly halves `[a, b]`, keeping the half whose endpoints still differ
/// in sign. Stops as soon as `|f(mid)| < config.tolerance`.
///
/// Requires: finite `a` and `b` with `f(a) * f(b) <= 0`.
///
/// When `config.max_iterations` is reached without meeting the tolerance the
/// outcome depends on `config.exhaustion`: the final midpoint is returned with
/// `converged == false`, or [`MathError::ConvergenceFailed`] is raised.
///
/// # Example
///
/// ```rust
/// use fracbond_math::solvers::{bisection, SolverConfig};
///
/// // Find root of x^2 - 2 (i.e., sqrt(2))
/// let f = |x: f64| x * x - 2.0;
///
/// let result = bisection(f, 1.0, 2.0, &SolverConfig::default()).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-8);
/// ```
pub fn bisection<F>(f: F, a: f64, b: f64, config: &SolverConfig) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    check_bounds(&[a, b])?;

    let fa = f(a);
    let fb = f(b);

    if fa * fb > 0.0 {
        return Err(MathError::InvalidBracket { a, b, fa, fb });
    }

    iterate(&f, a, fa, b, config)
}

/// Bisection with a single bracket-widening retry.
///
/// If `f(a)` and `f(b)` share a sign, the upper bound is moved to `widened_b`
/// and the bracket is checked once more before giving up with
/// [`MathError::InvalidBracket`].
pub fn bisection_widening<F>(
    f: F,
    a: f64,
    b: f64,
    widened_b: f64,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    check_bounds(&[a, b, widened_b])?;

    let fa = f(a);
    let mut b = b;
    let mut fb = f(b);

    if fa * fb > 0.0 {
        log::debug!("root not bracketed on [{a}, {b}], widening upper bound to {widened_b}");
        b = widened_b;
        fb = f(b);
        if fa * fb > 0.0 {
            return Err(MathError::InvalidBracket { a, b, fa, fb });
        }
    }

    iterate(&f, a, fa, b, config)
}

fn check_bounds(bounds: &[f64]) -> MathResult<()> {
    match bounds.iter().find(|x| !x.is_finite()) {
        Some(x) => Err(MathError::invalid_input(format!("bracket bound {x} is not finite"))),
        None => Ok(()),
    }
}

fn iterate<F>(f: &F, a: f64, fa: f64, b: f64, config: &SolverConfig) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    let (mut a, mut fa, mut b) = (a, fa, b);

    for iteration in 0..config.max_iterations {
        let mid = 0.5 * (a + b);
        let f_mid = f(mid);

        if f_mid.abs() < config.tolerance {
            return Ok(SolverResult {
                root: mid,
                iterations: iteration + 1,
                residual: f_mid,
                converged: true,
            });
        }

        if fa * f_mid <= 0.0 {
            b = mid;
        } else {
            a = mid;
            fa = f_mid;
        }
    }

    let mid = 0.5 * (a + b);
    let residual = f(mid);
    match config.exhaustion {
        Exhaustion::BestEffort => {
            log::debug!(
                "bisection exhausted {} iterations, returning midpoint {mid} (residual {residual:.2e})",
                config.max_iterations
            );
            Ok(SolverResult {
                root: mid,
                iterations: config.max_iterations,
                residual,
                converged: false,
            })
        }
        Exhaustion::Strict => Err(MathError::convergence_failed(
            config.max_iterations,
            residual.abs(),
        )),
    }
}
