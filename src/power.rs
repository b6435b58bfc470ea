//! Power iteration on a dense column-stochastic matrix.
//!
//! Repeats \(x \leftarrow G x\) until
//! \(\max_i |x^{(k)}_i - x^{(k+1)}_i| < \text{tolerance}\).
//!
//! With `max_iterations: None` the loop has no cap: it terminates because a
//! damped Google matrix is primitive, so the iterates converge geometrically.
//! Pass a cap when `G` is not known to be well-formed.
//!
//! Damping is applied when `G` is built (see [`DenseMatrix::damped`]); the
//! solver itself only sees the finished matrix.

use log::{debug, info, warn};

use crate::matrix::DenseMatrix;
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PowerIterationConfig {
    /// Stop once the L∞ change between successive iterates is below this.
    pub tolerance: f64,
    /// `None` iterates until convergence with no cap.
    pub max_iterations: Option<usize>,
}

impl Default for PowerIterationConfig {
    fn default() -> Self {
        Self { tolerance: 5e-6, max_iterations: None }
    }
}

impl PowerIterationConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "tolerance must be finite and > 0 (got {})",
                self.tolerance
            )));
        }
        if self.max_iterations == Some(0) {
            return Err(Error::InvalidParameter("max_iterations must be > 0".to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PowerIterationRun {
    pub scores: Vec<f64>,
    /// Number of `x <- G x` updates performed.
    pub iterations: usize,
    /// L∞ change of the last update.
    pub diff_linf: f64,
    pub converged: bool,
}

/// `‖G x - x‖∞`.
pub fn residual_linf(g: &DenseMatrix, x: &[f64]) -> f64 {
    linf_distance(&g.mul_vec(x), x)
}

fn linf_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(p, q)| (p - q).abs()).fold(0.0, f64::max)
}

pub fn power_iterate(
    g: &DenseMatrix,
    x0: &[f64],
    config: PowerIterationConfig,
) -> PowerIterationRun {
    power_iterate_with(g, x0, config, |_, _| {})
}

/// Like [`power_iterate`], calling `on_step(k, x)` after the `k`-th update
/// (1-based) with the new iterate.
pub fn power_iterate_with<F>(
    g: &DenseMatrix,
    x0: &[f64],
    config: PowerIterationConfig,
    mut on_step: F,
) -> PowerIterationRun
where
    F: FnMut(usize, &[f64]),
{
    let n = g.dim();
    if n == 0 {
        return PowerIterationRun {
            scores: Vec::new(),
            iterations: 0,
            diff_linf: 0.0,
            converged: true,
        };
    }
    let mut x = x0.to_vec();
    let mut next = vec![0.0; n];
    let mut iterations = 0usize;
    let mut diff = f64::INFINITY;

    loop {
        if config.max_iterations.is_some_and(|cap| iterations >= cap) {
            warn!("power iteration hit cap {iterations} without converging (diff_linf={diff:e})");
            return PowerIterationRun { scores: x, iterations, diff_linf: diff, converged: false };
        }
        g.mul_vec_into(&x, &mut next);
        iterations += 1;
        diff = linf_distance(&x, &next);
        std::mem::swap(&mut x, &mut next);
        debug!("iteration {iterations}: diff_linf={diff:e}");
        on_step(iterations, &x);
        if diff < config.tolerance {
            break;
        }
    }

    info!("power iteration converged after {iterations} iterations (diff_linf={diff:e})");
    PowerIterationRun { scores: x, iterations, diff_linf: diff, converged: true }
}

/// Validating entry point: checks the config, that `g` is column-stochastic
/// and that `x0` is a probability vector of matching length.
pub fn power_iterate_checked(
    g: &DenseMatrix,
    x0: &[f64],
    config: PowerIterationConfig,
) -> Result<PowerIterationRun> {
    config.validate()?;
    if x0.len() != g.dim() {
        return Err(Error::DimensionMismatch { expected: g.dim(), found: x0.len() });
    }
    if !g.is_column_stochastic(1e-9) {
        return Err(Error::InvalidParameter("matrix must be column-stochastic".to_string()));
    }
    if x0.iter().any(|&v| !v.is_finite() || v < 0.0) {
        return Err(Error::InvalidParameter(
            "initial vector entries must be finite and non-negative".to_string(),
        ));
    }
    let sum: f64 = x0.iter().sum();
    if (sum - 1.0).abs() > 1e-9 {
        return Err(Error::InvalidParameter(format!(
            "initial vector must sum to 1 (sum={sum})"
        )));
    }
    Ok(power_iterate(g, x0, config))
}
