//! Likelihood-ratio statistics from the Johansen eigenvalues.
//!
//! Purpose
//! -------
//! Turn the descending eigenvalues `λ` into the two families of test
//! statistics used for rank selection.
//!
//! Key behaviors
//! -------------
//! - [`max_eigen_stat`]: `−m · ln(1 − λᵢ)` for each `i`.
//! - [`trace_stat`]: `−m · Σ_{i ≥ j} ln(1 − λᵢ)` for each `j`, accumulated
//!   as one running sum from the last index downward.
//!
//! Invariants & assumptions
//! ------------------------
//! - `m = T − p_eff ≥ 1` is the effective sample size.
//! - Every `λᵢ ∈ [0, 1)`; otherwise `JohansenError::NumericalDomain`.
//! - Because every log term is `≤ 0`, the trace sequence is non-increasing
//!   and its last entry equals the last max-eigen statistic exactly.
//!
//! Conventions
//! -----------
//! - `ln(1 − λ)` is evaluated as `ln_1p(−λ)` for accuracy near `λ = 0`.
//!
//! Testing notes
//! -------------
//! - Unit tests check closed-form values and the domain error; a proptest
//!   checks monotonicity and the tail identity on random eigenvalues.
use crate::cointegration::errors::{JohansenError, JohansenResult};
use ndarray::{Array1, ArrayView1};

/// Maximum-eigenvalue statistics `−m · ln(1 − λᵢ)`.
///
/// Parameters
/// ----------
/// - `eigenvalues`: `ArrayView1<f64>`
///   Eigenvalues in `[0, 1)`, normally descending.
/// - `n_effective`: `usize`
///   Effective sample size `m`.
///
/// Returns
/// -------
/// `JohansenResult<Array1<f64>>`
///   One non-negative statistic per eigenvalue.
///
/// Errors
/// ------
/// - `JohansenError::NumericalDomain { index, value }` for the first
///   eigenvalue outside `[0, 1)`.
///
/// Examples
/// --------
/// ```rust
/// # use ndarray::array;
/// # use rust_cointegration::cointegration::core::statistics::max_eigen_stat;
/// let stats = max_eigen_stat(array![0.5, 0.0].view(), 10).unwrap();
/// assert!((stats[0] - 10.0 * std::f64::consts::LN_2).abs() < 1e-12);
/// assert_eq!(stats[1], 0.0);
/// ```
pub fn max_eigen_stat(
    eigenvalues: ArrayView1<'_, f64>, n_effective: usize,
) -> JohansenResult<Array1<f64>> {
    let m = n_effective as f64;
    let logs = log_terms(eigenvalues)?;
    Ok(logs.mapv(|l| -m * l))
}

/// Trace statistics `−m · Σ_{i ≥ j} ln(1 − λᵢ)`.
///
/// Parameters
/// ----------
/// - `eigenvalues`: `ArrayView1<f64>`
///   Eigenvalues in `[0, 1)`, normally descending.
/// - `n_effective`: `usize`
///   Effective sample size `m`.
///
/// Returns
/// -------
/// `JohansenResult<Array1<f64>>`
///   Non-increasing sequence; entry `j` tests `rank ≤ j`.
///
/// Errors
/// ------
/// - `JohansenError::NumericalDomain { index, value }` for the first
///   eigenvalue outside `[0, 1)`.
pub fn trace_stat(
    eigenvalues: ArrayView1<'_, f64>, n_effective: usize,
) -> JohansenResult<Array1<f64>> {
    let m = n_effective as f64;
    let logs = log_terms(eigenvalues)?;

    let mut out = Array1::<f64>::zeros(logs.len());
    let mut running = 0.0;
    for j in (0..logs.len()).rev() {
        running += logs[j];
        out[j] = -m * running;
    }
    Ok(out)
}

fn log_terms(eigenvalues: ArrayView1<'_, f64>) -> JohansenResult<Array1<f64>> {
    if let Some((index, &value)) =
        eigenvalues.iter().enumerate().find(|(_, l)| !(0.0..1.0).contains(*l))
    {
        return Err(JohansenError::NumericalDomain { index, value });
    }
    Ok(eigenvalues.mapv(|l| (-l).ln_1p()))
}
