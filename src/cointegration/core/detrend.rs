//! Deterministic-trend removal for Johansen inputs.
//!
//! Purpose
//! -------
//! Strip the deterministic component selected by [`DetOrder`] from each
//! column of a `T × n` level matrix before the regression matrices are
//! built.
//!
//! Key behaviors
//! -------------
//! - `NoTrend`: leave the data untouched.
//! - `Mean`: subtract each column's sample mean.
//! - `LinearTrend`: regress each column on an intercept and the time index
//!   `t = 1, …, T` by OLS and subtract the fitted line.
//!
//! Invariants & assumptions
//! ------------------------
//! - Runs in place; no error conditions. Inputs are validated upstream.
//! - Mean removal is idempotent up to floating-point round-off: a second
//!   pass subtracts a mean that is already ~0.
//!
//! Testing notes
//! -------------
//! - Unit tests cover idempotence of Mean removal, exact removal of a pure
//!   linear trend, and the no-op order.
use crate::cointegration::core::options::DetOrder;
use ndarray::{Array2, Axis};

/// Remove the deterministic component selected by `det_order` in place.
///
/// Parameters
/// ----------
/// - `data`: `&mut Array2<f64>`
///   `T × n` levels (rows = time). Overwritten with the detrended series.
/// - `det_order`: [`DetOrder`]
///   Deterministic component to remove.
///
/// Examples
/// --------
/// ```rust
/// # use ndarray::array;
/// # use rust_cointegration::cointegration::{DetOrder, core::detrend::remove_deterministic_trend};
/// let mut data = array![[1.0], [2.0], [3.0]];
/// remove_deterministic_trend(&mut data, DetOrder::Mean);
/// assert_eq!(data, array![[-1.0], [0.0], [1.0]]);
/// ```
pub fn remove_deterministic_trend(data: &mut Array2<f64>, det_order: DetOrder) {
    match det_order {
        DetOrder::NoTrend => {}
        DetOrder::Mean => demean_columns(data),
        DetOrder::LinearTrend => detrend_columns(data),
    }
}

fn demean_columns(data: &mut Array2<f64>) {
    if data.nrows() == 0 {
        return;
    }
    for mut col in data.axis_iter_mut(Axis(1)) {
        let mean = col.sum() / col.len() as f64;
        col.mapv_inplace(|y| y - mean);
    }
}

// OLS of y on [1, t] with t = 1..=T, using the centred closed form
// β = Σ(t − t̄)(y − ȳ) / Σ(t − t̄)², α = ȳ − β t̄.
fn detrend_columns(data: &mut Array2<f64>) {
    let n_obs = data.nrows();
    if n_obs == 0 {
        return;
    }
    let t_mean = (n_obs as f64 + 1.0) / 2.0;
    let t_ss: f64 = (1..=n_obs).map(|t| (t as f64 - t_mean).powi(2)).sum();

    for mut col in data.axis_iter_mut(Axis(1)) {
        let y_mean = col.sum() / n_obs as f64;
        let cross: f64 =
            col.iter().enumerate().map(|(i, &y)| ((i + 1) as f64 - t_mean) * (y - y_mean)).sum();
        let beta = if t_ss > 0.0 { cross / t_ss } else { 0.0 };
        let alpha = y_mean - beta * t_mean;
        for (i, y) in col.iter_mut().enumerate() {
            *y -= alpha + beta * (i + 1) as f64;
        }
    }
}
