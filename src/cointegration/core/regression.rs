//! Regression matrices and the auxiliary (concentration) regression.
//!
//! Purpose
//! -------
//! Build the matrices of the Johansen vector error-correction form from a
//! (detrended) level matrix and partial the short-run dynamics out of both
//! the differenced series and the lagged levels.
//!
//! Key behaviors
//! -------------
//! - [`RegressionMatrices::build`] forms, for an effective lag `p_eff`:
//!   - `delta_x`: ΔXₜ for the retained window, `n × m`,
//!   - `lagged_level`: Xₜ₋₁ over the same window, `n × m`,
//!   - `z`: stacked lagged differences ΔXₜ₋ₖ, k = 1..p_eff−1, plus a row
//!     of ones when the deterministic order is `LinearTrend`,
//!   with `m = T − p_eff`.
//! - [`AuxiliaryResiduals::regress`] computes OLS residuals of `delta_x`
//!   and `lagged_level` on `z` through the pseudo-inverse of `Z Zᵀ` and
//!   reports the conditioning of `Z Zᵀ`.
//!
//! Invariants & assumptions
//! ------------------------
//! - Shapes have been validated: `1 ≤ lags`, `p_eff = lags + 1 < T`.
//! - Time index conventions (0-based rows of the level matrix `X`):
//!   `dx[i] = X[i+1] − X[i]`; column `c` of every derived matrix refers to
//!   the difference `dx[p_eff − 1 + c]`, its lagged level
//!   `X[p_eff − 1 + c]`, and short-run terms `dx[p_eff − 1 − k + c]`.
//! - The intercept row is appended for `LinearTrend` only, not for `Mean`.
//!   This asymmetry is kept deliberately pending review of whether the
//!   `Mean` case should also carry an explicit constant.
//!
//! Testing notes
//! -------------
//! - Unit tests check exact matrix contents on a tiny series, the intercept
//!   row, and that regressors explained exactly by `z` leave zero
//!   residuals.
use crate::{
    cointegration::{
        core::options::DetOrder,
        errors::{JohansenError, JohansenResult},
    },
    numerical_stability::{Conditioning, pseudo_inverse},
};
use ndarray::{Array2, ArrayView2, s};

/// RegressionMatrices — ΔX, lagged levels, and short-run regressors.
///
/// Fields
/// ------
/// - `delta_x`: `Array2<f64>` — `n × m` first differences.
/// - `lagged_level`: `Array2<f64>` — `n × m` levels lagged one period.
/// - `z`: `Array2<f64>` — `((p_eff − 1)·n [+1]) × m` short-run regressors.
#[derive(Debug, Clone, PartialEq)]
pub struct RegressionMatrices {
    pub delta_x: Array2<f64>,
    pub lagged_level: Array2<f64>,
    pub z: Array2<f64>,
}

impl RegressionMatrices {
    /// Build the regression matrices from a `T × n` level matrix.
    ///
    /// Parameters
    /// ----------
    /// - `data`: `ArrayView2<f64>`
    ///   Levels after deterministic-trend removal (rows = time).
    /// - `effective_lag`: `usize`
    ///   `p_eff = lags + 1`; must satisfy `2 ≤ p_eff < T`.
    /// - `det_order`: [`DetOrder`]
    ///   Adds the intercept row to `z` when `LinearTrend`.
    ///
    /// Panics
    /// ------
    /// - Panics on slice bounds if `effective_lag ≥ T`; public entry points
    ///   validate this first.
    pub fn build(data: ArrayView2<'_, f64>, effective_lag: usize, det_order: DetOrder) -> Self {
        let (n_obs, n_series) = data.dim();
        let p = effective_lag;
        let m = n_obs - p;

        let dx = &data.slice(s![1.., ..]) - &data.slice(s![..n_obs - 1, ..]);

        let delta_x = dx.slice(s![p - 1..p - 1 + m, ..]).t().to_owned();
        let lagged_level = data.slice(s![p - 1..p - 1 + m, ..]).t().to_owned();

        let intercept_rows = usize::from(det_order == DetOrder::LinearTrend);
        let mut z = Array2::<f64>::zeros(((p - 1) * n_series + intercept_rows, m));
        for k in 1..p {
            let block = dx.slice(s![p - 1 - k..p - 1 - k + m, ..]);
            z.slice_mut(s![(k - 1) * n_series..k * n_series, ..]).assign(&block.t());
        }
        if intercept_rows == 1 {
            z.row_mut((p - 1) * n_series).fill(1.0);
        }

        RegressionMatrices { delta_x, lagged_level, z }
    }

    /// Effective sample size `m` (number of retained time points).
    pub fn n_effective(&self) -> usize {
        self.delta_x.ncols()
    }
}

/// AuxiliaryResiduals — residuals of the concentration regressions.
///
/// Fields
/// ------
/// - `r`: `Array2<f64>` — `n × m` residuals of ΔX on Z.
/// - `s`: `Array2<f64>` — `n × m` residuals of the lagged levels on Z.
/// - `conditioning`: [`Conditioning`] of `Z Zᵀ`.
#[derive(Debug, Clone, PartialEq)]
pub struct AuxiliaryResiduals {
    pub r: Array2<f64>,
    pub s: Array2<f64>,
    pub conditioning: Conditioning,
}

impl AuxiliaryResiduals {
    /// Partial the short-run regressors out of ΔX and the lagged levels.
    ///
    /// Parameters
    /// ----------
    /// - `mats`: `&RegressionMatrices`
    ///   Output of [`RegressionMatrices::build`].
    ///
    /// Returns
    /// -------
    /// `JohansenResult<AuxiliaryResiduals>`
    ///   Residuals `R = ΔX − β_Γᵀ Z` and `S = X₋₁ − β_Φᵀ Z` with
    ///   `β_Γ = (Z Zᵀ)⁺ Z ΔXᵀ`, `β_Φ = (Z Zᵀ)⁺ Z X₋₁ᵀ`, plus the
    ///   conditioning of `Z Zᵀ`.
    ///
    /// Errors
    /// ------
    /// - `JohansenError::LinearAlgebra { op: "svd" }` if the SVD backend
    ///   fails to return singular vectors.
    ///
    /// Notes
    /// -----
    /// - Near-singular `Z Zᵀ` is not an error here. The caller compares
    ///   `conditioning` against its configured threshold and decides
    ///   whether to warn or abort.
    pub fn regress(mats: &RegressionMatrices) -> JohansenResult<Self> {
        let z = &mats.z;
        let zzt = z.dot(&z.t());
        let pinv = pseudo_inverse(zzt.view()).ok_or(JohansenError::LinearAlgebra { op: "svd" })?;

        // (Z Zᵀ)⁺ Z is shared by both regressions.
        let projector = pinv.matrix.dot(z);
        let beta_gamma = projector.dot(&mats.delta_x.t());
        let beta_phi = projector.dot(&mats.lagged_level.t());

        let r = &mats.delta_x - &beta_gamma.t().dot(z);
        let s = &mats.lagged_level - &beta_phi.t().dot(z);

        Ok(AuxiliaryResiduals { r, s, conditioning: pinv.conditioning })
    }
}
