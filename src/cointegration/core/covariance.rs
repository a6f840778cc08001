//! Residual product-moment matrices S00, S01, S10, S11.
//!
//! Given the concentrated residuals `R` (from ΔX) and `S` (from the lagged
//! levels), both `n × m`, form
//!
//! - `S00 = R Rᵀ / m`
//! - `S11 = S Sᵀ / m`
//! - `S01 = R Sᵀ / m`, `S10 = S01ᵀ`
//!
//! `S00` and `S11` are symmetrized after the product so that round-off does
//! not leak asymmetry into the Cholesky and eigen steps.
use crate::{cointegration::core::regression::AuxiliaryResiduals, numerical_stability::symmetrize};
use ndarray::Array2;

/// ResidualCovariances — the four `n × n` moment matrices of the Johansen
/// eigenproblem.
#[derive(Debug, Clone, PartialEq)]
pub struct ResidualCovariances {
    pub s00: Array2<f64>,
    pub s01: Array2<f64>,
    pub s10: Array2<f64>,
    pub s11: Array2<f64>,
}

impl ResidualCovariances {
    /// Estimate the moment matrices from auxiliary residuals.
    ///
    /// Panics
    /// ------
    /// - Never for validated inputs. `m = T − p_eff ≥ 1` is guaranteed by
    ///   `cointegration::validation`, so the division is well defined.
    pub fn estimate(aux: &AuxiliaryResiduals) -> Self {
        let m = aux.r.ncols() as f64;
        let r = &aux.r;
        let s = &aux.s;

        let mut s00 = r.dot(&r.t()) / m;
        let mut s11 = s.dot(&s.t()) / m;
        let s01 = r.dot(&s.t()) / m;
        let s10 = s01.t().to_owned();
        symmetrize(&mut s00);
        symmetrize(&mut s11);

        ResidualCovariances { s00, s01, s10, s11 }
    }

    /// Number of series `n`.
    pub fn dim(&self) -> usize {
        self.s00.nrows()
    }
}
