//! Generalized symmetric eigenproblem of the Johansen procedure.
//!
//! Purpose
//! -------
//! Solve `(S10 S00⁺ S01) v = λ S11 v` for all `n` eigenpairs, returning the
//! eigenvalues in descending order with their `S11`-normalized
//! eigenvectors.
//!
//! Key behaviors
//! -------------
//! - `S00` is inverted first and separately ([`invert_s00`]) so the caller
//!   can apply its conditioning policy before any factorization runs.
//! - The problem is reduced to a standard symmetric one using the Cholesky
//!   factor `S11 = L Lᵀ`: `C = L⁻¹ A L⁻ᵀ`, `C y = λ y`, `v = L⁻ᵀ y`.
//! - Eigenpairs are sorted by descending eigenvalue and the eigenvector
//!   columns are permuted with them.
//!
//! Invariants & assumptions
//! ------------------------
//! - `S00`, `S11` are symmetric `n × n`; `S10 = S01ᵀ`.
//! - Returned eigenvectors satisfy `vₖᵀ S11 vₖ = 1` and are mutually
//!   `S11`-orthogonal.
//! - Returned eigenvalues lie in `[0, 1)`. Values in `[−EIGEN_EPS, 0)` are
//!   round-off and snapped to `0`; anything else outside the interval is a
//!   hard error.
//!
//! Testing notes
//! -------------
//! - Unit tests use diagonal moment matrices with closed-form eigenvalues,
//!   check the `S11` normalization, and hit both error branches.
use crate::{
    cointegration::{
        core::covariance::ResidualCovariances,
        errors::{JohansenError, JohansenResult},
    },
    numerical_stability::{
        EIGEN_EPS, PseudoInverse, from_dmatrix, pseudo_inverse, symmetrize, to_dmatrix,
    },
};
use nalgebra::SymmetricEigen;
use ndarray::{Array1, Array2, ArrayView2};

/// GeneralizedEigen — sorted eigenpairs.
///
/// Fields
/// ------
/// - `eigenvalues`: `Array1<f64>` — length `n`, descending, in `[0, 1)`.
/// - `eigenvectors`: `Array2<f64>` — `n × n`; column `k` pairs with
///   `eigenvalues[k]`.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneralizedEigen {
    pub eigenvalues: Array1<f64>,
    pub eigenvectors: Array2<f64>,
}

/// Pseudo-invert `S00` and report its conditioning.
///
/// Errors
/// ------
/// - `JohansenError::LinearAlgebra { op: "svd" }` if the SVD of `S00` does
///   not converge.
pub fn invert_s00(s00: ArrayView2<'_, f64>) -> JohansenResult<PseudoInverse> {
    pseudo_inverse(s00).ok_or(JohansenError::LinearAlgebra { op: "svd" })
}

/// Solve the Johansen generalized eigenproblem.
///
/// Parameters
/// ----------
/// - `cov`: `&ResidualCovariances`
///   Residual moment matrices from the auxiliary regressions.
/// - `s00_pinv`: `&PseudoInverse`
///   Pseudo-inverse of `cov.s00`, as returned by [`invert_s00`].
///
/// Returns
/// -------
/// `JohansenResult<GeneralizedEigen>`
///   Descending eigenvalues and matching `S11`-normalized eigenvectors.
///
/// Errors
/// ------
/// - `JohansenError::NotPositiveDefinite { matrix: "S11" }` if the Cholesky
///   factorization of `S11` fails or yields a non-positive pivot.
/// - `JohansenError::LinearAlgebra { op: "triangular solve" }` if a
///   triangular solve against the Cholesky factor fails.
/// - `JohansenError::NumericalDomain { index, value }` if an eigenvalue is
///   non-finite, `≥ 1`, or below `−EIGEN_EPS`.
pub fn solve_generalized_eigen(
    cov: &ResidualCovariances, s00_pinv: &PseudoInverse,
) -> JohansenResult<GeneralizedEigen> {
    let n = cov.dim();

    let mut a = cov.s10.dot(&s00_pinv.matrix).dot(&cov.s01);
    symmetrize(&mut a);

    let chol = to_dmatrix(cov.s11.view())
        .cholesky()
        .ok_or(JohansenError::NotPositiveDefinite { matrix: "S11" })?;
    let l = chol.l();
    if l.diagonal().iter().any(|&d| !(d.is_finite() && d > 0.0)) {
        return Err(JohansenError::NotPositiveDefinite { matrix: "S11" });
    }

    // C = L⁻¹ A L⁻ᵀ = L⁻¹ (L⁻¹ A)ᵀ since A is symmetric.
    let l_inv_a = l
        .solve_lower_triangular(&to_dmatrix(a.view()))
        .ok_or(JohansenError::LinearAlgebra { op: "triangular solve" })?;
    let c = l
        .solve_lower_triangular(&l_inv_a.transpose())
        .ok_or(JohansenError::LinearAlgebra { op: "triangular solve" })?;
    let mut c = from_dmatrix(&c);
    symmetrize(&mut c);

    let eig = SymmetricEigen::new(to_dmatrix(c.view()));
    // v = L⁻ᵀ y
    let vectors = l
        .tr_solve_lower_triangular(&eig.eigenvectors)
        .ok_or(JohansenError::LinearAlgebra { op: "triangular solve" })?;

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&i, &j| eig.eigenvalues[j].total_cmp(&eig.eigenvalues[i]));

    let mut eigenvalues = Array1::<f64>::zeros(n);
    let mut eigenvectors = Array2::<f64>::zeros((n, n));
    for (k, &src) in order.iter().enumerate() {
        eigenvalues[k] = checked_eigenvalue(k, eig.eigenvalues[src])?;
        for row in 0..n {
            eigenvectors[[row, k]] = vectors[(row, src)];
        }
    }

    Ok(GeneralizedEigen { eigenvalues, eigenvectors })
}

fn checked_eigenvalue(index: usize, value: f64) -> JohansenResult<f64> {
    if (0.0..1.0).contains(&value) {
        Ok(value)
    } else if (-EIGEN_EPS..0.0).contains(&value) {
        Ok(0.0)
    } else {
        Err(JohansenError::NumericalDomain { index, value })
    }
}
