//! numerical_stability::linalg — ndarray/nalgebra bridge and pseudo-inverses.
//!
//! Purpose
//! -------
//! Provide the small set of dense linear-algebra helpers the Johansen
//! pipeline needs on top of `ndarray`: copying matrices into and out of
//! `nalgebra::DMatrix`, forming Moore–Penrose pseudo-inverses through a
//! singular value decomposition, and reporting how well conditioned the
//! inverted matrix was.
//!
//! Key behaviors
//! -------------
//! - [`to_dmatrix`] / [`from_dmatrix`] copy between the two matrix types
//!   without altering values.
//! - [`pseudo_inverse`] computes `A⁺ = V Σ⁺ Uᵀ`, discarding singular values
//!   below a relative cutoff, and returns a [`Conditioning`] summary next to
//!   the inverse so callers can decide whether precision loss is
//!   acceptable.
//! - [`symmetrize`] replaces a square matrix by `(A + Aᵀ) / 2` in place.
//!
//! Invariants & assumptions
//! ------------------------
//! - Inputs are finite. Non-finite entries are rejected upstream by
//!   `cointegration::validation`.
//! - Singular values `σ_k ≤ dim · ε · σ_max` are treated as zero, matching
//!   the default threshold of Jacobi-SVD based solvers.
//!
//! Conventions
//! -----------
//! - `ndarray` indexing is `[[row, col]]`; `nalgebra` indexing is
//!   `(row, col)`. Both are row/column in the mathematical sense, so a copy
//!   is a plain element-wise transfer.
//! - This module never logs and never returns crate-level errors; failures
//!   of the factorization surface as `None` and are mapped to typed errors
//!   by the caller.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the identity and rank-deficient pseudo-inverse cases,
//!   condition numbers of diagonal matrices, and copy round trips.
use nalgebra::{DMatrix, DVector};
use ndarray::{Array2, ArrayView2};

/// Tolerance used to snap eigenvalues that are negative only by round-off.
pub const EIGEN_EPS: f64 = 1e-10;

/// Default condition-number threshold above which a pseudo-inverted matrix
/// is reported as ill conditioned.
pub const DEFAULT_CONDITION_THRESHOLD: f64 = 1e12;

/// Conditioning — singular-value summary of a pseudo-inverted matrix.
///
/// Fields
/// ------
/// - `condition_number`: `f64`
///   `σ_max / σ_min` over all singular values. `f64::INFINITY` when the
///   matrix is singular (some `σ_k = 0`) or identically zero.
/// - `rank`: `usize`
///   Number of singular values retained above the pseudo-inverse cutoff.
/// - `dim`: `usize`
///   Number of singular values (`min(rows, cols)`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conditioning {
    pub condition_number: f64,
    pub rank: usize,
    pub dim: usize,
}

impl Conditioning {
    /// `true` when the condition number exceeds `threshold` or is not finite.
    pub fn is_ill_conditioned(&self, threshold: f64) -> bool {
        self.condition_number.is_nan() || self.condition_number > threshold
    }

    /// `true` when no singular value was discarded by the cutoff.
    pub fn is_full_rank(&self) -> bool {
        self.rank == self.dim
    }
}

/// PseudoInverse — Moore–Penrose inverse together with its diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct PseudoInverse {
    pub matrix: Array2<f64>,
    pub conditioning: Conditioning,
}

/// Copy an `ndarray` matrix into a freshly allocated `nalgebra::DMatrix`.
pub fn to_dmatrix(a: ArrayView2<'_, f64>) -> DMatrix<f64> {
    DMatrix::from_fn(a.nrows(), a.ncols(), |i, j| a[[i, j]])
}

/// Copy a `nalgebra::DMatrix` back into an owned `ndarray` matrix.
pub fn from_dmatrix(m: &DMatrix<f64>) -> Array2<f64> {
    Array2::from_shape_fn((m.nrows(), m.ncols()), |(i, j)| m[(i, j)])
}

/// Replace a square matrix by its symmetric part `(A + Aᵀ) / 2`.
///
/// Panics
/// ------
/// - Panics if `a` is not square.
pub fn symmetrize(a: &mut Array2<f64>) {
    let n = a.nrows();
    assert_eq!(n, a.ncols(), "symmetrize requires a square matrix");
    for i in 0..n {
        for j in (i + 1)..n {
            let avg = 0.5 * (a[[i, j]] + a[[j, i]]);
            a[[i, j]] = avg;
            a[[j, i]] = avg;
        }
    }
}

/// pseudo_inverse — Moore–Penrose inverse via singular value decomposition.
///
/// Purpose
/// -------
/// Invert matrices that may be singular or ill conditioned, such as the
/// Gram matrix `Z Zᵀ` of the short-run regressors or the residual
/// covariance `S00`, without failing on rank deficiency.
///
/// Parameters
/// ----------
/// - `a`: `ArrayView2<f64>`
///   Matrix to invert, `r × c`. Entries must be finite.
///
/// Returns
/// -------
/// `Option<PseudoInverse>`
///   - `Some(PseudoInverse)` holding the `c × r` inverse and the
///     [`Conditioning`] of `a`.
///   - `None` when the SVD backend did not produce both singular-vector
///     factors.
///
/// Notes
/// -----
/// - The cutoff is `max(r, c) · ε · σ_max`; singular values at or below it
///   contribute nothing to the inverse and lower the reported rank.
/// - An empty matrix yields an empty inverse with condition number 1.
pub fn pseudo_inverse(a: ArrayView2<'_, f64>) -> Option<PseudoInverse> {
    let (rows, cols) = a.dim();
    let dim = rows.min(cols);
    if dim == 0 {
        return Some(PseudoInverse {
            matrix: Array2::zeros((cols, rows)),
            conditioning: Conditioning { condition_number: 1.0, rank: 0, dim: 0 },
        });
    }

    let svd = to_dmatrix(a).svd(true, true);
    let u = svd.u.as_ref()?;
    let v_t = svd.v_t.as_ref()?;
    let sigma = &svd.singular_values;

    let sigma_max = sigma.iter().copied().fold(0.0_f64, f64::max);
    let sigma_min = sigma.iter().copied().fold(f64::INFINITY, f64::min);
    let cutoff = (rows.max(cols) as f64) * f64::EPSILON * sigma_max;

    let mut rank = 0;
    let inv_sigma = DVector::from_iterator(
        sigma.len(),
        sigma.iter().map(|&s| {
            if s > cutoff {
                rank += 1;
                1.0 / s
            } else {
                0.0
            }
        }),
    );

    let pinv = v_t.transpose() * DMatrix::from_diagonal(&inv_sigma) * u.transpose();
    let condition_number =
        if sigma_min > 0.0 && sigma_max > 0.0 { sigma_max / sigma_min } else { f64::INFINITY };

    Some(PseudoInverse {
        matrix: from_dmatrix(&pinv),
        conditioning: Conditioning { condition_number, rank, dim },
    })
}
