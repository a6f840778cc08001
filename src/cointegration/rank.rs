//! cointegration::rank — sequential rank selection.
//!
//! Purpose
//! -------
//! Pick the cointegration rank by testing `H₀: rank ≤ r` for
//! `r = 0, 1, …` against tabulated critical values and stopping at the
//! first hypothesis that is not rejected.
//!
//! Key behaviors
//! -------------
//! - [`select_rank`] returns the first `r ∈ 0..=n−2` with
//!   `stat[r] ≤ cv[r, confidence]`; if every such hypothesis is rejected
//!   it returns `n − 1`.
//! - [`RankSelection`] reports the trace and max-eigen ranks separately
//!   together with the combined rank `min(trace, max_eigen)`.
//!
//! Invariants & assumptions
//! ------------------------
//! - `stats.len() == cv.nrows()`; `cv` has the three confidence columns.
//! - The rule never returns `n`: full rank is not reported even when the
//!   last hypothesis is rejected.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the boundary cases (all rejected → `n − 1`, first
//!   accepted → 0), an interior stop, and shape mismatches.
use crate::cointegration::{
    core::options::Confidence,
    errors::{JohansenError, JohansenResult},
};
use ndarray::{Array2, ArrayView1};

/// RankSelection — outcome of the sequential rank tests at one confidence
/// level.
///
/// Fields
/// ------
/// - `trace_rank`: rank selected with the trace statistics.
/// - `max_eigen_rank`: rank selected with the max-eigenvalue critical
///   values.
/// - `rank`: `min(trace_rank, max_eigen_rank)`.
/// - `confidence`: the confidence column used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankSelection {
    pub trace_rank: usize,
    pub max_eigen_rank: usize,
    pub rank: usize,
    pub confidence: Confidence,
}

impl RankSelection {
    /// Combine the two sequential ranks.
    pub fn new(trace_rank: usize, max_eigen_rank: usize, confidence: Confidence) -> Self {
        RankSelection {
            trace_rank,
            max_eigen_rank,
            rank: trace_rank.min(max_eigen_rank),
            confidence,
        }
    }
}

/// Select a rank from one statistic sequence and its critical values.
///
/// Parameters
/// ----------
/// - `stats`: `ArrayView1<f64>`
///   Test statistics, entry `r` testing `rank ≤ r`.
/// - `cv`: `&Array2<f64>`
///   `n × 3` critical values aligned with `stats`.
/// - `confidence`: [`Confidence`]
///   Column of `cv` to compare against.
///
/// Returns
/// -------
/// `JohansenResult<usize>`
///   The first non-rejected `r` in `0..=n−2`, else `n − 1`.
///
/// Errors
/// ------
/// - `JohansenError::ShapeMismatch` when `cv` does not have `stats.len()`
///   rows and 3 columns.
/// - `JohansenError::TestNotRun` when `stats` is empty.
///
/// Examples
/// --------
/// ```rust
/// # use ndarray::array;
/// # use rust_cointegration::cointegration::{Confidence, rank::select_rank};
/// let cv = array![[13.4294, 15.4943, 19.9349], [2.7055, 3.8415, 6.6349]];
/// let r = select_rank(array![25.0, 1.2].view(), &cv, Confidence::P95).unwrap();
/// assert_eq!(r, 1);
/// ```
pub fn select_rank(
    stats: ArrayView1<'_, f64>, cv: &Array2<f64>, confidence: Confidence,
) -> JohansenResult<usize> {
    let n = stats.len();
    if n == 0 {
        return Err(JohansenError::TestNotRun);
    }
    if cv.nrows() != n {
        return Err(JohansenError::ShapeMismatch { expected: n, found: cv.nrows() });
    }
    if cv.ncols() != 3 {
        return Err(JohansenError::ShapeMismatch { expected: 3, found: cv.ncols() });
    }

    let col = confidence.column();
    Ok((0..n - 1).find(|&r| stats[r] <= cv[[r, col]]).unwrap_or(n - 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - All hypotheses rejected → n − 1.
    // - First hypothesis accepted → 0.
    // - Interior stop and confidence-column selection.
    // - Shape validation.
    // -------------------------------------------------------------------------

    fn cv3() -> Array2<f64> {
        array![[27.0669, 29.7961, 35.4628], [13.4294, 15.4943, 19.9349], [2.7055, 3.8415, 6.6349]]
    }

    #[test]
    // Purpose
    // -------
    // Verify that rejecting every hypothesis yields n − 1, never n.
    //
    // Given
    // -----
    // - Statistics above every critical value.
    //
    // Expect
    // ------
    // - Rank 2 for n = 3.
    fn select_rank_all_rejected_returns_n_minus_one() {
        let r = select_rank(array![100.0, 50.0, 10.0].view(), &cv3(), Confidence::P99).unwrap();
        assert_eq!(r, 2);
    }

    #[test]
    // Purpose
    // -------
    // Verify that accepting the first hypothesis yields 0.
    //
    // Given
    // -----
    // - stats[0] below every critical value of row 0.
    //
    // Expect
    // ------
    // - Rank 0 at every confidence level.
    fn select_rank_first_accepted_returns_zero() {
        for c in [Confidence::P90, Confidence::P95, Confidence::P99] {
            let r = select_rank(array![20.0, 50.0, 10.0].view(), &cv3(), c).unwrap();
            assert_eq!(r, 0);
        }
    }

    #[test]
    // Purpose
    // -------
    // Check that the confidence column changes the decision.
    //
    // Given
    // -----
    // - stats = [40, 17, 1]: row 1 is rejected at 90/95 % but not at 99 %.
    //
    // Expect
    // ------
    // - Rank 2 at 90 %, rank 1 at 99 %.
    fn select_rank_depends_on_confidence_column() {
        let stats = array![40.0, 17.0, 1.0];
        assert_eq!(select_rank(stats.view(), &cv3(), Confidence::P90).unwrap(), 2);
        assert_eq!(select_rank(stats.view(), &cv3(), Confidence::P99).unwrap(), 1);
    }

    #[test]
    // Purpose
    // -------
    // Ensure mismatched inputs are rejected.
    //
    // Given
    // -----
    // - Two statistics against a 3-row table; no statistics at all.
    //
    // Expect
    // ------
    // - `ShapeMismatch { expected: 2, found: 3 }` and `TestNotRun`.
    fn select_rank_shape_errors() {
        assert_eq!(
            select_rank(array![1.0, 2.0].view(), &cv3(), Confidence::P95),
            Err(JohansenError::ShapeMismatch { expected: 2, found: 3 })
        );
        assert_eq!(
            select_rank(ndarray::Array1::<f64>::zeros(0).view(), &cv3(), Confidence::P95),
            Err(JohansenError::TestNotRun)
        );
    }

    #[test]
    // Purpose
    // -------
    // Verify that the combined rank is the minimum of the two.
    //
    // Given
    // -----
    // - trace rank 2, max-eigen rank 1.
    //
    // Expect
    // ------
    // - rank 1.
    fn rank_selection_new_takes_minimum() {
        let sel = RankSelection::new(2, 1, Confidence::P95);
        assert_eq!(sel.rank, 1);
        assert_eq!(RankSelection::new(0, 3, Confidence::P95).rank, 0);
    }
}
