//! cointegration::validation — shared input guards for the Johansen test.
//!
//! Purpose
//! -------
//! Centralize the checks that must pass before any regression matrix is
//! built: the observation matrix is non-empty and finite, the number of
//! series fits the critical-value tables, and the lag order leaves a
//! positive effective sample.
//!
//! Invariants & assumptions
//! ------------------------
//! - Data is `T × n` with rows = time and columns = series.
//! - `1 ≤ n ≤ MAX_SERIES` (the tables have 12 rows).
//! - `1 ≤ lags < T − 1`, so `m = T − (lags + 1) ≥ 1`.
//!
//! Conventions
//! -----------
//! - Purely about validation: no allocation beyond error construction and
//!   no logging.
//! - Checks run in a fixed order (shape, table size, lags, finiteness) so
//!   the first reported error is deterministic.
//!
//! Testing notes
//! -------------
//! - Unit tests cover every error branch and a simple success path.
use crate::cointegration::{
    critical_values::MAX_SERIES,
    errors::{JohansenError, JohansenResult},
};
use ndarray::ArrayView2;

/// Validate the observation matrix and lag order of a Johansen test.
///
/// Parameters
/// ----------
/// - `data`: `ArrayView2<f64>`
///   `T × n` matrix of levels. Must be non-empty with all entries finite.
/// - `lags`: `usize`
///   Number of lagged-difference terms. Must satisfy `1 ≤ lags < T − 1`.
///
/// Returns
/// -------
/// `JohansenResult<()>`
///   `Ok(())` when every constraint holds.
///
/// Errors
/// ------
/// - `JohansenError::EmptyInput` when `T == 0` or `n == 0`.
/// - `JohansenError::RankTableOverflow` when `n > MAX_SERIES`.
/// - `JohansenError::InvalidLagOrder` when `lags == 0` or `lags ≥ T − 1`.
/// - `JohansenError::NonFiniteData` for the first NaN/±∞ in row-major
///   order.
///
/// Examples
/// --------
/// ```rust
/// # use ndarray::array;
/// # use rust_cointegration::cointegration::validation::validate_input;
/// # use rust_cointegration::cointegration::JohansenError;
/// let data = array![[1.0, 2.0], [1.5, 2.5], [1.2, 2.1], [1.9, 2.8]];
/// assert!(validate_input(data.view(), 1).is_ok());
///
/// match validate_input(data.view(), 3) {
///     Err(JohansenError::InvalidLagOrder { lags: 3, n_obs: 4 }) => (),
///     other => panic!("expected InvalidLagOrder, got {other:?}"),
/// }
/// ```
pub fn validate_input(data: ArrayView2<'_, f64>, lags: usize) -> JohansenResult<()> {
    let (n_obs, n_series) = data.dim();
    if n_obs == 0 || n_series == 0 {
        return Err(JohansenError::EmptyInput);
    }

    if n_series > MAX_SERIES {
        return Err(JohansenError::RankTableOverflow { n_series, max: MAX_SERIES });
    }

    if lags == 0 || lags >= n_obs - 1 {
        return Err(JohansenError::InvalidLagOrder { lags, n_obs });
    }

    for ((row, col), &value) in data.indexed_iter() {
        if !value.is_finite() {
            return Err(JohansenError::NonFiniteData { row, col, value });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array2, array};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Successful validation of a well-formed matrix.
    // - Each error branch: empty input, too many series, bad lags,
    //   non-finite data.
    //
    // They intentionally DO NOT cover:
    // - Numerical conditioning, which is checked after the regressions.
    // -------------------------------------------------------------------------

    fn small_data() -> Array2<f64> {
        array![[1.0, 2.0], [1.5, 2.5], [1.2, 2.1], [1.9, 2.8], [2.2, 3.0]]
    }

    #[test]
    // Purpose
    // -------
    // Verify that a finite 5×2 matrix with lags = 1 passes.
    //
    // Given
    // -----
    // - T = 5, n = 2, lags = 1 (1 ≤ 1 < 4).
    //
    // Expect
    // ------
    // - `Ok(())`.
    fn validate_input_valid_arguments_succeeds() {
        // Arrange
        let data = small_data();

        // Act
        let result = validate_input(data.view(), 1);

        // Assert
        assert!(result.is_ok(), "Expected Ok(()) for valid inputs, got {result:?}");
    }

    #[test]
    // Purpose
    // -------
    // Ensure that matrices without rows or columns are rejected.
    //
    // Given
    // -----
    // - A 0×2 and a 5×0 matrix.
    //
    // Expect
    // ------
    // - `JohansenError::EmptyInput` for both.
    fn validate_input_empty_matrix_returns_empty_input() {
        // Arrange
        let no_rows = Array2::<f64>::zeros((0, 2));
        let no_cols = Array2::<f64>::zeros((5, 0));

        // Act & Assert
        assert_eq!(validate_input(no_rows.view(), 1), Err(JohansenError::EmptyInput));
        assert_eq!(validate_input(no_cols.view(), 1), Err(JohansenError::EmptyInput));
    }

    #[test]
    // Purpose
    // -------
    // Ensure that more series than table rows are rejected before any
    // out-of-bounds lookup can happen.
    //
    // Given
    // -----
    // - A 20×13 matrix.
    //
    // Expect
    // ------
    // - `RankTableOverflow { n_series: 13, max: 12 }`.
    fn validate_input_too_many_series_returns_rank_table_overflow() {
        // Arrange
        let data = Array2::<f64>::from_shape_fn((20, 13), |(t, j)| (t * 13 + j) as f64);

        // Act
        let result = validate_input(data.view(), 1);

        // Assert
        assert_eq!(result, Err(JohansenError::RankTableOverflow { n_series: 13, max: MAX_SERIES }));
    }

    #[test]
    // Purpose
    // -------
    // Verify both lag boundaries: zero lags and lags leaving no effective
    // sample.
    //
    // Given
    // -----
    // - T = 5, lags ∈ {0, 4}.
    //
    // Expect
    // ------
    // - `InvalidLagOrder` carrying the offending lags and T.
    fn validate_input_invalid_lags_returns_invalid_lag_order() {
        // Arrange
        let data = small_data();

        // Act & Assert
        for lags in [0, 4] {
            match validate_input(data.view(), lags) {
                Err(JohansenError::InvalidLagOrder { lags: l, n_obs }) => {
                    assert_eq!(l, lags);
                    assert_eq!(n_obs, 5);
                }
                other => panic!("expected InvalidLagOrder, got {other:?}"),
            }
        }
        assert!(validate_input(data.view(), 3).is_ok());
    }

    #[test]
    // Purpose
    // -------
    // Ensure lag counts near `usize::MAX` are rejected without overflowing
    // the `lags < T − 1` bound.
    //
    // Given
    // -----
    // - T = 5, lags ∈ {usize::MAX − 1, usize::MAX}.
    //
    // Expect
    // ------
    // - `InvalidLagOrder` carrying the offending lags and T.
    fn validate_input_huge_lags_returns_invalid_lag_order() {
        // Arrange
        let data = small_data();

        // Act & Assert
        for lags in [usize::MAX - 1, usize::MAX] {
            assert_eq!(
                validate_input(data.view(), lags),
                Err(JohansenError::InvalidLagOrder { lags, n_obs: 5 })
            );
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify that a NaN is reported with its position.
    //
    // Given
    // -----
    // - A NaN at (2, 1).
    //
    // Expect
    // ------
    // - `NonFiniteData { row: 2, col: 1, .. }`.
    fn validate_input_non_finite_value_returns_non_finite_data() {
        // Arrange
        let mut data = small_data();
        data[[2, 1]] = f64::NAN;

        // Act
        let result = validate_input(data.view(), 1);

        // Assert
        match result {
            Err(JohansenError::NonFiniteData { row, col, value }) => {
                assert_eq!((row, col), (2, 1));
                assert!(value.is_nan());
            }
            other => panic!("expected NonFiniteData, got {other:?}"),
        }
    }
}
