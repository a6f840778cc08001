//! cointegration::johansen — the Johansen cointegration rank test.
//!
//! Purpose
//! -------
//! Run the full Johansen procedure on a `T × n` level matrix and keep every
//! result a caller needs to decide on the cointegration rank: eigenvalues,
//! cointegration vectors, trace and maximum-eigenvalue statistics, aligned
//! critical values, and numerical diagnostics.
//!
//! Key behaviors
//! -------------
//! - [`JohansenTest::new`] validates the input, removes the deterministic
//!   component on a private copy, builds the regression matrices,
//!   concentrates out short-run dynamics, estimates the residual moment
//!   matrices, solves the generalized eigenproblem, and computes both
//!   statistic families and their critical values.
//! - Conditioning of `Z Zᵀ` and `S00` is compared against the configured
//!   threshold. By default an excess is recorded as a [`JohansenWarning`]
//!   and logged with `tracing::warn!`; in strict mode it aborts the run.
//! - [`JohansenTest::select_rank`] applies the sequential rank rule to both
//!   statistic families and combines them.
//!
//! Invariants & assumptions
//! ------------------------
//! - A `JohansenTest` only exists for a completed pipeline, so its
//!   eigenvalues, statistics, and critical values are always populated and
//!   mutually aligned (length / rows `n`).
//! - Eigenvalues are descending and in `[0, 1)`; column `k` of
//!   [`JohansenTest::cointegration_vectors`] pairs with eigenvalue `k`.
//! - The caller's matrix is never modified.
//!
//! Conventions
//! -----------
//! - `lags` counts lagged-difference terms; the regression uses
//!   `p_eff = lags + 1` and an effective sample of `m = T − p_eff`.
//! - Diagnostics go through `tracing` at `debug` level (stage shapes,
//!   eigenvalues) and `warn` level (conditioning). Nothing is printed
//!   without a subscriber.
//!
//! Downstream usage
//! ----------------
//! - Build [`JohansenOptions`], call [`JohansenTest::new`], then read the
//!   statistics or call [`JohansenTest::select_rank`].
//! - Python bindings wrap the same type and expose statsmodels-style
//!   names (`eig`, `evec`, `lr1`, `lr2`, `cvt`, `cvm`).
//!
//! Testing notes
//! -------------
//! - Unit tests here cover strict versus lenient conditioning, accessor
//!   consistency, and error propagation from validation.
//! - Statistical behavior on simulated random walks is covered by
//!   `tests/integration_johansen_pipeline.rs`.
use crate::{
    cointegration::{
        core::{
            AuxiliaryResiduals, Confidence, DetOrder, JohansenOptions, MaxEigenRankSource,
            RegressionMatrices, ResidualCovariances, invert_s00, max_eigen_stat,
            remove_deterministic_trend, solve_generalized_eigen, trace_stat,
        },
        critical_values::{StatisticKind, critical_values},
        errors::{JohansenError, JohansenResult, JohansenWarning},
        rank::{RankSelection, select_rank},
        validation::validate_input,
    },
    numerical_stability::Conditioning,
};
use ndarray::{Array1, Array2, ArrayView2};
use tracing::{debug, warn};

/// JohansenTest — completed Johansen cointegration rank test.
///
/// Purpose
/// -------
/// Own every output of one Johansen run so that statistics, critical
/// values, and rank decisions can be read without recomputation.
///
/// Fields
/// ------
/// Private; use the accessors. Stored outputs:
/// - eigenvalues `λ` (length `n`, descending),
/// - cointegration vectors (`n × n`, `S11`-normalized columns),
/// - trace and max-eigen statistics (length `n`),
/// - trace and max-eigen critical values (`n × 3`, columns 90/95/99 %),
/// - conditioning of `Z Zᵀ` and `S00`, and any warnings raised.
///
/// Notes
/// -----
/// - Owns plain `ndarray` data only, so it is `Send + Sync`.
#[derive(Debug, Clone, PartialEq)]
pub struct JohansenTest {
    options: JohansenOptions,
    n_obs: usize,
    n_effective: usize,
    eigenvalues: Array1<f64>,
    eigenvectors: Array2<f64>,
    trace_stat: Array1<f64>,
    max_eigen_stat: Array1<f64>,
    cvt: Array2<f64>,
    cvm: Array2<f64>,
    regression_conditioning: Conditioning,
    s00_conditioning: Conditioning,
    warnings: Vec<JohansenWarning>,
}

impl JohansenTest {
    /// Run the Johansen procedure on `data`.
    ///
    /// Parameters
    /// ----------
    /// - `data`: `ArrayView2<f64>`
    ///   `T × n` level matrix (rows = time, columns = series),
    ///   `1 ≤ n ≤ 12`, all entries finite.
    /// - `options`: [`JohansenOptions`]
    ///   Lags, deterministic order, and conditioning policy.
    ///
    /// Returns
    /// -------
    /// `JohansenResult<JohansenTest>`
    ///   The completed test.
    ///
    /// Errors
    /// ------
    /// - Validation: `EmptyInput`, `RankTableOverflow`, `InvalidLagOrder`,
    ///   `NonFiniteData`.
    /// - `IllConditioned` when `Z Zᵀ` or `S00` exceeds the threshold and
    ///   `options.strict_conditioning` is set. Both checks run before the
    ///   eigen-solve, so a degenerate `S00` is reported as such.
    /// - `NotPositiveDefinite { matrix: "S11" }` when the lagged-level
    ///   residuals are degenerate.
    /// - `NumericalDomain` when an eigenvalue falls outside `[0, 1)`.
    /// - `LinearAlgebra` when a factorization backend fails.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// use ndarray::Array2;
    /// use rust_cointegration::cointegration::{Confidence, DetOrder, JohansenOptions, JohansenTest};
    ///
    /// // Two series sharing one stochastic trend.
    /// let mut trend = 0.0;
    /// let mut rows = Vec::new();
    /// for t in 0..200_usize {
    ///     trend += ((t * 7919) % 101) as f64 / 50.0 - 1.0;
    ///     let noise = ((t * 104729) % 97) as f64 / 97.0 - 0.5;
    ///     rows.extend([trend, 2.0 * trend + noise]);
    /// }
    /// let data = Array2::from_shape_vec((200, 2), rows).unwrap();
    /// let opts = JohansenOptions::new(1, DetOrder::Mean).unwrap();
    /// let test = JohansenTest::new(data.view(), opts).unwrap();
    /// assert_eq!(test.eigenvalues().len(), 2);
    /// let rank = test.select_rank(Confidence::P95).unwrap();
    /// assert!(rank.rank <= 1);
    /// ```
    pub fn new(data: ArrayView2<'_, f64>, options: JohansenOptions) -> JohansenResult<Self> {
        validate_input(data, options.lags)?;
        let (n_obs, n_series) = data.dim();
        let p_eff = options.effective_lag();
        let det_order = options.det_order;
        let threshold = options.condition_threshold;
        let mut warnings = Vec::new();

        debug!(
            n_obs,
            n_series,
            lags = options.lags,
            det_order = det_order.as_i32(),
            "johansen: start"
        );

        let mut levels = data.to_owned();
        remove_deterministic_trend(&mut levels, det_order);

        let mats = RegressionMatrices::build(levels.view(), p_eff, det_order);
        let n_effective = mats.n_effective();
        debug!(n_effective, z_rows = mats.z.nrows(), "johansen: regression matrices built");

        let aux = AuxiliaryResiduals::regress(&mats)?;
        let regression_conditioning = aux.conditioning;
        if regression_conditioning.is_ill_conditioned(threshold) {
            let condition_number = regression_conditioning.condition_number;
            if options.strict_conditioning {
                return Err(JohansenError::IllConditioned {
                    matrix: "Z Z'",
                    condition_number,
                    threshold,
                });
            }
            let warning = JohansenWarning::IllConditionedRegression { condition_number, threshold };
            warn!(condition_number, threshold, "{warning}");
            warnings.push(warning);
        }

        let cov = ResidualCovariances::estimate(&aux);
        let s00_pinv = invert_s00(cov.s00.view())?;
        let s00_conditioning = s00_pinv.conditioning;
        if s00_conditioning.is_ill_conditioned(threshold) {
            let condition_number = s00_conditioning.condition_number;
            if options.strict_conditioning {
                return Err(JohansenError::IllConditioned {
                    matrix: "S00",
                    condition_number,
                    threshold,
                });
            }
            let warning = JohansenWarning::IllConditionedS00 { condition_number, threshold };
            warn!(condition_number, threshold, "{warning}");
            warnings.push(warning);
        }

        let eig = solve_generalized_eigen(&cov, &s00_pinv)?;
        debug!(eigenvalues = ?eig.eigenvalues.to_vec(), "johansen: eigenvalues");

        let trace = trace_stat(eig.eigenvalues.view(), n_effective)?;
        let max_eigen = max_eigen_stat(eig.eigenvalues.view(), n_effective)?;
        let cvt = critical_values(StatisticKind::Trace, det_order, n_series)?;
        let cvm = critical_values(StatisticKind::MaxEigen, det_order, n_series)?;

        Ok(JohansenTest {
            options,
            n_obs,
            n_effective,
            eigenvalues: eig.eigenvalues,
            eigenvectors: eig.eigenvectors,
            trace_stat: trace,
            max_eigen_stat: max_eigen,
            cvt,
            cvm,
            regression_conditioning,
            s00_conditioning,
            warnings,
        })
    }

    /// Select the cointegration rank at `confidence`, feeding max-eigenvalue
    /// statistics to the max-eigenvalue rule.
    pub fn select_rank(&self, confidence: Confidence) -> JohansenResult<RankSelection> {
        self.select_rank_with(confidence, MaxEigenRankSource::default())
    }

    /// Select the cointegration rank with an explicit statistic for the
    /// max-eigenvalue rule.
    ///
    /// Parameters
    /// ----------
    /// - `confidence`: [`Confidence`]
    ///   Critical-value column.
    /// - `source`: [`MaxEigenRankSource`]
    ///   `TraceStatistic` compares the trace statistics against the
    ///   max-eigenvalue critical values. This pairing is statistically
    ///   inconsistent and exists only for comparison with results produced
    ///   that way.
    ///
    /// Returns
    /// -------
    /// `JohansenResult<RankSelection>`
    ///   Trace rank, max-eigen rank, and their minimum.
    pub fn select_rank_with(
        &self, confidence: Confidence, source: MaxEigenRankSource,
    ) -> JohansenResult<RankSelection> {
        let trace_rank = select_rank(self.trace_stat.view(), &self.cvt, confidence)?;
        let max_eigen_input = match source {
            MaxEigenRankSource::MaxEigenStatistic => self.max_eigen_stat.view(),
            MaxEigenRankSource::TraceStatistic => self.trace_stat.view(),
        };
        let max_eigen_rank = select_rank(max_eigen_input, &self.cvm, confidence)?;
        let selection = RankSelection::new(trace_rank, max_eigen_rank, confidence);
        debug!(trace_rank, max_eigen_rank, rank = selection.rank, ?confidence, "johansen: rank");
        Ok(selection)
    }

    /// Eigenvalues `λ`, descending, in `[0, 1)`.
    pub fn eigenvalues(&self) -> &Array1<f64> {
        &self.eigenvalues
    }

    /// Cointegration vectors; column `k` pairs with `eigenvalues()[k]`.
    pub fn cointegration_vectors(&self) -> &Array2<f64> {
        &self.eigenvectors
    }

    /// Trace statistics; entry `r` tests `rank ≤ r`.
    pub fn trace_stat(&self) -> &Array1<f64> {
        &self.trace_stat
    }

    /// Maximum-eigenvalue statistics; entry `r` tests `rank = r` against
    /// `rank = r + 1`.
    pub fn max_eigen_stat(&self) -> &Array1<f64> {
        &self.max_eigen_stat
    }

    /// Trace critical values, `n × 3` (90/95/99 %).
    pub fn cvt(&self) -> &Array2<f64> {
        &self.cvt
    }

    /// Maximum-eigenvalue critical values, `n × 3` (90/95/99 %).
    pub fn cvm(&self) -> &Array2<f64> {
        &self.cvm
    }

    /// Number of observations `T` in the input.
    pub fn n_obs(&self) -> usize {
        self.n_obs
    }

    /// Number of series `n`.
    pub fn n_series(&self) -> usize {
        self.eigenvalues.len()
    }

    /// Effective sample size `m = T − (lags + 1)`.
    pub fn effective_sample_size(&self) -> usize {
        self.n_effective
    }

    pub fn lags(&self) -> usize {
        self.options.lags
    }

    pub fn det_order(&self) -> DetOrder {
        self.options.det_order
    }

    pub fn options(&self) -> &JohansenOptions {
        &self.options
    }

    /// Conditioning of `Z Zᵀ` in the auxiliary regression.
    pub fn regression_conditioning(&self) -> Conditioning {
        self.regression_conditioning
    }

    /// Conditioning of `S00`.
    pub fn s00_conditioning(&self) -> Conditioning {
        self.s00_conditioning
    }

    /// Non-fatal diagnostics raised during the run.
    pub fn warnings(&self) -> &[JohansenWarning] {
        &self.warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::Array2;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Accessor consistency on a deterministic, well-conditioned input.
    // - Lenient versus strict handling of an ill-conditioned regression.
    // - Strict rejection of a singular S00 ahead of the eigen-solve.
    // - Propagation of validation errors, including overflowing lag counts.
    //
    // They intentionally DO NOT cover:
    // - Rank decisions on random walks (integration tests).
    // -------------------------------------------------------------------------

    // Deterministic pseudo-noise built from two incommensurate sine waves,
    // so the tests do not depend on an RNG.
    fn wiggle(t: usize, phase: f64) -> f64 {
        let t = t as f64;
        (1.7 * t + phase).sin() + 0.5 * (0.37 * t * t + 2.0 * phase).cos()
    }

    fn cointegrated_pair(n_obs: usize) -> Array2<f64> {
        let mut data = Array2::<f64>::zeros((n_obs, 2));
        let mut trend = 0.0;
        for t in 0..n_obs {
            trend += wiggle(t, 0.3);
            data[[t, 0]] = trend;
            data[[t, 1]] = 0.5 * trend + wiggle(t, 1.1);
        }
        data
    }

    #[test]
    // Purpose
    // -------
    // Verify shapes and internal consistency of a completed run.
    //
    // Given
    // -----
    // - A 300×2 cointegrated pair, lags = 2, Mean order.
    //
    // Expect
    // ------
    // - n = 2, T = 300, m = 297.
    // - Eigenvalues descending in [0, 1); trace[1] == max_eigen[1].
    // - Critical values are the 2-series rows of the Mean tables.
    // - No warnings.
    fn new_populates_consistent_outputs() {
        // Arrange
        let data = cointegrated_pair(300);
        let opts = JohansenOptions::new(2, DetOrder::Mean).unwrap();

        // Act
        let test = JohansenTest::new(data.view(), opts).expect("pipeline should succeed");

        // Assert
        assert_eq!(test.n_series(), 2);
        assert_eq!(test.n_obs(), 300);
        assert_eq!(test.effective_sample_size(), 297);
        assert_eq!(test.lags(), 2);
        assert_eq!(test.det_order(), DetOrder::Mean);
        let lam = test.eigenvalues();
        assert!(lam[0] >= lam[1] && lam[1] >= 0.0 && lam[0] < 1.0);
        assert_eq!(test.trace_stat()[1], test.max_eigen_stat()[1]);
        assert_abs_diff_eq!(
            test.trace_stat()[0],
            test.max_eigen_stat()[0] + test.max_eigen_stat()[1],
            epsilon = 1e-9
        );
        assert_eq!(test.cvt()[[0, 1]], 15.4943);
        assert_eq!(test.cvm()[[0, 1]], 14.2639);
        assert_eq!(test.cointegration_vectors().dim(), (2, 2));
        assert!(test.warnings().is_empty());
        assert!(!test.regression_conditioning().is_ill_conditioned(opts.condition_threshold));
    }

    #[test]
    // Purpose
    // -------
    // Ensure that the cointegrated pair is detected and that both pairing
    // modes return a well-formed selection.
    //
    // Given
    // -----
    // - A 300×2 cointegrated pair whose spread is bounded noise.
    //
    // Expect
    // ------
    // - Combined rank 1 at 95 %.
    // - TraceStatistic pairing: trace rank unchanged, combined ≤ 1.
    fn select_rank_detects_cointegrated_pair() {
        // Arrange
        let data = cointegrated_pair(300);
        let test = JohansenTest::new(data.view(), JohansenOptions::new(1, DetOrder::Mean).unwrap())
            .expect("pipeline should succeed");

        // Act
        let default_sel = test.select_rank(Confidence::P95).unwrap();
        let legacy_sel =
            test.select_rank_with(Confidence::P95, MaxEigenRankSource::TraceStatistic).unwrap();

        // Assert
        assert_eq!(default_sel.rank, 1);
        assert_eq!(legacy_sel.trace_rank, default_sel.trace_rank);
        assert!(legacy_sel.rank <= 1);
    }

    #[test]
    // Purpose
    // -------
    // Check lenient and strict handling of a threshold the regression
    // cannot meet.
    //
    // Given
    // -----
    // - Condition threshold 1.0 (any non-trivial Z Zᵀ exceeds it).
    //
    // Expect
    // ------
    // - Lenient: the run succeeds with an IllConditionedRegression warning.
    // - Strict: `IllConditioned { matrix: "Z Z'" }`.
    fn conditioning_policy_warns_or_aborts() {
        // Arrange
        let data = cointegrated_pair(200);
        let lenient = JohansenOptions::new(2, DetOrder::Mean)
            .unwrap()
            .with_condition_threshold(1.0)
            .unwrap();
        let strict = lenient.with_strict_conditioning(true);

        // Act
        let ok = JohansenTest::new(data.view(), lenient).expect("lenient run should succeed");
        let err = JohansenTest::new(data.view(), strict);

        // Assert
        assert!(
            ok.warnings()
                .iter()
                .any(|w| matches!(w, JohansenWarning::IllConditionedRegression { .. }))
        );
        match err {
            Err(JohansenError::IllConditioned { matrix, threshold, .. }) => {
                assert_eq!(matrix, "Z Z'");
                assert_eq!(threshold, 1.0);
            }
            other => panic!("expected IllConditioned, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Ensure validation errors surface unchanged and the input is not
    // modified by a successful run.
    //
    // Given
    // -----
    // - A 3×2 matrix with lags = 2; a NaN-containing matrix.
    //
    // Expect
    // ------
    // - `InvalidLagOrder` and `NonFiniteData`; the caller's data intact.
    fn new_propagates_validation_errors_and_preserves_input() {
        // Arrange
        let short = Array2::<f64>::from_shape_fn((3, 2), |(t, j)| (t + j) as f64);
        let mut with_nan = cointegrated_pair(50);
        with_nan[[10, 0]] = f64::NAN;
        let clean = cointegrated_pair(50);
        let before = clean.clone();
        let opts = JohansenOptions::new(2, DetOrder::LinearTrend).unwrap();

        // Act & Assert
        assert_eq!(
            JohansenTest::new(short.view(), opts),
            Err(JohansenError::InvalidLagOrder { lags: 2, n_obs: 3 })
        );
        assert!(matches!(
            JohansenTest::new(with_nan.view(), opts),
            Err(JohansenError::NonFiniteData { row: 10, col: 0, .. })
        ));
        JohansenTest::new(clean.view(), opts).expect("pipeline should succeed");
        assert_eq!(clean, before);
    }

    #[test]
    // Purpose
    // -------
    // Ensure an unrepresentable lag count is rejected as a typed error
    // rather than overflowing while the regression window is sized.
    //
    // Given
    // -----
    // - A 50×2 matrix and options whose `lags` field is `usize::MAX`.
    //
    // Expect
    // ------
    // - `InvalidLagOrder { lags: usize::MAX, n_obs: 50 }`.
    fn new_huge_lags_returns_invalid_lag_order() {
        // Arrange
        let data = cointegrated_pair(50);
        let opts = JohansenOptions {
            lags: usize::MAX,
            ..JohansenOptions::new(1, DetOrder::Mean).unwrap()
        };

        // Act
        let result = JohansenTest::new(data.view(), opts);

        // Assert
        assert_eq!(result, Err(JohansenError::InvalidLagOrder { lags: usize::MAX, n_obs: 50 }));
    }

    #[test]
    // Purpose
    // -------
    // Verify that strict mode reports a singular S00 as ill conditioned
    // instead of letting the eigen-solve fail on it.
    //
    // Given
    // -----
    // - Two series with x₂ₜ = 2 x₁ₜ for t ≥ 1 and x₂₀ shifted by 5, so the
    //   differenced window is exactly collinear while the lagged
    //   differences in Z are not.
    // - lags = 1, Mean order, threshold 1e8, strict.
    //
    // Expect
    // ------
    // - `IllConditioned { matrix: "S00", .. }` with the configured
    //   threshold.
    fn strict_conditioning_rejects_singular_s00_before_eigen_solve() {
        // Arrange
        let n_obs = 200;
        let mut data = Array2::<f64>::zeros((n_obs, 2));
        let mut trend = 0.0;
        for t in 0..n_obs {
            trend += wiggle(t, 0.3);
            data[[t, 0]] = trend;
            data[[t, 1]] = 2.0 * trend;
        }
        data[[0, 1]] += 5.0;
        let opts = JohansenOptions::new(1, DetOrder::Mean)
            .unwrap()
            .with_condition_threshold(1e8)
            .unwrap()
            .with_strict_conditioning(true);

        // Act
        let result = JohansenTest::new(data.view(), opts);

        // Assert
        match result {
            Err(JohansenError::IllConditioned { matrix, condition_number, threshold }) => {
                assert_eq!(matrix, "S00");
                assert_eq!(threshold, 1e8);
                assert!(condition_number.is_nan() || condition_number > 1e8);
            }
            other => panic!("expected IllConditioned on S00, got {other:?}"),
        }
    }
}
