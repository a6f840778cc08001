//! Johansen options — configuration for a single test run.
//!
//! Purpose
//! -------
//! Collect the knobs of a Johansen test in one validated place: the number
//! of lagged-difference terms, the deterministic-trend assumption, and the
//! conditioning policy applied to pseudo-inverted matrices. Also defines
//! the small enums used when reading results (confidence column, pairing
//! used by the max-eigenvalue rank rule).
//!
//! Key behaviors
//! -------------
//! - [`DetOrder`] encodes the deterministic order {-1, 0, 1} and converts
//!   from the integer flag via `TryFrom<i32>`.
//! - [`Confidence`] selects one of the three tabulated confidence columns.
//! - [`MaxEigenRankSource`] makes the statistic fed to the max-eigenvalue
//!   rank rule explicit.
//! - [`JohansenOptions`] validates `lags ≥ 1` and the condition threshold at
//!   construction; shape-dependent checks (`lags < T − 1`) happen in
//!   `cointegration::validation` once the data is known.
//!
//! Conventions
//! -----------
//! - `lags` counts lagged-difference terms. The pipeline models one extra
//!   lag internally (`p_eff = lags + 1`), see [`JohansenOptions::effective_lag`].
//! - Invalid configurations are reported as [`JohansenError`] values; no
//!   constructor panics.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the integer conversions, confidence parsing, and the
//!   validating constructor and setters.
use crate::{
    cointegration::errors::{JohansenError, JohansenResult},
    numerical_stability::DEFAULT_CONDITION_THRESHOLD,
};

/// DetOrder — deterministic component assumed for the levels.
///
/// - `NoTrend` (-1): no deterministic terms; data used as given.
/// - `Mean` (0): constant; each column is demeaned before the regressions.
/// - `LinearTrend` (1): linear trend; each column is detrended and an
///   intercept row is added to the short-run regressors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DetOrder {
    NoTrend,
    Mean,
    LinearTrend,
}

impl DetOrder {
    /// Integer flag of this order (-1, 0, or 1).
    pub fn as_i32(self) -> i32 {
        match self {
            DetOrder::NoTrend => -1,
            DetOrder::Mean => 0,
            DetOrder::LinearTrend => 1,
        }
    }
}

impl TryFrom<i32> for DetOrder {
    type Error = JohansenError;

    fn try_from(order: i32) -> JohansenResult<Self> {
        match order {
            -1 => Ok(DetOrder::NoTrend),
            0 => Ok(DetOrder::Mean),
            1 => Ok(DetOrder::LinearTrend),
            _ => Err(JohansenError::InvalidDeterministicOrder { order }),
        }
    }
}

/// Confidence — column of the critical-value tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Confidence {
    P90,
    P95,
    P99,
}

impl Confidence {
    /// Column index into an `n × 3` critical-value matrix.
    pub fn column(self) -> usize {
        match self {
            Confidence::P90 => 0,
            Confidence::P95 => 1,
            Confidence::P99 => 2,
        }
    }

    /// Parse a confidence level given as a fraction (0.90, 0.95, 0.99).
    ///
    /// Errors
    /// ------
    /// - `JohansenError::InvalidConfidence { level }` for any other value.
    pub fn from_level(level: f64) -> JohansenResult<Self> {
        const TOL: f64 = 1e-9;
        if (level - 0.90).abs() < TOL {
            Ok(Confidence::P90)
        } else if (level - 0.95).abs() < TOL {
            Ok(Confidence::P95)
        } else if (level - 0.99).abs() < TOL {
            Ok(Confidence::P99)
        } else {
            Err(JohansenError::InvalidConfidence { level })
        }
    }
}

/// MaxEigenRankSource — statistic compared against the max-eigenvalue
/// critical values when selecting the max-eigenvalue rank.
///
/// - `MaxEigenStatistic`: the max-eigenvalue statistics (default).
/// - `TraceStatistic`: the trace statistics. Reproduces a known
///   discrepancy of the command-line program this crate was validated
///   against, which passed trace statistics to its max-eigenvalue rank
///   rule. Kept only for side-by-side comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MaxEigenRankSource {
    #[default]
    MaxEigenStatistic,
    TraceStatistic,
}

/// JohansenOptions — configuration of a Johansen test run.
///
/// Purpose
/// -------
/// Bundle the lag order, deterministic order, and conditioning policy so
/// that [`JohansenTest::new`](crate::cointegration::JohansenTest::new)
/// receives one validated value instead of loose arguments.
///
/// Fields
/// ------
/// - `lags`: `usize`
///   Number of lagged-difference terms; `≥ 1`.
/// - `det_order`: [`DetOrder`]
///   Deterministic-trend assumption.
/// - `condition_threshold`: `f64`
///   Condition number above which `Z Zᵀ` and `S00` are reported as ill
///   conditioned. Finite and `> 0`; defaults to
///   [`DEFAULT_CONDITION_THRESHOLD`].
/// - `strict_conditioning`: `bool`
///   When `true`, exceeding the threshold aborts the run with
///   `JohansenError::IllConditioned` instead of recording a warning.
///
/// Invariants
/// ----------
/// - `lags ≥ 1` and `condition_threshold` finite and positive whenever the
///   value was produced by [`JohansenOptions::new`] and the `with_*`
///   setters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JohansenOptions {
    pub lags: usize,
    pub det_order: DetOrder,
    pub condition_threshold: f64,
    pub strict_conditioning: bool,
}

impl JohansenOptions {
    /// Construct options with the default conditioning policy.
    ///
    /// Errors
    /// ------
    /// - `JohansenError::InvalidLagOrder { lags, .. }` when `lags == 0` or
    ///   `lags + 1` does not fit in `usize`.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// use rust_cointegration::cointegration::{DetOrder, JohansenOptions};
    ///
    /// let opts = JohansenOptions::new(1, DetOrder::Mean).unwrap();
    /// assert_eq!(opts.effective_lag(), 2);
    /// assert!(JohansenOptions::new(0, DetOrder::Mean).is_err());
    /// ```
    pub fn new(lags: usize, det_order: DetOrder) -> JohansenResult<Self> {
        if lags == 0 || lags.checked_add(1).is_none() {
            return Err(JohansenError::InvalidLagOrder { lags, n_obs: 0 });
        }
        Ok(JohansenOptions {
            lags,
            det_order,
            condition_threshold: DEFAULT_CONDITION_THRESHOLD,
            strict_conditioning: false,
        })
    }

    /// Construct options from the integer deterministic-order flag.
    pub fn from_flags(lags: usize, det_order: i32) -> JohansenResult<Self> {
        JohansenOptions::new(lags, DetOrder::try_from(det_order)?)
    }

    /// Replace the condition threshold.
    ///
    /// Errors
    /// ------
    /// - `JohansenError::InvalidConditionThreshold` when `threshold` is not
    ///   finite or `≤ 0`.
    pub fn with_condition_threshold(mut self, threshold: f64) -> JohansenResult<Self> {
        if !threshold.is_finite() || threshold <= 0.0 {
            return Err(JohansenError::InvalidConditionThreshold { value: threshold });
        }
        self.condition_threshold = threshold;
        Ok(self)
    }

    /// Turn ill-conditioning warnings into hard errors (or back).
    pub fn with_strict_conditioning(mut self, strict: bool) -> Self {
        self.strict_conditioning = strict;
        self
    }

    /// Effective lag `p_eff = lags + 1` used to size the regression window.
    pub fn effective_lag(&self) -> usize {
        self.lags.saturating_add(1)
    }
}
