//! cointegration::errors — error and warning types for the Johansen test.
//!
//! Purpose
//! -------
//! Provide the error enum, result alias, and non-fatal warning type used by
//! every stage of the Johansen pipeline, together with a conversion layer
//! to Python exceptions for the PyO3 bindings.
//!
//! Key behaviors
//! -------------
//! - Define [`JohansenResult`] and [`JohansenError`] as the canonical
//!   result and error types for input validation, configuration, numerical
//!   failures, and critical-value lookups.
//! - Define [`JohansenWarning`] for conditions that degrade precision but
//!   do not invalidate the run (ill-conditioned pseudo-inverses).
//! - Attach human-readable `Display` messages that embed the offending
//!   value so diagnostics are meaningful without extra context.
//! - Implement `From<JohansenError> for PyErr` when the `python-bindings`
//!   feature is enabled.
//!
//! Invariants & assumptions
//! ------------------------
//! - Every fatal condition aborts the current test run; no stage retries
//!   internally. Callers adjust lags, deterministic order, or data and run
//!   again.
//! - Variants carry only small payloads (indices, scalars, static names)
//!   so the enum stays cheap to clone and compare in tests.
//!
//! Conventions
//! -----------
//! - Messages are phrased in terms of the domain constraint that failed
//!   (e.g. "eigenvalue must lie in [0, 1)"), not low-level details.
//! - Matrix names in payloads use the notation of the Johansen derivation
//!   (`"Z Z'"`, `"S00"`, `"S11"`).
//!
//! Testing notes
//! -------------
//! - Unit tests verify that `Display` output embeds each variant's payload.
//! - Error paths are exercised end-to-end by the validation, eigen-solver,
//!   statistics, and critical-value modules.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type JohansenResult<T> = Result<T, JohansenError>;

/// JohansenError — fatal conditions of a Johansen test run.
///
/// Variants
/// --------
/// - `TestNotRun`
///   Critical values were requested before any eigenvalues existed.
/// - `InvalidDeterministicOrder { order }`
///   A deterministic order outside {-1, 0, 1} was supplied.
/// - `RankTableOverflow { n_series, max }`
///   More series than the critical-value tables have rows.
/// - `NumericalDomain { index, value }`
///   An eigenvalue fell outside [0, 1), so `ln(1 − λ)` is undefined.
/// - `NotPositiveDefinite { matrix }`
///   A matrix that must be positive definite (S11) is not.
/// - `IllConditioned { matrix, condition_number, threshold }`
///   A pseudo-inverted matrix exceeded the condition threshold while
///   strict conditioning was requested.
/// - `LinearAlgebra { op }`
///   A factorization backend did not return the requested factors.
/// - `EmptyInput`
///   The observation matrix has no rows or no columns.
/// - `NonFiniteData { row, col, value }`
///   An observation is NaN or ±∞.
/// - `InvalidLagOrder { lags, n_obs }`
///   `lags` is zero or leaves no effective sample (`lags ≥ T − 1`).
/// - `InvalidConditionThreshold { value }`
///   A non-positive or non-finite condition threshold was configured.
/// - `InvalidConfidence { level }`
///   A confidence level other than 0.90, 0.95, or 0.99 was requested.
/// - `ShapeMismatch { expected, found }`
///   A statistic sequence and its critical-value matrix disagree in length.
#[derive(Debug, Clone, PartialEq)]
pub enum JohansenError {
    // ---- Pipeline state ----
    TestNotRun,

    // ---- Configuration ----
    InvalidDeterministicOrder { order: i32 },
    RankTableOverflow { n_series: usize, max: usize },
    InvalidConditionThreshold { value: f64 },
    InvalidConfidence { level: f64 },

    // ---- Input validation ----
    EmptyInput,
    NonFiniteData { row: usize, col: usize, value: f64 },
    InvalidLagOrder { lags: usize, n_obs: usize },
    ShapeMismatch { expected: usize, found: usize },

    // ---- Numerical failures ----
    NumericalDomain { index: usize, value: f64 },
    NotPositiveDefinite { matrix: &'static str },
    IllConditioned { matrix: &'static str, condition_number: f64, threshold: f64 },
    LinearAlgebra { op: &'static str },
}

impl std::error::Error for JohansenError {}

impl std::fmt::Display for JohansenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Pipeline state ----
            JohansenError::TestNotRun => {
                write!(f, "Critical values requested before the eigenvalue problem was solved.")
            }

            // ---- Configuration ----
            JohansenError::InvalidDeterministicOrder { order } => {
                write!(f, "Invalid deterministic order {order}. Must be one of -1, 0, 1.")
            }
            JohansenError::RankTableOverflow { n_series, max } => {
                write!(
                    f,
                    "Too many series ({n_series}). Critical-value tables support at most {max}."
                )
            }
            JohansenError::InvalidConditionThreshold { value } => {
                write!(f, "Invalid condition threshold {value}. Must be finite and positive.")
            }
            JohansenError::InvalidConfidence { level } => {
                write!(f, "Invalid confidence level {level}. Must be one of 0.90, 0.95, 0.99.")
            }

            // ---- Input validation ----
            JohansenError::EmptyInput => {
                write!(f, "Observation matrix must have at least one row and one column.")
            }
            JohansenError::NonFiniteData { row, col, value } => {
                write!(f, "Invalid data value {value} at ({row}, {col}). Must be a finite number.")
            }
            JohansenError::InvalidLagOrder { lags, n_obs } => {
                write!(
                    f,
                    "Invalid lag order {lags} for {n_obs} observations. Must satisfy 1 ≤ lags < T − 1."
                )
            }
            JohansenError::ShapeMismatch { expected, found } => {
                write!(f, "Shape mismatch: expected length {expected}, found {found}.")
            }

            // ---- Numerical failures ----
            JohansenError::NumericalDomain { index, value } => {
                write!(f, "Eigenvalue {index} is {value}; eigenvalues must lie in [0, 1).")
            }
            JohansenError::NotPositiveDefinite { matrix } => {
                write!(f, "{matrix} is not positive definite.")
            }
            JohansenError::IllConditioned { matrix, condition_number, threshold } => {
                write!(
                    f,
                    "{matrix} is ill conditioned: condition number {condition_number:e} exceeds {threshold:e}."
                )
            }
            JohansenError::LinearAlgebra { op } => {
                write!(f, "Linear algebra backend failed during {op}.")
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<JohansenError> for PyErr {
    fn from(err: JohansenError) -> PyErr {
        PyValueError::new_err(format!("JohansenError: {err}"))
    }
}

/// JohansenWarning — non-fatal numerical diagnostics.
///
/// Variants
/// --------
/// - `IllConditionedRegression { condition_number, threshold }`
///   `Z Zᵀ` in the auxiliary regression exceeded the condition threshold;
///   residuals were still computed through the pseudo-inverse.
/// - `IllConditionedS00 { condition_number, threshold }`
///   `S00` exceeded the condition threshold before the eigen-solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JohansenWarning {
    IllConditionedRegression { condition_number: f64, threshold: f64 },
    IllConditionedS00 { condition_number: f64, threshold: f64 },
}

impl std::fmt::Display for JohansenWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JohansenWarning::IllConditionedRegression { condition_number, threshold } => write!(
                f,
                "Auxiliary regression matrix Z Z' is ill conditioned \
                 (condition number {condition_number:e} > {threshold:e}); precision is reduced."
            ),
            JohansenWarning::IllConditionedS00 { condition_number, threshold } => write!(
                f,
                "S00 is ill conditioned (condition number {condition_number:e} > {threshold:e}); \
                 precision is reduced."
            ),
        }
    }
}
