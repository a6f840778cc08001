//! core — numerical stages of the Johansen procedure.
//!
//! Purpose
//! -------
//! Collect the building blocks that turn a level matrix into Johansen
//! eigenvalues and test statistics: run configuration, deterministic-trend
//! removal, regression matrices, the auxiliary regressions, residual
//! moment matrices, the generalized eigen-solve, and the likelihood-ratio
//! statistics. [`crate::cointegration::johansen::JohansenTest`] wires
//! these stages together.
//!
//! Key behaviors
//! -------------
//! - Describe a run with [`JohansenOptions`] and the small enums
//!   [`DetOrder`], [`Confidence`], [`MaxEigenRankSource`].
//! - Remove deterministic terms in place ([`remove_deterministic_trend`]).
//! - Build `ΔX`, `X₋₁`, `Z` ([`RegressionMatrices`]) and concentrate out
//!   the short-run dynamics ([`AuxiliaryResiduals`]).
//! - Estimate `S00, S01, S10, S11` ([`ResidualCovariances`]), invert `S00`
//!   ([`invert_s00`]) and solve `S10 S00⁺ S01 v = λ S11 v`
//!   ([`solve_generalized_eigen`]).
//! - Compute trace and max-eigen statistics ([`trace_stat`],
//!   [`max_eigen_stat`]).
//!
//! Invariants & assumptions
//! ------------------------
//! - Stages run strictly in the order above; none re-enters an earlier
//!   stage.
//! - Inputs reaching these stages have passed
//!   `cointegration::validation::validate_input`, so shapes are consistent
//!   and every value is finite.
//! - Eigenvalues leaving [`solve_generalized_eigen`] are descending and in
//!   `[0, 1)`.
//!
//! Conventions
//! -----------
//! - Observation matrices are `T × n` (rows = time). Derived regression
//!   matrices are `n × m` or `k × m` (columns = time), with
//!   `m = T − p_eff`.
//! - This module never logs. Conditioning diagnostics are returned as
//!   values and turned into warnings or errors by the orchestrator.
//!
//! Testing notes
//! -------------
//! - Unit tests in each submodule use hand-sized matrices with closed-form
//!   answers. End-to-end behavior on simulated random walks lives in
//!   `tests/integration_johansen_pipeline.rs`.

pub mod covariance;
pub mod detrend;
pub mod eigen;
pub mod options;
pub mod regression;
pub mod statistics;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::covariance::ResidualCovariances;
pub use self::detrend::remove_deterministic_trend;
pub use self::eigen::{GeneralizedEigen, invert_s00, solve_generalized_eigen};
pub use self::options::{Confidence, DetOrder, JohansenOptions, MaxEigenRankSource};
pub use self::regression::{AuxiliaryResiduals, RegressionMatrices};
pub use self::statistics::{max_eigen_stat, trace_stat};
