//! cointegration — Johansen cointegration rank testing.
//!
//! Purpose
//! -------
//! Determine how many linearly independent stationary combinations exist
//! among the columns of a multivariate time series, using the Johansen
//! maximum-likelihood procedure with trace and maximum-eigenvalue
//! statistics.
//!
//! Key behaviors
//! -------------
//! - [`JohansenTest`] runs the full pipeline on a `T × n` level matrix:
//!   validation, deterministic-trend removal, auxiliary regressions,
//!   residual moment matrices, generalized eigen-solve, statistics, and
//!   critical values.
//! - [`JohansenOptions`] configures lags, the deterministic order
//!   ([`DetOrder`]), and the conditioning policy.
//! - Rank decisions come from [`JohansenTest::select_rank`] as a
//!   [`RankSelection`] at a chosen [`Confidence`].
//! - Failures are reported as [`JohansenError`]; non-fatal numerical
//!   diagnostics as [`JohansenWarning`].
//!
//! Invariants & assumptions
//! ------------------------
//! - At most [`MAX_SERIES`] (12) series, bounded by the critical-value
//!   tables.
//! - User-facing invalid inputs never panic; they surface through
//!   [`JohansenResult`].
//!
//! Conventions
//! -----------
//! - Input matrices are rows = time, columns = series.
//! - Statistic and critical-value index `r` refers to the null hypothesis
//!   `rank ≤ r`.
//!
//! Downstream usage
//! ----------------
//! - Typical Rust code:
//!
//!   ```rust
//!   # use ndarray::Array2;
//!   use rust_cointegration::cointegration::prelude::*;
//!
//!   # fn run(data: Array2<f64>) -> JohansenResult<()> {
//!   let opts = JohansenOptions::new(1, DetOrder::Mean)?;
//!   let test = JohansenTest::new(data.view(), opts)?;
//!   let sel = test.select_rank(Confidence::P95)?;
//!   println!("rank = {}", sel.rank);
//!   # Ok(())
//!   # }
//!   ```
//!
//! Testing notes
//! -------------
//! - Unit tests live next to each stage; [`critical_values`] and
//!   `core::statistics` carry property tests.
//! - `tests/integration_johansen_pipeline.rs` checks rank decisions on
//!   simulated independent and cointegrated random walks.

pub mod core;
pub mod critical_values;
pub mod errors;
pub mod johansen;
pub mod rank;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::core::{Confidence, DetOrder, JohansenOptions, MaxEigenRankSource};
pub use self::critical_values::{MAX_SERIES, StatisticKind, TableKey};
pub use self::errors::{JohansenError, JohansenResult, JohansenWarning};
pub use self::johansen::JohansenTest;
pub use self::rank::{RankSelection, select_rank};
pub use self::validation::validate_input;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rust_cointegration::cointegration::prelude::*;
//
// to import the main cointegration surface in a single line.

pub mod prelude {
    pub use super::core::{Confidence, DetOrder, JohansenOptions, MaxEigenRankSource};
    pub use super::errors::{JohansenError, JohansenResult, JohansenWarning};
    pub use super::johansen::JohansenTest;
    pub use super::rank::RankSelection;
}
