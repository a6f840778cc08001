//! rust_cointegration — Johansen cointegration testing with Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that
//! exposes the Johansen cointegration rank test to Python via the
//! `_rust_cointegration` extension module.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules (`cointegration`,
//!   `numerical_stability`) as the public crate surface.
//! - Define the `Johansen` `#[pyclass]` and the `#[pymodule]` initializer
//!   when the `python-bindings` feature is enabled.
//! - Register the `cointegration` Python submodule under
//!   `rust_cointegration` so dotted imports work.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work lives in the inner Rust modules; this file only
//!   performs FFI glue, input conversion, and error mapping.
//! - Python-visible names follow statsmodels' `coint_johansen` result
//!   (`eig`, `evec`, `lr1`, `lr2`, `cvt`, `cvm`) so results can be
//!   compared side by side.
//!
//! Conventions
//! -----------
//! - Errors from core Rust code are [`cointegration::JohansenError`]
//!   values internally and become `ValueError` at the Python boundary.
//!
//! Testing notes
//! -------------
//! - Core numerical behavior is covered by unit tests in the inner modules
//!   and by `tests/integration_johansen_pipeline.rs`.

pub mod cointegration;
pub mod numerical_stability;
pub mod utils;

#[cfg(feature = "python-bindings")]
use numpy::{PyArray1, PyArray2, ToPyArray};

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    cointegration::{Confidence, JohansenOptions, JohansenTest, MaxEigenRankSource},
    utils::extract_f64_matrix,
};

/// Johansen — Python-facing wrapper for the Johansen cointegration test.
///
/// Parameters
/// ----------
/// Constructed from Python via
/// `Johansen(data, lags=1, det_order=0, condition_threshold=None, strict=False)`:
/// - `data`: 2-D array-like, rows = time, columns = series (≤ 12).
/// - `lags`: number of lagged-difference terms, `≥ 1`.
/// - `det_order`: `-1` (none), `0` (constant), or `1` (linear trend).
/// - `condition_threshold`: optional override of the default `1e12`.
/// - `strict`: raise instead of warning on ill-conditioned matrices.
///
/// Notes
/// -----
/// - Ill-conditioning warnings are exposed as strings via `warnings`.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "rust_cointegration.cointegration")]
pub struct Johansen {
    inner: JohansenTest,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl Johansen {
    #[new]
    #[pyo3(
        text_signature = "(data, /, lags=1, det_order=0, condition_threshold=None, strict=False)",
        signature = (raw_data, lags = 1, det_order = 0, condition_threshold = None, strict = false)
    )]
    pub fn new<'py>(
        py: Python<'py>, raw_data: &Bound<'py, PyAny>, lags: usize, det_order: i32,
        condition_threshold: Option<f64>, strict: bool,
    ) -> PyResult<Johansen> {
        let data = extract_f64_matrix(py, raw_data)?;

        let mut opts =
            JohansenOptions::from_flags(lags, det_order)?.with_strict_conditioning(strict);
        if let Some(threshold) = condition_threshold {
            opts = opts.with_condition_threshold(threshold)?;
        }

        let inner = JohansenTest::new(data.view(), opts)?;
        Ok(Johansen { inner })
    }

    /// Eigenvalues, descending.
    #[getter]
    pub fn eig<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        self.inner.eigenvalues().to_pyarray(py)
    }

    /// Cointegration vectors; column k pairs with eig[k].
    #[getter]
    pub fn evec<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray2<f64>> {
        self.inner.cointegration_vectors().to_pyarray(py)
    }

    /// Trace statistics.
    #[getter]
    pub fn lr1<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        self.inner.trace_stat().to_pyarray(py)
    }

    /// Maximum-eigenvalue statistics.
    #[getter]
    pub fn lr2<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        self.inner.max_eigen_stat().to_pyarray(py)
    }

    /// Trace critical values (90/95/99 %).
    #[getter]
    pub fn cvt<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray2<f64>> {
        self.inner.cvt().to_pyarray(py)
    }

    /// Maximum-eigenvalue critical values (90/95/99 %).
    #[getter]
    pub fn cvm<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray2<f64>> {
        self.inner.cvm().to_pyarray(py)
    }

    #[getter]
    pub fn nobs(&self) -> usize {
        self.inner.n_obs()
    }

    #[getter]
    pub fn effective_nobs(&self) -> usize {
        self.inner.effective_sample_size()
    }

    #[getter]
    pub fn lags(&self) -> usize {
        self.inner.lags()
    }

    #[getter]
    pub fn det_order(&self) -> i32 {
        self.inner.det_order().as_i32()
    }

    #[getter]
    pub fn warnings(&self) -> Vec<String> {
        self.inner.warnings().iter().map(ToString::to_string).collect()
    }

    /// Select the cointegration rank.
    ///
    /// Returns `(trace_rank, max_eigen_rank, rank)` where `rank` is the
    /// minimum of the two. `max_eigen_source="trace"` feeds the trace
    /// statistics to the max-eigenvalue rule, for comparison with tools
    /// that pair them that way.
    #[pyo3(signature = (confidence = 0.99, max_eigen_source = "max_eigen"))]
    pub fn rank(&self, confidence: f64, max_eigen_source: &str) -> PyResult<(usize, usize, usize)> {
        let confidence = Confidence::from_level(confidence)?;
        let source = match max_eigen_source {
            "max_eigen" => MaxEigenRankSource::MaxEigenStatistic,
            "trace" => MaxEigenRankSource::TraceStatistic,
            other => {
                return Err(PyValueError::new_err(format!(
                    "max_eigen_source must be 'max_eigen' or 'trace', got '{other}'"
                )));
            }
        };
        let sel = self.inner.select_rank_with(confidence, source)?;
        Ok((sel.trace_rank, sel.max_eigen_rank, sel.rank))
    }
}

/// _rust_cointegration — PyO3 module initializer for the Python extension.
///
/// Key behaviors
/// -------------
/// - Create the `cointegration` submodule and attach it to
///   `_rust_cointegration`.
/// - Register it in `sys.modules` as `rust_cointegration.cointegration` so
///   it is importable via a dotted path.
///
/// Errors
/// ------
/// - `PyErr` if creating the submodule or manipulating `sys.modules` fails.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _rust_cointegration<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let cointegration_mod = PyModule::new(_py, "cointegration")?;
    cointegration(_py, m, &cointegration_mod)?;

    // Manually add the submodule into sys.modules to allow for dot notation.
    _py.import("sys")?
        .getattr("modules")?
        .set_item("rust_cointegration.cointegration", cointegration_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn cointegration<'py>(
    _py: Python, rust_cointegration: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<Johansen>()?;
    rust_cointegration.add_submodule(m)?;
    Ok(())
}
