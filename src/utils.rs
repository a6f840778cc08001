//! utils — Python input conversion helpers for the PyO3 bindings.
//!
//! Everything here is compiled only with the `python-bindings` feature.
#[cfg(feature = "python-bindings")]
use ndarray::Array2;

#[cfg(feature = "python-bindings")]
use numpy::PyReadonlyArray2;

#[cfg(feature = "python-bindings")]
use pyo3::{
    exceptions::PyTypeError,
    prelude::*,
    types::{PyAny, PyDict},
};

#[cfg(feature = "python-bindings")]
const MATRIX_TYPE_ERROR: &str =
    "expected a 2-D numpy.ndarray, pandas.DataFrame, or sequence of float64 rows";

/// Copy a Python 2-D array-like into an owned `T × n` matrix.
///
/// Accepts, in order of preference:
/// - a `float64` `numpy.ndarray` (any memory layout),
/// - an object with `to_numpy(dtype="float64")` such as a `pandas.DataFrame`,
/// - a sequence of equally long sequences of floats.
///
/// Errors
/// ------
/// - `TypeError` when none of the forms apply or the rows are ragged.
#[cfg(feature = "python-bindings")]
pub fn extract_f64_matrix<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<Array2<f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray2<f64>>() {
        return Ok(arr_ro.as_array().to_owned());
    }

    let kwargs = PyDict::new(py);
    kwargs.set_item("dtype", "float64")?;
    if let Ok(obj) = raw_data.call_method("to_numpy", (), Some(&kwargs)) {
        if let Ok(frame_ro) = obj.extract::<PyReadonlyArray2<f64>>() {
            return Ok(frame_ro.as_array().to_owned());
        }
    }

    let rows: Vec<Vec<f64>> =
        raw_data.extract().map_err(|_| PyTypeError::new_err(MATRIX_TYPE_ERROR))?;
    let n_cols = rows.first().map_or(0, Vec::len);
    if rows.iter().any(|r| r.len() != n_cols) {
        return Err(PyTypeError::new_err("all rows must have the same length"));
    }
    let n_rows = rows.len();
    Array2::from_shape_vec((n_rows, n_cols), rows.into_iter().flatten().collect())
        .map_err(|_| PyTypeError::new_err(MATRIX_TYPE_ERROR))
}
