//! Conversion helpers for the PyO3 binding surface.
//!
//! Purpose
//! -------
//! Coerce Python-side inputs (numpy arrays, pandas objects, or plain
//! sequences) into the validated Rust containers the `irt` stack consumes,
//! and assemble validated [`FitOptions`] from optional Python keyword
//! arguments with the documented defaults.
//!
//! Conventions
//! -----------
//! - Missing responses travel as NaN in float arrays, matching the core
//!   encoding; no separate sentinel is accepted.
//! - All validation errors surface as Python `ValueError`s through the
//!   `IRTError` conversion; type coercion failures raise `TypeError`.
#[cfg(feature = "python-bindings")]
use crate::irt::core::{FitOptions, ModelType, ResponseMatrix};

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use numpy::{
    IntoPyArray,    // Vec → PyArray
    PyArrayMethods, // .readonly()
    PyReadonlyArray1, PyReadonlyArray2,
};

/// Coerce a Python object into a read-only 1-D `f64` array.
///
/// Accepts, in order: a contiguous 1-D `numpy.ndarray` of float64, any
/// object exposing `to_numpy` (e.g. `pandas.Series`), or a plain sequence
/// of floats (copied into a fresh array).
#[cfg(feature = "python-bindings")]
#[inline]
pub fn extract_f64_array<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<PyReadonlyArray1<'py, f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray1<f64>>() {
        if arr_ro.as_slice().is_ok() {
            return Ok(arr_ro);
        }
    }

    if let Ok(obj) = raw_data.call_method("to_numpy", (false,), None) {
        if let Ok(series_ro) = obj.extract::<PyReadonlyArray1<f64>>() {
            if series_ro.as_slice().is_ok() {
                return Ok(series_ro);
            }
        }
    }

    let vec: Vec<f64> = raw_data.extract().map_err(|_| {
        pyo3::exceptions::PyTypeError::new_err(
            "expected a 1-D numpy.ndarray, pandas.Series, or sequence of float64",
        )
    })?;
    Ok(vec.into_pyarray(py).readonly())
}

/// Coerce a Python object into a validated [`ResponseMatrix`].
///
/// Accepts a 2-D `numpy.ndarray` of float64, any object exposing
/// `to_numpy` (e.g. `pandas.DataFrame`), or a nested sequence of rows;
/// the nested-sequence path also detects ragged input with a row-level
/// error message.
#[cfg(feature = "python-bindings")]
pub fn extract_response_matrix<'py>(
    _py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<ResponseMatrix> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray2<f64>>() {
        return Ok(ResponseMatrix::new(arr_ro.as_array().to_owned())?);
    }

    if let Ok(obj) = raw_data.call_method("to_numpy", (false,), None) {
        if let Ok(frame_ro) = obj.extract::<PyReadonlyArray2<f64>>() {
            return Ok(ResponseMatrix::new(frame_ro.as_array().to_owned())?);
        }
    }

    let rows: Vec<Vec<f64>> = raw_data.extract().map_err(|_| {
        pyo3::exceptions::PyTypeError::new_err(
            "expected a 2-D numpy.ndarray, pandas.DataFrame, or nested sequence of float64",
        )
    })?;
    Ok(ResponseMatrix::from_rows(&rows)?)
}

/// Assemble validated [`FitOptions`] from optional Python keyword values.
///
/// Applies the documented defaults (2PL, 100 cycles, learning rate 0.05,
/// stride 5) for any argument left as `None`; explicit values pass through
/// the same validation as native Rust callers.
#[cfg(feature = "python-bindings")]
pub fn extract_fit_options(
    model_type: Option<&str>, max_iter: Option<usize>, learning_rate: Option<f64>,
    cycle_stride: Option<usize>,
) -> PyResult<FitOptions> {
    let defaults = FitOptions::default();
    let model_type = match model_type {
        Some(name) => name.parse::<ModelType>()?,
        None => defaults.model_type,
    };
    let options = FitOptions::new(
        model_type,
        max_iter.unwrap_or(defaults.max_iter),
        learning_rate.unwrap_or(defaults.learning_rate),
        cycle_stride.unwrap_or(defaults.cycle_stride),
    )?;
    Ok(options)
}
