//! rust_mirt — item response theory calibration with Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that
//! exposes the IRT calibration and scoring routines to Python via the
//! `_rust_mirt` extension module. When the `python-bindings` feature is
//! enabled, this module defines the Python-facing classes used by the
//! `rust_mirt` package.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust module (`irt`) as the public crate surface.
//! - Define `#[pyclass]` wrappers and the `#[pymodule]` initializer for the
//!   `_rust_mirt` Python extension.
//!
//! Invariants & assumptions
//! ------------------------
//! - All heavy numerical work is implemented in the inner `irt` modules;
//!   this file performs only FFI glue, input validation, and error mapping.
//! - When `python-bindings` is enabled, the Python-visible types mirror the
//!   invariants and signatures of their Rust counterparts (`IRTModel`,
//!   `FitOutcome`).
//!
//! Conventions
//! -----------
//! - The Rust core keeps fitted items caller-owned; the Python wrapper
//!   caches the latest [`FitOutcome`](crate::irt::FitOutcome) purely as an
//!   ergonomic convenience for scripting workflows.
//! - Errors from core Rust code are propagated as `IRTError` internally and
//!   converted to `PyErr` values at the PyO3 boundary.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should depend directly on the `irt` module (or its
//!   prelude) and can ignore the PyO3 items guarded by the
//!   `python-bindings` feature.
//! - External Python users interact with the `Mirt` class: construct,
//!   `fit(responses, ...)`, then `score_eap(responses)`.
//!
//! Testing notes
//! -------------
//! - Core numerical behavior is covered by unit tests in the inner modules
//!   and by the integration suite under `tests/`.
//! - The PyO3 layer is thin by design and exercised by Python-side smoke
//!   tests in downstream packaging.

pub mod irt;
pub mod utils;

#[cfg(feature = "python-bindings")]
use ndarray::Array1;

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    irt::{
        errors::IRTError,
        estimation::{FitOutcome, FitStatus},
        models::IRTModel,
        scoring,
    },
    utils::{extract_f64_array, extract_fit_options, extract_response_matrix},
};

/// Mirt — Python-facing wrapper for IRT calibration and EAP scoring.
///
/// Purpose
/// -------
/// Expose the [`IRTModel`] API to Python callers while preserving the core
/// Rust invariants and error handling. The wrapper caches the most recent
/// fit so scripting code can call `score_eap` without threading an item
/// bank by hand.
///
/// Key behaviors
/// -------------
/// - Validate and convert Python inputs (numpy arrays, pandas objects, or
///   nested sequences) into validated Rust containers.
/// - Run EM calibration via [`IRTModel::fit`] and store the outcome
///   internally for inspection and scoring.
/// - Expose the fitted parameters and diagnostics through the
///   `MirtFitOutcome` wrapper.
///
/// Parameters
/// ----------
/// Constructed from Python via `Mirt(dimensions=1, quadrature_points=None)`:
/// - `dimensions`: `usize`
///   Trait dimensionality; must be at least 1. Defaults to 1.
/// - `quadrature_points`: `Option<usize>`
///   Node count for the shared quadrature grid; defaults to the crate's
///   default resolution. Must be at least 2 when given.
///
/// Notes
/// -----
/// - Native Rust callers should prefer [`IRTModel`] directly; this type
///   exists solely for the PyO3 binding surface.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "rust_mirt")]
pub struct Mirt {
    /// Underlying Rust model configuration.
    inner: IRTModel,
    /// Latest fit, cached for scoring convenience.
    outcome: Option<FitOutcome>,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl Mirt {
    #[new]
    #[pyo3(
        signature = (dimensions = 1, quadrature_points = None),
        text_signature = "(dimensions=1, quadrature_points=None)"
    )]
    pub fn new(dimensions: usize, quadrature_points: Option<usize>) -> PyResult<Self> {
        let inner = match quadrature_points {
            Some(points) => IRTModel::with_quadrature(dimensions, points)?,
            None => IRTModel::new(dimensions)?,
        };
        Ok(Mirt { inner, outcome: None })
    }

    /// Calibrate an item bank against a respondents × items response
    /// matrix (entries 0, 1, or NaN for missing) and cache the outcome.
    #[pyo3(
        signature = (
            responses,
            model_type = None,
            max_iter = None,
            learning_rate = None,
            cycle_stride = None,
        ),
        text_signature = "(self, responses, /, model_type='2PL', max_iter=100, \
                          learning_rate=0.05, cycle_stride=5)"
    )]
    pub fn fit<'py>(
        &mut self, py: Python<'py>, responses: &Bound<'py, PyAny>, model_type: Option<&str>,
        max_iter: Option<usize>, learning_rate: Option<f64>, cycle_stride: Option<usize>,
    ) -> PyResult<MirtFitOutcome> {
        let matrix = extract_response_matrix(py, responses)?;
        let options = extract_fit_options(model_type, max_iter, learning_rate, cycle_stride)?;
        let outcome = self.inner.fit(&matrix, &options)?;
        self.outcome = Some(outcome.clone());
        Ok(MirtFitOutcome { inner: outcome })
    }

    /// EAP trait estimate for one response vector against the cached bank.
    #[pyo3(text_signature = "(self, responses, /)")]
    pub fn score_eap<'py>(
        &self, py: Python<'py>, responses: &Bound<'py, PyAny>,
    ) -> PyResult<f64> {
        let outcome = self.outcome.as_ref().ok_or(IRTError::ModelNotFitted)?;
        let arr = extract_f64_array(py, responses)?;
        let vector = Array1::from(
            arr.as_slice()
                .map_err(|_| {
                    pyo3::exceptions::PyValueError::new_err(
                        "responses must be a contiguous 1-D float64 array or sequence",
                    )
                })?
                .to_vec(),
        );
        Ok(self.inner.score_eap(vector.view(), &outcome.items)?)
    }

    /// Response probability for a trait vector under one fitted item.
    #[pyo3(text_signature = "(self, theta, item_index, /)")]
    pub fn probability<'py>(
        &self, py: Python<'py>, theta: &Bound<'py, PyAny>, item_index: usize,
    ) -> PyResult<f64> {
        let outcome = self.outcome.as_ref().ok_or(IRTError::ModelNotFitted)?;
        let item = outcome.items.get(item_index).ok_or_else(|| {
            pyo3::exceptions::PyIndexError::new_err(format!(
                "item index {item_index} out of range for {} fitted items",
                outcome.items.len()
            ))
        })?;
        let arr = extract_f64_array(py, theta)?;
        let vector = Array1::from(
            arr.as_slice()
                .map_err(|_| {
                    pyo3::exceptions::PyValueError::new_err(
                        "theta must be a contiguous 1-D float64 array or sequence",
                    )
                })?
                .to_vec(),
        );
        Ok(self.inner.probability(vector.view(), item)?)
    }

    /// Test information of the cached bank at a scalar trait level.
    #[pyo3(text_signature = "(self, theta, /)")]
    pub fn test_information(&self, theta: f64) -> PyResult<f64> {
        let outcome = self.outcome.as_ref().ok_or(IRTError::ModelNotFitted)?;
        Ok(scoring::test_information(theta, &outcome.items))
    }

    #[getter]
    pub fn outcome(&self) -> PyResult<MirtFitOutcome> {
        match &self.outcome {
            Some(outcome) => Ok(MirtFitOutcome { inner: outcome.clone() }),
            None => Err(IRTError::ModelNotFitted.into()),
        }
    }
}

/// MirtFitOutcome — fitted parameters and diagnostics exposed to Python.
///
/// Purpose
/// -------
/// Present the item bank and termination diagnostics from a completed fit
/// in a lightweight, read-only wrapper.
///
/// Key behaviors
/// -------------
/// - Hold the fitted item parameters plus terminal status, cycle count,
///   and the last maximum per-item change.
/// - Provide accessors that copy the underlying values into Python-owned
///   containers.
///
/// Notes
/// -----
/// - Instances are produced by `Mirt.fit` / `Mirt.outcome` and are not
///   created directly by user code. Rust callers should use
///   [`FitOutcome`](crate::irt::FitOutcome) directly.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "rust_mirt")]
pub struct MirtFitOutcome {
    /// Underlying Rust fit outcome.
    pub inner: FitOutcome,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl MirtFitOutcome {
    #[getter]
    pub fn discriminations(&self) -> Vec<Vec<f64>> {
        self.inner.items.iter().map(|item| item.a.to_vec()).collect()
    }

    #[getter]
    pub fn intercepts(&self) -> Vec<f64> {
        self.inner.items.iter().map(|item| item.d).collect()
    }

    #[getter]
    pub fn lower_asymptotes(&self) -> Vec<f64> {
        self.inner.items.iter().map(|item| item.c).collect()
    }

    #[getter]
    pub fn upper_asymptotes(&self) -> Vec<f64> {
        self.inner.items.iter().map(|item| item.gamma).collect()
    }

    #[getter]
    pub fn converged(&self) -> bool {
        self.inner.status == FitStatus::Converged
    }

    #[getter]
    pub fn status(&self) -> String {
        format!("{:?}", self.inner.status)
    }

    #[getter]
    pub fn cycles(&self) -> usize {
        self.inner.cycles
    }

    #[getter]
    pub fn max_change(&self) -> f64 {
        self.inner.max_change
    }
}

/// _rust_mirt — PyO3 module initializer for the Python extension.
///
/// Registers the `Mirt` and `MirtFitOutcome` classes on the compiled
/// `_rust_mirt` module; the pure-Python `rust_mirt` package wraps them in
/// user-facing APIs. Invoked automatically by Python on import.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _rust_mirt<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    m.add_class::<Mirt>()?;
    m.add_class::<MirtFitOutcome>()?;
    Ok(())
}
