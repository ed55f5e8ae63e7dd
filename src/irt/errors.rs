//! Errors for IRT model fitting and scoring (configuration checks, response
//! data validation, and item-parameter invariants).
//!
//! This module defines a single crate-wide error type, [`IRTError`], used
//! across the Rust core and the Python-facing API. It implements
//! `Display`/`Error` and converts to `PyErr` at the PyO3 boundary.
//!
//! ## Conventions
//! - **Indices are 0-based** (match Rust/NumPy).
//! - Responses are encoded as `f64`: `0.0` (incorrect), `1.0` (correct), or
//!   `NaN` (missing). Any other value is rejected at construction time.
//! - Configuration and malformed-input errors are raised at the boundary
//!   (constructors and `fit`/`score` entry points) and never from inner
//!   numeric loops.
//! - Numeric degeneracy (all-zero likelihoods from extreme response
//!   patterns) is absorbed internally by an evidence floor and is **not**
//!   represented here.
#[cfg(feature = "python-bindings")]
use pyo3::exceptions::PyValueError;
#[cfg(feature = "python-bindings")]
use pyo3::prelude::*;

/// Crate-wide result alias for IRT operations that may produce [`IRTError`].
pub type IRTResult<T> = Result<T, IRTError>;

/// Unified error type for IRT model configuration, data, and parameters.
///
/// Covers model/grid/option configuration, response-matrix validation, and
/// item-parameter invariants. Implements `Display`/`Error` and converts to a
/// Python `ValueError` at PyO3 boundaries.
#[derive(Debug, Clone, PartialEq)]
pub enum IRTError {
    // ---- Configuration ----
    /// Trait dimensionality must be at least 1.
    InvalidDimensions { dimensions: usize },

    /// Quadrature grids need at least two nodes to have a spacing.
    InvalidNodeCount { count: usize },

    /// Unrecognized model-type name.
    InvalidModelType { name: String },

    /// Iteration cap must be strictly positive.
    InvalidMaxIter { max_iter: usize, reason: &'static str },

    /// Learning rate must be finite and strictly positive.
    InvalidLearningRate { value: f64 },

    /// Observer cycle stride must be strictly positive.
    InvalidCycleStride { stride: usize },

    /// Caller-supplied trait vector does not match an item's discrimination
    /// vector length.
    ThetaLengthMismatch { expected: usize, actual: usize },

    /// Supplied item bank does not match the model's trait dimensionality.
    DiscriminationLengthMismatch { expected: usize, actual: usize },

    // ---- Response data ----
    /// Response matrix has no respondents or no items.
    EmptyMatrix,

    /// Response rows must all have the same length.
    RaggedMatrix { row: usize, expected: usize, actual: usize },

    /// Responses must be 0, 1, or NaN (missing).
    InvalidResponseValue { row: usize, col: usize, value: f64 },

    /// Scoring response vector length must equal the item count.
    ResponseLengthMismatch { expected: usize, actual: usize },

    // ---- Model lifecycle ----
    /// Scoring or inspection requested before any items were fitted.
    ModelNotFitted,

    // ---- Item parameters ----
    /// An item needs at least one discrimination weight.
    EmptyDiscrimination,

    /// An item parameter is NaN/±inf.
    NonFiniteParameter { name: &'static str, value: f64 },

    /// Asymptotes must satisfy 0 ≤ c < 1, 0 < gamma ≤ 1, and c ≤ gamma.
    AsymptoteOutOfRange { c: f64, gamma: f64, reason: &'static str },
}

impl std::error::Error for IRTError {}

impl std::fmt::Display for IRTError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Configuration ----
            IRTError::InvalidDimensions { dimensions } => {
                write!(f, "Trait dimensionality must be at least 1; got: {dimensions}")
            }
            IRTError::InvalidNodeCount { count } => {
                write!(f, "Quadrature grid needs at least 2 nodes; got: {count}")
            }
            IRTError::InvalidModelType { name } => {
                write!(
                    f,
                    "Unknown model type '{name}'. Valid options are case insensitive \
                     '1PL', '2PL', '3PL' or '4PL'."
                )
            }
            IRTError::InvalidMaxIter { max_iter, reason } => {
                write!(f, "Invalid iteration cap ({max_iter}): {reason}")
            }
            IRTError::InvalidLearningRate { value } => {
                write!(f, "Learning rate must be finite and > 0; got: {value}")
            }
            IRTError::InvalidCycleStride { stride } => {
                write!(f, "Observer cycle stride must be > 0; got: {stride}")
            }
            IRTError::ThetaLengthMismatch { expected, actual } => {
                write!(f, "Trait vector length mismatch: expected {expected}, got {actual}")
            }
            IRTError::DiscriminationLengthMismatch { expected, actual } => {
                write!(
                    f,
                    "Item discrimination length mismatch: expected {expected}, got {actual}"
                )
            }
            // ---- Response data ----
            IRTError::EmptyMatrix => {
                write!(f, "Response matrix is empty.")
            }
            IRTError::RaggedMatrix { row, expected, actual } => {
                write!(
                    f,
                    "Response rows must have equal length: row {row} has {actual} entries, \
                     expected {expected}"
                )
            }
            IRTError::InvalidResponseValue { row, col, value } => {
                write!(
                    f,
                    "Response at ({row}, {col}) must be 0, 1, or NaN (missing); got: {value}"
                )
            }
            IRTError::ResponseLengthMismatch { expected, actual } => {
                write!(
                    f,
                    "Response vector length must equal the item count: expected {expected}, \
                     got {actual}"
                )
            }
            // ---- Model lifecycle ----
            IRTError::ModelNotFitted => {
                write!(f, "Model hasn't been fitted yet.")
            }
            // ---- Item parameters ----
            IRTError::EmptyDiscrimination => {
                write!(f, "Item discrimination vector must be non-empty.")
            }
            IRTError::NonFiniteParameter { name, value } => {
                write!(f, "Item parameter '{name}' must be finite; got: {value}")
            }
            IRTError::AsymptoteOutOfRange { c, gamma, reason } => {
                write!(f, "Invalid asymptotes (c = {c}, gamma = {gamma}): {reason}")
            }
        }
    }
}

/// Convert an [`IRTError`] into a Python `ValueError` with the error message.
///
/// This is used at the Rust↔Python boundary to surface domain errors cleanly.
#[cfg(feature = "python-bindings")]
impl std::convert::From<IRTError> for PyErr {
    fn from(err: IRTError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
