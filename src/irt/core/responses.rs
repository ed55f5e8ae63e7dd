//! Response-matrix container for binary test data.
//!
//! Purpose
//! -------
//! Provide a small, validated container for dichotomous response data used
//! by the EM fit loop and the EAP scorer. This module centralizes input
//! validation for raw response matrices and standardizes the missing-data
//! encoding.
//!
//! Key behaviors
//! -------------
//! - [`ResponseMatrix`] enforces the basic data invariants (non-empty,
//!   entries restricted to 0, 1, or NaN-for-missing).
//! - [`ResponseMatrix::from_rows`] additionally detects ragged row input
//!   before it can reach an `Array2`, reporting the first offending row.
//!
//! Invariants & assumptions
//! ------------------------
//! - The matrix has at least one respondent row and one item column.
//! - Every entry is exactly `0.0`, exactly `1.0`, or `NaN` (missing).
//! - Rows index respondents, columns index items; the matrix is read-only
//!   throughout fitting and scoring.
//!
//! Conventions
//! -----------
//! - Indexing is 0-based and row-major (match Rust/NumPy).
//! - Missing responses contribute a multiplicative factor of 1 to
//!   likelihoods, i.e. they are skipped, never imputed. The [`is_present`]
//!   helper is the single point of truth for the encoding.
//!
//! Downstream usage
//! ----------------
//! - Construct a [`ResponseMatrix`] at the boundary where raw data enters
//!   the fitting stack; the estimation modules assume its invariants and
//!   perform no re-validation.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the happy path, the empty and ragged rejections, and
//!   the entry-domain check with its index payload.
use crate::irt::errors::{IRTError, IRTResult};
use ndarray::Array2;

/// Whether a response entry carries an observation (i.e. is not missing).
///
/// Missing responses are encoded as `NaN`; everything else in a validated
/// matrix is an observed 0 or 1.
#[inline]
pub fn is_present(value: f64) -> bool {
    !value.is_nan()
}

/// ResponseMatrix — validated respondents × items binary response data.
///
/// Purpose
/// -------
/// Represent a complete response dataset for one fit: one row per
/// respondent, one column per item, entries in {0, 1, missing}. This type
/// centralizes validation so the E-step, M-step, and scorer can assume
/// clean input.
///
/// Fields
/// ------
/// - `data`: `Array2<f64>`
///   Row-major response matrix with entries 0.0, 1.0, or `NaN`.
///
/// Invariants
/// ----------
/// - `data.nrows() > 0` and `data.ncols() > 0`.
/// - Every non-NaN entry equals 0.0 or 1.0 exactly.
///
/// Performance
/// -----------
/// - Validation is a single O(rows·cols) scan; afterwards the type is a
///   plain container with no hidden allocations.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseMatrix {
    /// Responses: rows are respondents, columns are items; NaN is missing.
    pub data: Array2<f64>,
}

impl ResponseMatrix {
    /// Construct a validated [`ResponseMatrix`] from a dense array.
    ///
    /// Parameters
    /// ----------
    /// - `data`: `Array2<f64>`
    ///   Candidate response matrix. Must be non-empty in both dimensions
    ///   with every entry 0.0, 1.0, or `NaN`.
    ///
    /// Returns
    /// -------
    /// `IRTResult<ResponseMatrix>`
    ///   - `Ok(ResponseMatrix)` when all invariants hold.
    ///   - `Err(IRTError)` identifying the first violation.
    ///
    /// Errors
    /// ------
    /// - `IRTError::EmptyMatrix`
    ///   Returned when the matrix has zero rows or zero columns.
    /// - `IRTError::InvalidResponseValue { row, col, value }`
    ///   Returned when an entry is neither 0, 1, nor NaN; the indices point
    ///   to the first offending entry.
    ///
    /// Panics
    /// ------
    /// - Never panics. All invalid inputs are reported via `IRTError`.
    pub fn new(data: Array2<f64>) -> IRTResult<Self> {
        if data.nrows() == 0 || data.ncols() == 0 {
            return Err(IRTError::EmptyMatrix);
        }
        for ((row, col), &value) in data.indexed_iter() {
            if is_present(value) && value != 0.0 && value != 1.0 {
                return Err(IRTError::InvalidResponseValue { row, col, value });
            }
        }
        Ok(ResponseMatrix { data })
    }

    /// Construct a validated [`ResponseMatrix`] from per-respondent rows.
    ///
    /// This is the entry point for callers holding row-oriented data (e.g.
    /// nested Python lists): it checks for ragged input before packing the
    /// rows into a dense array, then applies the same validation as
    /// [`ResponseMatrix::new`].
    ///
    /// Errors
    /// ------
    /// - `IRTError::EmptyMatrix` when there are no rows or the first row is
    ///   empty.
    /// - `IRTError::RaggedMatrix { row, expected, actual }` when a row's
    ///   length differs from the first row's.
    /// - `IRTError::InvalidResponseValue` as in [`ResponseMatrix::new`].
    pub fn from_rows(rows: &[Vec<f64>]) -> IRTResult<Self> {
        if rows.is_empty() || rows[0].is_empty() {
            return Err(IRTError::EmptyMatrix);
        }
        let n_items = rows[0].len();
        for (row, entries) in rows.iter().enumerate() {
            if entries.len() != n_items {
                return Err(IRTError::RaggedMatrix {
                    row,
                    expected: n_items,
                    actual: entries.len(),
                });
            }
        }
        let flat: Vec<f64> = rows.iter().flatten().copied().collect();
        let data = Array2::from_shape_vec((rows.len(), n_items), flat)
            .expect("row lengths verified above");
        ResponseMatrix::new(data)
    }

    /// Number of respondents (rows).
    pub fn n_respondents(&self) -> usize {
        self.data.nrows()
    }

    /// Number of items (columns).
    pub fn n_items(&self) -> usize {
        self.data.ncols()
    }
}
