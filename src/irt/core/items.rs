//! Item parameter containers for logistic response models.
//!
//! Purpose
//! -------
//! Provide the validated per-item parameter record shared by fitting and
//! scoring: a discrimination vector `a` (one weight per trait dimension),
//! an intercept `d`, a guessing floor `c`, and an upper asymptote `gamma`.
//!
//! Key behaviors
//! -------------
//! - [`Item::new`] enforces the parameter invariants (finiteness, asymptote
//!   ranges, `c ≤ gamma`) so downstream numerics can assume clean values.
//! - [`Item::initial`] and [`initial_items`] produce the per-model-type
//!   starting values used at fit initialization.
//!
//! Invariants & assumptions
//! ------------------------
//! - `a` is non-empty and all entries are finite.
//! - `0 ≤ c < 1`, `0 < gamma ≤ 1`, and `c ≤ gamma`, so the response curve
//!   maps the real line into the non-degenerate band `[c, gamma]`.
//! - Items are mutated only by the M-step during fitting, one writer at a
//!   time; once a fit terminates the returned bank is treated as read-only
//!   input to scoring.
//!
//! Conventions
//! -----------
//! - `a[0]` is the discrimination on the quadrature dimension; higher
//!   components exist for multidimensional configurations but are held at
//!   their initial value by the current M-step (see the estimation module).
//! - `d` acts as an intercept: larger `d` shifts the curve toward higher
//!   correctness probability at every trait level.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the happy path, each rejected invariant with its
//!   error payload, and the initialization table for all four model types.
use crate::irt::core::model_type::ModelType;
use crate::irt::errors::{IRTError, IRTResult};
use ndarray::Array1;

/// Item — validated parameters of one 4-parameter logistic item.
///
/// Fields
/// ------
/// - `a`: `Array1<f64>`
///   Discrimination weights, one per trait dimension; finite, non-empty.
/// - `d`: `f64`
///   Intercept (difficulty location); finite.
/// - `c`: `f64`
///   Lower asymptote (guessing floor); `0 ≤ c < 1`.
/// - `gamma`: `f64`
///   Upper asymptote; `0 < gamma ≤ 1` and `gamma ≥ c`.
///
/// Invariants
/// ----------
/// - Enforced at construction by [`Item::new`]; the M-step preserves them
///   because it only translates `d` and `a[0]` by finite amounts.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    /// Discrimination weights, one per trait dimension.
    pub a: Array1<f64>,
    /// Intercept / difficulty location.
    pub d: f64,
    /// Lower asymptote (guessing floor).
    pub c: f64,
    /// Upper asymptote.
    pub gamma: f64,
}

impl Item {
    /// Construct a validated [`Item`] from raw parameters.
    ///
    /// Parameters
    /// ----------
    /// - `a`: `Array1<f64>`
    ///   Discrimination weights; must be non-empty with finite entries.
    /// - `d`: `f64`
    ///   Intercept; must be finite.
    /// - `c`: `f64`
    ///   Lower asymptote; must satisfy `0 ≤ c < 1`.
    /// - `gamma`: `f64`
    ///   Upper asymptote; must satisfy `0 < gamma ≤ 1` and `gamma ≥ c`.
    ///
    /// Returns
    /// -------
    /// `IRTResult<Item>`
    ///   - `Ok(Item)` if all invariants hold.
    ///   - `Err(IRTError)` identifying the first violated constraint.
    ///
    /// Errors
    /// ------
    /// - `IRTError::EmptyDiscrimination` when `a` has no entries.
    /// - `IRTError::NonFiniteParameter` when any of `a`, `d`, `c`, `gamma`
    ///   is NaN/±inf; `name` identifies the offending parameter.
    /// - `IRTError::AsymptoteOutOfRange` when `c` or `gamma` falls outside
    ///   its range or `c > gamma`.
    pub fn new(a: Array1<f64>, d: f64, c: f64, gamma: f64) -> IRTResult<Self> {
        if a.is_empty() {
            return Err(IRTError::EmptyDiscrimination);
        }
        for &weight in a.iter() {
            if !weight.is_finite() {
                return Err(IRTError::NonFiniteParameter { name: "a", value: weight });
            }
        }
        if !d.is_finite() {
            return Err(IRTError::NonFiniteParameter { name: "d", value: d });
        }
        if !c.is_finite() {
            return Err(IRTError::NonFiniteParameter { name: "c", value: c });
        }
        if !gamma.is_finite() {
            return Err(IRTError::NonFiniteParameter { name: "gamma", value: gamma });
        }
        if !(0.0..1.0).contains(&c) {
            return Err(IRTError::AsymptoteOutOfRange {
                c,
                gamma,
                reason: "c must satisfy 0 <= c < 1.",
            });
        }
        if gamma <= 0.0 || gamma > 1.0 {
            return Err(IRTError::AsymptoteOutOfRange {
                c,
                gamma,
                reason: "gamma must satisfy 0 < gamma <= 1.",
            });
        }
        if c > gamma {
            return Err(IRTError::AsymptoteOutOfRange {
                c,
                gamma,
                reason: "c must not exceed gamma.",
            });
        }
        Ok(Item { a, d, c, gamma })
    }

    /// Starting values for one item under the given model type.
    ///
    /// Discrimination is a vector of ones (length `dimensions`), the
    /// intercept is 0, and the asymptotes come from the model-type table
    /// (`c = 0` or `0.2`; `gamma = 1` or `0.95`). Infallible: the table
    /// values satisfy the [`Item`] invariants by construction, and
    /// `dimensions >= 1` is enforced at the model boundary.
    pub fn initial(model_type: ModelType, dimensions: usize) -> Item {
        Item {
            a: Array1::ones(dimensions),
            d: 0.0,
            c: model_type.initial_lower_asymptote(),
            gamma: model_type.initial_upper_asymptote(),
        }
    }
}

/// Allocate the starting item bank for a fit: one [`Item::initial`] per
/// response-matrix column.
pub fn initial_items(model_type: ModelType, dimensions: usize, n_items: usize) -> Vec<Item> {
    (0..n_items).map(|_| Item::initial(model_type, dimensions)).collect()
}
