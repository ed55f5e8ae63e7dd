//! core — shared IRT data, parameters, and the response function.
//!
//! Purpose
//! -------
//! Collect the core building blocks for logistic item response models:
//! validated response-data and item-parameter containers, the quadrature
//! discretization of the trait prior, the model-family enum, fit options,
//! and the 4-parameter logistic response function. The estimation and
//! scoring layers build on top of these primitives.
//!
//! Key behaviors
//! -------------
//! - Define configuration and parameter types ([`ModelType`], [`FitOptions`],
//!   [`Item`]) plus the validated data container ([`ResponseMatrix`]).
//! - Implement the trait-prior discretization ([`QuadratureGrid`]) shared by
//!   fitting and scoring.
//! - Implement the response probability surface ([`probability`],
//!   [`probability_at_node`]) with overflow-guarded logistic evaluation.
//!
//! Invariants & assumptions
//! ------------------------
//! - Responses stored in [`ResponseMatrix`] are 0/1/NaN-encoded and
//!   rectangular; item parameters satisfy the asymptote ordering
//!   `0 ≤ c ≤ gamma ≤ 1`; grids carry normalized, symmetric prior weights.
//! - All containers validate at construction so inner loops are free of
//!   checks; mismatches surface as [`IRTError`](crate::irt::errors::IRTError)
//!   rather than silently truncating.
//!
//! Conventions
//! -----------
//! - Indexing is 0-based throughout; rows are respondents, columns items.
//! - This module performs no I/O and no logging; it operates purely on
//!   `ndarray` containers and scalar values.

pub mod grid;
pub mod items;
pub mod model_type;
pub mod options;
pub mod probability;
pub mod responses;

pub use self::grid::{QuadratureGrid, DEFAULT_QUADRATURE_POINTS, THETA_RANGE};
pub use self::items::{initial_items, Item};
pub use self::model_type::ModelType;
pub use self::options::FitOptions;
pub use self::probability::{probability, probability_at_node};
pub use self::responses::{is_present, ResponseMatrix};
