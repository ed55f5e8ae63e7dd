//! models — user-facing IRT model API.
//!
//! Purpose
//! -------
//! Expose the calibrate-then-score workflow behind a single façade type,
//! [`IRTModel`], that owns the shared configuration (dimensionality and
//! quadrature grid) and delegates to the estimation engine and scorer.
//!
//! Key behaviors
//! -------------
//! - Boundary validation for caller-supplied trait vectors and item banks.
//! - Stateless fitting: every `fit` returns a caller-owned
//!   [`FitOutcome`](crate::irt::estimation::FitOutcome), enabling
//!   concurrent independent fits from one model value.

pub mod mirt;

pub use self::mirt::IRTModel;
