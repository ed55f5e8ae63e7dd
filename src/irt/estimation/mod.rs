//! estimation — the EM engine: E-step posteriors, M-step updates, fit loop.
//!
//! Purpose
//! -------
//! House the numerical core of item calibration: the per-respondent trait
//! posterior over the quadrature grid ([`posterior`]), the per-item
//! expected-gradient update ([`mstep`]), and the EM loop that alternates
//! them to a terminal state ([`em`]).
//!
//! Key behaviors
//! -------------
//! - [`posterior::estimate`] performs the E-step: discrete Bayesian
//!   updating of the trait prior under local independence, with an
//!   evidence floor absorbing degenerate response patterns.
//! - [`mstep::update_item`] performs the M-step for one item: a fixed
//!   learning-rate ascent step on the expected marginal log-likelihood
//!   gradient, returning the item's convergence signal.
//! - [`em::fit`] / [`em::fit_observed`] orchestrate cycles to
//!   [`Converged`](em::FitStatus::Converged),
//!   [`Exhausted`](em::FitStatus::Exhausted), or observer-driven
//!   [`Cancelled`](em::FitStatus::Cancelled) termination, returning a
//!   caller-owned [`FitOutcome`](em::FitOutcome).
//!
//! Invariants & assumptions
//! ------------------------
//! - Inputs arrive pre-validated: matrices through `ResponseMatrix`,
//!   options through `FitOptions`, dimensionality at the model boundary.
//!   Inner loops therefore carry no validation and no error paths.
//! - Items are the only mutable state; each is written exactly once per
//!   cycle by its own M-step, with posteriors read-only at that point.
//! - Non-convergence is a status, never an error.
//!
//! Conventions
//! -----------
//! - Posteriors are recomputed from scratch every cycle and dropped after
//!   the M-step; nothing numeric survives a cycle except the item bank.
//! - The observer's stride boundary is the crate's only cooperative yield
//!   point and has no effect on results.

pub mod em;
pub mod mstep;
pub mod posterior;

pub use self::em::{
    fit, fit_observed, CycleSnapshot, FitOutcome, FitStatus, CONVERGENCE_TOL,
};
pub use self::mstep::update_item;
pub use self::posterior::{estimate, EVIDENCE_FLOOR};
