//! irt — logistic item response models: core numerics, estimation, scoring.
//!
//! Purpose
//! -------
//! Provide a cohesive item-response-theory layer that bundles validated
//! data/parameter types, the quadrature-based EM estimation engine, EAP
//! scoring with information diagnostics, and shared error types under a
//! single namespace. This is the main entry point for IRT calibration in
//! the crate, and the surface Python bindings depend on.
//!
//! Key behaviors
//! -------------
//! - Collect core building blocks in [`core`]: response-matrix and item
//!   containers, the model-family enum, fit options, the quadrature grid,
//!   and the 4-parameter logistic response function.
//! - Run calibration in [`estimation`]: E-step posteriors, fixed-step
//!   M-step gradient updates, and the EM loop with observer-driven
//!   yielding and cancellation.
//! - Score and diagnose in [`scoring`]: EAP trait estimates and Fisher
//!   information.
//! - Expose the user-facing façade in [`models`] via [`IRTModel`], and
//!   centralize error types in [`errors`] (`IRTError`, `IRTResult`) so
//!   callers see a uniform error surface across the stack.
//!
//! Invariants & assumptions
//! ------------------------
//! - Response data are carried in validated [`ResponseMatrix`] instances:
//!   rectangular, entries 0/1/NaN. Item parameters satisfy
//!   `0 ≤ c ≤ gamma ≤ 1` with finite discriminations and intercepts.
//! - Fitted items are caller-owned values threaded through `fit`/`score`
//!   calls; no model-level mutable state exists, so independent fits never
//!   share mutation.
//! - Items are the only values mutated during a fit, each written exactly
//!   once per cycle by its own M-step; the response matrix is read-only
//!   throughout.
//! - Numeric degeneracy (vanishing evidence under extreme response
//!   patterns) is absorbed by an additive floor, never surfaced as an
//!   error; non-convergence within the iteration cap is a status, not an
//!   error.
//!
//! Conventions
//! -----------
//! - Indexing is 0-based throughout; response rows are respondents and
//!   columns are items.
//! - The quadrature grid spans the first latent dimension on [-4, 4] in
//!   prior SD units; higher trait components sit at the prior mean during
//!   fitting and scoring, and only the first discrimination component is
//!   updated by the M-step (a deliberate, documented restriction).
//! - The stack performs no I/O and no logging; it operates purely on
//!   `ndarray` containers and scalars. Error conditions surface as
//!   [`IRTResult`]; panics indicate logic bugs.
//!
//! Downstream usage
//! ----------------
//! - Typical end-to-end flow:
//!   1. Construct a [`ResponseMatrix`] from raw 0/1/NaN data.
//!   2. Build an [`IRTModel`] (`new(dimensions)` or `with_quadrature`).
//!   3. Choose [`FitOptions`] (model family, iteration cap, learning
//!      rate) and call `fit` — or `fit_observed` for progress reporting
//!      and cancellation at cycle boundaries.
//!   4. Keep the returned [`FitOutcome`]'s item bank and score new
//!      respondents with `score_eap`; probe precision with
//!      [`test_information`](scoring::test_information).
//! - Python bindings import from this module (or its [`prelude`]) and rely
//!   on the `IRTError` → `PyErr` conversion defined in [`errors`].
//!
//! Testing notes
//! -------------
//! - Unit tests live next to each component: containers and grid in
//!   [`core`], gradient/posterior/loop behavior in [`estimation`],
//!   scorer and information properties in [`scoring`], boundary checks in
//!   [`models`]. The full pipeline is exercised by the integration suite
//!   in `tests/integration_em_pipeline.rs`.

pub mod core;
pub mod errors;
pub mod estimation;
pub mod models;
pub mod scoring;

// ---- Re-exports (primary public surface) ----------------------------------
//
// These are the “everyday” types most users need. More specialized items
// (the raw E-step/M-step functions, probability internals, information
// diagnostics) remain under their respective submodules.

pub use self::core::{
    FitOptions, Item, ModelType, QuadratureGrid, ResponseMatrix, DEFAULT_QUADRATURE_POINTS,
};

pub use self::errors::{IRTError, IRTResult};

pub use self::estimation::{CycleSnapshot, FitOutcome, FitStatus};

pub use self::models::IRTModel;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rust_mirt::irt::prelude::*;
//
// to import the main model surface in a single line, without pulling in
// lower-level internals.

pub mod prelude {
    pub use super::{
        FitOptions, FitOutcome, FitStatus, IRTError, IRTModel, IRTResult, Item, ModelType,
        QuadratureGrid, ResponseMatrix,
    };
}
