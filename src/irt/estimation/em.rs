//! EM fit loop — alternating posterior computation and item updates.
//!
//! Drives the estimation cycle: initialize one item per response column,
//! then repeat {E-step over the whole matrix; M-step once per item} until
//! the largest per-item change falls below [`CONVERGENCE_TOL`] or the
//! iteration cap is reached. Posteriors are recomputed every cycle and
//! dropped after the M-step; only the item bank persists across cycles.
//!
//! ## Terminal states
//! - [`FitStatus::Converged`]: the maximum per-item change in a cycle fell
//!   below tolerance.
//! - [`FitStatus::Exhausted`]: `max_iter` cycles completed without
//!   convergence. **Not an error** — the caller receives the best available
//!   items, just a weaker fit.
//! - [`FitStatus::Cancelled`]: the cycle observer asked to stop; the
//!   partially fit items are returned as-is.
//!
//! ## Observer contract
//! [`fit_observed`] invokes its observer every `options.cycle_stride`
//! cycles with a [`CycleSnapshot`] exposing the current-best item bank, so
//! a caller can interleave other work, report progress, or cancel at a
//! cycle boundary. The observer has no effect on the numerical result: a
//! fit with a never-cancelling observer is identical to [`fit`].
use crate::irt::core::{initial_items, FitOptions, Item, QuadratureGrid, ResponseMatrix};
use crate::irt::estimation::{mstep, posterior};
use crate::irt::errors::IRTResult;

/// Convergence threshold on the maximum per-item change within one cycle.
pub const CONVERGENCE_TOL: f64 = 1e-4;

/// Terminal state of an EM fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitStatus {
    /// Maximum per-item change fell below [`CONVERGENCE_TOL`].
    Converged,
    /// Iteration cap reached without convergence; items are still usable.
    Exhausted,
    /// The cycle observer requested a stop; items are partially fit.
    Cancelled,
}

/// Result of an EM fit: the caller-owned item bank plus diagnostics.
///
/// - `items`: fitted (or partially fitted) parameters, one per column.
/// - `status`: how the loop terminated.
/// - `cycles`: number of EM cycles actually run.
/// - `max_change`: the last cycle's maximum per-item change.
#[derive(Debug, Clone, PartialEq)]
pub struct FitOutcome {
    pub items: Vec<Item>,
    pub status: FitStatus,
    pub cycles: usize,
    pub max_change: f64,
}

/// Cycle-boundary snapshot handed to the fit observer.
///
/// Borrows the live item bank so callers can inspect (or snapshot) the
/// current-best parameters without waiting for termination.
#[derive(Debug)]
pub struct CycleSnapshot<'a> {
    /// 1-based count of completed cycles.
    pub cycle: usize,
    /// Maximum per-item change in the just-completed cycle.
    pub max_change: f64,
    /// Current-best item bank.
    pub items: &'a [Item],
}

/// Fit an item bank by EM with no observer.
///
/// Equivalent to [`fit_observed`] with an observer that always continues.
pub fn fit(
    matrix: &ResponseMatrix, dimensions: usize, grid: &QuadratureGrid, options: &FitOptions,
) -> IRTResult<FitOutcome> {
    fit_observed(matrix, dimensions, grid, options, |_| true)
}

/// Fit an item bank by EM, yielding to `observer` at cycle boundaries.
///
/// ## Steps
/// 1. Allocate one [`Item::initial`](crate::irt::core::Item::initial) per
///    response column for the configured model type and dimensionality.
/// 2. Each cycle: run the E-step over the whole matrix, then one M-step
///    per item, tracking the maximum per-item change.
/// 3. Terminate [`Converged`](FitStatus::Converged) when that maximum
///    falls below [`CONVERGENCE_TOL`],
///    [`Exhausted`](FitStatus::Exhausted) after `options.max_iter` cycles,
///    or [`Cancelled`](FitStatus::Cancelled) when the observer returns
///    `false` at a stride boundary.
///
/// ## Arguments
/// - `matrix`: validated response data (read-only).
/// - `dimensions`: trait dimensionality (validated at the model boundary).
/// - `grid`: shared quadrature grid.
/// - `options`: validated fit configuration.
/// - `observer`: called every `options.cycle_stride` cycles with a
///   [`CycleSnapshot`]; return `false` to stop after the current cycle.
///
/// ## Returns
/// - `Ok(FitOutcome)` in every terminal state; all three are normal
///   terminations. The `IRTResult` wrapper exists for boundary symmetry
///   with the model-level entry points.
pub fn fit_observed<F>(
    matrix: &ResponseMatrix, dimensions: usize, grid: &QuadratureGrid, options: &FitOptions,
    mut observer: F,
) -> IRTResult<FitOutcome>
where
    F: FnMut(&CycleSnapshot) -> bool,
{
    let mut items = initial_items(options.model_type, dimensions, matrix.n_items());
    let mut status = FitStatus::Exhausted;
    let mut max_change = f64::INFINITY;
    let mut cycle = 0;

    while cycle < options.max_iter {
        let posteriors = posterior::estimate(matrix, &items, grid);

        max_change = 0.0;
        for (j, item) in items.iter_mut().enumerate() {
            let change = mstep::update_item(
                item,
                j,
                matrix,
                posteriors.view(),
                grid,
                options.model_type,
                options.learning_rate,
            );
            if change > max_change {
                max_change = change;
            }
        }
        cycle += 1;

        if max_change < CONVERGENCE_TOL {
            status = FitStatus::Converged;
            break;
        }

        if cycle % options.cycle_stride == 0 {
            let snapshot = CycleSnapshot { cycle, max_change, items: &items };
            if !observer(&snapshot) {
                status = FitStatus::Cancelled;
                break;
            }
        }
    }

    Ok(FitOutcome { items, status, cycles: cycle, max_change })
}
