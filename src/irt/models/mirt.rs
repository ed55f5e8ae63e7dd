//! IRT model façade: construction, fitting, probability, and scoring.
//!
//! Wires the core containers to the estimation engine and scorer behind a
//! small, boundary-validated surface. The model itself holds only
//! configuration — trait dimensionality and the shared quadrature grid.
//! Fitted items are **caller-owned**: [`IRTModel::fit`] returns them in a
//! [`FitOutcome`] and the model stores nothing, so independent fits can run
//! concurrently against one model value without shared mutation.
use crate::irt::core::{
    probability, FitOptions, Item, QuadratureGrid, ResponseMatrix, DEFAULT_QUADRATURE_POINTS,
};
use crate::irt::errors::{IRTError, IRTResult};
use crate::irt::estimation::{self, CycleSnapshot, FitOutcome};
use ndarray::ArrayView1;

/// IRT model configuration: trait dimensionality plus the quadrature grid
/// shared by fitting and scoring.
///
/// # Notes
/// - Construction validates `dimensions >= 1` and builds the grid once;
///   both are immutable afterwards.
/// - All fit state lives in the returned [`FitOutcome`], never in the
///   model, so a single `IRTModel` can serve many datasets.
#[derive(Debug, Clone, PartialEq)]
pub struct IRTModel {
    /// Trait dimensionality (length of every item's discrimination vector).
    pub dimensions: usize,
    /// Discretized standard-normal trait prior.
    pub grid: QuadratureGrid,
}

impl IRTModel {
    /// Construct a model with the default quadrature resolution.
    ///
    /// # Arguments
    /// - `dimensions`: trait dimensionality; must be at least 1.
    ///
    /// # Errors
    /// - [`IRTError::InvalidDimensions`] when `dimensions == 0`.
    pub fn new(dimensions: usize) -> IRTResult<IRTModel> {
        IRTModel::with_quadrature(dimensions, DEFAULT_QUADRATURE_POINTS)
    }

    /// Construct a model with an explicit quadrature resolution.
    ///
    /// # Arguments
    /// - `dimensions`: trait dimensionality; must be at least 1.
    /// - `quadrature_points`: node count for the shared grid; must be >= 2.
    ///
    /// # Errors
    /// - [`IRTError::InvalidDimensions`] when `dimensions == 0`.
    /// - [`IRTError::InvalidNodeCount`] when `quadrature_points < 2`.
    pub fn with_quadrature(dimensions: usize, quadrature_points: usize) -> IRTResult<IRTModel> {
        if dimensions == 0 {
            return Err(IRTError::InvalidDimensions { dimensions });
        }
        let grid = QuadratureGrid::new(quadrature_points)?;
        Ok(IRTModel { dimensions, grid })
    }

    /// Calibrate an item bank against `matrix` by EM.
    ///
    /// ## Steps
    /// 1. The matrix arrives pre-validated by `ResponseMatrix`; options by
    ///    `FitOptions`. No further boundary checks are needed.
    /// 2. Delegate to the estimation engine, which initializes one item per
    ///    column and cycles E-step/M-step to a terminal state.
    ///
    /// ## Returns
    /// - `Ok(FitOutcome)` carrying the caller-owned item bank, terminal
    ///   status, cycle count, and last maximum change. Exhaustion is a
    ///   normal outcome, not an error.
    pub fn fit(&self, matrix: &ResponseMatrix, options: &FitOptions) -> IRTResult<FitOutcome> {
        estimation::fit(matrix, self.dimensions, &self.grid, options)
    }

    /// Calibrate with a cycle observer (progress reporting / cancellation).
    ///
    /// The observer is invoked every `options.cycle_stride` cycles with a
    /// [`CycleSnapshot`] borrowing the current-best items; returning
    /// `false` stops the fit at that cycle boundary with
    /// [`FitStatus::Cancelled`](crate::irt::estimation::FitStatus::Cancelled)
    /// and the partial bank in the outcome.
    pub fn fit_observed<F>(
        &self, matrix: &ResponseMatrix, options: &FitOptions, observer: F,
    ) -> IRTResult<FitOutcome>
    where
        F: FnMut(&CycleSnapshot) -> bool,
    {
        estimation::fit_observed(matrix, self.dimensions, &self.grid, options, observer)
    }

    /// Response probability for a caller-supplied trait vector.
    ///
    /// ## Behavior
    /// - Fails fast when `theta` does not match the item's dimensionality;
    ///   inside the crate the pure function tolerates short vectors, but a
    ///   caller-supplied mismatch is a configuration error.
    ///
    /// ## Errors
    /// - [`IRTError::ThetaLengthMismatch`] when
    ///   `theta.len() != item.a.len()`.
    pub fn probability(&self, theta: ArrayView1<f64>, item: &Item) -> IRTResult<f64> {
        if theta.len() != item.a.len() {
            return Err(IRTError::ThetaLengthMismatch {
                expected: item.a.len(),
                actual: theta.len(),
            });
        }
        Ok(probability(theta, item))
    }

    /// EAP trait estimate for one response vector against a fitted bank.
    ///
    /// The bank may come from this model's [`fit`](IRTModel::fit) or be
    /// supplied externally; either way its dimensionality must match the
    /// model's.
    ///
    /// ## Errors
    /// - [`IRTError::DiscriminationLengthMismatch`] when any item's
    ///   discrimination vector does not match `self.dimensions`.
    /// - Plus the scorer's own boundary errors (length mismatch, entry
    ///   domain).
    pub fn score_eap(&self, responses: ArrayView1<f64>, items: &[Item]) -> IRTResult<f64> {
        for item in items {
            if item.a.len() != self.dimensions {
                return Err(IRTError::DiscriminationLengthMismatch {
                    expected: self.dimensions,
                    actual: item.a.len(),
                });
            }
        }
        crate::irt::scoring::score(responses, items, &self.grid)
    }
}
