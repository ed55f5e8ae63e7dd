//! Fit options — configuration for the EM estimation loop.
//!
//! Collects the recognized fitting knobs in one validated structure: the
//! model family, the iteration cap, the fixed M-step learning rate, and the
//! cycle stride at which the fit loop hands control to an observer.
//!
//! Convention: options are constructed once through the checked
//! [`FitOptions::new`] (or [`FitOptions::default`]) and passed by reference
//! into `fit`; the loop itself never re-validates them.
use crate::irt::core::model_type::ModelType;
use crate::irt::errors::{IRTError, IRTResult};

/// EM-loop configuration.
///
/// Fields:
/// - `model_type: ModelType` — which logistic variant to fit.
/// - `max_iter: usize` — hard cap on EM cycles (> 0).
/// - `learning_rate: f64` — fixed M-step ascent step (finite, > 0).
/// - `cycle_stride: usize` — invoke the cycle observer every this many
///   cycles (> 0); the observer is the explicit replacement for
///   scheduler-coupled yielding and carries the cancellation decision.
///
/// Default:
/// - `model_type`: `TwoPL`
/// - `max_iter`: 100
/// - `learning_rate`: 0.05
/// - `cycle_stride`: 5
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitOptions {
    pub model_type: ModelType,
    pub max_iter: usize,
    pub learning_rate: f64,
    pub cycle_stride: usize,
}

impl FitOptions {
    /// Create a validated set of fit options.
    ///
    /// # Rules
    /// - `max_iter` must be strictly positive.
    /// - `learning_rate` must be finite and strictly positive.
    /// - `cycle_stride` must be strictly positive.
    ///
    /// # Errors
    /// - [`IRTError::InvalidMaxIter`] if `max_iter == 0`.
    /// - [`IRTError::InvalidLearningRate`] for non-finite or non-positive
    ///   learning rates.
    /// - [`IRTError::InvalidCycleStride`] if `cycle_stride == 0`.
    pub fn new(
        model_type: ModelType, max_iter: usize, learning_rate: f64, cycle_stride: usize,
    ) -> IRTResult<Self> {
        if max_iter == 0 {
            return Err(IRTError::InvalidMaxIter {
                max_iter,
                reason: "Maximum EM cycles must be greater than zero.",
            });
        }
        if !learning_rate.is_finite() || learning_rate <= 0.0 {
            return Err(IRTError::InvalidLearningRate { value: learning_rate });
        }
        if cycle_stride == 0 {
            return Err(IRTError::InvalidCycleStride { stride: cycle_stride });
        }
        Ok(Self { model_type, max_iter, learning_rate, cycle_stride })
    }
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            model_type: ModelType::TwoPL,
            max_iter: 100,
            learning_rate: 0.05,
            cycle_stride: 5,
        }
    }
}
