//! Fisher information for fitted item banks.
//!
//! Post-fit diagnostic companion to EAP scoring: how much a single item
//! (or a whole bank) constrains the trait estimate at a given trait level.
//! For the 4-parameter logistic response function with probability `P` at
//! trait `theta`:
//!
//! `I(θ) = a₀² · (P − c)² · (gamma − P)² / ((gamma − c)² · P · (1 − P))`
//!
//! which reduces to the familiar `a₀²·P·(1 − P)` when `c = 0, gamma = 1`.
//! Information is evaluated along the first trait dimension, consistent
//! with the quadrature grid and the EAP scorer.
use crate::irt::core::{probability_at_node, Item};

/// Probability clamp keeping the `P·(1 − P)` denominator away from zero at
/// trait extremes where the logistic saturates in floating point.
const PROB_FLOOR: f64 = 1e-10;

/// Fisher information contributed by one item at trait level `theta`.
///
/// Non-negative for all inputs; zero when the item does not discriminate
/// (`a₀ = 0`). The probability is clamped into `(0, 1)` before the
/// quotient, so saturated tails yield vanishing (not NaN) information.
pub fn item_information(theta: f64, item: &Item) -> f64 {
    let p = probability_at_node(theta, item).clamp(PROB_FLOOR, 1.0 - PROB_FLOOR);
    let a0 = item.a[0];
    let band = item.gamma - item.c;
    if band == 0.0 {
        // Fully degenerate curve carries no information at any trait level.
        return 0.0;
    }
    let numerator = (p - item.c).powi(2) * (item.gamma - p).powi(2);
    a0 * a0 * numerator / (band * band * p * (1.0 - p))
}

/// Test information: the sum of item informations across a bank.
pub fn test_information(theta: f64, items: &[Item]) -> f64 {
    items.iter().map(|item| item_information(theta, item)).sum()
}
