//! EAP scoring — posterior-mean trait estimates for new respondents.
//!
//! Given a fitted item bank and one response vector, computes the Expected
//! A Posteriori trait estimate: the same factorized likelihood as the
//! E-step, evaluated for a single respondent, prior-weighted, normalized,
//! and averaged over node positions.
//!
//! ## Boundary checks
//! Unlike the E-step (whose inputs are assembled internally by the fit
//! loop), scoring accepts caller-supplied vectors and item banks, so it
//! validates at entry: the vector length must equal the item count and
//! entries must be 0/1/NaN.
//!
//! ## Degenerate input
//! A response vector with no present entries is valid: every node keeps
//! likelihood 1, and the score collapses to the grid's prior mean (0 for
//! the canonical symmetric grid). The shared evidence floor keeps even
//! pathological patterns finite.
use crate::irt::core::{is_present, probability_at_node, Item, QuadratureGrid};
use crate::irt::errors::{IRTError, IRTResult};
use crate::irt::estimation::EVIDENCE_FLOOR;
use ndarray::ArrayView1;

/// Score one response vector against a fitted item bank.
///
/// # Definition
/// `θ̂ = Σ_q node_q · L(q)·weight(q) / (Σ_q L(q)·weight(q) + floor)`
///
/// with `L(q)` the factorized likelihood of the present responses at node
/// `q` — the posterior expectation of the trait under the discretized
/// prior.
///
/// # Inputs
/// - `responses`: entries in {0, 1, NaN}; length must equal `items.len()`.
/// - `items`: fitted item bank (read-only).
/// - `grid`: the quadrature grid shared with fitting.
///
/// # Returns
/// - `Ok(theta)` — the scalar EAP estimate on the first trait dimension.
///
/// # Errors
/// - [`IRTError::ResponseLengthMismatch`] when the vector and bank sizes
///   differ.
/// - [`IRTError::InvalidResponseValue`] when an entry is not 0, 1, or NaN
///   (reported with `row = 0` since scoring sees a single vector).
///
/// # Notes
/// - Pure function: identical inputs produce identical scores, and items
///   are never mutated.
pub fn score(
    responses: ArrayView1<f64>, items: &[Item], grid: &QuadratureGrid,
) -> IRTResult<f64> {
    if responses.len() != items.len() {
        return Err(IRTError::ResponseLengthMismatch {
            expected: items.len(),
            actual: responses.len(),
        });
    }
    for (col, &value) in responses.iter().enumerate() {
        if is_present(value) && value != 0.0 && value != 1.0 {
            return Err(IRTError::InvalidResponseValue { row: 0, col, value });
        }
    }

    let mut weighted_sum = 0.0;
    let mut evidence = 0.0;
    for (&node, &weight) in grid.nodes.iter().zip(grid.weights.iter()) {
        let mut likelihood = 1.0;
        for (item, &x) in items.iter().zip(responses.iter()) {
            if !is_present(x) {
                continue;
            }
            let p = probability_at_node(node, item);
            likelihood *= if x == 1.0 { p } else { 1.0 - p };
        }
        let mass = likelihood * weight;
        evidence += mass;
        weighted_sum += mass * node;
    }

    Ok(weighted_sum / (evidence + EVIDENCE_FLOOR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::irt::core::{initial_items, Item, ModelType, QuadratureGrid};
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Directional scoring (all-correct above the prior, all-incorrect
    //   below) and the all-missing degenerate case.
    // - Idempotence (pure function, no hidden state).
    // - Boundary validation of length and entry domain.
    // -------------------------------------------------------------------------

    fn grid() -> QuadratureGrid {
        QuadratureGrid::new(21).unwrap()
    }

    fn discriminating_bank() -> Vec<Item> {
        vec![
            Item::new(array![1.0], -0.5, 0.0, 1.0).unwrap(),
            Item::new(array![1.2], 0.0, 0.0, 1.0).unwrap(),
            Item::new(array![0.8], 0.5, 0.0, 1.0).unwrap(),
        ]
    }

    #[test]
    // Purpose
    // -------
    // Verify scores move with the evidence and stay inside the grid range.
    //
    // Given
    // -----
    // - All-correct, all-incorrect, and mixed vectors against a
    //   discriminating bank.
    //
    // Expect
    // ------
    // - all-correct > mixed > all-incorrect, with the extremes on opposite
    //   sides of the prior mean; every score within [-4, 4].
    fn scores_order_with_the_evidence() {
        let items = discriminating_bank();
        let grid = grid();

        let high = score(array![1.0, 1.0, 1.0].view(), &items, &grid).unwrap();
        let mid = score(array![1.0, 0.0, 1.0].view(), &items, &grid).unwrap();
        let low = score(array![0.0, 0.0, 0.0].view(), &items, &grid).unwrap();

        assert!(high > 0.0 && low < 0.0);
        assert!(high > mid && mid > low);
        for theta in [high, mid, low] {
            assert!((-4.0..=4.0).contains(&theta));
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify the all-missing vector returns the prior mean without error.
    //
    // Given
    // -----
    // - A vector of three NaNs.
    //
    // Expect
    // ------
    // - The score equals the grid's prior mean (0) within 1e-9.
    fn all_missing_vector_returns_prior_mean() {
        let items = discriminating_bank();
        let grid = grid();

        let theta =
            score(array![f64::NAN, f64::NAN, f64::NAN].view(), &items, &grid).unwrap();

        assert_abs_diff_eq!(theta, grid.prior_mean(), epsilon = 1e-9);
        assert_abs_diff_eq!(theta, 0.0, epsilon = 1e-9);
    }

    #[test]
    // Purpose
    // -------
    // Verify scoring is idempotent: same inputs, same output, untouched
    // items.
    //
    // Given
    // -----
    // - The same vector scored twice against the same bank.
    //
    // Expect
    // ------
    // - Bitwise-equal scores and an unchanged bank.
    fn scoring_is_idempotent_and_pure() {
        let items = discriminating_bank();
        let before = items.clone();
        let grid = grid();
        let responses = array![1.0, f64::NAN, 0.0];

        let first = score(responses.view(), &items, &grid).unwrap();
        let second = score(responses.view(), &items, &grid).unwrap();

        assert_eq!(first, second);
        assert_eq!(items, before);
    }

    #[test]
    // Purpose
    // -------
    // Verify boundary validation of vector length and entry domain.
    //
    // Given
    // -----
    // - A two-entry vector against a three-item bank, and a vector
    //   containing 0.5.
    //
    // Expect
    // ------
    // - `ResponseLengthMismatch { expected: 3, actual: 2 }`, then
    //   `InvalidResponseValue` at column 1.
    fn rejects_mismatched_or_out_of_domain_vectors() {
        let items = discriminating_bank();
        let grid = grid();

        let err = score(array![1.0, 0.0].view(), &items, &grid).unwrap_err();
        assert_eq!(err, IRTError::ResponseLengthMismatch { expected: 3, actual: 2 });

        let err = score(array![1.0, 0.5, 0.0].view(), &items, &grid).unwrap_err();
        assert_eq!(err, IRTError::InvalidResponseValue { row: 0, col: 1, value: 0.5 });
    }

    #[test]
    // Purpose
    // -------
    // Verify scoring composes with freshly initialized items: uniform
    // initial items still separate all-correct from all-incorrect.
    //
    // Given
    // -----
    // - Default 2PL initial items (a = 1, d = 0).
    //
    // Expect
    // ------
    // - Symmetric scores: score(all-correct) ≈ -score(all-incorrect).
    fn initial_items_give_symmetric_scores() {
        let items = initial_items(ModelType::TwoPL, 1, 4);
        let grid = grid();

        let up = score(array![1.0, 1.0, 1.0, 1.0].view(), &items, &grid).unwrap();
        let down = score(array![0.0, 0.0, 0.0, 0.0].view(), &items, &grid).unwrap();

        assert!(up > 0.0);
        assert_abs_diff_eq!(up, -down, epsilon = 1e-9);
    }
}
