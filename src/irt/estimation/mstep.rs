//! M-step — expected-gradient update for one item's parameters.
//!
//! Given the current posteriors, each item ascends the expected gradient of
//! its marginal log-likelihood with a fixed learning rate:
//!
//! - `∂ℓ/∂d   = Σ_i Σ_q (x_ij − p_jq) · posterior(i, q)`
//! - `∂ℓ/∂a₀  = Σ_i Σ_q (x_ij − p_jq) · posterior(i, q) · node_q`
//!
//! summed over respondents `i` with a present response to item `j` and all
//! quadrature nodes `q`. The intercept always moves; the first
//! discrimination component moves unless the model family fixes
//! discrimination (1PL). **Only the first trait dimension's discrimination
//! is updated** even for multidimensional configurations — higher
//! components keep their initial value. This restriction is deliberate and
//! load-bearing: changing it changes fitted output.
//!
//! The returned magnitude `|∂ℓ/∂d · learning_rate|` is the item's
//! convergence signal for the surrounding EM loop.
use crate::irt::core::{
    is_present, probability_at_node, Item, ModelType, QuadratureGrid, ResponseMatrix,
};
use ndarray::ArrayView2;

/// Apply one fixed-step gradient ascent update to `item` in place.
///
/// # Behavior
/// - Accumulates both gradients against the item's **pre-update**
///   parameters, then applies the step(s); the update is therefore a true
///   simultaneous step, not a coordinate sweep.
/// - Skips respondents whose response to this item is missing, matching
///   the E-step's likelihood (a missing entry contributed no information).
///
/// # Inputs
/// - `item`: the item to update (mutated in place).
/// - `item_idx`: its column in `matrix`.
/// - `matrix`: validated response data.
/// - `posteriors`: E-step output, shape (respondents, nodes).
/// - `grid`: shared quadrature grid.
/// - `model_type`: controls whether discrimination moves.
/// - `learning_rate`: fixed ascent step, validated upstream.
///
/// # Returns
/// - `|gradD · learning_rate|`, the magnitude of the intercept change, used
///   by the fit loop's convergence test.
pub fn update_item(
    item: &mut Item, item_idx: usize, matrix: &ResponseMatrix, posteriors: ArrayView2<f64>,
    grid: &QuadratureGrid, model_type: ModelType, learning_rate: f64,
) -> f64 {
    let mut grad_d = 0.0;
    let mut grad_a0 = 0.0;

    for (i, responses) in matrix.data.rows().into_iter().enumerate() {
        let x = responses[item_idx];
        if !is_present(x) {
            continue;
        }
        let posterior_row = posteriors.row(i);
        for (q, &node) in grid.nodes.iter().enumerate() {
            let p = probability_at_node(node, item);
            let error = (x - p) * posterior_row[q];
            grad_d += error;
            grad_a0 += error * node;
        }
    }

    let d_step = grad_d * learning_rate;
    item.d += d_step;
    if !model_type.fixed_discrimination() {
        item.a[0] += grad_a0 * learning_rate;
    }

    d_step.abs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::irt::core::{initial_items, QuadratureGrid};
    use crate::irt::estimation::posterior;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Gradient direction: easy items gain intercept, hard items lose it.
    // - The 1PL discrimination freeze and the first-dimension-only update
    //   for multidimensional items.
    // - The returned convergence signal.
    // - Missing responses contributing nothing to the gradient.
    // -------------------------------------------------------------------------

    fn setup(
        responses: ndarray::Array2<f64>, model_type: ModelType, dims: usize,
    ) -> (ResponseMatrix, Vec<Item>, QuadratureGrid, ndarray::Array2<f64>) {
        let matrix = ResponseMatrix::new(responses).unwrap();
        let items = initial_items(model_type, dims, matrix.n_items());
        let grid = QuadratureGrid::new(11).unwrap();
        let posteriors = posterior::estimate(&matrix, &items, &grid);
        (matrix, items, grid, posteriors)
    }

    #[test]
    // Purpose
    // -------
    // Verify the intercept gradient points toward the observed difficulty.
    //
    // Given
    // -----
    // - Item 0 answered correctly by everyone, item 1 by no one.
    //
    // Expect
    // ------
    // - Item 0's intercept rises, item 1's falls, and the returned change
    //   magnitudes are strictly positive.
    fn intercept_moves_toward_observed_difficulty() {
        let (matrix, mut items, grid, posteriors) =
            setup(array![[1.0, 0.0], [1.0, 0.0], [1.0, 0.0]], ModelType::TwoPL, 1);

        let change_easy = update_item(
            &mut items[0], 0, &matrix, posteriors.view(), &grid, ModelType::TwoPL, 0.05,
        );
        let change_hard = update_item(
            &mut items[1], 1, &matrix, posteriors.view(), &grid, ModelType::TwoPL, 0.05,
        );

        assert!(items[0].d > 0.0, "easy item intercept should rise, got {}", items[0].d);
        assert!(items[1].d < 0.0, "hard item intercept should fall, got {}", items[1].d);
        assert!(change_easy > 0.0 && change_hard > 0.0);
    }

    #[test]
    // Purpose
    // -------
    // Verify the 1PL freeze: intercepts move, discriminations do not.
    //
    // Given
    // -----
    // - Non-uniform responses fit as 1PL.
    //
    // Expect
    // ------
    // - `a` stays exactly at its initial value while `d` changes.
    fn one_pl_holds_discrimination_fixed() {
        let (matrix, mut items, grid, posteriors) =
            setup(array![[1.0], [1.0], [0.0]], ModelType::OnePL, 1);

        update_item(&mut items[0], 0, &matrix, posteriors.view(), &grid, ModelType::OnePL, 0.05);

        assert_eq!(items[0].a, array![1.0]);
        assert!(items[0].d != 0.0);
    }

    #[test]
    // Purpose
    // -------
    // Pin the known restriction: only the first discrimination component
    // is updated for multidimensional items.
    //
    // Given
    // -----
    // - A 3-dimensional 2PL configuration with informative responses.
    //
    // Expect
    // ------
    // - `a[0]` moves away from 1.0; `a[1]` and `a[2]` remain exactly 1.0.
    fn update_item_leaves_higher_dimensions_untouched() {
        let (matrix, mut items, grid, posteriors) = setup(
            array![[1.0, 1.0], [1.0, 0.0], [0.0, 0.0], [1.0, 1.0]],
            ModelType::TwoPL,
            3,
        );

        update_item(&mut items[0], 0, &matrix, posteriors.view(), &grid, ModelType::TwoPL, 0.05);

        assert!(items[0].a[0] != 1.0, "first component should move");
        assert_eq!(items[0].a[1], 1.0);
        assert_eq!(items[0].a[2], 1.0);
    }

    #[test]
    // Purpose
    // -------
    // Verify the returned signal equals the applied intercept change.
    //
    // Given
    // -----
    // - Any informative configuration.
    //
    // Expect
    // ------
    // - The return value equals |d_after − d_before| exactly.
    fn returned_signal_matches_applied_change() {
        let (matrix, mut items, grid, posteriors) =
            setup(array![[1.0], [0.0], [1.0]], ModelType::TwoPL, 1);

        let before = items[0].d;
        let change =
            update_item(&mut items[0], 0, &matrix, posteriors.view(), &grid, ModelType::TwoPL, 0.05);

        assert_abs_diff_eq!(change, (items[0].d - before).abs(), epsilon = 1e-15);
    }

    #[test]
    // Purpose
    // -------
    // Verify missing responses contribute nothing to the gradient.
    //
    // Given
    // -----
    // - An item whose only responses are missing.
    //
    // Expect
    // ------
    // - Parameters are unchanged and the returned change is 0.
    fn all_missing_column_leaves_item_unchanged() {
        let (matrix, mut items, grid, posteriors) =
            setup(array![[1.0, f64::NAN], [0.0, f64::NAN]], ModelType::TwoPL, 1);

        let change = update_item(
            &mut items[1], 1, &matrix, posteriors.view(), &grid, ModelType::TwoPL, 0.05,
        );

        assert_eq!(change, 0.0);
        assert_eq!(items[1].d, 0.0);
        assert_eq!(items[1].a, array![1.0]);
    }
}
