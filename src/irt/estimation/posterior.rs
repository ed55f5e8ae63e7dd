//! E-step — discrete trait posteriors over the quadrature grid.
//!
//! For each respondent, updates the discretized standard-normal prior with
//! the factorized (local-independence) response likelihood:
//!
//! `posterior(i, q) ∝ weight(q) · Π_j P(x_ij | node_q, item_j)`
//!
//! where the product runs over the respondent's **present** responses; a
//! missing entry contributes a multiplicative factor of 1 (skipped, never
//! imputed). Each row is normalized by its evidence, with a small additive
//! floor so degenerate response patterns (likelihood underflow at every
//! node) renormalize instead of dividing by zero.
//!
//! ## Invariants (enforced upstream)
//! - `items.len() == matrix.n_items()`; item parameters and matrix entries
//!   are validated at construction. This function therefore never errors:
//!   numeric degeneracy is absorbed by [`EVIDENCE_FLOOR`].
use crate::irt::core::{is_present, probability_at_node, Item, QuadratureGrid, ResponseMatrix};
use ndarray::Array2;

/// Additive floor on the evidence denominator. Keeps all-zero likelihood
/// rows (extreme response patterns at every node) finite without
/// interrupting the fit loop.
pub const EVIDENCE_FLOOR: f64 = 1e-10;

/// Compute one posterior row per respondent.
///
/// # Definition
/// For respondent `i` and node `q`:
///
/// `L(i, q) = Π over present j of [ p_jq if x_ij = 1 else 1 − p_jq ]`
///
/// with `p_jq = P(correct | node_q, item_j)`; the returned row is
/// `L(i, ·) · weight(·)` divided by `Σ_q L(i, q)·weight(q) + floor`.
///
/// # Inputs
/// - `matrix`: validated response data (read-only).
/// - `items`: current item bank, one entry per matrix column.
/// - `grid`: shared quadrature grid.
///
/// # Returns
/// - `Array2<f64>` of shape (respondents, nodes); each row is non-negative
///   and sums to 1 up to the evidence floor.
pub fn estimate(
    matrix: &ResponseMatrix, items: &[Item], grid: &QuadratureGrid,
) -> Array2<f64> {
    let n_respondents = matrix.n_respondents();
    let n_nodes = grid.len();
    let mut posteriors = Array2::zeros((n_respondents, n_nodes));

    for i in 0..n_respondents {
        let responses = matrix.data.row(i);
        let mut row = posteriors.row_mut(i);

        for (q, (&node, &weight)) in grid.nodes.iter().zip(grid.weights.iter()).enumerate() {
            let mut likelihood = 1.0;
            for (item, &x) in items.iter().zip(responses.iter()) {
                if !is_present(x) {
                    continue;
                }
                let p = probability_at_node(node, item);
                likelihood *= if x == 1.0 { p } else { 1.0 - p };
            }
            row[q] = likelihood * weight;
        }

        let evidence = row.sum() + EVIDENCE_FLOOR;
        row.mapv_inplace(|v| v / evidence);
    }

    posteriors
}
