//! Quadrature grid — discrete standard-normal prior over the latent trait.
//!
//! Purpose
//! -------
//! Provide a fixed, validated discretization of the standard-normal prior
//! used to integrate over the latent trait during posterior computation and
//! EAP scoring. The grid is built once per model and shared read-only by
//! fitting and scoring.
//!
//! Key behaviors
//! -------------
//! - [`QuadratureGrid::new`] places `n` evenly spaced nodes over the fixed
//!   interval [-4, 4] (standard-deviation units) and weights each node by
//!   the standard-normal density, normalized so the weights sum to 1.
//! - Rejects grids with fewer than two nodes via a typed error rather than
//!   dividing by zero in the spacing.
//!
//! Invariants & assumptions
//! ------------------------
//! - `nodes` is strictly ascending, `nodes.len() == weights.len() >= 2`.
//! - Weights are non-negative and sum to 1 within floating-point error.
//! - The grid is symmetric around 0, so the prior mean is 0.
//! - The grid is immutable after construction; no method mutates it.
//!
//! Conventions
//! -----------
//! - The trait scale is standard-deviation units of the prior; [-4, 4]
//!   covers all but ~6e-5 of the prior mass.
//! - The grid spans the **first** latent dimension only. During fitting and
//!   scoring, higher trait components sit at the prior mean 0.
//!
//! Downstream usage
//! ----------------
//! - Constructed by [`IRTModel::new`](crate::irt::models::IRTModel::new)
//!   with the default resolution, or explicitly via
//!   `IRTModel::with_quadrature` for coarser/finer integration.
//! - Consumed by the posterior estimator (E-step) and the EAP scorer, which
//!   iterate node/weight pairs in lockstep.
//!
//! Testing notes
//! -------------
//! - Unit tests pin the documented 5-node example (nodes [-4,-2,0,2,4] and
//!   their normalized weights), weight normalization for a range of sizes,
//!   symmetry of the prior mean, and rejection of `n < 2`.
use crate::irt::errors::{IRTError, IRTResult};
use ndarray::Array1;
use statrs::distribution::{Continuous, Normal};

/// Fixed latent-trait interval covered by the grid, in prior SD units.
pub const THETA_RANGE: (f64, f64) = (-4.0, 4.0);

/// Default node count used when the caller does not choose a resolution.
pub const DEFAULT_QUADRATURE_POINTS: usize = 49;

/// QuadratureGrid — evenly spaced nodes with normalized normal-prior weights.
///
/// Purpose
/// -------
/// Represent the discrete approximation of the standard-normal trait prior:
/// a pair of equal-length arrays, `nodes` (ascending positions on the trait
/// scale) and `weights` (prior mass at each node, summing to 1).
///
/// Fields
/// ------
/// - `nodes`: `Array1<f64>`
///   Ascending node positions spanning [`THETA_RANGE`] inclusive.
/// - `weights`: `Array1<f64>`
///   Non-negative prior weights aligned with `nodes`, summing to 1.
///
/// Invariants
/// ----------
/// - `nodes.len() == weights.len() >= 2`.
/// - `weights.sum() == 1` within floating-point error.
///
/// Performance
/// -----------
/// - Construction is O(n); the grid is then read-only and cheap to share
///   by reference across fitting and scoring.
#[derive(Debug, Clone, PartialEq)]
pub struct QuadratureGrid {
    /// Ascending node positions on the latent-trait scale.
    pub nodes: Array1<f64>,
    /// Normalized prior weights aligned with `nodes`.
    pub weights: Array1<f64>,
}

impl QuadratureGrid {
    /// Build a grid with `n` evenly spaced nodes over [`THETA_RANGE`].
    ///
    /// Parameters
    /// ----------
    /// - `n`: `usize`
    ///   Number of quadrature nodes. Must be at least 2 so the spacing
    ///   `(hi - lo) / (n - 1)` is well-defined.
    ///
    /// Returns
    /// -------
    /// `IRTResult<QuadratureGrid>`
    ///   - `Ok(QuadratureGrid)` with nodes at `lo + i·step` for
    ///     `i = 0..n` and weights proportional to the standard-normal
    ///     density at each node, normalized to sum to 1.
    ///   - `Err(IRTError::InvalidNodeCount)` when `n < 2`.
    ///
    /// Errors
    /// ------
    /// - `IRTError::InvalidNodeCount`
    ///   Returned when `n < 2`; a single node has no spacing and a
    ///   zero-node grid has no mass to normalize.
    ///
    /// Panics
    /// ------
    /// - Never panics for valid input. The standard-normal constructor
    ///   cannot fail for unit parameters.
    ///
    /// Notes
    /// -----
    /// - Normalizing density values is equivalent to normalizing the raw
    ///   `exp(-x²/2)` kernel; the `1/√(2π)` constant cancels.
    pub fn new(n: usize) -> IRTResult<Self> {
        if n < 2 {
            return Err(IRTError::InvalidNodeCount { count: n });
        }

        let (lo, hi) = THETA_RANGE;
        let step = (hi - lo) / ((n - 1) as f64);
        let nodes = Array1::from_iter((0..n).map(|i| lo + step * (i as f64)));

        let prior = Normal::new(0.0, 1.0).expect("unit normal parameters are valid");
        let mut weights = nodes.mapv(|x| prior.pdf(x));
        let total = weights.sum();
        weights.mapv_inplace(|w| w / total);

        Ok(QuadratureGrid { nodes, weights })
    }

    /// Number of nodes in the grid.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the grid has no nodes. Always `false` for constructed grids;
    /// provided for API completeness.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Prior mean of the discretized trait distribution.
    ///
    /// For the symmetric canonical grid this is 0 up to floating-point
    /// error; it is also the EAP score of an all-missing response vector.
    pub fn prior_mean(&self) -> f64 {
        self.nodes.iter().zip(self.weights.iter()).map(|(x, w)| x * w).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - The documented 5-node example (node positions and normalized weights).
    // - Weight normalization across a range of grid sizes.
    // - Symmetry (zero prior mean) and rejection of undersized grids.
    //
    // They intentionally DO NOT cover:
    // - How the grid is consumed by the E-step or EAP scorer; those paths
    //   are tested in the estimation and scoring modules.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Pin the canonical worked example: a 5-node grid over [-4, 4].
    //
    // Given
    // -----
    // - `QuadratureGrid::new(5)`.
    //
    // Expect
    // ------
    // - Nodes exactly [-4, -2, 0, 2, 4].
    // - Normalized weights ≈ [0.000264, 0.10644, 0.78660, 0.10644, 0.000264],
    //   i.e. exp(-x²/2) at each node divided by the kernel sum.
    fn five_node_grid_matches_worked_example() {
        let grid = QuadratureGrid::new(5).unwrap();

        let expected_nodes = [-4.0, -2.0, 0.0, 2.0, 4.0];
        for (node, expected) in grid.nodes.iter().zip(expected_nodes) {
            assert_abs_diff_eq!(*node, expected, epsilon = 1e-12);
        }

        let kernel = [(-8.0f64).exp(), (-2.0f64).exp(), 1.0, (-2.0f64).exp(), (-8.0f64).exp()];
        let total: f64 = kernel.iter().sum();
        for (weight, raw) in grid.weights.iter().zip(kernel) {
            assert_relative_eq!(*weight, raw / total, epsilon = 1e-12);
        }
        assert_relative_eq!(grid.weights[2], 0.78660, epsilon = 1e-5);
    }

    #[test]
    // Purpose
    // -------
    // Verify weights sum to 1 for a range of valid grid sizes.
    //
    // Given
    // -----
    // - Grid sizes 2, 3, 7, 49, and 101.
    //
    // Expect
    // ------
    // - Each grid's weights sum to 1 within 1e-9.
    fn weights_sum_to_one_for_valid_sizes() {
        for n in [2usize, 3, 7, DEFAULT_QUADRATURE_POINTS, 101] {
            let grid = QuadratureGrid::new(n).unwrap();
            assert_eq!(grid.len(), n);
            assert_abs_diff_eq!(grid.weights.sum(), 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify the grid is symmetric, so the prior mean is 0.
    //
    // Given
    // -----
    // - The default-resolution grid.
    //
    // Expect
    // ------
    // - `prior_mean()` is 0 within 1e-12, and node/weight pairs mirror
    //   around the center.
    fn grid_is_symmetric_with_zero_prior_mean() {
        let grid = QuadratureGrid::new(DEFAULT_QUADRATURE_POINTS).unwrap();
        assert_abs_diff_eq!(grid.prior_mean(), 0.0, epsilon = 1e-12);

        let n = grid.len();
        for i in 0..n / 2 {
            assert_abs_diff_eq!(grid.nodes[i], -grid.nodes[n - 1 - i], epsilon = 1e-12);
            assert_relative_eq!(grid.weights[i], grid.weights[n - 1 - i], epsilon = 1e-12);
        }
    }

    #[test]
    // Purpose
    // -------
    // Ensure undersized grids are rejected instead of dividing by zero.
    //
    // Given
    // -----
    // - Node counts 0 and 1.
    //
    // Expect
    // ------
    // - `IRTError::InvalidNodeCount` carrying the offending count.
    fn rejects_fewer_than_two_nodes() {
        assert_eq!(
            QuadratureGrid::new(0).unwrap_err(),
            IRTError::InvalidNodeCount { count: 0 }
        );
        assert_eq!(
            QuadratureGrid::new(1).unwrap_err(),
            IRTError::InvalidNodeCount { count: 1 }
        );
    }
}
