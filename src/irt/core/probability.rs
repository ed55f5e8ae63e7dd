//! 4-parameter logistic item response function.
//!
//! Implements the probability of a correct response given a latent trait
//! vector and an item's parameters:
//!
//! `P(correct | θ, item) = c + (gamma − c) · logistic(Σ_k a_k·θ_k + d)`
//!
//! ## What this module does
//! - Computes the linear kernel over the shared trait dimensionality; a
//!   trait component without a matching discrimination weight (or vice
//!   versa) contributes 0.
//! - Squashes the kernel through a numerically guarded logistic, then maps
//!   the unit interval onto the item's `[c, gamma]` band.
//! - Provides [`probability_at_node`], the quadrature fast path where the
//!   trait is a scalar node on the first dimension and all higher
//!   components sit at the prior mean 0.
//!
//! ## Invariants (enforced upstream)
//! - Item parameters satisfy `0 ≤ c ≤ gamma ≤ 1` with finite `a`, `d`
//!   (validated by `Item::new`).
//! - These are pure functions: no side effects, no allocation.
use crate::irt::core::items::Item;
use ndarray::ArrayView1;

/// Input magnitude beyond which `exp(-x)` would overflow; kernels are
/// clamped here before exponentiation. Quadrature-bounded kernels stay well
/// inside this range.
const LOGISTIC_CLAMP: f64 = 700.0;

/// Standard logistic function with overflow guarding.
///
/// Clamps the input to ±[`LOGISTIC_CLAMP`] so `exp` never overflows; within
/// the clamp the result is exact to f64 precision.
#[inline]
pub(crate) fn safe_logistic(x: f64) -> f64 {
    let x_clamped = x.clamp(-LOGISTIC_CLAMP, LOGISTIC_CLAMP);
    1.0 / (1.0 + f64::exp(-x_clamped))
}

/// Linear kernel `Σ_k a_k·θ_k + d` over the shared dimensionality.
///
/// The zip truncates at the shorter of `theta` and `item.a`, so a missing
/// trait component (or an unmatched discrimination weight) contributes 0.
#[inline]
pub(crate) fn kernel(theta: ArrayView1<f64>, item: &Item) -> f64 {
    item.a.iter().zip(theta.iter()).map(|(a, t)| a * t).sum::<f64>() + item.d
}

/// Probability of a correct response at trait `theta` under `item`.
///
/// # Definition
/// `c + (gamma − c) · logistic(kernel(theta, item))`, which lies in
/// `[c, gamma]` for any real kernel and is non-decreasing in the kernel.
///
/// # Inputs
/// - `theta`: trait vector; components beyond the item's dimensionality are
///   ignored, absent components are treated as 0.
/// - `item`: validated item parameters.
pub fn probability(theta: ArrayView1<f64>, item: &Item) -> f64 {
    item.c + (item.gamma - item.c) * safe_logistic(kernel(theta, item))
}

/// Probability of a correct response at a scalar quadrature node.
///
/// The quadrature grid spans the first latent dimension; higher trait
/// components sit at the prior mean 0, so the kernel reduces to
/// `a[0]·node + d`. Used by the E-step, the M-step, and the EAP scorer.
#[inline]
pub fn probability_at_node(node: f64, item: &Item) -> f64 {
    item.c + (item.gamma - item.c) * safe_logistic(item.a[0] * node + item.d)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - The exact zero-kernel value and the [c, gamma] range bound.
    // - Monotonicity in the kernel for positive discriminations.
    // - Missing-trait-component semantics (zip truncation).
    // - Numerical stability for extreme kernels and agreement between the
    //   vector and node paths.
    // -------------------------------------------------------------------------

    fn unit_item() -> Item {
        Item::new(array![1.0], 0.0, 0.0, 1.0).unwrap()
    }

    #[test]
    // Purpose
    // -------
    // Verify the exact anchor value: a zero kernel yields probability 1/2
    // for the unconstrained item.
    //
    // Given
    // -----
    // - `theta = [0]`, `a = [1]`, `d = 0`, `c = 0`, `gamma = 1`.
    //
    // Expect
    // ------
    // - `probability` returns exactly 0.5.
    fn zero_kernel_gives_exactly_one_half() {
        let item = unit_item();
        assert_eq!(probability(array![0.0].view(), &item), 0.5);
        assert_eq!(probability_at_node(0.0, &item), 0.5);
    }

    #[test]
    // Purpose
    // -------
    // Verify the response stays inside [c, gamma] across extreme traits.
    //
    // Given
    // -----
    // - A 4PL item with c = 0.2, gamma = 0.9 evaluated from θ = -50 to 50.
    //
    // Expect
    // ------
    // - Every probability lies in [0.2, 0.9]; the extremes approach the
    //   asymptotes.
    fn probability_stays_within_asymptote_band() {
        let item = Item::new(array![1.5], -0.4, 0.2, 0.9).unwrap();
        for i in -50..=50 {
            let theta = i as f64;
            let p = probability(array![theta].view(), &item);
            assert!((item.c..=item.gamma).contains(&p), "p = {p} outside band at theta = {theta}");
        }
        assert_abs_diff_eq!(probability(array![-50.0].view(), &item), 0.2, epsilon = 1e-9);
        assert_abs_diff_eq!(probability(array![50.0].view(), &item), 0.9, epsilon = 1e-9);
    }

    #[test]
    // Purpose
    // -------
    // Verify monotonicity in the trait when discriminations are positive.
    //
    // Given
    // -----
    // - A 2PL item with a = [0.8] evaluated on an ascending trait sweep.
    //
    // Expect
    // ------
    // - Probabilities are non-decreasing along the sweep.
    fn probability_is_monotone_for_positive_discrimination() {
        let item = Item::new(array![0.8], 0.3, 0.0, 1.0).unwrap();
        let mut last = 0.0;
        for i in -40..=40 {
            let p = probability_at_node(i as f64 * 0.1, &item);
            assert!(p >= last, "probability decreased at node index {i}");
            last = p;
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify that missing trait components contribute zero to the kernel.
    //
    // Given
    // -----
    // - A 2-dimensional item evaluated with a 1-component trait vector, and
    //   the matching full vector with the second component at 0.
    //
    // Expect
    // ------
    // - Both evaluations agree, and match the scalar node path.
    fn missing_trait_components_are_treated_as_zero() {
        let item = Item::new(array![1.2, 0.7], 0.25, 0.0, 1.0).unwrap();
        let short = probability(array![0.6].view(), &item);
        let padded = probability(array![0.6, 0.0].view(), &item);
        assert_eq!(short, padded);
        assert_relative_eq!(short, probability_at_node(0.6, &item), epsilon = 1e-15);
    }

    #[test]
    // Purpose
    // -------
    // Verify the logistic guard keeps extreme kernels finite.
    //
    // Given
    // -----
    // - Kernels of ±1e6 via an extreme trait value.
    //
    // Expect
    // ------
    // - Probabilities are finite and equal to the asymptotes.
    fn extreme_kernels_do_not_overflow() {
        let item = unit_item();
        let hi = probability(array![1e6].view(), &item);
        let lo = probability(array![-1e6].view(), &item);
        assert!(hi.is_finite() && lo.is_finite());
        assert_eq!(hi, 1.0);
        assert!((0.0..1e-300).contains(&lo), "lo = {lo} should be vanishingly small");
    }
}
