//! Shared floating-point comparison.
//!
//! Every transformation chain accumulates trigonometric rounding error, so
//! all equality in the kernel is approximate. Tuple comparison, matrix
//! comparison, and intersection comparison are all built on this one scalar
//! primitive.

/// Tolerance for all approximate comparisons in the kernel.
pub const EPSILON: f64 = 1e-5;

/// Returns `true` if `a` and `b` differ by less than [`EPSILON`].
///
/// # Example
///
/// ```rust
/// use rt_math::float::approx_eq;
///
/// assert!(approx_eq(1.0, 1.0 + 1e-6));
/// assert!(!approx_eq(1.0, 1.1));
/// ```
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}
