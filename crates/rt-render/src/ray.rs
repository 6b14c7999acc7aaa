//! Rays: an origin point plus a direction vector.

use rt_math::{Matrix, Tuple};

/// A ray in world or object space.
///
/// `origin` is expected to be a point (w=1) and `direction` a vector (w=0);
/// like the rest of the kernel this is a documented precondition, not a
/// runtime check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Starting point of the ray.
    pub origin: Tuple,
    /// Direction of travel; not required to be normalized.
    pub direction: Tuple,
}

impl Ray {
    /// Creates a ray from an origin point and a direction vector.
    #[inline]
    pub const fn new(origin: Tuple, direction: Tuple) -> Self {
        Self { origin, direction }
    }

    /// Point reached after traveling `t` units along the ray:
    /// `origin + direction * t`.
    #[inline]
    pub fn position(&self, t: f64) -> Tuple {
        self.origin + self.direction * t
    }

    /// Applies a 4x4 transform to both components.
    ///
    /// The direction's w=0 drops the matrix's translation column through
    /// the ordinary homogeneous multiply, so translated rays keep their
    /// direction - nothing is special-cased here.
    ///
    /// # Panics
    ///
    /// Panics if the matrix order is not 4.
    #[inline]
    pub fn transform(&self, m: &Matrix) -> Self {
        Self {
            origin: *m * self.origin,
            direction: *m * self.direction,
        }
    }
}
