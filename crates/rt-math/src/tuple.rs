//! Homogeneous 4-component tuple type.
//!
//! [`Tuple`] represents a point, a vector, or a color depending on how it was
//! constructed. The fourth component `w` is the homogeneous coordinate: 1 for
//! points (translatable) and 0 for vectors and colors (not translatable).
//! The three meanings deliberately share one shape so that matrix multiplies,
//! differences of points, and color arithmetic all flow through the same
//! operations.
//!
//! # Usage
//!
//! ```rust
//! use rt_math::Tuple;
//!
//! let from = Tuple::point(1.0, 2.0, 3.0);
//! let to = Tuple::point(4.0, 6.0, 3.0);
//! let dir = (to - from).normalize();
//! assert!(dir.is_vector());
//! assert!(rt_math::approx_eq(dir.magnitude(), 1.0));
//! ```

use crate::float::approx_eq;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A homogeneous 4-component value: point (w=1), vector (w=0), or color
/// (r/g/b stored in x/y/z, w=0).
///
/// Immutable by convention - every operation returns a new value.
///
/// # Example
///
/// ```rust
/// use rt_math::Tuple;
///
/// let p = Tuple::point(4.3, -4.2, 3.1);
/// assert!(p.is_point());
/// assert!(!p.is_vector());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tuple {
    /// X component (R for colors)
    pub x: f64,
    /// Y component (G for colors)
    pub y: f64,
    /// Z component (B for colors)
    pub z: f64,
    /// Homogeneous coordinate: 1 for points, 0 for vectors and colors
    pub w: f64,
}

impl Tuple {
    /// The origin point (0, 0, 0).
    pub const ORIGIN: Self = Self::point(0.0, 0.0, 0.0);

    /// Opaque white, the default material color.
    pub const WHITE: Self = Self::color(1.0, 1.0, 1.0);

    /// Pure red.
    pub const RED: Self = Self::color(1.0, 0.0, 0.0);

    /// Black, the canvas clear color.
    pub const BLACK: Self = Self::color(0.0, 0.0, 0.0);

    /// Creates a tuple with an explicit w component.
    ///
    /// Prefer [`Tuple::point`], [`Tuple::vector`], or [`Tuple::color`];
    /// this exists for matrix multiplication and tests.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// Creates a point (w = 1).
    #[inline]
    pub const fn point(x: f64, y: f64, z: f64) -> Self {
        Self::new(x, y, z, 1.0)
    }

    /// Creates a vector (w = 0).
    #[inline]
    pub const fn vector(x: f64, y: f64, z: f64) -> Self {
        Self::new(x, y, z, 0.0)
    }

    /// Creates a color (w = 0, channels stored in x/y/z).
    #[inline]
    pub const fn color(r: f64, g: f64, b: f64) -> Self {
        Self::new(r, g, b, 0.0)
    }

    /// Returns `true` if this tuple is a point (w = 1).
    #[inline]
    pub fn is_point(&self) -> bool {
        self.w == 1.0
    }

    /// Returns `true` if this tuple is a vector (w = 0).
    #[inline]
    pub fn is_vector(&self) -> bool {
        self.w == 0.0
    }

    /// Red channel of a color tuple.
    #[inline]
    pub fn red(&self) -> f64 {
        self.x
    }

    /// Green channel of a color tuple.
    #[inline]
    pub fn green(&self) -> f64 {
        self.y
    }

    /// Blue channel of a color tuple.
    #[inline]
    pub fn blue(&self) -> f64 {
        self.z
    }

    /// Dot product over **all four** components.
    ///
    /// Including w means point/vector mismatches surface in the result
    /// instead of being silently masked.
    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Cross product. Only meaningful for vectors; w is ignored and the
    /// result is a vector.
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::vector(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Magnitude over all four components.
    ///
    /// The zero tuple has no direction; calling this on it and then
    /// normalizing yields NaN. That precondition is the caller's to uphold,
    /// matching the rest of the kernel's unchecked numeric edges.
    #[inline]
    pub fn magnitude(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Scales to unit magnitude. See [`Tuple::magnitude`] for the zero-tuple
    /// precondition.
    #[inline]
    pub fn normalize(self) -> Self {
        self / self.magnitude()
    }

    /// Component-wise color product (Hadamard). Returns a color.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rt_math::Tuple;
    ///
    /// let a = Tuple::color(1.0, 0.2, 0.4);
    /// let b = Tuple::color(0.9, 1.0, 0.1);
    /// assert!(a.hadamard(b).approx_eq(Tuple::color(0.9, 0.2, 0.04)));
    /// ```
    #[inline]
    pub fn hadamard(self, other: Self) -> Self {
        Self::color(
            self.red() * other.red(),
            self.green() * other.green(),
            self.blue() * other.blue(),
        )
    }

    /// Approximate equality: every component within [`crate::EPSILON`].
    #[inline]
    pub fn approx_eq(self, other: Self) -> bool {
        approx_eq(self.x, other.x)
            && approx_eq(self.y, other.y)
            && approx_eq(self.z, other.z)
            && approx_eq(self.w, other.w)
    }
}

// Tuple + Tuple
impl Add for Tuple {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.x + rhs.x,
            self.y + rhs.y,
            self.z + rhs.z,
            self.w + rhs.w,
        )
    }
}

// Tuple - Tuple
impl Sub for Tuple {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(
            self.x - rhs.x,
            self.y - rhs.y,
            self.z - rhs.z,
            self.w - rhs.w,
        )
    }
}

// -Tuple
impl Neg for Tuple {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

// Tuple * f64
impl Mul<f64> for Tuple {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs, self.w * rhs)
    }
}

// f64 * Tuple
impl Mul<Tuple> for f64 {
    type Output = Tuple;

    #[inline]
    fn mul(self, rhs: Tuple) -> Tuple {
        rhs * self
    }
}

// Tuple / f64
impl Div<f64> for Tuple {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs, self.w / rhs)
    }
}
