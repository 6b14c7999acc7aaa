//! Affine transformation factories.
//!
//! Every function here builds a 4x4 [`Matrix`]. Transforms compose by
//! multiplication, applied right-to-left: in `c * b * a * p` the point `p`
//! meets `a` first, then `b`, then `c`. List transformations
//! innermost-first; reordering silently produces a different transform.
//!
//! # Usage
//!
//! ```rust
//! use std::f64::consts::FRAC_PI_2;
//! use rt_math::{transform, Tuple};
//!
//! let m = transform::translation(10.0, 5.0, 7.0)
//!     * transform::scaling(5.0, 5.0, 5.0)
//!     * transform::rotation_x(FRAC_PI_2);
//! let p = m * Tuple::point(1.0, 0.0, 1.0);
//! assert!(p.approx_eq(Tuple::point(15.0, 0.0, 7.0)));
//! ```

use crate::matrix::Matrix;

/// Translation by `(x, y, z)`. Moves points; leaves vectors (w=0) alone,
/// since the offsets live in the column the homogeneous multiply weights
/// by w.
pub fn translation(x: f64, y: f64, z: f64) -> Matrix {
    Matrix::from_rows_4([
        [1.0, 0.0, 0.0, x],
        [0.0, 1.0, 0.0, y],
        [0.0, 0.0, 1.0, z],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Scaling by `(x, y, z)`. Applies to points and vectors alike; negative
/// factors reflect across the corresponding axis.
pub fn scaling(x: f64, y: f64, z: f64) -> Matrix {
    Matrix::from_rows_4([
        [x, 0.0, 0.0, 0.0],
        [0.0, y, 0.0, 0.0],
        [0.0, 0.0, z, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Right-handed rotation around the x axis by `r` radians.
pub fn rotation_x(r: f64) -> Matrix {
    let (sin, cos) = r.sin_cos();
    Matrix::from_rows_4([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, cos, -sin, 0.0],
        [0.0, sin, cos, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Right-handed rotation around the y axis by `r` radians.
pub fn rotation_y(r: f64) -> Matrix {
    let (sin, cos) = r.sin_cos();
    Matrix::from_rows_4([
        [cos, 0.0, sin, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [-sin, 0.0, cos, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Right-handed rotation around the z axis by `r` radians.
pub fn rotation_z(r: f64) -> Matrix {
    let (sin, cos) = r.sin_cos();
    Matrix::from_rows_4([
        [cos, -sin, 0.0, 0.0],
        [sin, cos, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Shearing: each parameter moves one coordinate in proportion to another,
/// `xy` being "x in proportion to y" and so on.
pub fn shearing(xy: f64, xz: f64, yx: f64, yz: f64, zx: f64, zy: f64) -> Matrix {
    Matrix::from_rows_4([
        [1.0, xy, xz, 0.0],
        [yx, 1.0, yz, 0.0],
        [zx, zy, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}
