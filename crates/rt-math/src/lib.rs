//! # rt-math
//!
//! Geometric algebra for the rt-rs ray tracer.
//!
//! This crate provides the mathematical primitives every other rt-rs crate
//! builds on:
//!
//! - [`Tuple`] - homogeneous 4-component values: points (w=1), vectors (w=0),
//!   and colors (channels in x/y/z, w=0)
//! - [`Matrix`] - square matrices of order 2, 3, or 4 with
//!   determinant/cofactor/inverse
//! - [`transform`] - factories for translation, scaling, rotation, and
//!   shearing matrices
//! - [`float`] - the shared epsilon comparison all equality is built on
//!
//! # Convention
//!
//! Matrices are stored in **row-major** order and use **column tuples**:
//!
//! ```text
//! result = matrix * tuple
//! ```
//!
//! so in a composed transform `c * b * a`, `a` is applied first.
//!
//! # Usage
//!
//! ```rust
//! use rt_math::{transform, Tuple};
//!
//! let m = transform::translation(5.0, -3.0, 2.0);
//! let p = m * Tuple::point(-3.0, 4.0, 5.0);
//! assert!(p.approx_eq(Tuple::point(2.0, 1.0, 7.0)));
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - error enum derive
//!
//! # Used By
//!
//! - `rt-render` - ray/sphere intersection
//! - `rt-canvas` - colors are tuples

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod float;
mod matrix;
pub mod transform;
mod tuple;

pub use error::{MathError, Result};
pub use float::{approx_eq, EPSILON};
pub use matrix::Matrix;
pub use tuple::Tuple;
