//! Point light and material value objects.
//!
//! Plain data consumed by whatever shading sits on top of the kernel; the
//! kernel itself only ever produces geometry (hit points and normals).

use rt_math::Tuple;

/// A dimensionless light source at a single point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    /// World-space position of the light.
    pub position: Tuple,
    /// Light color/intensity.
    pub intensity: Tuple,
}

impl PointLight {
    /// Creates a point light.
    #[inline]
    pub const fn new(position: Tuple, intensity: Tuple) -> Self {
        Self {
            position,
            intensity,
        }
    }
}

/// Surface reflectance parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Surface color.
    pub color: Tuple,
    /// Diffuse reflection factor.
    pub diffuse: f64,
    /// Specular reflection factor.
    pub specular: f64,
    /// Specular highlight tightness.
    pub shininess: f64,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: Tuple::WHITE,
            diffuse: 0.9,
            specular: 0.9,
            shininess: 200.0,
        }
    }
}
