//! CLI command implementations

pub mod clock;
pub mod sphere;

use anyhow::{Context, Result};
use rt_canvas::{ppm, Canvas};
use std::path::Path;

/// Serializes a rendered canvas and saves it as a PPM file.
pub fn save_canvas(canvas: &Canvas, path: &Path) -> Result<()> {
    ppm::write_file(canvas, path).with_context(|| format!("Failed to write: {}", path.display()))
}
