//! Clock command
//!
//! Plots the twelve clock-face positions of a point rotated around the
//! y axis, viewed from above (x maps to columns, z to rows).

use crate::ClockArgs;
use anyhow::Result;
use rt_canvas::Canvas;
use rt_math::{transform, Tuple};
use std::f64::consts::PI;
use tracing::{info, trace};

pub fn run(args: ClockArgs) -> Result<()> {
    trace!(width = args.width, height = args.height, "clock::run");

    let canvas = render(args.width, args.height);
    super::save_canvas(&canvas, &args.output)?;

    info!(
        width = args.width,
        height = args.height,
        output = %args.output.display(),
        "Clock face written"
    );
    Ok(())
}

/// Rotates the twelve o'clock point `point(0, 0, 1)` around the y axis in
/// pi/6 steps and plots each hour mark, plus the center in red.
fn render(width: u32, height: u32) -> Canvas {
    let mut canvas = Canvas::new(width, height);
    let mid_x = i64::from(width / 2);
    let mid_y = i64::from(height / 2);
    let radius = f64::from(height) / 4.0;

    plot(&mut canvas, mid_x, mid_y, Tuple::RED);

    let twelve = Tuple::point(0.0, 0.0, 1.0);
    for hour in 0..12 {
        let rotation = transform::rotation_y(f64::from(hour) * PI / 6.0);
        let mark = rotation * twelve;
        plot(
            &mut canvas,
            (radius * mark.x) as i64 + mid_x,
            (radius * mark.z) as i64 + mid_y,
            Tuple::WHITE,
        );
    }
    canvas
}

/// Writes a pixel if it lands on the canvas; marks can fall off very small
/// canvases.
fn plot(canvas: &mut Canvas, x: i64, y: i64, color: Tuple) {
    if (0..i64::from(canvas.width())).contains(&x) && (0..i64::from(canvas.height())).contains(&y) {
        canvas.write_pixel(x as u32, y as u32, color);
    }
}
