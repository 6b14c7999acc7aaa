//! Sphere command
//!
//! Casts one ray per pixel from a fixed eye point through a wall behind the
//! sphere, then fills hit pixels flat or shades them with a single point
//! light. Rows render in parallel; the kernel itself is pure, so sharing
//! `&Sphere` across the pool is free.

use crate::SphereArgs;
use anyhow::{bail, Result};
use rayon::prelude::*;
use rt_canvas::Canvas;
use rt_math::{transform, Tuple};
use rt_render::{hit, IdAllocator, Material, PointLight, Ray, Sphere};
use tracing::{info, trace};

const RAY_ORIGIN: Tuple = Tuple::point(0.0, 0.0, -5.0);
const WALL_Z: f64 = 10.0;
const WALL_SIZE: f64 = 7.0;

pub fn run(args: SphereArgs) -> Result<()> {
    trace!(size = args.size, shaded = args.shaded, "sphere::run");

    let canvas = render(args.size, args.scale, args.shaded)?;
    super::save_canvas(&canvas, &args.output)?;

    info!(
        size = args.size,
        shaded = args.shaded,
        output = %args.output.display(),
        "Sphere render written"
    );
    Ok(())
}

/// Renders the sphere onto a square canvas, one ray per pixel, rows in
/// parallel.
fn render(size: u32, scale: Option<[f64; 3]>, shaded: bool) -> Result<Canvas> {
    if size == 0 {
        bail!("size must be at least 1");
    }

    let mut ids = IdAllocator::new();
    let mut sphere = Sphere::new(ids.next_id());
    if let Some([x, y, z]) = scale {
        sphere.set_transform(transform::scaling(x, y, z))?;
    }

    let material = Material {
        color: Tuple::color(1.0, 0.2, 1.0),
        ..Material::default()
    };
    let light = PointLight::new(Tuple::point(-10.0, 10.0, -10.0), Tuple::WHITE);

    let pixel_size = WALL_SIZE / f64::from(size);
    let half = WALL_SIZE / 2.0;

    let mut canvas = Canvas::new(size, size);
    canvas
        .pixels_mut()
        .par_chunks_mut(size as usize)
        .enumerate()
        .for_each(|(y, row)| {
            let world_y = half - pixel_size * y as f64;
            for (x, pixel) in row.iter_mut().enumerate() {
                let world_x = -half + pixel_size * x as f64;
                let target = Tuple::point(world_x, world_y, WALL_Z);
                let ray = Ray::new(RAY_ORIGIN, (target - RAY_ORIGIN).normalize());

                if let Some(visible) = hit(&sphere.intersect(&ray)) {
                    *pixel = if shaded {
                        let point = ray.position(visible.t);
                        let normal = sphere.normal_at(point);
                        lighting(&material, &light, point, -ray.direction, normal)
                    } else {
                        material.color
                    };
                }
            }
        });

    Ok(canvas)
}

/// Reflects `incoming` around `normal`.
fn reflect(incoming: Tuple, normal: Tuple) -> Tuple {
    incoming - normal * 2.0 * incoming.dot(normal)
}

/// Diffuse plus specular contribution of one point light. The kernel only
/// hands out geometry; this shading is scene glue, consuming the material
/// and light value objects.
fn lighting(
    material: &Material,
    light: &PointLight,
    point: Tuple,
    eye: Tuple,
    normal: Tuple,
) -> Tuple {
    let effective = material.color.hadamard(light.intensity);
    let to_light = (light.position - point).normalize();

    let light_dot_normal = to_light.dot(normal);
    if light_dot_normal < 0.0 {
        // Light is on the other side of the surface.
        return Tuple::BLACK;
    }

    let mut color = effective * material.diffuse * light_dot_normal;

    let reflect_dot_eye = reflect(-to_light, normal).dot(eye);
    if reflect_dot_eye > 0.0 {
        let factor = reflect_dot_eye.powf(material.shininess);
        color = color + light.intensity * material.specular * factor;
    }
    color
}
