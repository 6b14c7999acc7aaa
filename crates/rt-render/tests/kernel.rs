//! End-to-end walks through the kernel: transform a sphere, cast a ray,
//! pick the hit, compute the normal at it.

use rt_math::{transform, MathError, Matrix, Tuple};
use rt_render::{hit, IdAllocator, Intersection, Ray, Sphere};
use std::f64::consts::PI;

#[test]
fn scaled_sphere_shifts_hit_and_keeps_ids() {
    let mut ids = IdAllocator::new();
    let mut sphere = Sphere::new(ids.next_id());
    sphere
        .set_transform(transform::scaling(2.0, 2.0, 2.0))
        .unwrap();

    let ray = Ray::new(Tuple::point(0.0, 0.0, -5.0), Tuple::vector(0.0, 0.0, 1.0));
    let xs = sphere.intersect(&ray);
    assert_eq!(
        xs,
        vec![
            Intersection::new(3.0, sphere.id()),
            Intersection::new(7.0, sphere.id()),
        ]
    );

    let visible = hit(&xs).unwrap();
    assert_eq!(visible.t, 3.0);
    assert_eq!(visible.object, sphere.id());
}

#[test]
fn hit_point_normal_on_a_squashed_sphere() {
    let mut ids = IdAllocator::new();
    let mut sphere = Sphere::new(ids.next_id());
    sphere
        .set_transform(transform::scaling(1.0, 0.5, 1.0))
        .unwrap();

    // A ray that strikes the squashed sphere off-axis.
    let ray = Ray::new(
        Tuple::point(0.0, 0.25, -5.0),
        Tuple::vector(0.0, 0.0, 1.0),
    );
    let xs = sphere.intersect(&ray);
    let visible = hit(&xs).expect("ray hits the squashed sphere");

    let point = ray.position(visible.t);
    let normal = sphere.normal_at(point);

    // The normal must be unit length and still perpendicular despite the
    // non-uniform scale; the forward transform would fail both checks.
    assert!(rt_math::approx_eq(normal.magnitude(), 1.0));
    assert!(normal.is_vector());
    let to_surface = (point - ray.origin).normalize();
    assert!(to_surface.dot(normal) < 0.0);
}

#[test]
fn failed_retransform_keeps_old_geometry_observable() {
    let mut ids = IdAllocator::new();
    let mut sphere = Sphere::new(ids.next_id());
    sphere
        .set_transform(transform::translation(5.0, 0.0, 0.0))
        .unwrap();

    let singular = Matrix::from_rows_4([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 0.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);
    assert_eq!(
        sphere.set_transform(singular).unwrap_err(),
        MathError::NotInvertible
    );

    // The translated sphere still misses the canonical z ray.
    let ray = Ray::new(Tuple::point(0.0, 0.0, -5.0), Tuple::vector(0.0, 0.0, 1.0));
    assert!(sphere.intersect(&ray).is_empty());
    assert_eq!(*sphere.transform(), transform::translation(5.0, 0.0, 0.0));
}

#[test]
fn composed_transform_applies_innermost_first() {
    let mut ids = IdAllocator::new();
    let mut sphere = Sphere::new(ids.next_id());
    // Scale first, rotate second: the later transform sits on the left of
    // the product.
    sphere
        .set_transform(transform::rotation_z(PI) * transform::scaling(2.0, 2.0, 2.0))
        .unwrap();

    let ray = Ray::new(Tuple::point(0.0, 0.0, -5.0), Tuple::vector(0.0, 0.0, 1.0));
    let xs = sphere.intersect(&ray);
    assert_eq!(xs.len(), 2);
    assert_eq!(xs[0].t, 3.0);
    assert_eq!(xs[1].t, 7.0);
}

#[test]
fn distinct_spheres_tag_their_own_intersections() {
    let mut ids = IdAllocator::new();
    let near = Sphere::new(ids.next_id());
    let mut far = Sphere::new(ids.next_id());
    far.set_transform(transform::translation(0.0, 0.0, 10.0))
        .unwrap();

    let ray = Ray::new(Tuple::point(0.0, 0.0, -5.0), Tuple::vector(0.0, 0.0, 1.0));
    let mut xs = near.intersect(&ray);
    xs.extend(far.intersect(&ray));

    let visible = hit(&xs).unwrap();
    assert_eq!(visible.object, near.id());
    assert_eq!(visible.t, 4.0);
}
