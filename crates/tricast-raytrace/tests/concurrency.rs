//! Intersection queries share no state and can run from any thread.

use std::thread;

use tricast_math::{Point3, Vec3};
use tricast_raytrace::batch::cast_all;
use tricast_raytrace::{intersect_triangle, Intersector, Ray, RayHit, Triangle};

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn value_types_are_send_and_sync() {
    assert_send_sync::<Ray>();
    assert_send_sync::<Triangle>();
    assert_send_sync::<RayHit>();
    assert_send_sync::<Intersector>();
}

fn fan() -> Vec<Triangle> {
    (0..8)
        .map(|i| {
            let z = i as f64;
            Triangle::new(
                Point3::new(0.0, 2.0, z),
                Point3::new(-2.0 + 0.1 * z, -1.0, z),
                Point3::new(2.0 - 0.1 * z, -1.0, z),
            )
        })
        .collect()
}

fn grid_rays() -> Vec<Ray> {
    (0..400)
        .map(|i| {
            let x = (i % 20) as f64 * 0.25 - 2.5;
            let y = (i / 20) as f64 * 0.25 - 2.5;
            Ray::new(Point3::new(x, y, -1.0), Vec3::new(0.01 * x, 0.0, 1.0))
        })
        .collect()
}

fn hit_table(rays: &[Ray], tris: &[Triangle]) -> Vec<Vec<Option<RayHit>>> {
    rays.iter()
        .map(|r| tris.iter().map(|t| intersect_triangle(r, t)).collect())
        .collect()
}

#[test]
fn threads_agree_with_sequential() {
    let tris = fan();
    let rays = grid_rays();
    let expected = hit_table(&rays, &tris);

    let results: Vec<_> = thread::scope(|s| {
        let handles: Vec<_> = (0..4).map(|_| s.spawn(|| hit_table(&rays, &tris))).collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(results.len(), 4);
    for result in results {
        assert_eq!(result, expected);
    }
}

#[test]
fn parallel_batch_is_deterministic() {
    let tris = fan();
    let rays = grid_rays();
    let intersector = Intersector::default();

    let first = cast_all(&intersector, &rays, &tris);
    for _ in 0..4 {
        assert_eq!(cast_all(&intersector, &rays, &tris), first);
    }
    assert!(first.iter().any(|h| h.is_some()));
}
