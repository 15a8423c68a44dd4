//! Batch queries - many rays against many triangles.
//!
//! Each query is independent, so rays are evaluated in parallel with rayon.
//! Results always come back in input order.

use rayon::prelude::*;

use crate::error::{IntersectError, Result};
use crate::{Intersector, Ray, RayHit, Triangle};

/// Intersect `rays[i]` with `triangles[i]` for every `i`.
pub fn intersect_pairs(
    intersector: &Intersector,
    rays: &[Ray],
    triangles: &[Triangle],
) -> Result<Vec<Option<RayHit>>> {
    if rays.len() != triangles.len() {
        return Err(IntersectError::LengthMismatch {
            rays: rays.len(),
            triangles: triangles.len(),
        });
    }

    let hits = rays
        .par_iter()
        .zip(triangles.par_iter())
        .map(|(ray, tri)| intersector.hit(ray, tri))
        .collect();

    Ok(hits)
}

/// Find the nearest triangle hit by `ray`.
///
/// Returns the triangle index and hit. On equal `t` the lowest index wins.
pub fn closest_hit(
    intersector: &Intersector,
    ray: &Ray,
    triangles: &[Triangle],
) -> Option<(usize, RayHit)> {
    let mut best: Option<(usize, RayHit)> = None;
    for (idx, tri) in triangles.iter().enumerate() {
        if let Some(hit) = intersector.hit(ray, tri) {
            if best.map_or(true, |(_, b)| hit.t < b.t) {
                best = Some((idx, hit));
            }
        }
    }
    best
}

/// Closest hit for every ray, evaluated in parallel.
pub fn cast_all(
    intersector: &Intersector,
    rays: &[Ray],
    triangles: &[Triangle],
) -> Vec<Option<(usize, RayHit)>> {
    log::debug!(
        "casting {} rays against {} triangles",
        rays.len(),
        triangles.len()
    );

    let hits: Vec<_> = rays
        .par_iter()
        .map(|ray| closest_hit(intersector, ray, triangles))
        .collect();

    log::debug!(
        "{} of {} rays hit",
        hits.iter().filter(|h| h.is_some()).count(),
        rays.len()
    );
    hits
}
