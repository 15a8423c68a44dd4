//! Möller–Trumbore ray-triangle intersection (closed-form).
//!
//! Solves `O + tD = (1 - u - v)V0 + uV1 + vV2` for `(t, u, v)` with
//! Cramer's rule, evaluating the determinants as scalar triple products.
//!
//! Tomas Möller & Ben Trumbore (1997), Fast, Minimum Storage Ray-Triangle
//! Intersection, Journal of Graphics Tools, 2:1, 21-28.

use tricast_math::Tolerance;

use crate::{Ray, Triangle};

/// Solution of the ray-triangle system, before a return style is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleHit {
    /// Parameter along the ray.
    pub t: f64,
    /// Barycentric weight of `v1`.
    pub u: f64,
    /// Barycentric weight of `v2`.
    pub v: f64,
}

/// Intersect a ray with a triangle.
///
/// Returns `None` when the ray is parallel to the triangle's plane
/// (`|det| < epsilon`, which also rejects rays lying in the plane), when the
/// barycentric coordinates fall outside the triangle, or when the hit is not
/// strictly in front of the origin (`t <= epsilon`). Points exactly on an
/// edge or vertex count as hits.
pub fn solve(ray: &Ray, tri: &Triangle, tol: &Tolerance) -> Option<TriangleHit> {
    let (e1, e2) = tri.edges();

    let h = ray.direction.cross(&e2);
    let det = e1.dot(&h);

    // Ray is parallel to the triangle's plane
    if tol.is_zero(det) {
        log::trace!("ray/tri: parallel, det = {det}");
        return None;
    }

    let inv_det = 1.0 / det;
    let s = ray.origin - tri.v0;

    let u = inv_det * s.dot(&h);
    if u < 0.0 || u > 1.0 {
        log::trace!("ray/tri: outside, u = {u}");
        return None;
    }

    let q = s.cross(&e1);
    let v = inv_det * ray.direction.dot(&q);
    if v < 0.0 || u + v > 1.0 {
        log::trace!("ray/tri: outside, u = {u}, v = {v}");
        return None;
    }

    // Line intersection exists; only accept it in front of the origin
    let t = inv_det * e2.dot(&q);
    if !tol.is_positive(t) {
        log::trace!("ray/tri: behind origin, t = {t}");
        return None;
    }

    log::trace!("ray/tri: hit, t = {t}, u = {u}, v = {v}");
    Some(TriangleHit { t, u, v })
}
