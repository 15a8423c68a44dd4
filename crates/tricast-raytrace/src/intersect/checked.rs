//! Input validation for the checked intersection entry points.

use tricast_math::{is_finite_point, is_finite_vec, Tolerance};

use crate::error::{DegenerateKind, IntersectError, Result};
use crate::{Ray, Triangle};

/// Reject input the intersection test would silently turn into a miss.
///
/// Checks, in order: finite ray, finite vertices, non-zero direction,
/// non-collinear vertices. Only an exactly zero direction is rejected; a
/// short one is still a valid ray.
pub fn validate(ray: &Ray, tri: &Triangle, tol: &Tolerance) -> Result<()> {
    if !is_finite_point(&ray.origin) {
        return Err(IntersectError::NonFinite("ray origin"));
    }
    if !is_finite_vec(&ray.direction) {
        return Err(IntersectError::NonFinite("ray direction"));
    }
    if !tri.vertices().iter().all(is_finite_point) {
        return Err(IntersectError::NonFinite("triangle vertex"));
    }
    if ray.unit_direction().is_none() {
        return Err(DegenerateKind::ZeroDirection.into());
    }
    if tri.is_degenerate(tol) {
        return Err(DegenerateKind::CollinearVertices.into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tricast_math::{Point3, Vec3};

    fn tri() -> Triangle {
        Triangle::new(
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(-1.0, -1.0, 0.0),
            Point3::new(1.0, -1.0, 0.0),
        )
    }

    fn ray() -> Ray {
        Ray::new(Point3::new(0.0, 0.0, -1.0), Vec3::new(0.0, 0.0, 1.0))
    }

    #[test]
    fn test_valid_input() {
        assert!(validate(&ray(), &tri(), &Tolerance::DEFAULT).is_ok());
    }

    #[test]
    fn test_zero_direction() {
        let ray = Ray::new(Point3::origin(), Vec3::zeros());
        let err = validate(&ray, &tri(), &Tolerance::DEFAULT).unwrap_err();
        assert_eq!(err, IntersectError::Degenerate(DegenerateKind::ZeroDirection));
    }

    #[test]
    fn test_short_direction_is_valid() {
        let big = Triangle::new(
            Point3::new(0.0, 10.0, 0.0),
            Point3::new(-10.0, -10.0, 0.0),
            Point3::new(10.0, -10.0, 0.0),
        );
        let ray = Ray::new(Point3::new(0.0, 0.0, -1.0), Vec3::new(0.0, 0.0, 1e-7));
        assert!(validate(&ray, &big, &Tolerance::DEFAULT).is_ok());

        let checked = crate::try_intersect(&ray, &big).unwrap();
        assert_eq!(checked, crate::intersect_triangle(&ray, &big));
        let t = checked.unwrap().t;
        assert!((t - 1e7).abs() < 1e-3);
    }

    #[test]
    fn test_small_triangle_is_valid() {
        let s = 1e-4;
        let small = Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(s, 0.0, 0.0),
            Point3::new(0.0, s, 0.0),
        );
        assert!(validate(&ray(), &small, &Tolerance::DEFAULT).is_ok());
    }

    #[test]
    fn test_collinear_vertices() {
        let tri = Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(0.0, 0.0, 3.0),
        );
        let err = validate(&ray(), &tri, &Tolerance::DEFAULT).unwrap_err();
        assert_eq!(
            err,
            IntersectError::Degenerate(DegenerateKind::CollinearVertices)
        );
    }

    #[test]
    fn test_coincident_vertices() {
        let p = Point3::new(1.0, 2.0, 3.0);
        let err = validate(&ray(), &Triangle::new(p, p, p), &Tolerance::DEFAULT).unwrap_err();
        assert_eq!(
            err,
            IntersectError::Degenerate(DegenerateKind::CollinearVertices)
        );
    }

    #[test]
    fn test_non_finite() {
        let ray = Ray::new(Point3::new(f64::INFINITY, 0.0, 0.0), Vec3::z());
        assert_eq!(
            validate(&ray, &tri(), &Tolerance::DEFAULT).unwrap_err(),
            IntersectError::NonFinite("ray origin")
        );

        let mut bad = tri();
        bad.v2.y = f64::NAN;
        assert_eq!(
            validate(&self::ray(), &bad, &Tolerance::DEFAULT).unwrap_err(),
            IntersectError::NonFinite("triangle vertex")
        );
    }

    #[test]
    fn test_error_messages() {
        let err = IntersectError::from(DegenerateKind::ZeroDirection);
        assert_eq!(err.to_string(), "degenerate input: ray direction has zero length");
    }
}
