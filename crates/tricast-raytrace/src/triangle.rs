//! Triangle representation.

use serde::{Deserialize, Serialize};
use tricast_math::{Dir3, Point3, Tolerance, Vec3};

/// A triangle given by three ordered vertices.
///
/// Vertex order fixes the winding (and so the normal direction) but not
/// whether a ray hits: the intersection test is double-sided.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    /// First vertex.
    pub v0: Point3,
    /// Second vertex.
    pub v1: Point3,
    /// Third vertex.
    pub v2: Point3,
}

impl Triangle {
    /// Create a triangle from its vertices.
    pub fn new(v0: Point3, v1: Point3, v2: Point3) -> Self {
        Self { v0, v1, v2 }
    }

    /// Vertices in order.
    pub fn vertices(&self) -> [Point3; 3] {
        [self.v0, self.v1, self.v2]
    }

    /// Edge vectors from the first vertex: `(v1 - v0, v2 - v0)`.
    #[inline]
    pub fn edges(&self) -> (Vec3, Vec3) {
        (self.v1 - self.v0, self.v2 - self.v0)
    }

    /// `(v1 - v0) x (v2 - v0)`; its length is twice the triangle area.
    pub fn area_vector(&self) -> Vec3 {
        let (e1, e2) = self.edges();
        e1.cross(&e2)
    }

    /// Area of the triangle.
    pub fn area(&self) -> f64 {
        0.5 * self.area_vector().norm()
    }

    /// Unit normal following the winding, or `None` for a degenerate triangle.
    pub fn normal(&self) -> Option<Dir3> {
        Dir3::try_new(self.area_vector(), 0.0)
    }

    /// True if the vertices are collinear or coincident within `tol`.
    ///
    /// The test is relative to the edge lengths, `|e1 x e2| <= eps |e1| |e2|`,
    /// so it does not depend on the triangle's scale. A zero-length edge is
    /// always degenerate.
    pub fn is_degenerate(&self, tol: &Tolerance) -> bool {
        let (e1, e2) = self.edges();
        e1.cross(&e2).norm() <= tol.epsilon * e1.norm() * e2.norm()
    }

    /// Point with barycentric weights `(1 - u - v, u, v)`.
    pub fn point_at(&self, u: f64, v: f64) -> Point3 {
        let (e1, e2) = self.edges();
        self.v0 + e1 * u + e2 * v
    }

    /// Cyclic permutation `(v1, v2, v0)`; same winding.
    pub fn rotated(&self) -> Self {
        Self::new(self.v1, self.v2, self.v0)
    }

    /// Swap the last two vertices, reversing the winding.
    pub fn flipped(&self) -> Self {
        Self::new(self.v0, self.v2, self.v1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_right() -> Triangle {
        Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        )
    }

    #[test]
    fn test_area_and_normal() {
        let tri = unit_right();
        assert_relative_eq!(tri.area(), 0.5);
        let n = tri.normal().unwrap();
        assert_relative_eq!(n.z, 1.0);
    }

    #[test]
    fn test_flipped_reverses_normal() {
        let n = unit_right().flipped().normal().unwrap();
        assert_relative_eq!(n.z, -1.0);
    }

    #[test]
    fn test_rotated_keeps_normal() {
        let tri = unit_right();
        let r = tri.rotated();
        assert_eq!(r.vertices(), [tri.v1, tri.v2, tri.v0]);
        assert_relative_eq!(r.normal().unwrap().z, 1.0);
        assert_eq!(r.rotated().rotated(), tri);
    }

    #[test]
    fn test_degenerate_collinear() {
        let tri = Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 1.0),
            Point3::new(2.0, 2.0, 2.0),
        );
        assert!(tri.is_degenerate(&Tolerance::DEFAULT));
        assert!(tri.normal().is_none());
        assert!(!unit_right().is_degenerate(&Tolerance::DEFAULT));
    }

    #[test]
    fn test_degenerate_is_scale_free() {
        let tol = Tolerance::DEFAULT;
        let scaled = |s: f64| {
            Triangle::new(
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(s, 0.0, 0.0),
                Point3::new(0.0, s, 0.0),
            )
        };
        assert!(!scaled(1e-4).is_degenerate(&tol));
        assert!(!scaled(1e4).is_degenerate(&tol));

        // Sliver: third vertex 1e-9 off the line through the first two
        let sliver = Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 1e-9, 0.0),
        );
        assert!(sliver.is_degenerate(&tol));

        let p = Point3::new(1.0, 2.0, 3.0);
        assert!(Triangle::new(p, p, Point3::origin()).is_degenerate(&tol));
    }

    #[test]
    fn test_point_at() {
        let tri = unit_right();
        let p = tri.point_at(0.5, 0.25);
        assert_relative_eq!(p.x, 0.5);
        assert_relative_eq!(p.y, 0.25);
    }
}
