//! Host-facing probe: one ray against one triangle, once per frame.
//!
//! The host owns the geometry (draggable corners, ray markers) and the
//! visuals. It exposes the former through [`GeometryProvider`] and receives
//! results through [`ResultSink`]; the math never sees either side's types.

use serde::{Deserialize, Serialize};
use tricast_math::Point3;

use crate::{Intersector, Ray, Triangle};

/// Source of the geometry to test.
pub trait GeometryProvider {
    /// The three triangle corners, in order.
    fn triangle_vertices(&self) -> (Point3, Point3, Point3);

    /// Ray start marker and aim marker.
    fn ray_endpoints(&self) -> (Point3, Point3);
}

/// Receiver of a probe result.
pub trait ResultSink {
    /// The ray hits the triangle at `point`.
    fn on_hit(&mut self, point: Point3);

    /// The ray misses the triangle.
    fn on_miss(&mut self);
}

/// Run one probe with the default tolerance.
///
/// See [`probe_with`].
pub fn probe<G, S>(geometry: &G, sink: &mut S) -> Option<Point3>
where
    G: GeometryProvider + ?Sized,
    S: ResultSink + ?Sized,
{
    probe_with(&Intersector::default(), geometry, sink)
}

/// Run one probe.
///
/// The ray starts at the first endpoint and points, normalized, at the
/// second. Exactly one of `on_hit` / `on_miss` is called. Returns the hit
/// point, if any.
pub fn probe_with<G, S>(intersector: &Intersector, geometry: &G, sink: &mut S) -> Option<Point3>
where
    G: GeometryProvider + ?Sized,
    S: ResultSink + ?Sized,
{
    let (from, to) = geometry.ray_endpoints();
    let (v0, v1, v2) = geometry.triangle_vertices();

    let ray = Ray::through(from, to);
    let tri = Triangle::new(v0, v1, v2);

    match intersector.distance(&ray, &tri) {
        Some(t) => {
            let point = ray.at(t);
            log::debug!("probe hit at t = {t}: {point}");
            sink.on_hit(point);
            Some(point)
        }
        None => {
            log::debug!("probe miss");
            sink.on_miss();
            None
        }
    }
}

/// Ray appearance after a probe.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorState {
    /// The ray hits the triangle.
    Hit,
    /// The ray misses the triangle.
    #[default]
    NoHit,
}

/// A sink that keeps the visual state of the last probe.
///
/// `marker` is the hit marker's position, present only while the ray hits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Indicator {
    /// Ray appearance.
    pub state: IndicatorState,
    /// Hit marker position, shown only on a hit.
    pub marker: Option<Point3>,
}

impl Indicator {
    /// True if the last probe hit.
    pub fn is_hit(&self) -> bool {
        self.state == IndicatorState::Hit
    }
}

impl ResultSink for Indicator {
    fn on_hit(&mut self, point: Point3) {
        self.state = IndicatorState::Hit;
        self.marker = Some(point);
    }

    fn on_miss(&mut self) {
        self.state = IndicatorState::NoHit;
        self.marker = None;
    }
}
