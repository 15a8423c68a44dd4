#![warn(missing_docs)]

//! Ray-triangle intersection for tricast.
//!
//! This crate provides the Möller–Trumbore ray-triangle test together with
//! the small amount of plumbing needed to drive it from a host scene.
//!
//! # Architecture
//!
//! - [`Ray`] - Ray representation with origin and (unnormalized) direction
//! - [`Triangle`] - Three ordered vertices
//! - [`RayHit`] - Intersection record with parameter, point and barycentrics
//! - [`intersect`] - The intersection test and its return styles
//! - [`batch`] - Parallel many-ray / many-triangle queries
//! - [`probe`] - Capability traits for a host that owns the geometry
//!
//! # Example
//!
//! ```
//! use tricast_math::{Point3, Vec3};
//! use tricast_raytrace::{intersect_distance, intersect_point, Ray};
//!
//! let ray = Ray::new(Point3::new(0.0, 0.0, -1.0), Vec3::new(0.0, 0.0, 1.0));
//! let v0 = Point3::new(0.0, 1.0, 0.0);
//! let v1 = Point3::new(-1.0, -1.0, 0.0);
//! let v2 = Point3::new(1.0, -1.0, 0.0);
//!
//! let t = intersect_distance(&ray, &v0, &v1, &v2).unwrap();
//! assert!((t - 1.0).abs() < 1e-12);
//!
//! let p = intersect_point(&ray, &v0, &v1, &v2).unwrap();
//! assert!(p.coords.norm() < 1e-12);
//! ```

pub mod batch;
pub mod error;
pub mod intersect;
pub mod probe;
mod ray;
mod triangle;

pub use error::{DegenerateKind, IntersectError, Result};
pub use intersect::{
    intersect_distance, intersect_point, intersect_triangle, try_intersect, HitReport,
    Intersector,
};
pub use probe::{probe, probe_with, GeometryProvider, Indicator, IndicatorState, ResultSink};
pub use ray::{Ray, RayHit, MIN_AIM_DISTANCE};
pub use triangle::Triangle;
