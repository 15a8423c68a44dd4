//! Subcommand implementations.
//!
//! Each command returns its output as text so `main` only has to print it.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tricast_math::{Point3, Tolerance, Vec3};
use tricast_raytrace::batch::cast_all;
use tricast_raytrace::probe::probe_with;
use tricast_raytrace::{Indicator, Intersector, Ray, RayHit, Triangle};

use crate::scene::Scene;

/// Parse `x,y,z` into a vector.
pub fn parse_vec3(s: &str) -> std::result::Result<Vec3, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(format!("expected x,y,z but got {s:?}"));
    }
    let mut v = Vec3::zeros();
    for (i, part) in parts.iter().enumerate() {
        v[i] = part
            .parse::<f64>()
            .map_err(|e| format!("bad component {part:?}: {e}"))?;
    }
    Ok(v)
}

fn fmt_point(p: &Point3) -> String {
    format!("({:.6}, {:.6}, {:.6})", p.x, p.y, p.z)
}

/// Evaluate one frame of a scene file.
pub fn probe_scene(path: &Path, json: bool) -> Result<String> {
    let scene = Scene::load(path).with_context(|| format!("loading {}", path.display()))?;
    let mut indicator = Indicator::default();
    probe_with(&scene.intersector(), &scene, &mut indicator);

    if json {
        return Ok(serde_json::to_string(&indicator)?);
    }
    Ok(match indicator.marker {
        Some(p) => format!("hit at {}", fmt_point(&p)),
        None => "miss".to_string(),
    })
}

/// Arguments of a one-off cast.
#[derive(Debug, Clone, Copy)]
pub struct CastArgs {
    pub origin: Vec3,
    pub direction: Vec3,
    pub v0: Vec3,
    pub v1: Vec3,
    pub v2: Vec3,
    pub epsilon: f64,
    pub checked: bool,
    pub json: bool,
}

/// Intersect a single ray given on the command line.
pub fn cast(args: &CastArgs) -> Result<String> {
    let tolerance = Tolerance::new(args.epsilon);
    if !tolerance.is_valid() {
        anyhow::bail!("epsilon must be positive and finite, got {}", args.epsilon);
    }
    let intersector = Intersector::new(tolerance);
    let ray = Ray::new(Point3::from(args.origin), args.direction);
    let tri = Triangle::new(
        Point3::from(args.v0),
        Point3::from(args.v1),
        Point3::from(args.v2),
    );

    let hit = if args.checked {
        intersector.try_hit(&ray, &tri)?
    } else {
        intersector.hit(&ray, &tri)
    };

    if args.json {
        return Ok(serde_json::to_string(&hit)?);
    }
    Ok(match hit {
        Some(hit) => format!("t = {:.6}\npoint = {}", hit.t, fmt_point(&hit.point)),
        None => "miss".to_string(),
    })
}

/// Contents of a batch file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchFile {
    pub rays: Vec<Ray>,
    pub triangles: Vec<Triangle>,
    #[serde(default)]
    pub epsilon: Option<f64>,
}

/// One output line of a batch run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BatchRecord {
    /// Index of the ray.
    pub ray: usize,
    /// Index of the closest triangle hit, if any.
    pub triangle: Option<usize>,
    /// The hit itself.
    pub hit: Option<RayHit>,
}

/// Closest hit for every ray of a batch, one JSON record per line.
pub fn batch(text: &str) -> Result<String> {
    let file: BatchFile = serde_json::from_str(text).context("parsing batch file")?;
    let tolerance = file.epsilon.map_or(Tolerance::DEFAULT, Tolerance::new);
    if !tolerance.is_valid() {
        anyhow::bail!("epsilon must be positive and finite, got {}", tolerance.epsilon);
    }
    log::info!(
        "batch: {} rays, {} triangles",
        file.rays.len(),
        file.triangles.len()
    );

    let hits = cast_all(&Intersector::new(tolerance), &file.rays, &file.triangles);
    let mut lines = Vec::with_capacity(hits.len());
    for (ray, hit) in hits.into_iter().enumerate() {
        let record = BatchRecord {
            ray,
            triangle: hit.map(|(idx, _)| idx),
            hit: hit.map(|(_, h)| h),
        };
        lines.push(serde_json::to_string(&record)?);
    }
    Ok(lines.join("\n"))
}

/// Run a batch file from disk.
pub fn batch_file(path: &Path) -> Result<String> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    batch(&text)
}
