//! Error types for intersection queries.
//!
//! A ray missing its triangle is never an error; these only cover input the
//! checked entry points refuse to evaluate.

use thiserror::Error;

/// Why an input was rejected as degenerate.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegenerateKind {
    /// The ray direction is the zero vector.
    #[error("ray direction has zero length")]
    ZeroDirection,

    /// The triangle vertices are collinear or coincident.
    #[error("triangle vertices are collinear or coincident")]
    CollinearVertices,
}

/// Errors reported by checked and batch intersection queries.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum IntersectError {
    /// Geometry is degenerate.
    #[error("degenerate input: {0}")]
    Degenerate(DegenerateKind),

    /// A coordinate is NaN or infinite.
    #[error("non-finite {0}")]
    NonFinite(&'static str),

    /// Pairwise batch inputs have different lengths.
    #[error("batch length mismatch: {rays} rays vs {triangles} triangles")]
    LengthMismatch {
        /// Number of rays supplied.
        rays: usize,
        /// Number of triangles supplied.
        triangles: usize,
    },
}

impl From<DegenerateKind> for IntersectError {
    fn from(kind: DegenerateKind) -> Self {
        Self::Degenerate(kind)
    }
}

/// Result type for intersection queries.
pub type Result<T> = std::result::Result<T, IntersectError>;
