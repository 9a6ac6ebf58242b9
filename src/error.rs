//! Error type shared by every fallible operation in the crate.
use thiserror::Error;

/// Failures raised while building or evaluating a spline.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum SplineError {
    /// Not enough control points to define a curve segment.
    #[error("Insufficient control points: need at least {required}, found {found}")]
    InsufficientControlPoints { required: usize, found: usize },

    /// The metric reported a (near-)zero or non-finite distance between
    /// consecutive control points, which would make the knot solve singular.
    #[error("Degenerate input: knot of segment {segment} is below {min_knot:e} or not a number")]
    DegenerateInput { segment: usize, min_knot: f64 },

    /// Control points must have at least one coordinate.
    #[error("Control points must have at least one dimension")]
    ZeroDimension,

    /// Bezier conversion is only defined up to cubic polynomials.
    #[error("Bezier conversion requires degree <= 3, found degree {degree}")]
    NotCubic { degree: usize },

    /// A numeric constant could not be represented in the float type.
    #[error("Unrepresentable number")]
    Unrepresentable,
}
