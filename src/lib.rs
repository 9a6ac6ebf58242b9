//! Smooth keyframe splines for rotations, no-std compatible (requires `alloc`).
//!
//! Orientation keyframes are unit quaternions. They are mapped into the
//! tangent space of the rotation group with the quaternion logarithm,
//! interpolated there with a periodic C2 cubic spline, and mapped back with
//! the exponential, giving a continuous orientation for any parameter value.
//!
//! The vector spline underneath is usable on its own for any fixed dimension,
//! and its segments convert to cubic Bezier sections that can be flattened
//! into polylines, either by a fixed number of halvings or adaptively.
//!
//! | Type                    | Construction                       | Evaluation   |
//! |-------------------------|------------------------------------|--------------|
//! | [`Polynomial`]          | O(1)                               | O(degree)    |
//! | [`Section`]             | O(1)                               | -            |
//! | [`Spline`]              | O(N * points), one banded solve    | O(N log points) |
//! | [`QuaternionSpline`]    | as `Spline<T, 3>`                  | as `Spline` + exp |
//!
//! # Example: Rotation keyframes
//! ```rust
//! use quatspline::{Quaternion, QuaternionSpline};
//!
//! let keyframes = [
//!     Quaternion::from_axis_angle([0.0_f64, 0.0, 1.0], 0.3),
//!     Quaternion::from_axis_angle([0.0, 1.0, 0.0], 1.0),
//!     Quaternion::from_axis_angle([1.0, 0.0, 0.0], -0.7),
//!     Quaternion::from_axis_angle([0.0, 0.0, 1.0], 0.3), // close the loop
//! ];
//! let spline = QuaternionSpline::new(&keyframes).unwrap();
//!
//! // The caller owns looping; here, half way around
//! let end = spline.end().unwrap();
//! let q = spline.eval_at(end / 2.0).unwrap();
//! assert!((q.norm() - 1.0).abs() < 1e-12);
//! ```
//!
//! # Example: Flattening a curve
//! ```rust
//! use quatspline::Spline;
//!
//! let points = [[0.0_f64, 0.0], [1.0, 2.0], [3.0, 1.0], [4.0, 3.0]];
//! let euclidean = |a: &[f64; 2], b: &[f64; 2]| ((b[0] - a[0]).powi(2) + (b[1] - a[1]).powi(2)).sqrt();
//! let spline = Spline::new(&points, euclidean).unwrap();
//!
//! // Fixed refinement: 3 segments, each halved twice
//! assert_eq!(spline.flattened_points(2).unwrap().len(), 3 * 4 + 1);
//!
//! // Adaptive refinement until each piece is nearly straight
//! let pieces = spline.adaptive_split(|s| s.flatness() < 1e-3);
//! assert!(pieces.len() >= 3);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
// These "needless" range loops are a significant speedup
#![allow(clippy::needless_range_loop)]

extern crate alloc;

mod error;
pub use error::SplineError;

pub mod polynomial;
pub use polynomial::Polynomial;

pub mod section;
pub use section::Section;

pub mod spline;
pub use spline::{Spline, DEFAULT_MIN_KNOT};

pub mod quaternion;
pub use quaternion::Quaternion;

pub mod quaternion_spline;
pub use quaternion_spline::QuaternionSpline;

pub mod animation;
pub use animation::{AnimatedOrientation, Clock};

pub mod utils;

#[cfg(all(test, feature = "std"))]
pub(crate) mod testing;
