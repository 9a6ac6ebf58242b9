//! Smooth interpolation of rotation keyframes.
//!
//! Keyframes are mapped through the quaternion logarithm into 3-vectors
//! (half the axis-angle rotation vector), interpolated there with a
//! [`Spline`], and mapped back with the exponential. Knots are Euclidean
//! distances between log vectors rather than geodesic angles; the two agree
//! for closely spaced keyframes and drift apart for large angular gaps.
use alloc::vec::Vec;

use num_traits::Float;

use crate::section::distance;
use crate::{Quaternion, Spline, SplineError};

/// Below this distance from the identity the log/exp maps return the identity
/// element instead of dividing by a vanishing sine.
const IDENTITY_TOLERANCE: f64 = 1e-5;

/// Orientation spline over unit quaternion keyframes.
#[derive(Clone, Debug)]
pub struct QuaternionSpline<T> {
    spline: Spline<T, 3>,
}

impl<T: Float> QuaternionSpline<T> {
    /// Build from an ordered list of unit quaternions.
    ///
    /// # Errors
    /// * If `keyframes` is empty
    /// * If two consecutive keyframes have (nearly) the same logarithm
    pub fn new(keyframes: &[Quaternion<T>]) -> Result<Self, SplineError> {
        let controls = keyframes
            .iter()
            .map(log)
            .collect::<Result<Vec<_>, _>>()?;
        let spline = Spline::new(&controls, distance)?;

        Ok(Self { spline })
    }

    /// The log-space spline, for flattening or inspection.
    pub fn spline(&self) -> &Spline<T, 3> {
        &self.spline
    }

    /// Total parameter length.
    ///
    /// # Errors
    /// * If the spline was built from a single keyframe
    pub fn end(&self) -> Result<T, SplineError> {
        self.spline.end()
    }

    /// Interpolated orientation at parameter `t`, clamped past the end.
    ///
    /// # Errors
    /// * If the spline was built from a single keyframe
    /// * If the tolerance cannot be represented in `T`
    pub fn eval_at(&self, t: T) -> Result<Quaternion<T>, SplineError> {
        exp(self.spline.eval_at(t)?)
    }
}

/// Quaternion logarithm of a unit quaternion, as a 3-vector.
///
/// Quaternions within tolerance of `w = ±1` map to the zero vector.
pub fn log<T: Float>(q: &Quaternion<T>) -> Result<[T; 3], SplineError> {
    let tol = T::from(IDENTITY_TOLERANCE).ok_or(SplineError::Unrepresentable)?;
    let cos_a = q.w;
    if cos_a.abs() > T::one() - tol {
        return Ok([T::zero(); 3]);
    }

    let scale = cos_a.acos() / (T::one() - cos_a * cos_a).sqrt();
    Ok(q.vector().map(|c| c * scale))
}

/// Quaternion exponential of a 3-vector; the inverse of [`log`] on unit quaternions.
///
/// Vectors shorter than the tolerance map to the identity.
pub fn exp<T: Float>(v: [T; 3]) -> Result<Quaternion<T>, SplineError> {
    let tol = T::from(IDENTITY_TOLERANCE).ok_or(SplineError::Unrepresentable)?;
    let [x, y, z] = v;
    let len = (x * x + y * y + z * z).sqrt();
    if len < tol {
        return Ok(Quaternion::identity());
    }

    let scale = len.sin() / len;
    Ok(Quaternion::new(x * scale, y * scale, z * scale, len.cos()))
}
