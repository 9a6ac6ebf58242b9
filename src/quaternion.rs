//! Minimal quaternion value type for rotation keyframes.
use num_traits::Float;

/// A quaternion `x i + y j + z k + w`, with `w` the scalar part.
///
/// Rotations are represented by unit quaternions; nothing here enforces unit norm.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quaternion<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

impl<T: Float> Quaternion<T> {
    pub fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }

    /// The identity rotation.
    pub fn identity() -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), T::one())
    }

    /// Rotation of `angle` radians about `axis`, which is normalized here.
    /// A zero axis gives the identity.
    pub fn from_axis_angle(axis: [T; 3], angle: T) -> Self {
        let [x, y, z] = axis;
        let len = (x * x + y * y + z * z).sqrt();
        if len.is_zero() {
            return Self::identity();
        }

        let half = angle / (T::one() + T::one());
        let s = half.sin() / len;
        Self::new(x * s, y * s, z * s, half.cos())
    }

    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    pub fn norm(&self) -> T {
        self.dot(self).sqrt()
    }

    /// Scale to unit norm. The zero quaternion maps to the identity.
    pub fn normalize(&self) -> Self {
        let n = self.norm();
        if n.is_zero() {
            return Self::identity();
        }

        Self::new(self.x / n, self.y / n, self.z / n, self.w / n)
    }

    /// Vector part `(x, y, z)`.
    pub fn vector(&self) -> [T; 3] {
        [self.x, self.y, self.z]
    }

    /// Largest componentwise difference, for approximate comparisons.
    pub fn max_abs_diff(&self, other: &Self) -> T {
        (self.x - other.x)
            .abs()
            .max((self.y - other.y).abs())
            .max((self.z - other.z).abs())
            .max((self.w - other.w).abs())
    }
}

impl<T: Float> Default for Quaternion<T> {
    fn default() -> Self {
        Self::identity()
    }
}

/// `[x, y, z, w]`
impl<T: Float> From<[T; 4]> for Quaternion<T> {
    fn from(v: [T; 4]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }
}

impl<T: Float> From<Quaternion<T>> for [T; 4] {
    fn from(q: Quaternion<T>) -> Self {
        [q.x, q.y, q.z, q.w]
    }
}

#[cfg(feature = "glam")]
mod glam_interop {
    use super::Quaternion;

    impl From<glam::Quat> for Quaternion<f32> {
        fn from(q: glam::Quat) -> Self {
            Self::new(q.x, q.y, q.z, q.w)
        }
    }

    impl From<Quaternion<f32>> for glam::Quat {
        fn from(q: Quaternion<f32>) -> Self {
            glam::Quat::from_xyzw(q.x, q.y, q.z, q.w)
        }
    }

    impl From<glam::DQuat> for Quaternion<f64> {
        fn from(q: glam::DQuat) -> Self {
            Self::new(q.x, q.y, q.z, q.w)
        }
    }

    impl From<Quaternion<f64>> for glam::DQuat {
        fn from(q: Quaternion<f64>) -> Self {
            glam::DQuat::from_xyzw(q.x, q.y, q.z, q.w)
        }
    }
}
