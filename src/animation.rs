//! Frame-driven playback of an orientation spline.
//!
//! The splines themselves never loop; [`AnimatedOrientation`] owns the
//! running parameter, advances it by `delta * speed` each frame, and wraps it
//! back into `[0, end)`.
use alloc::vec::Vec;

use num_traits::Float;

use crate::{Quaternion, QuaternionSpline, SplineError};

/// One tick of a frame clock.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Clock<T> {
    /// Timestamp of this frame
    pub time: T,
    /// Time elapsed since the previous frame
    pub delta: T,
}

impl<T: Float> Clock<T> {
    /// A clock starting at `time` with no elapsed time.
    pub fn new(time: T) -> Self {
        Self {
            time,
            delta: T::zero(),
        }
    }

    /// The clock for a frame observed at `now`.
    pub fn tick(&self, now: T) -> Self {
        Self {
            time: now,
            delta: now - self.time,
        }
    }

    /// Frames per second implied by `delta`; infinite when no time has passed.
    pub fn fps(&self) -> T {
        T::one() / self.delta
    }
}

/// An orientation moving along a closed keyframe loop.
#[derive(Clone, Debug)]
pub struct AnimatedOrientation<T> {
    spline: QuaternionSpline<T>,
    end: T,
    time: T,
}

impl<T: Float> AnimatedOrientation<T> {
    /// Animate through `keyframes` in order, starting at the first one.
    ///
    /// # Errors
    /// * If fewer than two keyframes are given
    /// * If consecutive keyframes coincide
    pub fn new(keyframes: &[Quaternion<T>]) -> Result<Self, SplineError> {
        let spline = QuaternionSpline::new(keyframes)?;
        let end = spline.end()?;

        Ok(Self {
            spline,
            end,
            time: T::zero(),
        })
    }

    /// Like [`AnimatedOrientation::new`], repeating the first keyframe at the
    /// end so the path returns to where it started.
    pub fn closed(keyframes: &[Quaternion<T>]) -> Result<Self, SplineError> {
        let mut looped: Vec<Quaternion<T>> = keyframes.to_vec();
        if let Some(first) = keyframes.first() {
            looped.push(*first);
        }

        Self::new(&looped)
    }

    pub fn spline(&self) -> &QuaternionSpline<T> {
        &self.spline
    }

    /// Current spline parameter, always in `[0, end)`.
    pub fn time(&self) -> T {
        self.time
    }

    /// Advance by one clock tick at the given playback speed.
    /// Negative speeds play backwards.
    pub fn process(&mut self, clock: &Clock<T>, speed: T) {
        self.advance(clock.delta * speed);
    }

    /// Move the parameter by `dt`, wrapping into `[0, end)`.
    pub fn advance(&mut self, dt: T) {
        let mut time = (self.time + dt) % self.end;
        if time < T::zero() {
            time = time + self.end;
        }
        // Rounding in the line above can land exactly on `end`
        if time >= self.end {
            time = T::zero();
        }
        self.time = time;
    }

    /// Orientation at the current time.
    pub fn orientation(&self) -> Result<Quaternion<T>, SplineError> {
        self.spline.eval_at(self.time)
    }
}

#[cfg(test)]
mod test {
    use super::{AnimatedOrientation, Clock};
    use crate::testing::*;
    use crate::SplineError;

    #[test]
    fn test_clock() {
        let clock = Clock::new(10.0_f64);
        assert_eq!(clock.delta, 0.0);
        assert!(clock.fps().is_infinite());

        let next = clock.tick(10.25);
        assert_eq!(next.time, 10.25);
        assert_eq!(next.delta, 0.25);
        assert_eq!(next.fps(), 4.0);
    }

    #[test]
    fn test_wraps_forward_and_backward() {
        let mut rng = rng_fixed_seed();
        let keyframes = random_unit_quaternions(&mut rng, 4);
        let mut anim = AnimatedOrientation::closed(&keyframes).unwrap();
        let end = anim.spline().end().unwrap();

        let clock = Clock::new(0.0).tick(0.5);
        anim.process(&clock, end); // advances by end / 2
        assert!((anim.time() - end / 2.0).abs() < 1e-12);

        anim.process(&clock, end * 1.5); // 3/4 of a loop further
        assert!((anim.time() - end / 4.0).abs() < 1e-9);

        anim.advance(-end / 2.0);
        assert!((anim.time() - 3.0 * end / 4.0).abs() < 1e-9);

        for _ in 0..1000 {
            anim.advance(end * 0.37);
            assert!(anim.time() >= 0.0 && anim.time() < end);
        }
    }

    #[test]
    fn test_closed_loop_is_continuous_across_wrap() {
        let mut rng = rng_fixed_seed();
        let keyframes = random_unit_quaternions(&mut rng, 4);
        let mut anim = AnimatedOrientation::closed(&keyframes).unwrap();
        let end = anim.spline().end().unwrap();

        let at_start = anim.orientation().unwrap();
        assert!(at_start.dot(&keyframes[0]).abs() > 1.0 - 1e-9);

        // Just before and just after the wrap are nearly the same rotation
        anim.advance(end - 1e-6);
        let before = anim.orientation().unwrap();
        anim.advance(2e-6);
        let after = anim.orientation().unwrap();
        assert!(before.dot(&after).abs() > 1.0 - 1e-9);
    }

    #[test]
    fn test_needs_keyframes() {
        let empty: [crate::Quaternion<f64>; 0] = [];
        assert!(matches!(
            AnimatedOrientation::closed(&empty),
            Err(SplineError::InsufficientControlPoints { .. })
        ));
    }
}
