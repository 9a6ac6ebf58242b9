use alloc::vec::Vec;
use core::f64::consts::PI;

use rand::Rng;
use rand::SeedableRng;
use rand::distr::StandardUniform;
use rand::rngs::StdRng;

use crate::Quaternion;

/// Fixed random seed to support repeatable testing
const SEED: [u8; 32] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 15, 14, 13, 12, 11, 10, 9, 8, 7, 6,
    5, 4, 3, 2, 1,
];

/// Get a random number generator with a const seed for repeatable testing
pub fn rng_fixed_seed() -> StdRng {
    StdRng::from_seed(SEED)
}

/// Generate `n` random numbers using provided generator
pub fn randn<T>(rng: &mut StdRng, n: usize) -> Vec<T>
where
    StandardUniform: rand::distr::Distribution<T>,
{
    core::iter::repeat_with(|| rng.random::<T>())
        .take(n)
        .collect()
}

/// Generate `n` unit quaternions uniformly distributed over rotations (Shoemake's method)
pub fn random_unit_quaternions(rng: &mut StdRng, n: usize) -> Vec<Quaternion<f64>> {
    (0..n)
        .map(|_| {
            let (u1, u2, u3): (f64, f64, f64) = (rng.random(), rng.random(), rng.random());
            let (a, b) = ((1.0 - u1).sqrt(), u1.sqrt());
            let (t2, t3) = (2.0 * PI * u2, 2.0 * PI * u3);
            Quaternion::new(a * t2.sin(), a * t2.cos(), b * t3.sin(), b * t3.cos())
        })
        .collect()
}
