#![allow(clippy::all)] // Clippy will attempt to remove black_box() internals

use criterion::*;
use keyframes::*;
use quatspline::{utils::linspace, QuaternionSpline, Spline};

fn bench_construct(c: &mut Criterion) {
    let mut group = c.benchmark_group("Construct");
    for nkeys in [4, 16, 256, 4096].iter() {
        group.throughput(Throughput::Elements(*nkeys as u64));

        group.bench_with_input(
            BenchmarkId::new("Spline 3D", nkeys),
            nkeys,
            |b, &nkeys| {
                let points = gen_points(nkeys);
                b.iter(|| black_box(Spline::new(&points, euclidean).unwrap()));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("QuaternionSpline", nkeys),
            nkeys,
            |b, &nkeys| {
                let keyframes = gen_keyframes(nkeys);
                b.iter(|| black_box(QuaternionSpline::new(&keyframes).unwrap()));
            },
        );
    }
    group.finish();
}

fn bench_eval(c: &mut Criterion) {
    for nkeys in [8, 1024] {
        let mut group = c.benchmark_group(format!("Eval_{nkeys}-keyframes"));
        for size in [1, 100, 100_000].iter() {
            group.throughput(Throughput::Elements(*size as u64));

            group.bench_with_input(
                BenchmarkId::new("Spline 3D", size),
                size,
                |b, &size| {
                    let spline = Spline::new(&gen_points(nkeys), euclidean).unwrap();
                    let obs = linspace(0.0, spline.end().unwrap(), size);

                    b.iter(|| {
                        black_box({
                            for &t in obs.iter() {
                                black_box(spline.eval_at(t).unwrap());
                            }
                        })
                    });
                },
            );

            group.bench_with_input(
                BenchmarkId::new("QuaternionSpline", size),
                size,
                |b, &size| {
                    let spline = QuaternionSpline::new(&gen_keyframes(nkeys)).unwrap();
                    let obs = linspace(0.0, spline.end().unwrap(), size);

                    b.iter(|| {
                        black_box({
                            for &t in obs.iter() {
                                black_box(spline.eval_at(t).unwrap());
                            }
                        })
                    });
                },
            );
        }
        group.finish();
    }
}

fn bench_flatten(c: &mut Criterion) {
    let mut group = c.benchmark_group("Flatten_64-keyframes");
    let spline = Spline::new(&gen_points(64), euclidean).unwrap();

    for iterations in [1, 4, 8].iter() {
        group.bench_with_input(
            BenchmarkId::new("Fixed split", iterations),
            iterations,
            |b, &iterations| b.iter(|| black_box(spline.flattened_points(iterations).unwrap())),
        );
    }

    for tol in [1e-2, 1e-4, 1e-6].iter() {
        group.bench_with_input(
            BenchmarkId::new("Adaptive split", tol),
            tol,
            |b, &tol| b.iter(|| black_box(spline.adaptive_split(|s| s.flatness() < tol))),
        );
    }
    group.finish();
}

criterion_group!(benches_construct, bench_construct);
criterion_group!(benches_eval, bench_eval);
criterion_group!(benches_flatten, bench_flatten);
criterion_main!(benches_construct, benches_eval, benches_flatten,);

mod randn {
    use rand::distr::{Distribution, StandardUniform};
    use rand::rngs::StdRng;
    use rand::Rng;
    use rand::SeedableRng;

    /// Fixed random seed to support repeatable testing
    const SEED: [u8; 32] = [
        0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 15, 14, 13, 12, 11, 10, 9, 8, 7,
        6, 5, 4, 3, 2, 1,
    ];

    /// Get a random number generator with a const seed for repeatable testing
    pub fn rng_fixed_seed() -> StdRng {
        StdRng::from_seed(SEED)
    }

    /// Generate `n` random numbers using provided generator
    pub fn randn<T>(rng: &mut StdRng, n: usize) -> Vec<T>
    where
        StandardUniform: Distribution<T>,
    {
        let out: Vec<T> = (0..n).map(|_| rng.random::<T>()).collect();
        out
    }
}

mod keyframes {
    use super::randn::*;
    use quatspline::Quaternion;

    pub fn euclidean(a: &[f64; 3], b: &[f64; 3]) -> f64 {
        a.iter()
            .zip(b.iter())
            .map(|(x, y)| (y - x) * (y - x))
            .sum::<f64>()
            .sqrt()
    }

    // Generate a random walk of control points, so consecutive
    // points are never coincident.
    pub fn gen_points(n: usize) -> Vec<[f64; 3]> {
        let mut rng = rng_fixed_seed();
        let steps = randn::<f64>(&mut rng, 3 * n);
        let mut p = [0.0; 3];
        (0..n)
            .map(|i| {
                (0..3).for_each(|d| p[d] += 0.1 + steps[3 * i + d]);
                p
            })
            .collect()
    }

    // Generate keyframes as small random rotations about a slowly turning axis,
    // closing the loop by repeating the first keyframe.
    pub fn gen_keyframes(n: usize) -> Vec<Quaternion<f64>> {
        let mut rng = rng_fixed_seed();
        let angles = randn::<f64>(&mut rng, n);
        let mut keyframes: Vec<Quaternion<f64>> = (0..n)
            .map(|i| {
                let phase = i as f64 * 0.1;
                Quaternion::from_axis_angle([phase.cos(), phase.sin(), 0.5], 0.2 + angles[i])
            })
            .collect();
        keyframes.push(keyframes[0]);
        keyframes
    }
}
