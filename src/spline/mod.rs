//! Periodic C2 cubic splines through N-dimensional control points.
//!
//! Each segment between consecutive control points is a cubic per coordinate,
//! parametrized over `[0, knot]` where the knot is the metric distance between
//! its endpoints. The cubics interpolate the control points and match first and
//! second derivatives at every junction, *including* the junction from the
//! last segment back to the first. The system is therefore always solved as a
//! closed loop, even when the last control point differs from the first;
//! callers that want a visually closed path repeat the first point at the end.
//!
//! The coefficients are found from the segment-start second derivatives `M`,
//! which satisfy the cyclic tridiagonal system
//!
//! `h[i-1] M[i-1] + 2 (h[i-1] + h[i]) M[i] + h[i] M[i+1] = 6 (s[i] - s[i-1])`
//!
//! where `h` are the knots and `s` the chord slopes. This is the same solution
//! as the block system
//! `[k, k^2, k^3; 1, 2k, 3k^2; 0, 2, 6k] c[i] + [0, 0, 0; -1, 0, 0; 0, -2, 0] c[i+1]`
//! over all segments, at O(n) cost instead of a dense inverse.
use alloc::vec;
use alloc::vec::Vec;

use itertools::Itertools;
use num_traits::Float;

use crate::{Polynomial, Section, SplineError};

mod cyclic;
use cyclic::CyclicTridiagonal;

/// Default lower bound on the distance between consecutive control points.
pub const DEFAULT_MIN_KNOT: f64 = 1e-10;

/// A closed-loop C2 cubic spline in `N` dimensions.
#[derive(Clone, Debug)]
pub struct Spline<T, const N: usize> {
    points: Vec<[T; N]>,

    /// Cubic per segment, indexed like `polynomials[coordinate][segment]`
    polynomials: Vec<Vec<Polynomial<T>>>,

    /// Cumulative parameter value at the end of each segment
    ends: Vec<T>,
}

impl<T: Float, const N: usize> Spline<T, N> {
    /// Build a spline through `points`, using `metric` to measure the
    /// parameter length of each segment.
    ///
    /// # Errors
    /// * If `points` is empty
    /// * If `N` is zero
    /// * If the metric gives a knot below [`DEFAULT_MIN_KNOT`] or NaN
    pub fn new<M>(points: &[[T; N]], metric: M) -> Result<Self, SplineError>
    where
        M: Fn(&[T; N], &[T; N]) -> T,
    {
        let min_knot = T::from(DEFAULT_MIN_KNOT).ok_or(SplineError::Unrepresentable)?;
        Self::with_min_knot(points, metric, min_knot)
    }

    /// Same as [`Spline::new`] with a caller-chosen knot threshold.
    pub fn with_min_knot<M>(points: &[[T; N]], metric: M, min_knot: T) -> Result<Self, SplineError>
    where
        M: Fn(&[T; N], &[T; N]) -> T,
    {
        if N == 0 {
            return Err(SplineError::ZeroDimension);
        }
        if points.is_empty() {
            return Err(SplineError::InsufficientControlPoints {
                required: 1,
                found: 0,
            });
        }

        let knots: Vec<T> = points
            .iter()
            .tuple_windows()
            .map(|(a, b)| metric(a, b))
            .collect();

        // Negated comparison also rejects NaN
        if let Some(segment) = knots.iter().position(|&k| !(k >= min_knot)) {
            log::warn!("rejecting spline: segment {segment} has a degenerate knot");
            return Err(SplineError::DegenerateInput {
                segment,
                min_knot: min_knot.to_f64().unwrap_or(f64::NAN),
            });
        }

        let polynomials = if knots.is_empty() {
            Vec::new()
        } else {
            compute_polynomials(points, &knots)?
        };

        let ends = knots
            .iter()
            .scan(T::zero(), |acc, &k| {
                *acc = *acc + k;
                Some(*acc)
            })
            .collect();

        log::debug!(
            "built {}-dimensional spline with {} segments",
            N,
            knots.len()
        );

        Ok(Self {
            points: points.to_vec(),
            polynomials,
            ends,
        })
    }

    pub fn points(&self) -> &[[T; N]] {
        &self.points
    }

    /// Per-coordinate cubics, indexed like `polynomials()[coordinate][segment]`.
    /// Empty for a single control point.
    pub fn polynomials(&self) -> &[Vec<Polynomial<T>>] {
        &self.polynomials
    }

    pub fn segment_count(&self) -> usize {
        self.points.len() - 1
    }

    /// Parameter length of each segment.
    pub fn knots(&self) -> Vec<T> {
        match self.polynomials.first() {
            Some(first) => first.iter().map(|p| p.knot()).collect(),
            None => Vec::new(),
        }
    }

    /// Total parameter length, the sum of the knots.
    ///
    /// # Errors
    /// * If the spline has a single control point
    pub fn end(&self) -> Result<T, SplineError> {
        self.ends.last().copied().ok_or(self.insufficient())
    }

    /// Evaluate the curve at parameter `t`.
    ///
    /// Values of `t` past [`Spline::end`] are clamped to the final control
    /// point. Negative `t` extrapolates the first segment. Looping is up to
    /// the caller.
    ///
    /// # Errors
    /// * If the spline has a single control point
    pub fn eval_at(&self, t: T) -> Result<[T; N], SplineError> {
        self.eval_with(t, |p, local| p.eval_at(local))
    }

    /// First derivative with respect to `t`, clamped like [`Spline::eval_at`].
    ///
    /// # Errors
    /// * If the spline has a single control point
    pub fn velocity_at(&self, t: T) -> Result<[T; N], SplineError> {
        self.eval_with(t, |p, local| p.derivative_at(local, 1))
    }

    /// Second derivative with respect to `t`, clamped like [`Spline::eval_at`].
    ///
    /// # Errors
    /// * If the spline has a single control point
    pub fn acceleration_at(&self, t: T) -> Result<[T; N], SplineError> {
        self.eval_with(t, |p, local| p.derivative_at(local, 2))
    }

    #[inline]
    fn eval_with<F>(&self, t: T, f: F) -> Result<[T; N], SplineError>
    where
        F: Fn(&Polynomial<T>, T) -> T,
    {
        let (segment, local) = self.locate(t)?;
        let mut out = [T::zero(); N];
        for (o, coord) in out.iter_mut().zip(self.polynomials.iter()) {
            *o = f(&coord[segment], local);
        }

        Ok(out)
    }

    /// Find the segment containing `t` and the offset into it.
    #[inline]
    fn locate(&self, t: T) -> Result<(usize, T), SplineError> {
        let n = self.ends.len();
        if n == 0 {
            return Err(self.insufficient());
        }

        let i = self.ends.partition_point(|&e| e <= t);
        if i >= n {
            // Clamp to the end of the last segment
            let last = &self.polynomials[0][n - 1];
            return Ok((n - 1, last.knot()));
        }
        let start = if i == 0 { T::zero() } else { self.ends[i - 1] };

        Ok((i, t - start))
    }

    /// One Bezier section per segment, in order.
    pub fn sections(&self) -> Vec<Section<T, N>> {
        let n = self.ends.len();
        let mut sections = vec![Section::new([[T::zero(); N]; 4]); n];

        for (d, coord) in self.polynomials.iter().enumerate() {
            for (section, poly) in sections.iter_mut().zip(coord.iter()) {
                let values = poly.cubic_control_points();
                let mut controls = *section.controls();
                for (c, v) in controls.iter_mut().zip(values.iter()) {
                    c[d] = *v;
                }
                *section = Section::new(controls);
            }
        }

        sections
    }

    /// Every section's first three controls, followed by the final control
    /// of the last section. Shared endpoints between sections appear once.
    ///
    /// # Errors
    /// * If the spline has a single control point
    pub fn flattened_control_points(&self) -> Result<Vec<[T; N]>, SplineError> {
        let sections = self.sections();
        let last = sections.last().ok_or(self.insufficient())?.end();

        let mut out: Vec<[T; N]> = sections
            .iter()
            .flat_map(|s| s.controls()[..3].iter().copied())
            .collect();
        out.push(last);

        Ok(out)
    }

    /// Halve every section `iterations` times.
    pub fn split(&self, iterations: usize) -> Vec<Section<T, N>> {
        self.sections()
            .iter()
            .flat_map(|s| s.split(iterations))
            .collect()
    }

    /// Adaptively halve every section until `condition` accepts each piece.
    /// The same termination requirement as [`Section::adaptive_split`] applies.
    pub fn adaptive_split<F>(&self, mut condition: F) -> Vec<Section<T, N>>
    where
        F: FnMut(&Section<T, N>) -> bool,
    {
        self.sections()
            .iter()
            .flat_map(|s| s.adaptive_split(&mut condition))
            .collect()
    }

    /// Polyline through the curve: the start of every piece after
    /// `iterations` halvings, plus the very last endpoint.
    ///
    /// # Errors
    /// * If the spline has a single control point
    pub fn flattened_points(&self, iterations: usize) -> Result<Vec<[T; N]>, SplineError> {
        let sections = self.split(iterations);
        let last = sections.last().ok_or(self.insufficient())?.end();

        let mut out: Vec<[T; N]> = sections.iter().map(|s| s.start()).collect();
        out.push(last);

        Ok(out)
    }

    fn insufficient(&self) -> SplineError {
        SplineError::InsufficientControlPoints {
            required: 2,
            found: self.points.len(),
        }
    }
}

/// Solve the periodic system once and build every coordinate's cubics from it.
fn compute_polynomials<T: Float, const N: usize>(
    points: &[[T; N]],
    knots: &[T],
) -> Result<Vec<Vec<Polynomial<T>>>, SplineError> {
    let n = knots.len();
    let two = T::one() + T::one();
    let six = T::from(6).ok_or(SplineError::Unrepresentable)?;

    // Row i couples M[i-1], M[i], M[i+1] with the wrap-around
    let sub: Vec<T> = (0..n).map(|i| knots[(i + n - 1) % n]).collect();
    let diag: Vec<T> = (0..n).map(|i| two * (sub[i] + knots[i])).collect();
    let system = CyclicTridiagonal::new(&sub, &diag, knots);

    let polynomials = (0..N)
        .map(|d| {
            let slopes: Vec<T> = (0..n)
                .map(|i| (points[i + 1][d] - points[i][d]) / knots[i])
                .collect();
            let rhs: Vec<T> = (0..n)
                .map(|i| six * (slopes[i] - slopes[(i + n - 1) % n]))
                .collect();
            let m = system.solve(&rhs);

            (0..n)
                .map(|i| {
                    let h = knots[i];
                    let (m0, m1) = (m[i], m[(i + 1) % n]);
                    let coefficients = vec![
                        points[i][d],
                        slopes[i] - h * (two * m0 + m1) / six,
                        m0 / two,
                        (m1 - m0) / (six * h),
                    ];
                    Polynomial::new(coefficients, h)
                })
                .collect()
        })
        .collect();

    Ok(polynomials)
}
