//! Cubic Bezier patches and their subdivision into polylines.
//!
//! A [`Section`] holds the four control points of one spline segment in
//! coordinate space. Halving is exact: both halves trace the same curve as
//! the parent, so repeated halving converges the control polygon onto the curve.
use alloc::vec;
use alloc::vec::Vec;

use num_traits::Float;

/// A cubic Bezier patch in `N` dimensions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Section<T, const N: usize> {
    controls: [[T; N]; 4],
}

impl<T: Float, const N: usize> Section<T, N> {
    pub fn new(controls: [[T; N]; 4]) -> Self {
        Self { controls }
    }

    pub fn controls(&self) -> &[[T; N]; 4] {
        &self.controls
    }

    /// First control point, which lies on the curve.
    pub fn start(&self) -> [T; N] {
        self.controls[0]
    }

    /// Last control point, which lies on the curve.
    pub fn end(&self) -> [T; N] {
        self.controls[3]
    }

    /// Split at the parametric midpoint into left and right halves.
    ///
    /// Each new control point is a fixed weighted sum of the four originals;
    /// the left weights are
    /// `[1 0 0 0; 1/2 1/2 0 0; 1/4 1/2 1/4 0; 1/8 3/8 3/8 1/8]`
    /// and the right weights are the same rows mirrored.
    pub fn halve(&self) -> (Self, Self) {
        let one = T::one();
        let half = one / (one + one);
        let quarter = half * half;
        let eighth = quarter * half;
        let three_eighths = eighth + quarter;
        let zero = T::zero();

        let left = [
            [one, zero, zero, zero],
            [half, half, zero, zero],
            [quarter, half, quarter, zero],
            [eighth, three_eighths, three_eighths, eighth],
        ];
        let right = [
            [eighth, three_eighths, three_eighths, eighth],
            [zero, quarter, half, quarter],
            [zero, zero, half, half],
            [zero, zero, zero, one],
        ];

        (
            Self::new(self.weighted(&left)),
            Self::new(self.weighted(&right)),
        )
    }

    /// Apply a 4x4 weight matrix to the control points, independently per coordinate.
    #[inline]
    fn weighted(&self, weights: &[[T; 4]; 4]) -> [[T; N]; 4] {
        let mut out = [[T::zero(); N]; 4];
        for (row, w) in out.iter_mut().zip(weights.iter()) {
            for d in 0..N {
                row[d] = (0..4).fold(T::zero(), |acc, k| acc + w[k] * self.controls[k][d]);
            }
        }

        out
    }

    /// Halve `iterations` times, giving `2^iterations` sections in curve order.
    pub fn split(&self, iterations: usize) -> Vec<Self> {
        let mut sections = vec![*self];
        for _ in 0..iterations {
            sections = sections
                .iter()
                .flat_map(|s| {
                    let (l, r) = s.halve();
                    [l, r]
                })
                .collect();
        }

        sections
    }

    /// Halve until `condition` accepts every piece, giving the accepted
    /// pieces in curve order.
    ///
    /// `condition` returns `true` when a section is flat enough to keep.
    /// It must eventually accept as the sections shrink; a condition that
    /// never accepts loops forever. See [`Section::adaptive_split_max_depth`]
    /// for a bounded variant.
    pub fn adaptive_split<F>(&self, condition: F) -> Vec<Self>
    where
        F: FnMut(&Self) -> bool,
    {
        self.adaptive_split_max_depth(condition, usize::MAX)
    }

    /// Like [`Section::adaptive_split`], but a piece that has been halved
    /// `max_depth` times is kept whether or not `condition` accepts it.
    pub fn adaptive_split_max_depth<F>(&self, mut condition: F, max_depth: usize) -> Vec<Self>
    where
        F: FnMut(&Self) -> bool,
    {
        let mut leaves = Vec::new();

        // Depth-first with the right half pushed first, so leaves come out left to right
        let mut stack = vec![(*self, 0_usize)];
        while let Some((section, depth)) = stack.pop() {
            if depth >= max_depth || condition(&section) {
                leaves.push(section);
            } else {
                let (left, right) = section.halve();
                stack.push((right, depth + 1));
                stack.push((left, depth + 1));
            }
        }

        log::trace!("adaptive split produced {} sections", leaves.len());
        leaves
    }

    /// Straight-line distance between the curve endpoints.
    pub fn chord_length(&self) -> T {
        distance(&self.controls[0], &self.controls[3])
    }

    /// Length of the control polygon, an upper bound on the arc length.
    pub fn polygon_length(&self) -> T {
        self.controls
            .windows(2)
            .fold(T::zero(), |acc, w| acc + distance(&w[0], &w[1]))
    }

    /// Polygon length minus chord length.
    ///
    /// Zero for a straight section, and shrinks toward zero under halving.
    pub fn flatness(&self) -> T {
        self.polygon_length() - self.chord_length()
    }
}

/// Euclidean distance between two points
#[inline]
pub(crate) fn distance<T: Float, const N: usize>(a: &[T; N], b: &[T; N]) -> T {
    a.iter()
        .zip(b.iter())
        .fold(T::zero(), |acc, (&x, &y)| acc + (y - x) * (y - x))
        .sqrt()
}
