//! Cyclic tridiagonal solve for periodic spline systems.
//!
//! Row `i` of the system reads
//! `sub[i] * x[i-1] + diag[i] * x[i] + sup[i] * x[i+1] = rhs[i]`
//! with indices wrapping modulo `n`. The matrix is factored once and the
//! factorization is reused for every right-hand side.
use alloc::vec;
use alloc::vec::Vec;

use num_traits::Float;

/// Pre-factored cyclic tridiagonal matrix.
pub(crate) struct CyclicTridiagonal<T> {
    kind: Kind<T>,
}

enum Kind<T> {
    /// All three bands collapse onto the diagonal
    Scalar(T),
    /// Both off-diagonal bands land on the same entry
    Dense2([[T; 2]; 2]),
    /// Thomas forward sweep plus a Sherman-Morrison correction for the corners
    Banded(Banded<T>),
}

struct Banded<T> {
    sub: Vec<T>,
    /// Modified super-diagonal from the forward sweep
    sup_prime: Vec<T>,
    /// Pivot denominators from the forward sweep
    denom: Vec<T>,
    /// Corner weights
    beta: T,
    gamma: T,
    /// Solution of the correction system
    z: Vec<T>,
    /// `1 + z[0] + beta * z[n-1] / gamma`
    z_scale: T,
}

impl<T: Float> CyclicTridiagonal<T> {
    /// Factor the matrix. Expects three bands of equal, nonzero length
    /// forming a diagonally dominant matrix.
    pub(crate) fn new(sub: &[T], diag: &[T], sup: &[T]) -> Self {
        let n = diag.len();
        let kind = match n {
            1 => Kind::Scalar(sub[0] + diag[0] + sup[0]),
            2 => Kind::Dense2([
                [diag[0], sub[0] + sup[0]],
                [sub[1] + sup[1], diag[1]],
            ]),
            _ => {
                // Corner entries: row 0 couples to x[n-1], row n-1 couples to x[0]
                let beta = sub[0];
                let alpha = sup[n - 1];
                let gamma = -diag[0];

                let mut modified = diag.to_vec();
                modified[0] = diag[0] - gamma;
                modified[n - 1] = diag[n - 1] - alpha * beta / gamma;

                let (sup_prime, denom) = forward_sweep(sub, &modified, sup);
                let mut banded = Banded {
                    sub: sub.to_vec(),
                    sup_prime,
                    denom,
                    beta,
                    gamma,
                    z: Vec::new(),
                    z_scale: T::one(),
                };

                let mut u = vec![T::zero(); n];
                u[0] = gamma;
                u[n - 1] = alpha;
                banded.z = banded.back_substitute(&u);
                banded.z_scale = T::one() + banded.z[0] + beta * banded.z[n - 1] / gamma;

                Kind::Banded(banded)
            }
        };

        Self { kind }
    }

    /// Solve for one right-hand side.
    pub(crate) fn solve(&self, rhs: &[T]) -> Vec<T> {
        match &self.kind {
            Kind::Scalar(a) => vec![rhs[0] / *a],
            Kind::Dense2(m) => {
                let det = m[0][0] * m[1][1] - m[0][1] * m[1][0];
                vec![
                    (rhs[0] * m[1][1] - m[0][1] * rhs[1]) / det,
                    (m[0][0] * rhs[1] - rhs[0] * m[1][0]) / det,
                ]
            }
            Kind::Banded(b) => {
                let n = rhs.len();
                let mut x = b.back_substitute(rhs);
                let fact = (x[0] + b.beta * x[n - 1] / b.gamma) / b.z_scale;
                x.iter_mut()
                    .zip(b.z.iter())
                    .for_each(|(xi, &zi)| *xi = *xi - fact * zi);
                x
            }
        }
    }
}

impl<T: Float> Banded<T> {
    /// Thomas algorithm on the non-cyclic part, reusing the stored sweep.
    fn back_substitute(&self, rhs: &[T]) -> Vec<T> {
        let n = rhs.len();
        let mut out = vec![T::zero(); n];

        out[0] = rhs[0] / self.denom[0];
        for i in 1..n {
            out[i] = (rhs[i] - self.sub[i] * out[i - 1]) / self.denom[i];
        }
        for i in (0..n - 1).rev() {
            out[i] = out[i] - self.sup_prime[i] * out[i + 1];
        }

        out
    }
}

/// Forward elimination of a plain tridiagonal matrix, returning the modified
/// super-diagonal and the pivots.
fn forward_sweep<T: Float>(sub: &[T], diag: &[T], sup: &[T]) -> (Vec<T>, Vec<T>) {
    let n = diag.len();
    let mut sup_prime = vec![T::zero(); n];
    let mut denom = vec![T::zero(); n];

    denom[0] = diag[0];
    sup_prime[0] = sup[0] / denom[0];
    for i in 1..n {
        denom[i] = diag[i] - sub[i] * sup_prime[i - 1];
        sup_prime[i] = sup[i] / denom[i];
    }

    (sup_prime, denom)
}
