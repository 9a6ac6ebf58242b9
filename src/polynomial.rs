//! Single-variable polynomials over a segment-local parameter.
use alloc::vec::Vec;
use core::fmt;

use num_traits::Float;

use crate::SplineError;

/// A polynomial in ascending-degree form, valid on `[0, knot]`.
///
/// `coefficients[i]` multiplies `t^i`. An empty coefficient list is the zero polynomial.
#[derive(Clone, Debug, PartialEq)]
pub struct Polynomial<T> {
    coefficients: Vec<T>,
    knot: T,
}

impl<T: Float> Polynomial<T> {
    pub fn new(coefficients: Vec<T>, knot: T) -> Self {
        Self { coefficients, knot }
    }

    pub fn coefficients(&self) -> &[T] {
        &self.coefficients
    }

    /// Length of the parameter interval this polynomial covers.
    pub fn knot(&self) -> T {
        self.knot
    }

    /// Degree of the polynomial; the zero polynomial reports degree 0.
    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    /// Evaluate with Horner's method.
    ///
    /// No range check is made against `knot`.
    #[inline]
    pub fn eval_at(&self, t: T) -> T {
        self.coefficients
            .iter()
            .rev()
            .fold(T::zero(), |acc, &c| acc * t + c)
    }

    /// Derivative with respect to the local parameter, one degree lower.
    pub fn derivative(&self) -> Self {
        let coefficients = self
            .coefficients
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, &c)| c * T::from(i).unwrap_or_else(T::nan))
            .collect();

        Self::new(coefficients, self.knot)
    }

    /// Value of the `order`-th derivative at `t`.
    ///
    /// Same result as applying [`Polynomial::derivative`] `order` times and
    /// calling [`Polynomial::eval_at`], without allocating.
    #[inline]
    pub fn derivative_at(&self, t: T, order: usize) -> T {
        self.coefficients
            .iter()
            .enumerate()
            .skip(order)
            .rev()
            .fold(T::zero(), |acc, (i, &c)| {
                // i * (i - 1) * ... * (i - order + 1)
                let falling: usize = (i + 1 - order..=i).product();
                acc * t + c * T::from(falling).unwrap_or_else(T::nan)
            })
    }

    /// Convert a cubic over `[0, knot]` to the four Bezier control values
    /// of the same curve.
    ///
    /// Polynomials of lower degree are treated as cubics with zero leading terms.
    ///
    /// # Errors
    /// * If the degree is greater than 3
    pub fn to_control_points(&self) -> Result<[T; 4], SplineError> {
        if self.coefficients.len() > 4 {
            return Err(SplineError::NotCubic {
                degree: self.degree(),
            });
        }

        Ok(self.cubic_control_points())
    }

    /// Bezier control values of the terms up to `t^3`; higher terms are ignored.
    pub(crate) fn cubic_control_points(&self) -> [T; 4] {
        let mut c = [T::zero(); 4];
        for (ci, &v) in c.iter_mut().zip(self.coefficients.iter()) {
            *ci = v;
        }

        let two = T::one() + T::one();
        let three = two + T::one();
        let k = self.knot;

        // Scale each term to the unit interval
        let c0 = c[0];
        let c1 = c[1] * k;
        let c2 = c[2] * k * k;
        let c3 = c[3] * k * k * k;

        [
            c0,
            c0 + c1 / three,
            c0 + two * c1 / three + c2 / three,
            c0 + c1 + c2 + c3,
        ]
    }
}

impl<T: Float + fmt::Display> fmt::Display for Polynomial<T> {
    /// Renders like `1 + -2 t + 3 t^2`, omitting zero terms.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (i, c) in self.coefficients.iter().enumerate() {
            if c.is_zero() {
                continue;
            }
            if !first {
                f.write_str(" + ")?;
            }
            first = false;
            match i {
                0 => write!(f, "{c}")?,
                1 => write!(f, "{c} t")?,
                _ => write!(f, "{c} t^{i}")?,
            }
        }
        if first {
            f.write_str("0")?;
        }

        Ok(())
    }
}
