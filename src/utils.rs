//! Convenience methods for sampling spline parameters.
use alloc::vec::Vec;

use num_traits::Float;

/// Generates evenly spaced values from start to stop,
/// including the endpoint.
///
/// `n = 1` gives just `start`; `n = 0` gives nothing.
pub fn linspace<T>(start: T, stop: T, n: usize) -> Vec<T>
where
    T: Float,
{
    if n < 2 {
        return (0..n).map(|_| start).collect();
    }

    let steps = T::from(n - 1).unwrap_or_else(T::nan);
    let dx: T = (stop - start) / steps;
    (0..n - 1)
        .map(|i| start + T::from(i).unwrap_or_else(T::nan) * dx)
        .chain(core::iter::once(stop))
        .collect()
}

#[cfg(test)]
mod test {
    use super::linspace;

    #[test]
    fn test_linspace() {
        assert_eq!(linspace(0.0, 1.0, 5), [0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(linspace(2.0, 3.0, 1), [2.0]);
        assert!(linspace(2.0, 3.0, 0).is_empty());

        // The endpoint is hit exactly
        let end = 2.6180339887;
        assert_eq!(*linspace(0.0, end, 500).last().unwrap(), end);
    }
}
