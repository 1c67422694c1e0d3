//! Shared numeric helpers: sampling grids and float tolerances.

/// Relative tolerance used for equilibrium self-checks
pub const RELATIVE_TOLERANCE: f64 = 1e-9;

/// Evenly spaced positions over `[0, length]`, `count + 1` entries.
///
/// The first entry is exactly `0.0` and the last is exactly `length`, so
/// end-of-beam comparisons (`x >= length`) are reliable on the final sample.
///
/// ```rust
/// use statics_core::numeric::sample_positions;
///
/// let xs = sample_positions(10.0, 4);
/// assert_eq!(xs, vec![0.0, 2.5, 5.0, 7.5, 10.0]);
/// ```
pub fn sample_positions(length: f64, count: usize) -> Vec<f64> {
    if count == 0 {
        return vec![0.0];
    }
    let mut positions: Vec<f64> = (0..=count)
        .map(|i| length * i as f64 / count as f64)
        .collect();
    if let Some(last) = positions.last_mut() {
        *last = length;
    }
    positions
}

/// Compare two values with a relative tolerance and an absolute floor.
///
/// `scale` is the magnitude of the quantities that produced `a` and `b`; a
/// residual of `1e-12` is noise when the loads are in the thousands.
pub fn approx_eq(a: f64, b: f64, scale: f64) -> bool {
    let bound = RELATIVE_TOLERANCE * scale.abs().max(a.abs()).max(b.abs()).max(1.0);
    (a - b).abs() <= bound
}

/// True when `value` is indistinguishable from zero for division purposes
pub fn is_negligible(value: f64) -> bool {
    value.abs() <= f64::EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_endpoints() {
        let xs = sample_positions(7.3, 800);
        assert_eq!(xs.len(), 801);
        assert_eq!(xs[0], 0.0);
        assert_eq!(xs[800], 7.3);
    }

    #[test]
    fn test_sample_spacing_is_uniform() {
        let xs = sample_positions(12.0, 6);
        for pair in xs.windows(2) {
            assert!((pair[1] - pair[0] - 2.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_approx_eq_scales_with_magnitude() {
        assert!(approx_eq(1.0e6, 1.0e6 + 1.0e-4, 1.0e6));
        assert!(!approx_eq(1.0, 1.0 + 1.0e-6, 1.0));
        assert!(approx_eq(0.0, 1.0e-10, 0.0));
    }

    #[test]
    fn test_negligible() {
        assert!(is_negligible(0.0));
        assert!(!is_negligible(1e-6));
    }
}
