//! Descriptive statistics over slices of readings
//!
//! Every function here returns `None` for an empty slice; callers map that
//! to their own error. Summation runs in slice order without compensation.

use crate::math;

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Arithmetic mean
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let sum: f64 = values.iter().sum();
    Some(sum / values.len() as f64)
}

/// Population standard deviation (denominator `n`)
///
/// Two passes: one for the mean, one for the squared deviations.
pub fn population_std_dev(values: &[f64]) -> Option<f64> {
    let mean = mean(values)?;

    let squared: f64 = values
        .iter()
        .map(|&x| {
            let delta = x - mean;
            delta * delta
        })
        .sum();

    Some(math::sqrt(squared / values.len() as f64))
}

/// Minimum and maximum in a single pass, seeded from the first value
pub fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    let (&first, rest) = values.split_first()?;

    let mut min = first;
    let mut max = first;
    for &x in rest {
        if x < min {
            min = x;
        }
        if x > max {
            max = x;
        }
    }

    Some((min, max))
}

/// Value closest to `target`
///
/// The first value seeds the best candidate. A later value replaces it when
/// its distance is strictly smaller than the best distance seen so far, or
/// when its distance lies within `epsilon` of that best distance and is
/// itself nonzero. The best distance is always the running minimum, so a
/// replacing near-tie does not raise it.
///
/// Consequences worth knowing:
/// - equidistant values: the later one wins (`[-2, 2]` toward 0 gives 2)
/// - an earlier exact match loses to a later nonzero near-tie
/// - an exact match is never displaced by a later exact match
pub fn closest_to(values: &[f64], target: f64, epsilon: f64) -> Option<f64> {
    let &first = values.first()?;

    let mut best_distance = math::abs(first - target);
    let mut closest = first;

    for &x in values {
        let distance = math::abs(x - target);
        let strictly_closer = distance < best_distance;
        let near_tie = math::abs(best_distance - distance) < epsilon && distance > 0.0;

        if strictly_closer || near_tie {
            closest = x;
        }
        if strictly_closer {
            best_distance = distance;
        }
    }

    Some(closest)
}

/// Split values around `threshold` in a single pass
///
/// Returns `(below, at_or_above)`: values strictly less than the threshold,
/// then all others. Both sides keep the input order. A NaN threshold sends
/// everything to the second side.
pub fn partition(values: &[f64], threshold: f64) -> (Vec<f64>, Vec<f64>) {
    let mut below = Vec::new();
    let mut at_or_above = Vec::new();

    for &x in values {
        if x < threshold {
            below.push(x);
        } else {
            at_or_above.push(x);
        }
    }

    (below, at_or_above)
}

#[cfg(test)]
mod tests {
    use super::*;

    const STANDARD: [f64; 4] = [3.0, -5.0, 1.0, -8.0];

    #[test]
    fn test_empty() {
        assert_eq!(mean(&[]), None);
        assert_eq!(population_std_dev(&[]), None);
        assert_eq!(min_max(&[]), None);
        assert_eq!(closest_to(&[], 0.0, 1e-6), None);
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(&STANDARD), Some(-2.25));
        assert_eq!(mean(&[-1.0]), Some(-1.0));
        assert_eq!(mean(&[-2.0, 2.0]), Some(0.0));
    }

    #[test]
    fn test_population_std_dev() {
        let sd = population_std_dev(&STANDARD).unwrap();
        assert!((sd - 4.4370598373).abs() < 1e-9);

        assert_eq!(population_std_dev(&[-1.0]), Some(0.0));
        assert_eq!(population_std_dev(&[-2.0, 2.0]), Some(2.0));
    }

    #[test]
    fn test_population_not_sample() {
        // Dataset: [2, 4, 4, 4, 5, 5, 7, 9]
        // Population variance = 32/8 = 4.0, sample variance would be 32/7
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_eq!(population_std_dev(&values), Some(2.0));
    }

    #[test]
    fn test_min_max() {
        assert_eq!(min_max(&STANDARD), Some((-8.0, 3.0)));
        assert_eq!(min_max(&[-1.0]), Some((-1.0, -1.0)));
        assert_eq!(min_max(&[5.0, f64::INFINITY]), Some((5.0, f64::INFINITY)));
    }

    #[test]
    fn test_closest_basic() {
        assert_eq!(closest_to(&STANDARD, 12.0, 1e-6), Some(3.0));
        assert_eq!(closest_to(&STANDARD, 0.0, 1e-6), Some(1.0));
        assert_eq!(closest_to(&STANDARD, -7.0, 1e-6), Some(-8.0));
        assert_eq!(closest_to(&[-1.0], 12.0, 1e-6), Some(-1.0));
    }

    #[test]
    fn test_closest_later_tie_wins() {
        assert_eq!(closest_to(&[-2.0, 2.0], 0.0, 1e-6), Some(2.0));
        assert_eq!(closest_to(&[2.0, -2.0], 0.0, 1e-6), Some(-2.0));
    }

    #[test]
    fn test_closest_exact_match() {
        // Exact match on the only value
        assert_eq!(closest_to(&[5.0], 5.0, 1e-6), Some(5.0));

        // Later exact match is strictly closer
        assert_eq!(closest_to(&[1e-7, 0.0], 0.0, 1e-6), Some(0.0));

        // Earlier exact match yields to a later nonzero near-tie
        assert_eq!(closest_to(&[0.0, 1e-7], 0.0, 1e-6), Some(1e-7));

        // Exact match is not displaced by another exact match
        assert_eq!(closest_to(&[5.0, 3.0, 5.0], 5.0, 1e-6), Some(5.0));
    }

    #[test]
    fn test_closest_near_tie_keeps_best_distance() {
        // 1.0000005 is a near-tie of 1.0 and wins, but 1.0000012 is measured
        // against the running minimum 1.0 and is outside epsilon.
        let values = [1.0, 1.0000005, 1.0000012];
        assert_eq!(closest_to(&values, 0.0, 1e-6), Some(1.0000005));
    }

    #[test]
    fn test_partition() {
        let (below, above) = partition(&STANDARD, 12.0);
        assert_eq!(below, vec![3.0, -5.0, 1.0, -8.0]);
        assert!(above.is_empty());

        let (below, above) = partition(&[-2.0, 2.0], 0.0);
        assert_eq!(below, vec![-2.0]);
        assert_eq!(above, vec![2.0]);
    }

    #[test]
    fn test_partition_threshold_goes_above() {
        let (below, above) = partition(&[1.0, 0.0, -1.0, 0.0], 0.0);
        assert_eq!(below, vec![-1.0]);
        assert_eq!(above, vec![1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_partition_nan_threshold() {
        let (below, above) = partition(&STANDARD, f64::NAN);
        assert!(below.is_empty());
        assert_eq!(above, STANDARD.to_vec());
    }
}
