//! Group statistics: percentage, mean and sample standard deviation.

use statrs::statistics::Statistics;

/// Fraction of the reference collection that falls in the group.
///
/// `total == 0` yields NaN.
#[inline]
pub fn percentage(count: usize, total: usize) -> f64 {
    count as f64 / total as f64
}

/// Arithmetic mean of the amounts. NaN for an empty slice.
pub fn mean(amounts: &[f64]) -> f64 {
    amounts.iter().mean()
}

/// Sample standard deviation (Bessel-corrected, `n - 1` denominator).
///
/// Groups with fewer than two members have no dispersion and return 0.0.
pub fn sample_std_dev(amounts: &[f64]) -> f64 {
    if amounts.len() < 2 {
        return 0.0;
    }
    amounts.iter().std_dev()
}
