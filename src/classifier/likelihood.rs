//! Class-conditional likelihood functions.

use std::collections::BTreeMap;
use std::f64::consts::PI;

/// Denominator stabiliser for categorical likelihoods.
pub const DEFAULT_EPSILON: f64 = 1e-6;

/// Gaussian probability density of `x` under `N(mean, std²)`.
///
/// `exp(-(x - mean)² / (2·std²)) / (std·√(2π))`
///
/// No guard is applied: `std == 0` divides by zero and yields `inf` or `NaN`,
/// and values far from the mean underflow to `0.0`.
///
/// ```
/// use mixnb::classifier::gaussian_density;
///
/// let peak = gaussian_density(0.0, 0.0, 1.0);
/// assert!((peak - 0.398_942_280_401_432_7).abs() < 1e-12);
/// ```
pub fn gaussian_density(x: f64, mean: f64, std: f64) -> f64 {
    let exponent = (-(x - mean).powi(2) / (2.0 * std.powi(2))).exp();
    exponent / ((2.0 * PI).sqrt() * std)
}

/// Likelihood of a categorical `value` given the class frequency table.
///
/// `count(value) / (Σ counts + epsilon)`. `epsilon` only keeps an empty table
/// from dividing by zero; it is not add-one smoothing, so a value the class
/// never produced scores exactly `0.0`.
pub fn categorical_likelihood(
    frequencies: &BTreeMap<String, usize>,
    value: &str,
    epsilon: f64,
) -> f64 {
    let count = frequencies.get(value).copied().unwrap_or(0);
    let total: usize = frequencies.values().sum();
    count as f64 / (total as f64 + epsilon)
}
