/////////////////////////////////////////////////////////////////////////////////////////////\
//
// Shared order statistics for posterior and bootstrap draws.
//
// Created on: 17 Oct 2026
//
/////////////////////////////////////////////////////////////////////////////////////////////

//! # Utilities
//!
//! Quantiles, medians, and robust dispersion over sorted draws.
//!
//! All quantile helpers use linear interpolation between order statistics
//! (Hyndman & Fan type 7), so repeated calls on the same sorted slice agree.

use num_traits::ToPrimitive;

/// Consistency constant that scales the raw MAD to a normal standard deviation.
pub const MAD_SCALE: f64 = 1.4826;

/// Type-7 quantile of an ascending slice. `probability` is clamped to `[0, 1]`.
///
/// Returns `NaN` for an empty slice.
#[must_use]
pub fn percentile(sorted_values: &[f64], probability: f64) -> f64 {
    if sorted_values.is_empty() {
        return f64::NAN;
    }

    let clamped = probability.clamp(0.0, 1.0);
    let last = sorted_values.len() - 1;
    let position = clamped * usize_to_f64(last);
    let lower = position.floor().to_usize().unwrap_or(0).min(last);
    let upper = position.ceil().to_usize().unwrap_or(last).min(last);

    if lower == upper {
        sorted_values[lower]
    } else {
        let weight = position - usize_to_f64(lower);
        let low = sorted_values[lower];
        // Stays inside [low, high] and is exact when both order statistics agree.
        weight.mul_add(sorted_values[upper] - low, low)
    }
}

/// Ascending copy of `values`.
#[must_use]
pub fn sorted_copy(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

#[must_use]
pub fn median_sorted(sorted_values: &[f64]) -> f64 {
    percentile(sorted_values, 0.5)
}

/// Scaled median absolute deviation around `center`.
#[must_use]
pub fn median_absolute_deviation(values: &[f64], center: f64) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    let deviations: Vec<f64> = values.iter().map(|value| (value - center).abs()).collect();
    MAD_SCALE * median_sorted(&sorted_copy(&deviations))
}

/// Index of the first non-finite value, if any.
#[must_use]
pub fn first_non_finite(values: &[f64]) -> Option<usize> {
    values.iter().position(|value| !value.is_finite())
}

#[must_use]
pub fn usize_to_f64(value: usize) -> f64 {
    f64::from(u32::try_from(value).unwrap_or(u32::MAX))
}
