//! Effect summaries and the maximum effect direction probability (MEDP) search.
//!
//! The MEDP search scans exclusion amounts `e = 0, step, 2 * step, ..., 100`.
//! At each step it inspects the central interval covering `e` percent of the
//! draws, which starts degenerate at the median and widens. The scan stops at
//! the first interval whose bound on the side opposite the effect reaches the
//! minimum-effect boundary and reports `100 - e`. When no interval reaches
//! the boundary the MEDP is 100, paired with the zero-mass interval at the
//! median, and the search is marked as exhausted. In both cases
//! `medp == 100 - medp_interval_mass`.

use num_traits::ToPrimitive;
use statrs::statistics::Statistics;
use tracing::{debug, warn};

use crate::inference::{EffectError, EstimatorOptions, InvalidInput, search_step_count};
use crate::utils::{
    first_non_finite, median_absolute_deviation, median_sorted, percentile, sorted_copy,
};

/// Below this many draws tail quantiles are too noisy to trust.
pub const MIN_STABLE_DRAWS: usize = 100;

/// Central interval of a sample.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct IntervalEstimate {
    pub lower: f64,
    pub upper: f64,
}

impl IntervalEstimate {
    /// Central interval covering `level` percent of an ascending sample.
    ///
    /// The bounds are the `(50 - level / 2)`-th and `(50 + level / 2)`-th percentiles.
    #[must_use]
    pub fn central(sorted_values: &[f64], level: f64) -> Self {
        let half_width = level.clamp(0.0, 100.0) / 200.0;
        Self {
            lower: percentile(sorted_values, 0.5 - half_width),
            upper: percentile(sorted_values, 0.5 + half_width),
        }
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.upper - self.lower
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }

    #[must_use]
    pub fn excludes_zero(self) -> bool {
        !self.contains(0.0)
    }
}

/// Sign of the effect as read from the posterior median.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectDirection {
    /// Median at or above zero.
    Positive,
    Negative,
}

impl EffectDirection {
    #[must_use]
    pub fn from_median(median: f64) -> Self {
        if median >= 0.0 {
            Self::Positive
        } else {
            Self::Negative
        }
    }

    /// Whether `interval` has reached the boundary on the side opposite this direction.
    #[must_use]
    pub fn crosses(self, interval: IntervalEstimate, min_effect: f64) -> bool {
        match self {
            Self::Positive => interval.lower <= min_effect,
            Self::Negative => interval.upper >= -min_effect,
        }
    }
}

/// How the MEDP search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MedpTermination {
    /// An interval reached the minimum-effect boundary.
    Crossed,
    /// The scan covered the full sample without reaching the boundary.
    Exhausted,
}

/// Read-only summary of one coefficient's draws.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectSummary {
    pub draw_count: usize,
    pub median: f64,
    /// Median absolute deviation, scaled to be consistent with the normal SD.
    pub mad: f64,
    pub mean: f64,
    pub sd: f64,
    /// Level (percent) of `interval`.
    pub confidence_level: f64,
    pub interval: IntervalEstimate,
    pub direction: EffectDirection,
    /// Maximum effect direction probability, in `[0, 100]`.
    pub medp: f64,
    pub medp_interval: IntervalEstimate,
    /// Probability mass (percent) covered by `medp_interval`.
    pub medp_interval_mass: f64,
    pub termination: MedpTermination,
    /// Number of intervals inspected by the search.
    pub search_iterations: usize,
}

/// Computes [`EffectSummary`] values for a fixed set of options.
#[derive(Debug, Clone, Copy)]
pub struct EffectDirectionEstimator {
    options: EstimatorOptions,
}

impl Default for EffectDirectionEstimator {
    fn default() -> Self {
        Self {
            options: EstimatorOptions::default(),
        }
    }
}

impl EffectDirectionEstimator {
    /// # Errors
    ///
    /// Returns `EffectError::InvalidInput` if the options are out of range.
    pub fn new(options: EstimatorOptions) -> Result<Self, EffectError> {
        options.validate()?;
        Ok(Self { options })
    }

    #[must_use]
    pub const fn options(&self) -> EstimatorOptions {
        self.options
    }

    /// Summarize one coefficient's draws.
    ///
    /// # Errors
    ///
    /// Returns `EffectError::InvalidInput` if the sample is empty or contains
    /// non-finite draws.
    pub fn summarize(&self, sample: &[f64]) -> Result<EffectSummary, EffectError> {
        if sample.is_empty() {
            return Err(InvalidInput::EmptySample.into());
        }
        if let Some(index) = first_non_finite(sample) {
            return Err(InvalidInput::NonFiniteDraw { index }.into());
        }
        if sample.len() < MIN_STABLE_DRAWS {
            warn!(
                draws = sample.len(),
                minimum = MIN_STABLE_DRAWS,
                "few draws; interval bounds will be unstable"
            );
        }

        let sorted = sorted_copy(sample);
        let median = median_sorted(&sorted);
        let mad = median_absolute_deviation(&sorted, median);
        let mean = sample.iter().mean();
        let sd = if sample.len() > 1 {
            sample.iter().std_dev()
        } else {
            0.0
        };

        let options = self.options;
        let interval = IntervalEstimate::central(&sorted, options.confidence_level);
        let direction = EffectDirection::from_median(median);
        let search = search_medp(&sorted, direction, options.step, options.min_effect);

        Ok(EffectSummary {
            draw_count: sample.len(),
            median,
            mad,
            mean,
            sd,
            confidence_level: options.confidence_level,
            interval,
            direction,
            medp: search.medp,
            medp_interval: search.interval,
            medp_interval_mass: search.interval_mass,
            termination: search.termination,
            search_iterations: search.iterations,
        })
    }
}

/// Summarize `sample` with `options`.
///
/// # Errors
///
/// Returns `EffectError::InvalidInput` on any precondition violation.
pub fn summarize_effect(
    sample: &[f64],
    options: EstimatorOptions,
) -> Result<EffectSummary, EffectError> {
    EffectDirectionEstimator::new(options)?.summarize(sample)
}

#[derive(Debug, Clone, Copy)]
struct MedpSearch {
    medp: f64,
    interval: IntervalEstimate,
    interval_mass: f64,
    termination: MedpTermination,
    iterations: usize,
}

fn search_medp(
    sorted_values: &[f64],
    direction: EffectDirection,
    step: f64,
    min_effect: f64,
) -> MedpSearch {
    let steps = search_step_count(step);
    let mut iterations = 0_usize;

    for index in 0..=steps {
        let excluded = excluded_mass(index, step);
        let interval = IntervalEstimate::central(sorted_values, excluded);
        iterations = index.saturating_add(1);

        if direction.crosses(interval, min_effect) {
            let medp = (100.0 - excluded).clamp(0.0, 100.0);
            debug!(medp, iterations, ?direction, "medp boundary reached");
            return MedpSearch {
                medp,
                interval,
                interval_mass: excluded,
                termination: MedpTermination::Crossed,
                iterations,
            };
        }
        if excluded >= 100.0 {
            break;
        }
    }

    debug!(
        iterations,
        ?direction,
        "medp search exhausted without reaching the boundary"
    );
    MedpSearch {
        medp: 100.0,
        interval: IntervalEstimate::central(sorted_values, 0.0),
        interval_mass: 0.0,
        termination: MedpTermination::Exhausted,
        iterations,
    }
}

/// Mass (percent) inspected at search step `index`, capped at 100.
///
/// Multiplying instead of accumulating keeps the grid free of drift.
fn excluded_mass(index: usize, step: f64) -> f64 {
    let index = index.to_f64().unwrap_or(f64::MAX);
    (index * step).min(100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::usize_to_f64;
    use approx::assert_relative_eq;

    fn linear_sample(start: f64, end: f64, n: usize) -> Vec<f64> {
        (0..n)
            .map(|i| start + (end - start) * usize_to_f64(i) / usize_to_f64(n - 1))
            .collect()
    }

    #[test]
    fn summarize_rejects_empty_sample() {
        let error = EffectDirectionEstimator::default()
            .summarize(&[])
            .expect_err("empty sample should fail");
        assert_eq!(error, EffectError::InvalidInput(InvalidInput::EmptySample));
    }

    #[test]
    fn summarize_rejects_non_finite_draws() {
        let error = EffectDirectionEstimator::default()
            .summarize(&[0.1, 0.2, f64::NAN])
            .expect_err("NaN draw should fail");
        assert_eq!(
            error,
            EffectError::InvalidInput(InvalidInput::NonFiniteDraw { index: 2 })
        );
    }

    #[test]
    fn constructor_rejects_zero_step() {
        let options = EstimatorOptions {
            step: 0.0,
            ..EstimatorOptions::default()
        };
        assert!(matches!(
            EffectDirectionEstimator::new(options),
            Err(EffectError::InvalidInput(InvalidInput::InvalidStep { .. }))
        ));
    }

    #[test]
    fn central_interval_uses_symmetric_percentiles() {
        let sorted = linear_sample(0.0, 100.0, 101);
        let interval = IntervalEstimate::central(&sorted, 90.0);
        assert_relative_eq!(interval.lower, 5.0, epsilon = 1e-9);
        assert_relative_eq!(interval.upper, 95.0, epsilon = 1e-9);

        let degenerate = IntervalEstimate::central(&sorted, 0.0);
        assert_relative_eq!(degenerate.lower, 50.0, epsilon = 1e-9);
        assert_relative_eq!(degenerate.width(), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn constant_sample_exhausts_search() {
        let sample = vec![5.0; 1_000];
        let summary = EffectDirectionEstimator::default()
            .summarize(&sample)
            .expect("constant sample is valid");

        assert_eq!(summary.median, 5.0);
        assert_eq!(summary.mad, 0.0);
        assert_eq!(summary.sd, 0.0);
        assert_eq!(summary.interval, IntervalEstimate { lower: 5.0, upper: 5.0 });
        assert_eq!(summary.medp, 100.0);
        assert_eq!(summary.termination, MedpTermination::Exhausted);
        assert_eq!(summary.medp_interval, IntervalEstimate { lower: 5.0, upper: 5.0 });
        assert_eq!(summary.search_iterations, 2_001);
        assert_relative_eq!(summary.medp_interval_mass, 0.0);
    }

    #[test]
    fn straddling_sample_crosses_on_first_step() {
        // Symmetric around zero with an exact zero median.
        let sample = linear_sample(-1.0, 1.0, 201);
        let options = EstimatorOptions {
            min_effect: 0.0,
            ..EstimatorOptions::default()
        };
        let summary = summarize_effect(&sample, options).expect("valid sample");

        assert_eq!(summary.direction, EffectDirection::Positive);
        assert_eq!(summary.termination, MedpTermination::Crossed);
        assert_eq!(summary.search_iterations, 1);
        assert_eq!(summary.medp, 100.0);
        assert_relative_eq!(summary.medp_interval.width(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn shifted_uniform_reports_expected_medp() {
        // Uniform grid on [-1, 9]: lower bound reaches 0.001 once the interval
        // covers just over 80% of the draws.
        let sample = linear_sample(-1.0, 9.0, 10_001);
        let options = EstimatorOptions {
            step: 1.0,
            ..EstimatorOptions::default()
        };
        let summary = summarize_effect(&sample, options).expect("valid sample");

        assert_eq!(summary.direction, EffectDirection::Positive);
        assert_eq!(summary.termination, MedpTermination::Crossed);
        assert_relative_eq!(summary.medp_interval_mass, 80.0, epsilon = 1e-9);
        assert_relative_eq!(summary.medp, 20.0, epsilon = 1e-9);
        assert!(summary.medp_interval.lower <= 0.001);
    }

    #[test]
    fn negative_effect_uses_upper_bound() {
        let sample = linear_sample(-9.0, 1.0, 10_001);
        let options = EstimatorOptions {
            step: 1.0,
            ..EstimatorOptions::default()
        };
        let summary = summarize_effect(&sample, options).expect("valid sample");

        assert_eq!(summary.direction, EffectDirection::Negative);
        assert_relative_eq!(summary.medp, 20.0, epsilon = 1e-9);
        assert!(summary.medp_interval.upper >= -0.001);
    }

    #[test]
    fn interval_brackets_median() {
        let sample = linear_sample(-3.0, 7.0, 333);
        let summary = EffectDirectionEstimator::default()
            .summarize(&sample)
            .expect("valid sample");
        assert!(summary.interval.lower <= summary.median);
        assert!(summary.median <= summary.interval.upper);
        assert!((0.0..=100.0).contains(&summary.medp));
    }

    #[test]
    fn single_draw_is_degenerate_but_valid() {
        let summary = EffectDirectionEstimator::default()
            .summarize(&[-2.5])
            .expect("single draw is accepted");
        assert_eq!(summary.sd, 0.0);
        assert_eq!(summary.mad, 0.0);
        assert_eq!(summary.interval, IntervalEstimate { lower: -2.5, upper: -2.5 });
        assert_eq!(summary.termination, MedpTermination::Exhausted);
        assert_eq!(summary.medp, 100.0);
    }

    #[test]
    fn uneven_step_still_reaches_full_mass() {
        let options = EstimatorOptions {
            step: 30.0,
            ..EstimatorOptions::default()
        };
        let summary = summarize_effect(&[4.0, 5.0, 6.0], options).expect("valid sample");
        assert_eq!(summary.termination, MedpTermination::Exhausted);
        assert_eq!(summary.search_iterations, 5);
        assert_relative_eq!(summary.medp_interval_mass, 0.0);
        assert_eq!(summary.medp_interval, IntervalEstimate { lower: 5.0, upper: 5.0 });
    }

    #[test]
    fn exhausted_search_reports_zero_mass_interval() {
        let sample = linear_sample(4.0, 6.0, 1_001);
        let summary = EffectDirectionEstimator::default()
            .summarize(&sample)
            .expect("valid sample");

        assert_eq!(summary.termination, MedpTermination::Exhausted);
        assert_eq!(summary.medp, 100.0);
        assert_eq!(summary.medp_interval_mass, 0.0);
        assert_eq!(summary.medp_interval.width(), 0.0);
        assert_relative_eq!(summary.medp_interval.lower, 5.0, epsilon = 1e-12);
        assert_relative_eq!(summary.medp, 100.0 - summary.medp_interval_mass);
    }

    #[test]
    fn excluded_mass_keeps_growing_past_u32_indices() {
        let index = 5_000_000_000_usize;
        assert_relative_eq!(excluded_mass(index, 1e-8), 50.0, epsilon = 1e-9);
        assert_eq!(excluded_mass(usize::MAX, 1e-9), 100.0);
        assert_eq!(excluded_mass(0, 0.05), 0.0);
    }
}
