//! Estimator configuration and precondition errors.

use num_traits::ToPrimitive;
use thiserror::Error;

/// Precondition violations rejected by the effect estimator.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum InvalidInput {
    #[error("sample must contain at least one draw")]
    EmptySample,
    #[error("sample contains a non-finite draw at index {index}")]
    NonFiniteDraw { index: usize },
    #[error("step must be finite and positive; got {step}")]
    InvalidStep { step: f64 },
    #[error("confidence level must lie strictly between 0 and 100; got {level}")]
    InvalidConfidenceLevel { level: f64 },
    #[error("minimum effect must be finite and non-negative; got {min_effect}")]
    InvalidMinEffect { min_effect: f64 },
}

/// Errors returned by the effect estimator.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum EffectError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),
}

/// Settings for one effect summary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimatorOptions {
    /// Probability mass of the reported interval, in percent.
    pub confidence_level: f64,
    /// Granularity of the MEDP search, in percent.
    pub step: f64,
    /// Boundary the effect must clear on the side opposite its sign.
    pub min_effect: f64,
}

impl Default for EstimatorOptions {
    fn default() -> Self {
        Self {
            confidence_level: 95.0,
            step: 0.05,
            min_effect: 0.001,
        }
    }
}

impl EstimatorOptions {
    /// # Errors
    ///
    /// Returns `EffectError::InvalidInput` if any setting is out of range.
    pub fn validate(self) -> Result<(), EffectError> {
        if !(self.step.is_finite() && self.step > 0.0) {
            return Err(InvalidInput::InvalidStep { step: self.step }.into());
        }
        if !(self.confidence_level > 0.0 && self.confidence_level < 100.0) {
            return Err(InvalidInput::InvalidConfidenceLevel {
                level: self.confidence_level,
            }
            .into());
        }
        if !(self.min_effect.is_finite() && self.min_effect >= 0.0) {
            return Err(InvalidInput::InvalidMinEffect {
                min_effect: self.min_effect,
            }
            .into());
        }
        Ok(())
    }

    /// Upper bound on MEDP search iterations implied by `step`.
    #[must_use]
    pub fn max_search_iterations(self) -> usize {
        search_step_count(self.step).saturating_add(1)
    }
}

/// Number of steps needed to cover `[0, 100]` with increments of `step`.
///
/// A trailing partial step is counted so the scan always reaches 100.
pub(crate) fn search_step_count(step: f64) -> usize {
    (100.0 / step - 1.0e-9)
        .ceil()
        .max(0.0)
        .to_usize()
        .unwrap_or(usize::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_are_valid() {
        assert_eq!(EstimatorOptions::default().validate(), Ok(()));
    }

    #[test]
    fn validation_rejects_zero_step() {
        let options = EstimatorOptions {
            step: 0.0,
            ..EstimatorOptions::default()
        };
        assert_eq!(
            options.validate(),
            Err(EffectError::InvalidInput(InvalidInput::InvalidStep {
                step: 0.0
            }))
        );
    }

    #[test]
    fn validation_rejects_non_finite_step() {
        for step in [f64::NAN, f64::INFINITY, -0.5] {
            let options = EstimatorOptions {
                step,
                ..EstimatorOptions::default()
            };
            assert!(matches!(
                options.validate(),
                Err(EffectError::InvalidInput(InvalidInput::InvalidStep { .. }))
            ));
        }
    }

    #[test]
    fn validation_rejects_confidence_level_on_bounds() {
        for level in [0.0, 100.0, -5.0, 150.0, f64::NAN] {
            let options = EstimatorOptions {
                confidence_level: level,
                ..EstimatorOptions::default()
            };
            assert!(matches!(
                options.validate(),
                Err(EffectError::InvalidInput(
                    InvalidInput::InvalidConfidenceLevel { .. }
                ))
            ));
        }
    }

    #[test]
    fn validation_rejects_negative_min_effect() {
        let options = EstimatorOptions {
            min_effect: -0.1,
            ..EstimatorOptions::default()
        };
        assert!(matches!(
            options.validate(),
            Err(EffectError::InvalidInput(InvalidInput::InvalidMinEffect { .. }))
        ));
    }

    #[test]
    fn step_count_covers_full_range() {
        assert_eq!(search_step_count(0.05), 2_000);
        assert_eq!(search_step_count(1.0), 100);
        assert_eq!(search_step_count(30.0), 4);
        assert_eq!(search_step_count(250.0), 1);
        assert_eq!(EstimatorOptions::default().max_search_iterations(), 2_001);
    }
}
