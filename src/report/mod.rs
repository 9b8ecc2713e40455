//! # Model effect reports
//!
//! Applies the effect estimator to every coefficient exposed by a
//! [`PosteriorSource`] and keeps the results in source order, ready for
//! tabulation.

use rayon::prelude::*;
use thiserror::Error;
use tracing::{debug, info};

use crate::effects::{EffectDirectionEstimator, EffectLabel, EffectSummary};
use crate::inference::{EffectError, EstimatorOptions};
use crate::input::SampleKind;
use crate::models::source::PosteriorSource;

pub mod table;

pub use table::render_effects_table;

/// Errors returned by the report workflow.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ReportError {
    #[error("invalid estimator options: {0}")]
    InvalidOptions(#[source] EffectError),
    #[error("model lists coefficient `{0}` but provides no draws for it")]
    MissingCoefficient(String),
    #[error("coefficient `{coefficient}`: {source}")]
    Effect {
        coefficient: String,
        #[source]
        source: EffectError,
    },
}

/// Configuration for a model report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportOptions {
    pub estimator: EstimatorOptions,
    /// Summarize coefficients on the rayon thread pool.
    pub parallel: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            estimator: EstimatorOptions::default(),
            parallel: true,
        }
    }
}

/// Effect summary of one named coefficient.
#[derive(Debug, Clone, PartialEq)]
pub struct CoefficientEffect {
    pub name: String,
    pub label: EffectLabel,
    pub summary: EffectSummary,
}

/// Effect summaries for all coefficients of one model.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelEffects {
    pub description: Option<String>,
    pub kind: SampleKind,
    pub options: EstimatorOptions,
    pub coefficients: Vec<CoefficientEffect>,
}

impl ModelEffects {
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CoefficientEffect> {
        self.coefficients.iter().find(|effect| effect.name == name)
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.coefficients.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Coefficients whose fixed-level interval excludes zero.
    pub fn excluding_zero(&self) -> impl Iterator<Item = &CoefficientEffect> {
        self.coefficients
            .iter()
            .filter(|effect| effect.summary.interval.excludes_zero())
    }
}

/// Summarize every coefficient of `source`.
///
/// With `options.parallel` the coefficients are summarized concurrently; the
/// result keeps source order either way.
///
/// # Errors
///
/// Returns `ReportError` if the options are invalid, a listed coefficient has
/// no draws, or a coefficient's draws are rejected by the estimator.
pub fn summarize_model<S>(source: &S, options: ReportOptions) -> Result<ModelEffects, ReportError>
where
    S: PosteriorSource + Sync + ?Sized,
{
    let estimator =
        EffectDirectionEstimator::new(options.estimator).map_err(ReportError::InvalidOptions)?;
    let names = source.coefficient_names();

    let summarize_one = |name: &&str| -> Result<CoefficientEffect, ReportError> {
        let draws = source
            .draws(name)
            .ok_or_else(|| ReportError::MissingCoefficient((*name).to_owned()))?;
        let summary = estimator
            .summarize(&draws)
            .map_err(|source| ReportError::Effect {
                coefficient: (*name).to_owned(),
                source,
            })?;
        debug!(
            coefficient = *name,
            median = summary.median,
            medp = summary.medp,
            "summarized coefficient"
        );
        Ok(CoefficientEffect {
            name: (*name).to_owned(),
            label: EffectLabel::classify(name),
            summary,
        })
    };

    let coefficients = if options.parallel {
        names
            .par_iter()
            .map(summarize_one)
            .collect::<Result<Vec<_>, _>>()?
    } else {
        names
            .iter()
            .map(summarize_one)
            .collect::<Result<Vec<_>, _>>()?
    };

    info!(
        coefficients = coefficients.len(),
        parallel = options.parallel,
        "model effects summarized"
    );

    Ok(ModelEffects {
        description: source.description().map(str::to_owned),
        kind: source.sample_kind(),
        options: options.estimator,
        coefficients,
    })
}
