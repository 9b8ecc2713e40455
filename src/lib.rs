#![forbid(unsafe_code)]

//! # `effect_direction`
//!
//! Direction-of-effect summaries for regression coefficients estimated from
//! posterior draws or bootstrap replicates: median, MAD, mean, SD, a central
//! interval, and the maximum effect direction probability (MEDP).
//!
//! MEDP is `100 - e`, where `e` is the smallest central mass (in percent, on
//! a grid of `step`) whose bound opposite the median's sign reaches
//! `min_effect`. Clearly signed effects need a wide interval before they
//! touch the boundary and so get a low MEDP; effects near zero touch it
//! almost at once and get a MEDP close to 100. If no interval reaches the
//! boundary the MEDP is 100 and the search ends as
//! [`MedpTermination::Exhausted`].
//!
//! The estimator works on a plain slice of draws. Fitted models plug in through
//! [`PosteriorSource`], and [`summarize_model`] turns every coefficient of a
//! source into a row of an effect table.

pub mod effects;
pub mod inference;
pub mod input;
pub mod models;
pub mod report;
pub mod utils;

pub use effects::{
    EffectDirection, EffectDirectionEstimator, EffectLabel, EffectSummary, IntervalEstimate,
    MIN_STABLE_DRAWS, MedpTermination, summarize_effect,
};
pub use inference::{EffectError, EstimatorOptions, InvalidInput};
pub use input::{
    CsvError, InputError, MultiChainDraws, PosteriorDraws, SampleKind, load_draws_csv,
    parse_draws_csv,
};
pub use models::PosteriorSource;
pub use report::{
    CoefficientEffect, ModelEffects, ReportError, ReportOptions, render_effects_table,
    summarize_model,
};
