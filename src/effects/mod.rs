//! # Effects
//!
//! Per-coefficient effect summaries and report labels.

pub mod estimator;
pub mod label;

pub use estimator::{
    EffectDirection, EffectDirectionEstimator, EffectSummary, IntervalEstimate, MIN_STABLE_DRAWS,
    MedpTermination, summarize_effect,
};
pub use label::{EffectLabel, INTERACTION_SEPARATOR};
