//! # Models
//!
//! Adapters exposing fitted-model coefficient draws to the effect estimator.

pub mod source;

pub use source::PosteriorSource;
