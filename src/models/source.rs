//! Adapter seam between fitted-model exports and the effect estimator.
//!
//! Each supported model family exposes its coefficient draws by name plus an
//! optional description of the fitted formula. The estimator never sees the
//! fitting library's own objects.

use std::collections::BTreeMap;

use crate::input::{MultiChainDraws, PosteriorDraws, SampleKind};

/// Read-only access to per-coefficient draws of one fitted model.
pub trait PosteriorSource {
    /// Coefficient names in reporting order.
    fn coefficient_names(&self) -> Vec<&str>;

    /// Draws of `coefficient`, or `None` if the model has no such coefficient.
    fn draws(&self, coefficient: &str) -> Option<Vec<f64>>;

    /// Formula or other description of the fitted model.
    fn description(&self) -> Option<&str> {
        None
    }

    fn sample_kind(&self) -> SampleKind {
        SampleKind::Posterior
    }
}

impl PosteriorSource for PosteriorDraws {
    fn coefficient_names(&self) -> Vec<&str> {
        self.names.iter().map(String::as_str).collect()
    }

    fn draws(&self, coefficient: &str) -> Option<Vec<f64>> {
        self.column(self.column_index(coefficient)?)
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn sample_kind(&self) -> SampleKind {
        self.kind
    }
}

impl PosteriorSource for MultiChainDraws {
    fn coefficient_names(&self) -> Vec<&str> {
        self.names().iter().map(String::as_str).collect()
    }

    fn draws(&self, coefficient: &str) -> Option<Vec<f64>> {
        let index = self.names().iter().position(|name| name == coefficient)?;
        self.pooled_column(index)
    }

    fn description(&self) -> Option<&str> {
        MultiChainDraws::description(self)
    }

    fn sample_kind(&self) -> SampleKind {
        self.kind()
    }
}

/// A plain name-to-draws mapping, reported in name order.
impl PosteriorSource for BTreeMap<String, Vec<f64>> {
    fn coefficient_names(&self) -> Vec<&str> {
        self.keys().map(String::as_str).collect()
    }

    fn draws(&self, coefficient: &str) -> Option<Vec<f64>> {
        self.get(coefficient).cloned()
    }
}
