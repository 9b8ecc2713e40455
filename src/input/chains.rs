//! Pooled draws from several MCMC chains of the same model.

use super::{InputError, PosteriorDraws, SampleKind};

/// Chains of one fit, pooled by concatenation in chain order.
#[derive(Debug, Clone)]
pub struct MultiChainDraws {
    chains: Vec<PosteriorDraws>,
}

impl MultiChainDraws {
    /// # Errors
    ///
    /// Returns `InputError` if no chains are given, a chain fails validation,
    /// or chains disagree on coefficient names or sample kind.
    pub fn new(chains: Vec<PosteriorDraws>) -> Result<Self, InputError> {
        let first = chains.first().ok_or(InputError::NoChains)?;
        first.validate()?;

        for (chain, draws) in chains.iter().enumerate().skip(1) {
            draws.validate()?;
            if draws.names != first.names || draws.kind != first.kind {
                return Err(InputError::InconsistentChains { chain });
            }
        }
        Ok(Self { chains })
    }

    #[must_use]
    pub fn chains(&self) -> &[PosteriorDraws] {
        &self.chains
    }

    #[must_use]
    pub fn chain_count(&self) -> usize {
        self.chains.len()
    }

    /// Total draws across all chains.
    #[must_use]
    pub fn draw_count(&self) -> usize {
        self.chains.iter().map(PosteriorDraws::draw_count).sum()
    }

    #[must_use]
    pub fn names(&self) -> &[String] {
        self.chains
            .first()
            .map(|chain| chain.names.as_slice())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn kind(&self) -> SampleKind {
        self.chains.first().map_or_else(SampleKind::default, |chain| chain.kind)
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.chains
            .iter()
            .find_map(|chain| chain.description.as_deref())
    }

    /// Pooled draws of the coefficient in column `index`.
    #[must_use]
    pub fn pooled_column(&self, index: usize) -> Option<Vec<f64>> {
        let mut pooled = Vec::with_capacity(self.draw_count());
        for chain in &self.chains {
            pooled.extend(chain.column(index)?);
        }
        Some(pooled)
    }
}
