//! Coefficient naming for effect reports.

use std::fmt;

/// Separator fitted-model libraries use for interaction terms (`a:b`).
pub const INTERACTION_SEPARATOR: char = ':';

/// How a coefficient name reads in a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EffectLabel {
    /// Interaction of exactly two terms.
    Interaction { first: String, second: String },
    /// Any other compound identifier, kept verbatim.
    Compound(String),
    /// A single term.
    Term(String),
}

impl EffectLabel {
    #[must_use]
    pub fn classify(coefficient: &str) -> Self {
        if !coefficient.contains(INTERACTION_SEPARATOR) {
            return Self::Term(coefficient.to_owned());
        }

        let mut parts = coefficient.split(INTERACTION_SEPARATOR);
        match (parts.next(), parts.next(), parts.next()) {
            (Some(first), Some(second), None) if !first.is_empty() && !second.is_empty() => {
                Self::Interaction {
                    first: first.to_owned(),
                    second: second.to_owned(),
                }
            }
            _ => Self::Compound(coefficient.to_owned()),
        }
    }

    #[must_use]
    pub const fn is_interaction(&self) -> bool {
        matches!(self, Self::Interaction { .. })
    }
}

impl fmt::Display for EffectLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Interaction { first, second } => {
                write!(f, "interaction effect between {first} and {second}")
            }
            Self::Compound(raw) => f.write_str(raw),
            Self::Term(term) => write!(f, "effect of {term}"),
        }
    }
}
