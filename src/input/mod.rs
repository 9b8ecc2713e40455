//! # Model inputs
//!
//! Light-weight containers for coefficient draws exported by a fitting
//! library: a draws matrix (one row per draw, one column per coefficient)
//! together with coefficient names.
//!
//! # Examples
//!
//! ```
//! use faer::Mat;
//! use effect_direction::PosteriorDraws;
//!
//! let draws = Mat::from_fn(4, 2, |i, j| {
//!     let scale = if j == 0 { 0.1 } else { -0.2 };
//!     scale * (1.0 + f64::from(i as u32))
//! });
//! let input = PosteriorDraws::new(draws, vec!["(Intercept)".into(), "Age".into()]);
//!
//! assert!(input.validate().is_ok());
//! assert_eq!(input.column_index("Age"), Some(1));
//! ```
//!
//! ```
//! use faer::Mat;
//! use effect_direction::PosteriorDraws;
//!
//! let draws = Mat::from_fn(4, 2, |_i, _j| 0.0);
//! let input = PosteriorDraws::new(draws, vec!["Age".into(), "Age".into()]);
//!
//! assert!(input.validate().is_err());
//! ```

use std::collections::HashSet;

use faer::Mat;
use thiserror::Error;

pub mod chains;
pub mod csv;

pub use chains::MultiChainDraws;
pub use csv::{CsvError, load_draws_csv, parse_draws_csv};

/// Errors returned when validating coefficient draws.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("draws must cover at least one coefficient")]
    NoCoefficients,
    #[error("draws must contain at least one row")]
    NoDraws,
    #[error("coefficient names ({names}) must match draw columns ({columns})")]
    NameCountMismatch { names: usize, columns: usize },
    #[error("coefficient name at column {index} is empty")]
    EmptyName { index: usize },
    #[error("coefficient name `{0}` appears more than once")]
    DuplicateName(String),
    #[error("draws for `{coefficient}` have length {len}; expected {expected}")]
    ColumnLengthMismatch {
        coefficient: String,
        len: usize,
        expected: usize,
    },
    #[error("draw {draw} of `{coefficient}` is not finite")]
    NonFiniteDraw { coefficient: String, draw: usize },
    #[error("at least one chain is required")]
    NoChains,
    #[error("chain {chain} does not match the coefficients or sample kind of chain 0")]
    InconsistentChains { chain: usize },
}

/// Where the draws come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SampleKind {
    /// Posterior draws of a Bayesian fit; intervals are credible intervals.
    #[default]
    Posterior,
    /// Resampling replicates of a frequentist fit; intervals are confidence intervals.
    Bootstrap,
}

impl SampleKind {
    /// Short interval label used in report headers.
    #[must_use]
    pub const fn interval_label(self) -> &'static str {
        match self {
            Self::Posterior => "CrI",
            Self::Bootstrap => "CI",
        }
    }
}

/// Coefficient draws of one fitted model.
#[derive(Debug, Clone)]
pub struct PosteriorDraws {
    pub draws: Mat<f64>,
    pub names: Vec<String>,
    pub kind: SampleKind,
    pub description: Option<String>,
}

impl PosteriorDraws {
    #[must_use]
    pub const fn new(draws: Mat<f64>, names: Vec<String>) -> Self {
        Self {
            draws,
            names,
            kind: SampleKind::Posterior,
            description: None,
        }
    }

    /// Build from one vector of draws per coefficient.
    ///
    /// # Errors
    ///
    /// Returns `InputError` if the columns differ in length or the result fails validation.
    pub fn from_columns(names: Vec<String>, columns: &[Vec<f64>]) -> Result<Self, InputError> {
        if names.len() != columns.len() {
            return Err(InputError::NameCountMismatch {
                names: names.len(),
                columns: columns.len(),
            });
        }
        let rows = columns.first().map_or(0, Vec::len);
        for (name, column) in names.iter().zip(columns) {
            if column.len() != rows {
                return Err(InputError::ColumnLengthMismatch {
                    coefficient: name.clone(),
                    len: column.len(),
                    expected: rows,
                });
            }
        }

        let draws = Mat::from_fn(rows, columns.len(), |i, j| columns[j][i]);
        let input = Self::new(draws, names);
        input.validate()?;
        Ok(input)
    }

    #[must_use]
    pub fn with_kind(mut self, kind: SampleKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn with_description(self, description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
            ..self
        }
    }

    #[must_use]
    pub fn draw_count(&self) -> usize {
        self.draws.nrows()
    }

    #[must_use]
    pub fn coefficient_count(&self) -> usize {
        self.draws.ncols()
    }

    #[must_use]
    pub fn column_index(&self, coefficient: &str) -> Option<usize> {
        self.names.iter().position(|name| name == coefficient)
    }

    /// Draws of the coefficient in column `index`.
    #[must_use]
    pub fn column(&self, index: usize) -> Option<Vec<f64>> {
        (index < self.draws.ncols())
            .then(|| (0..self.draws.nrows()).map(|row| self.draws[(row, index)]).collect())
    }

    /// # Errors
    ///
    /// Returns `InputError` if shapes, names, or values are malformed.
    pub fn validate(&self) -> Result<(), InputError> {
        if self.draws.ncols() == 0 {
            return Err(InputError::NoCoefficients);
        }
        if self.draws.nrows() == 0 {
            return Err(InputError::NoDraws);
        }
        if self.names.len() != self.draws.ncols() {
            return Err(InputError::NameCountMismatch {
                names: self.names.len(),
                columns: self.draws.ncols(),
            });
        }

        let mut seen = HashSet::with_capacity(self.names.len());
        for (index, name) in self.names.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(InputError::EmptyName { index });
            }
            if !seen.insert(name.as_str()) {
                return Err(InputError::DuplicateName(name.clone()));
            }
        }

        for col in 0..self.draws.ncols() {
            let non_finite = (0..self.draws.nrows()).find(|&row| !self.draws[(row, col)].is_finite());
            if let Some(draw) = non_finite {
                return Err(InputError::NonFiniteDraw {
                    coefficient: self.names[col].clone(),
                    draw,
                });
            }
        }
        Ok(())
    }
}
