//! CSV loading for exported coefficient draws.
//!
//! Fitting libraries commonly export draws as a wide table: a header row of
//! coefficient names followed by one draw per line.
//!
//! # Example file content
//! ```csv
//! "(Intercept)",Emotion,Emotion:Sex
//! 0.412,1.031,-0.220
//! 0.398,0.987,-0.251
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use faer::Mat;
use thiserror::Error;

use super::{InputError, PosteriorDraws, SampleKind};

/// Errors returned when loading draws from CSV.
#[derive(Debug, Error)]
pub enum CsvError {
    #[error("failed to read draws: {0}")]
    Io(#[from] std::io::Error),
    #[error("draws file has no header row")]
    MissingHeader,
    #[error("line {line}: expected {expected} columns, found {found}")]
    RowWidth {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("line {line}, column {column}: cannot parse `{value}` as a number")]
    InvalidValue {
        line: usize,
        column: usize,
        value: String,
    },
    #[error(transparent)]
    Input(#[from] InputError),
}

/// Load draws from a CSV file.
///
/// # Errors
///
/// Returns `CsvError` if the file cannot be read or parsed, or the draws fail validation.
pub fn load_draws_csv(path: &Path, kind: SampleKind) -> Result<PosteriorDraws, CsvError> {
    let file = File::open(path)?;
    parse_draws_csv(BufReader::new(file), kind)
}

/// Parse draws from any buffered reader.
///
/// Blank lines are skipped; header fields may be double-quoted.
///
/// # Errors
///
/// Returns `CsvError` if the content is malformed or the draws fail validation.
pub fn parse_draws_csv<R: BufRead>(reader: R, kind: SampleKind) -> Result<PosteriorDraws, CsvError> {
    let mut names: Option<Vec<String>> = None;
    let mut values: Vec<f64> = Vec::new();
    let mut rows = 0;

    for (line_index, line_result) in reader.lines().enumerate() {
        let line = line_result?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let line_number = line_index + 1;

        if names.is_none() {
            names = Some(line.split(',').map(unquote).collect());
            continue;
        }
        let expected = names.as_ref().map_or(0, Vec::len);

        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != expected {
            return Err(CsvError::RowWidth {
                line: line_number,
                expected,
                found: fields.len(),
            });
        }
        for (column_index, field) in fields.iter().enumerate() {
            let field = field.trim();
            let value = field.parse::<f64>().map_err(|_| CsvError::InvalidValue {
                line: line_number,
                column: column_index + 1,
                value: field.to_owned(),
            })?;
            values.push(value);
        }
        rows += 1;
    }

    let names = names.ok_or(CsvError::MissingHeader)?;
    let columns = names.len();
    let draws = Mat::from_fn(rows, columns, |i, j| values[i * columns + j]);
    let input = PosteriorDraws::new(draws, names).with_kind(kind);
    input.validate()?;
    Ok(input)
}

fn unquote(field: &str) -> String {
    let field = field.trim();
    field
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(field)
        .to_owned()
}
