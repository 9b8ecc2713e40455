/////////////////////////////////////////////////////////////////////////////////////////////\
//
// Tabular rendering of model effect summaries.
//
// Created on: 17 Oct 2026
//
/////////////////////////////////////////////////////////////////////////////////////////////

//! # Effect tables
//!
//! One row per coefficient: name, MEDP, median, MAD, mean, SD, and the bounds
//! of the fixed-level interval. Coefficients whose interval excludes zero are
//! highlighted.

use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ContentArrangement, Table, presets::UTF8_FULL_CONDENSED,
};

use super::{CoefficientEffect, ModelEffects};

/// Render `effects` with `precision` decimals using `comfy_table`.
#[must_use]
pub fn render_effects_table(effects: &ModelEffects, precision: usize) -> String {
    let level = format_level(effects.options.confidence_level);
    let interval = effects.kind.interval_label();
    let lower = format!("{level}% {interval} lower");
    let upper = format!("{level}% {interval} upper");

    let mut table = make_table(&[
        "Variable",
        "MEDP",
        "Median",
        "MAD",
        "Mean",
        "SD",
        lower.as_str(),
        upper.as_str(),
    ]);
    for effect in &effects.coefficients {
        add_effect_row(&mut table, effect, precision);
    }
    table.to_string()
}

fn make_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Disabled)
        .set_header(
            headers
                .iter()
                .map(|h| Cell::new(*h).add_attribute(Attribute::Bold))
                .collect::<Vec<_>>(),
        );
    table
}

fn add_effect_row(table: &mut Table, effect: &CoefficientEffect, precision: usize) {
    let summary = &effect.summary;
    let name = if summary.interval.excludes_zero() {
        Cell::new(&effect.name)
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new(&effect.name)
    };

    table.add_row(vec![
        name,
        number_cell(summary.medp, 2),
        number_cell(summary.median, precision),
        number_cell(summary.mad, precision),
        number_cell(summary.mean, precision),
        number_cell(summary.sd, precision),
        number_cell(summary.interval.lower, precision),
        number_cell(summary.interval.upper, precision),
    ]);
}

fn number_cell(value: f64, precision: usize) -> Cell {
    Cell::new(format!("{value:.precision$}")).set_alignment(CellAlignment::Right)
}

/// `95` for whole levels, `99.5` otherwise.
fn format_level(level: f64) -> String {
    if level.fract() == 0.0 {
        format!("{level:.0}")
    } else {
        format!("{level}")
    }
}
