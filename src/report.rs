//! Report
//!
//! Console rendering for solve results and comparisons. Tables are built
//! with `tabled` and written to any `io::Write`, so the demo programs stay
//! thin.

use std::io;

use humanize_duration::{Truncate, prelude::DurationExt};
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};
use thiserror::Error;

use crate::solvers::{ComparisonEntry, SolveResult};

/// Errors that can occur when writing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// IO error
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Writes one solve result as a table of selected items followed by a
/// summary, and the decision trace when one exists.
///
/// # Errors
///
/// Returns a [`ReportError`] if writing fails.
pub fn write_result(mut out: impl io::Write, result: &SolveResult) -> Result<(), ReportError> {
    let mut builder = Builder::default();
    builder.push_record(["Item", "Weight", "Value", "Fraction"]);

    for selected in &result.selected_items {
        builder.push_record([
            selected.item.name.clone(),
            selected.item.weight.to_string(),
            selected.item.value.to_string(),
            format!("{:.2}", selected.fraction),
        ]);
    }

    let mut table = builder.build();
    table
        .with(Style::sharp())
        .modify(Columns::new(1..), Alignment::right());

    writeln!(out, "{table}")?;
    writeln!(out, "Algorithm:      {}", result.algorithm)?;
    writeln!(out, "Max profit:     {}", result.max_profit)?;
    writeln!(out, "Total weight:   {}", result.total_weight)?;
    writeln!(
        out,
        "Execution time: {}",
        result.execution_time.human(Truncate::Nano)
    )?;

    if !result.steps.is_empty() {
        writeln!(out)?;
        for step in &result.steps {
            writeln!(out, "  {}. {}", step.step_number, step.description)?;
        }
    }

    Ok(())
}

/// Writes an all-algorithms comparison as one table, one row per algorithm.
///
/// # Errors
///
/// Returns a [`ReportError`] if writing fails.
pub fn write_comparison(
    mut out: impl io::Write,
    entries: &[ComparisonEntry],
) -> Result<(), ReportError> {
    let mut builder = Builder::default();
    builder.push_record(["Algorithm", "Max Profit", "Weight", "Items", "Time", "Note"]);

    for entry in entries {
        let result = &entry.result;
        builder.push_record([
            result.algorithm.to_string(),
            result.max_profit.to_string(),
            result.total_weight.to_string(),
            result.selected_items.len().to_string(),
            format!("{}", result.execution_time.human(Truncate::Nano)),
            entry.error.clone().unwrap_or_default(),
        ]);
    }

    let mut table = builder.build();
    table
        .with(Style::sharp())
        .modify(Columns::new(1..=4), Alignment::right());

    writeln!(out, "{table}")?;
    Ok(())
}
