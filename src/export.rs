//! Export surface
//!
//! Converts solve results into downloadable JSON and CSV documents. The core
//! result types already expose every field written here; this module owns
//! only the formatting.

use thiserror::Error;

use crate::solvers::{ComparisonEntry, SolveResult};

/// Export Errors
#[derive(Debug, Error)]
pub enum ExportError {
    /// JSON serialization failed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Renders a result as a pretty-printed JSON document.
///
/// The `steps` trace is included only when requested and non-empty, matching
/// the shape of the original download endpoint.
///
/// # Errors
///
/// Returns an [`ExportError`] if serialization fails.
pub fn to_json(result: &SolveResult, include_steps: bool) -> Result<String, ExportError> {
    let mut document = serde_json::to_value(result)?;

    if let Some(object) = document.as_object_mut() {
        let drop_steps = !include_steps
            || object
                .get("steps")
                .and_then(serde_json::Value::as_array)
                .is_none_or(Vec::is_empty);

        if drop_steps {
            object.remove("steps");
        }
    }

    Ok(serde_json::to_string_pretty(&document)?)
}

/// Renders the selected items of a result as CSV, followed by summary rows.
#[must_use]
pub fn to_csv(result: &SolveResult) -> String {
    if result.selected_items.is_empty() {
        return "No items selected".to_owned();
    }

    let mut output = String::from("item,weight,value,selected,fraction\n");

    for selected in &result.selected_items {
        output.push_str(&format!(
            "{},{},{},{},{}\n",
            csv_field(&selected.item.name),
            selected.item.weight,
            selected.item.value,
            selected.selected,
            selected.fraction
        ));
    }

    output.push_str("\nSummary:\n");
    output.push_str(&format!("Algorithm,{}\n", result.algorithm));
    output.push_str(&format!("Max Profit,${}\n", result.max_profit));
    output.push_str(&format!("Total Weight,{} kg\n", result.total_weight));
    output.push_str(&format!(
        "Execution Time,{:.2} us\n",
        result.execution_time_micros()
    ));

    output
}

/// Renders an all-algorithms comparison as CSV, one row per algorithm.
#[must_use]
pub fn comparison_to_csv(entries: &[ComparisonEntry]) -> String {
    let mut output = String::from("algorithm,maxProfit,totalWeight,executionTime,itemsSelected\n");

    for entry in entries {
        let result = &entry.result;
        output.push_str(&format!(
            "{},{},{},{:.2},{}\n",
            result.algorithm,
            result.max_profit,
            result.total_weight,
            result.execution_time_micros(),
            result.selected_items.len()
        ));
    }

    output
}

/// Quotes a CSV field if it contains a delimiter, quote or newline.
fn csv_field(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_owned()
    }
}
