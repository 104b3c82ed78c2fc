//! Greedy solver (fractional knapsack)
//!
//! Sorts items by value-to-weight ratio and fills the capacity in that order,
//! splitting at most one item at the capacity boundary. Optimal for the
//! fractional relaxation; for the strict 0/1 variant it is a heuristic, and
//! its profit can exceed the 0/1 optimum because of the fractional take.
//! Runs on raw weights; nothing is discretized here.

use crate::{
    items::{Item, SelectedItem},
    solvers::{Decision, SolverError, SolverOutput, Step},
};

/// Solves the fractional knapsack greedily.
///
/// Ties in the ratio ordering keep the caller's input order (stable sort), so
/// repeated solves of the same instance pick the same items.
pub(crate) fn solve(items: &[Item], capacity: f64) -> Result<SolverOutput, SolverError> {
    let mut sorted: Vec<&Item> = items.iter().collect();
    sorted.sort_by(|a, b| b.ratio().total_cmp(&a.ratio()));

    let mut total_weight = 0.0_f64;
    let mut total_value = 0.0_f64;
    let mut selected_items = Vec::new();
    let mut steps = Vec::new();

    for (i, item) in sorted.into_iter().enumerate() {
        if total_weight + item.weight <= capacity {
            // The whole item fits.
            total_weight += item.weight;
            total_value += item.value;
            selected_items.push(SelectedItem::whole(item.clone()));
            steps.push(Step {
                step_number: i + 1,
                description: format!(
                    "Including {} (weight {}, value {}, ratio {:.2})",
                    item.name,
                    item.weight,
                    item.value,
                    item.ratio()
                ),
                current_weight: total_weight,
                current_profit: total_value,
                decision: Decision::Include,
            });
        } else if total_weight < capacity {
            // Straddles the boundary: take the fraction that still fits.
            let remaining = capacity - total_weight;
            let fraction = remaining / item.weight;

            total_value += item.value * fraction;
            total_weight = capacity;
            selected_items.push(SelectedItem::partial(item.clone(), fraction));
            steps.push(Step {
                step_number: i + 1,
                description: format!(
                    "Partially including {} ({:.0}% of item)",
                    item.name,
                    fraction * 100.0
                ),
                current_weight: total_weight,
                current_profit: total_value,
                decision: Decision::Partial,
            });
            break;
        } else {
            steps.push(Step {
                step_number: i + 1,
                description: format!("Skipping {} (exceeds capacity)", item.name),
                current_weight: total_weight,
                current_profit: total_value,
                decision: Decision::Skip,
            });
        }
    }

    Ok(SolverOutput {
        max_profit: total_value,
        total_weight,
        selected_items,
        steps,
    })
}
