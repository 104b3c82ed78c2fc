//! Pure recursion solver (0/1 knapsack)
//!
//! The recurrence with no caching at all: every subproblem is recomputed on
//! demand, including during reconstruction, which re-solves the "with" and
//! "without" subtrees at every backtracking step. That redundancy keeps the
//! solver free of auxiliary state, at exponential cost; callers should keep
//! instances to roughly 20-25 items.

use crate::{
    items::{self, Item, PreparedItem, SelectedItem},
    solvers::{SolverError, SolverOutput},
};

/// Best value using the first `i` items under remaining capacity `w`.
fn knapsack(prepared: &[PreparedItem], i: usize, w: u64) -> f64 {
    if i == 0 || w == 0 {
        return 0.0;
    }

    let Some(item) = prepared.get(i - 1) else {
        return 0.0;
    };

    if item.int_weight > w {
        knapsack(prepared, i - 1, w)
    } else {
        let with_item = item.item.value + knapsack(prepared, i - 1, w - item.int_weight);
        let without_item = knapsack(prepared, i - 1, w);
        with_item.max(without_item)
    }
}

/// Solves the 0/1 knapsack by exhaustive recursion.
pub(crate) fn solve(raw_items: &[Item], capacity: f64) -> Result<SolverOutput, SolverError> {
    let capacity = items::to_int_weight(capacity);
    let prepared = items::prepare(raw_items);
    let n = prepared.len();

    let max_profit = knapsack(&prepared, n, capacity);

    // Reconstruction re-solves both subtrees at every level purely to compare
    // with vs. without.
    let mut selected_items = Vec::new();
    let mut total_weight = 0.0_f64;
    let mut w = capacity;

    for i in (1..=n).rev() {
        if w == 0 {
            break;
        }

        let item = prepared.get(i - 1).ok_or(SolverError::InvariantViolation {
            message: "reconstruction walked past the item list",
        })?;

        let without_item = knapsack(&prepared, i - 1, w);
        let with_item = if item.int_weight <= w {
            item.item.value + knapsack(&prepared, i - 1, w - item.int_weight)
        } else {
            0.0
        };

        if with_item > without_item {
            selected_items.push(SelectedItem::whole(item.item.clone()));
            total_weight += weight_as_f64(item.int_weight);
            w -= item.int_weight;
        }
    }

    selected_items.reverse();

    Ok(SolverOutput {
        max_profit,
        total_weight,
        selected_items,
        steps: Vec::new(),
    })
}

#[expect(
    clippy::cast_precision_loss,
    reason = "discretized weights are far below 2^53"
)]
fn weight_as_f64(weight: u64) -> f64 {
    weight as f64
}
