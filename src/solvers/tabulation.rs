//! Dynamic-programming tabulation solver (0/1 knapsack)
//!
//! Builds the classic `(items + 1) x (capacity + 1)` value table bottom-up and
//! backtracks through it to recover the selection. Guaranteed optimal for the
//! 0/1 problem. Capacity and weights are truncated to integers before the
//! table is allocated; an allocation beyond [`MAX_TABLE_CELLS`] is refused
//! rather than silently truncated.

use crate::{
    items::{self, Item, SelectedItem},
    solvers::{Decision, SolverError, SolverOutput, Step},
};

/// Upper bound on `(n + 1) * (capacity + 1)` table cells (f64 each).
pub const MAX_TABLE_CELLS: u128 = 32_000_000;

const INDEX_INVARIANT: SolverError = SolverError::InvariantViolation {
    message: "dp table index out of range",
};

/// Dense value table with `dp(i, w)` = best value using the first `i` items
/// under capacity `w`.
struct DpTable {
    stride: usize,
    cells: Vec<f64>,
}

impl DpTable {
    fn allocate(n: usize, capacity: u64) -> Result<Self, SolverError> {
        let cells = (n as u128 + 1) * (u128::from(capacity) + 1);
        if cells > MAX_TABLE_CELLS {
            return Err(SolverError::ResourceExhausted {
                cells,
                limit: MAX_TABLE_CELLS,
            });
        }

        #[expect(
            clippy::cast_possible_truncation,
            reason = "cells is bounded by MAX_TABLE_CELLS, well within usize"
        )]
        let len = cells as usize;

        #[expect(
            clippy::cast_possible_truncation,
            reason = "capacity + 1 is bounded by the cell budget"
        )]
        let stride = (capacity + 1) as usize;

        Ok(Self {
            stride,
            cells: vec![0.0; len],
        })
    }

    fn get(&self, i: usize, w: usize) -> Result<f64, SolverError> {
        self.cells
            .get(i * self.stride + w)
            .copied()
            .ok_or(INDEX_INVARIANT)
    }

    fn set(&mut self, i: usize, w: usize, value: f64) -> Result<(), SolverError> {
        let slot = self
            .cells
            .get_mut(i * self.stride + w)
            .ok_or(INDEX_INVARIANT)?;
        *slot = value;
        Ok(())
    }
}

/// Solves the 0/1 knapsack bottom-up.
pub(crate) fn solve(raw_items: &[Item], capacity: f64) -> Result<SolverOutput, SolverError> {
    let capacity = items::to_int_weight(capacity);
    let prepared = items::prepare(raw_items);
    let n = prepared.len();

    let mut dp = DpTable::allocate(n, capacity)?;

    #[expect(
        clippy::cast_possible_truncation,
        reason = "item weights fit the table dimension checked at allocation"
    )]
    let weight_of = |item: &items::PreparedItem| item.int_weight.min(capacity + 1) as usize;

    #[expect(
        clippy::cast_possible_truncation,
        reason = "capacity is bounded by the cell budget"
    )]
    let full = capacity as usize;

    for (offset, item) in prepared.iter().enumerate() {
        let i = offset + 1;
        let weight = weight_of(item);

        for w in 0..=full {
            // Default: the item is left out.
            let mut best = dp.get(i - 1, w)?;

            if weight <= w {
                best = best.max(item.item.value + dp.get(i - 1, w - weight)?);
            }

            dp.set(i, w, best)?;
        }
    }

    // Backtrack from (n, capacity): a value change between rows means the
    // item of that row was taken.
    let mut selected_items = Vec::new();
    let mut steps = Vec::new();
    let mut w = full;
    let mut total_weight = 0.0_f64;

    for (offset, item) in prepared.iter().enumerate().rev() {
        let i = offset + 1;

        if dp.get(i, w)? != dp.get(i - 1, w)? {
            let weight = weight_of(item);
            if weight > w {
                return Err(SolverError::InvariantViolation {
                    message: "backtracking selected an item that does not fit",
                });
            }

            selected_items.push(SelectedItem::whole(item.item.clone()));
            steps.push(Step {
                step_number: 0, // renumbered after the reversal below
                description: format!(
                    "Selected {} (value {}, weight {})",
                    item.item.name, item.item.value, item.int_weight
                ),
                current_weight: precise_u64(capacity - (w - weight) as u64),
                current_profit: dp.get(i, w)?,
                decision: Decision::Include,
            });

            total_weight += precise_u64(item.int_weight);
            w -= weight;
        }
    }

    // Oldest decision first, matching input order of inclusion.
    selected_items.reverse();
    steps.reverse();
    for (index, step) in steps.iter_mut().enumerate() {
        step.step_number = index + 1;
    }

    Ok(SolverOutput {
        max_profit: dp.get(n, full)?,
        total_weight,
        selected_items,
        steps,
    })
}

/// Converts a discretized weight back to the f64 domain of results.
#[expect(
    clippy::cast_precision_loss,
    reason = "weights within the table budget are exactly representable"
)]
fn precise_u64(value: u64) -> f64 {
    value as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delivery_items() -> Vec<Item> {
        vec![
            Item::new("Package A", 10.0, 60.0),
            Item::new("Package B", 20.0, 100.0),
            Item::new("Package C", 30.0, 120.0),
        ]
    }

    #[test]
    fn finds_the_optimal_subset() {
        let output = solve(&delivery_items(), 50.0).expect("tabulation should solve");

        assert!((output.max_profit - 220.0).abs() < f64::EPSILON);
        assert!((output.total_weight - 50.0).abs() < f64::EPSILON);

        let names: Vec<_> = output
            .selected_items
            .iter()
            .map(|s| s.item.name.as_str())
            .collect();
        assert_eq!(names, ["Package B", "Package C"]);
    }

    #[test]
    fn selection_follows_input_order() {
        let items = vec![
            Item::new("C", 30.0, 120.0),
            Item::new("A", 10.0, 60.0),
            Item::new("B", 20.0, 100.0),
        ];

        let output = solve(&items, 50.0).expect("tabulation should solve");

        let names: Vec<_> = output
            .selected_items
            .iter()
            .map(|s| s.item.name.as_str())
            .collect();
        assert_eq!(names, ["C", "B"]);
    }

    #[test]
    fn steps_are_renumbered_oldest_first() {
        let output = solve(&delivery_items(), 50.0).expect("tabulation should solve");

        let numbers: Vec<_> = output.steps.iter().map(|s| s.step_number).collect();
        assert_eq!(numbers, [1, 2]);
        assert!(output.steps.iter().all(|s| s.decision == Decision::Include));
    }

    #[test]
    fn nothing_fits_yields_zero_profit() {
        let items = vec![Item::new("Anvil", 100.0, 500.0)];

        let output = solve(&items, 50.0).expect("tabulation should solve");

        assert!(output.max_profit.abs() < f64::EPSILON);
        assert!(output.selected_items.is_empty());
        assert!(output.steps.is_empty());
    }

    #[test]
    fn fractional_capacity_is_truncated() {
        let items = vec![Item::new("A", 10.0, 60.0), Item::new("B", 1.0, 1.0)];

        // Truncated to 10: only one of the two fits alongside nothing else.
        let output = solve(&items, 10.9).expect("tabulation should solve");

        assert!((output.max_profit - 60.0).abs() < f64::EPSILON);
    }

    #[test]
    fn huge_capacity_is_refused() {
        let items = vec![Item::new("A", 10.0, 60.0)];

        let result = solve(&items, 1.0e12);

        assert!(matches!(
            result,
            Err(SolverError::ResourceExhausted { .. })
        ));
    }
}
