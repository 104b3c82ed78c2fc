//! Memoized recursion solver (0/1 knapsack)
//!
//! Top-down twin of the tabulation solver: the same recurrence, but only the
//! `(item index, remaining capacity)` states the recursion actually reaches
//! are computed and cached. Each cache entry stores the decision taken at
//! that state alongside the value, so the selection is reconstructed from
//! recorded decisions rather than by differencing two lookups that may not
//! both be present.

use rustc_hash::FxHashMap;

use crate::{
    items::{self, Item, PreparedItem, SelectedItem},
    solvers::{SolverError, SolverOutput},
};

/// One cached state: the best value from here on, and whether the item at
/// this level was taken to achieve it.
#[derive(Copy, Clone, Debug)]
struct MemoEntry {
    value: f64,
    took: bool,
}

type Memo = FxHashMap<(usize, u64), MemoEntry>;

/// Best value using the first `i` items under remaining capacity `w`.
fn knapsack(prepared: &[PreparedItem], memo: &mut Memo, i: usize, w: u64) -> f64 {
    if i == 0 || w == 0 {
        return 0.0;
    }

    if let Some(entry) = memo.get(&(i, w)) {
        return entry.value;
    }

    let Some(item) = prepared.get(i - 1) else {
        return 0.0;
    };

    let entry = if item.int_weight > w {
        MemoEntry {
            value: knapsack(prepared, memo, i - 1, w),
            took: false,
        }
    } else {
        let with_item = item.item.value + knapsack(prepared, memo, i - 1, w - item.int_weight);
        let without_item = knapsack(prepared, memo, i - 1, w);

        if with_item > without_item {
            MemoEntry {
                value: with_item,
                took: true,
            }
        } else {
            MemoEntry {
                value: without_item,
                took: false,
            }
        }
    };

    memo.insert((i, w), entry);
    entry.value
}

/// Solves the 0/1 knapsack top-down with a decision-recording cache.
pub(crate) fn solve(raw_items: &[Item], capacity: f64) -> Result<SolverOutput, SolverError> {
    let capacity = items::to_int_weight(capacity);
    let prepared = items::prepare(raw_items);
    let n = prepared.len();

    let mut memo = Memo::default();
    let max_profit = knapsack(&prepared, &mut memo, n, capacity);

    log::debug!(
        "memoization cached {} of {} possible states",
        memo.len(),
        n as u128 * u128::from(capacity)
    );

    // Walk the recorded decisions back down the chosen path. Every state on
    // that path was computed by the recursion above.
    let mut selected_items = Vec::new();
    let mut total_weight = 0.0_f64;
    let mut w = capacity;

    for i in (1..=n).rev() {
        if w == 0 {
            break;
        }

        let entry = memo
            .get(&(i, w))
            .ok_or(SolverError::InvariantViolation {
                message: "memoized state missing on the reconstruction path",
            })?;

        if entry.took {
            let item = prepared.get(i - 1).ok_or(SolverError::InvariantViolation {
                message: "memoized decision refers to a missing item",
            })?;

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
