//! Branch-and-bound solver (0/1 knapsack)
//!
//! Best-first search over include/exclude decisions. Items are ratio-sorted
//! once so the fractional-relaxation bound is admissible: no 0/1 completion
//! of a node can beat the bound obtained by greedily packing the remaining
//! items and splitting the first one that overflows. Nodes whose bound
//! cannot beat the incumbent profit are never expanded; with loose bounds
//! (uniform ratios) the search degenerates to enumeration, which is the
//! documented worst case.

use std::{cmp::Ordering, collections::BinaryHeap};

use smallvec::SmallVec;

use crate::{
    items::{self, Item, PreparedItem, SelectedItem},
    solvers::{SolverError, SolverOutput},
};

/// A node of the decision tree. `level` is the index of the last decided
/// item in ratio-sorted order, with -1 for the root. Never mutated after
/// construction.
#[derive(Clone, Debug)]
struct SearchNode {
    level: isize,
    profit: f64,
    weight: u64,
    bound: f64,
    items_taken: SmallVec<[usize; 16]>,
}

/// Frontier ordering for [`SearchNode`]: descending bound, then lower level,
/// then insertion order. The tie-breaks make equal-bound pops deterministic.
#[derive(Debug)]
struct FrontierEntry {
    node: SearchNode,
    seq: u64,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.node
            .bound
            .total_cmp(&other.node.bound)
            .then_with(|| other.node.level.cmp(&self.node.level))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Upper bound on the profit reachable from `node`: pack the remaining items
/// in ratio order, then add the fractional share of the first overflow item.
fn fractional_bound(sorted: &[PreparedItem], capacity: u64, node: &SearchNode) -> f64 {
    if node.weight >= capacity {
        return 0.0;
    }

    let mut profit_bound = node.profit;
    let mut total_weight = node.weight;

    let next = node.level.checked_add(1).and_then(|l| usize::try_from(l).ok());
    let Some(next) = next else {
        return profit_bound;
    };

    for item in sorted.iter().skip(next) {
        let packed = total_weight.saturating_add(item.int_weight);
        if packed > capacity {
            // Fractional share of the overflow item.
            profit_bound += weight_as_f64(capacity - total_weight) * item.ratio;
            return profit_bound;
        }

        total_weight = packed;
        profit_bound += item.item.value;
    }

    profit_bound
}

/// Solves the 0/1 knapsack by best-first branch and bound.
pub(crate) fn solve(raw_items: &[Item], capacity: f64) -> Result<SolverOutput, SolverError> {
    let capacity = items::to_int_weight(capacity);

    let mut sorted = items::prepare(raw_items);

    // The search runs on truncated weights, so the ordering and the bound
    // must use the truncated ratio too. The raw-weight ratio under-estimates
    // the bound whenever truncation shrinks a weight, and an under-estimated
    // bound prunes subtrees that hold the discretized optimum.
    for item in &mut sorted {
        item.ratio = if item.int_weight > 0 {
            item.item.value / weight_as_f64(item.int_weight)
        } else {
            0.0
        };
    }
    sorted.sort_by(|a, b| b.ratio.total_cmp(&a.ratio));
    let n = sorted.len();

    let mut frontier = BinaryHeap::new();
    let mut seq = 0_u64;

    let mut root = SearchNode {
        level: -1,
        profit: 0.0,
        weight: 0,
        bound: 0.0,
        items_taken: SmallVec::new(),
    };
    root.bound = fractional_bound(&sorted, capacity, &root);
    frontier.push(FrontierEntry { node: root, seq });

    let mut max_profit = 0.0_f64;
    let mut best_items: SmallVec<[usize; 16]> = SmallVec::new();
    let mut nodes_explored = 0_u64;

    while let Some(FrontierEntry { node, .. }) = frontier.pop() {
        nodes_explored += 1;

        // Frontier ordering guarantees no later node has a better bound, but
        // each pop is still checked against the live incumbent.
        if node.bound <= max_profit {
            continue;
        }

        let level = node
            .level
            .checked_add(1)
            .ok_or(SolverError::InvariantViolation {
                message: "search level overflowed",
            })?;
        let Ok(index) = usize::try_from(level) else {
            return Err(SolverError::InvariantViolation {
                message: "search level went negative",
            });
        };
        let Some(item) = sorted.get(index) else {
            continue;
        };

        // Child 1: include the item at this level.
        let include = {
            let mut taken = node.items_taken.clone();
            taken.push(index);

            let mut child = SearchNode {
                level,
                profit: node.profit + item.item.value,
                weight: node.weight.saturating_add(item.int_weight),
                bound: 0.0,
                items_taken: taken,
            };
            child.bound = fractional_bound(&sorted, capacity, &child);
            child
        };

        if include.weight <= capacity && include.profit > max_profit {
            max_profit = include.profit;
            best_items.clone_from(&include.items_taken);
        }

        if include.bound > max_profit {
            seq += 1;
            frontier.push(FrontierEntry {
                node: include,
                seq,
            });
        }

        // Child 2: exclude it.
        let exclude = {
            let mut child = SearchNode {
                level,
                profit: node.profit,
                weight: node.weight,
                bound: 0.0,
                items_taken: node.items_taken,
            };
            child.bound = fractional_bound(&sorted, capacity, &child);
            child
        };

        if exclude.bound > max_profit {
            seq += 1;
            frontier.push(FrontierEntry {
                node: exclude,
                seq,
            });
        }
    }

    log::debug!("branch and bound explored {nodes_explored} nodes for {n} items");

    // Items come back in decided (ratio-sorted) order.
    let mut selected_items = Vec::with_capacity(best_items.len());
    let mut total_weight = 0.0_f64;

    for index in best_items {
        let item = sorted.get(index).ok_or(SolverError::InvariantViolation {
            message: "best solution refers to a missing item",
        })?;

        selected_items.push(SelectedItem::whole(item.item.clone()));
        total_weight += weight_as_f64(item.int_weight);
    }

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
fn weight_as_f64(value: u64) -> f64 {
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
    fn matches_the_tabulated_optimum() {
        let output = solve(&delivery_items(), 50.0).expect("branch and bound should solve");

        assert!((output.max_profit - 220.0).abs() < f64::EPSILON);
        assert!((output.total_weight - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn selection_comes_back_in_decided_order() {
        // Ratios: A=6, B=5, C=4; the optimum {B, C} is decided in that order.
        let output = solve(&delivery_items(), 50.0).expect("branch and bound should solve");

        let names: Vec<_> = output
            .selected_items
            .iter()
            .map(|s| s.item.name.as_str())
            .collect();
        assert_eq!(names, ["Package B", "Package C"]);
    }

    #[test]
    fn uniform_ratios_still_find_the_optimum() {
        // Every ratio is 2.0, so the bound prunes nothing and the search
        // degenerates to enumeration. Determinism and optimality must hold.
        let items = vec![
            Item::new("A", 5.0, 10.0),
            Item::new("B", 10.0, 20.0),
            Item::new("C", 15.0, 30.0),
            Item::new("D", 20.0, 40.0),
        ];

        let first = solve(&items, 30.0).expect("branch and bound should solve");
        let second = solve(&items, 30.0).expect("branch and bound should solve");

        assert!((first.max_profit - 60.0).abs() < f64::EPSILON);
        assert_eq!(first.selected_items, second.selected_items);
    }

    #[test]
    fn empty_when_nothing_fits() {
        let items = vec![Item::new("Anvil", 100.0, 500.0)];

        let output = solve(&items, 50.0).expect("branch and bound should solve");

        assert!(output.max_profit.abs() < f64::EPSILON);
        assert!(output.selected_items.is_empty());
        assert!(output.steps.is_empty());
    }

    #[test]
    fn fractional_weights_keep_the_bound_admissible() {
        // B truncates from 10.9 to 10, raising its effective ratio from 8.7
        // to 9.5. A bound computed on the raw ratio prunes the subtree that
        // holds B alone, the truncated optimum.
        let items = vec![
            Item::new("A", 1.0, 10.0),
            Item::new("B", 10.9, 95.0),
            Item::new("C", 9.0, 80.0),
        ];

        let output = solve(&items, 10.0).expect("branch and bound should solve");
        let dp = crate::solvers::tabulation::solve(&items, 10.0).expect("tabulation should solve");

        assert!((output.max_profit - 95.0).abs() < f64::EPSILON);
        assert!((output.max_profit - dp.max_profit).abs() < f64::EPSILON);
        assert_eq!(
            output
                .selected_items
                .iter()
                .map(|s| s.item.name.as_str())
                .collect::<Vec<_>>(),
            ["B"]
        );
    }

    #[test]
    fn extreme_weights_never_fit_and_never_overflow() {
        // 1e30 saturates to u64::MAX during truncation; adding it to any
        // accumulated weight must read as "does not fit", not wrap.
        let items = vec![
            Item::new("A", 1.0, 10.0),
            Item::new("Monolith", 1.0e30, 5.0),
        ];

        let output = solve(&items, 10.0).expect("branch and bound should solve");

        assert!((output.max_profit - 10.0).abs() < f64::EPSILON);
        assert_eq!(
            output
                .selected_items
                .iter()
                .map(|s| s.item.name.as_str())
                .collect::<Vec<_>>(),
            ["A"]
        );
    }

    #[test]
    fn larger_instance_agrees_with_tabulation() {
        let items: Vec<Item> = (0..15)
            .map(|i| {
                Item::new(
                    format!("Item {i}"),
                    f64::from(3 + (i * 7) % 13),
                    f64::from(5 + (i * 11) % 29),
                )
            })
            .collect();

        let bnb = solve(&items, 40.0).expect("branch and bound should solve");
        let dp = crate::solvers::tabulation::solve(&items, 40.0).expect("tabulation should solve");

        assert!(
            (bnb.max_profit - dp.max_profit).abs() < 1e-9,
            "bnb {} != dp {}",
            bnb.max_profit,
            dp.max_profit
        );
    }
}
