//! Items
//!
//! Raw problem items and their computation-ready forms. Solvers never mutate
//! the caller's items; they annotate copies on the way out.

use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};

/// An unprocessed item with a name, a weight and a value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Display name of the item.
    pub name: String,

    /// Weight of the item. Positive and finite for valid instances.
    pub weight: f64,

    /// Value of the item. Non-negative and finite for valid instances.
    pub value: f64,
}

impl Item {
    /// Creates a new item.
    #[must_use]
    pub fn new(name: impl Into<String>, weight: f64, value: f64) -> Self {
        Self {
            name: name.into(),
            weight,
            value,
        }
    }

    /// Returns the value-to-weight ratio, or 0 for a zero weight.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        if self.weight > 0.0 {
            self.value / self.weight
        } else {
            0.0
        }
    }
}

/// An item prepared for the 0/1 solvers: weight truncated to an integer,
/// ratio derived once. Bounds are assumed to be validated already.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct PreparedItem {
    /// Index of the item in the caller's input order.
    pub input_index: usize,

    /// The original item.
    pub item: Item,

    /// Weight truncated towards zero.
    pub int_weight: u64,

    /// Value-to-weight ratio over the original weight.
    pub ratio: f64,
}

/// Discretizes a list of items, preserving input order.
pub(crate) fn prepare(items: &[Item]) -> Vec<PreparedItem> {
    items
        .iter()
        .enumerate()
        .map(|(input_index, item)| PreparedItem {
            input_index,
            item: item.clone(),
            int_weight: to_int_weight(item.weight),
            ratio: item.ratio(),
        })
        .collect()
}

/// Truncates a validated weight or capacity towards zero. Values beyond the
/// `u64` range saturate upwards, so an absurd capacity is caught by the table
/// budget check instead of wrapping.
pub(crate) fn to_int_weight(weight: f64) -> u64 {
    weight.trunc().to_u64().unwrap_or(u64::MAX)
}

/// An item chosen by a solver, possibly fractionally.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SelectedItem {
    /// The chosen item.
    #[serde(flatten)]
    pub item: Item,

    /// Always true; kept for parity with the exported document shape.
    pub selected: bool,

    /// Fraction taken, in (0, 1]. Below 1 only for the greedy solver, and
    /// for at most one item per solve.
    pub fraction: f64,
}

impl SelectedItem {
    /// Marks an item as fully taken.
    #[must_use]
    pub fn whole(item: Item) -> Self {
        Self {
            item,
            selected: true,
            fraction: 1.0,
        }
    }

    /// Marks an item as partially taken.
    #[must_use]
    pub fn partial(item: Item, fraction: f64) -> Self {
        Self {
            item,
            selected: true,
            fraction,
        }
    }
}
