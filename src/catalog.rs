//! Algorithm metadata catalog
//!
//! Static descriptive facts about each registered algorithm. The
//! recommendation heuristic attaches these to its answer, and callers can
//! list them to present the available solvers.

use std::str::FromStr;

use serde::Serialize;

use crate::solvers::{Algorithm, SolverError};

/// Descriptive metadata for one algorithm.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmMetadata {
    /// Stable identifier, matching [`Algorithm::id`].
    pub id: &'static str,

    /// Human-readable name.
    pub name: &'static str,

    /// One-sentence description.
    pub description: &'static str,

    /// Time complexity in big-O notation.
    pub time_complexity: &'static str,

    /// Space complexity in big-O notation.
    pub space_complexity: &'static str,

    /// Where the algorithm shines.
    pub best_for: &'static str,

    /// Where it falls down.
    pub worst_case: &'static str,

    /// Whether it is optimal for the 0/1 problem.
    pub optimal: bool,

    /// Rough family of the algorithm.
    pub category: &'static str,
}

const GREEDY: AlgorithmMetadata = AlgorithmMetadata {
    id: "greedy",
    name: "Greedy Algorithm",
    description: "Sorts items by value-to-weight ratio and selects greedily. Supports fractional knapsack.",
    time_complexity: "O(n log n)",
    space_complexity: "O(1)",
    best_for: "Fractional knapsack problems, real-time applications needing fast solutions",
    worst_case: "Not optimal for 0/1 knapsack",
    optimal: false,
    category: "greedy",
};

const DP_TABULATION: AlgorithmMetadata = AlgorithmMetadata {
    id: "dp-tabulation",
    name: "DP Tabulation",
    description: "Bottom-up dynamic programming using a 2D table. Optimal for 0/1 knapsack.",
    time_complexity: "O(n × W)",
    space_complexity: "O(n × W)",
    best_for: "Large datasets with predictable patterns, guaranteed optimal solution",
    worst_case: "High memory usage with large capacity values",
    optimal: true,
    category: "dynamic-programming",
};

const MEMOIZATION: AlgorithmMetadata = AlgorithmMetadata {
    id: "memoization",
    name: "Memoization (Top-Down DP)",
    description: "Recursive approach with caching to avoid recomputation.",
    time_complexity: "O(n × W)",
    space_complexity: "O(n × W)",
    best_for: "Problems with overlapping subproblems, easier to understand than tabulation",
    worst_case: "Stack overflow with very large inputs",
    optimal: true,
    category: "dynamic-programming",
};

const RECURSION: AlgorithmMetadata = AlgorithmMetadata {
    id: "recursion",
    name: "Pure Recursion",
    description: "Naive recursive solution without optimization. Exponential time complexity.",
    time_complexity: "O(2^n)",
    space_complexity: "O(n)",
    best_for: "Educational purposes, very small datasets (n < 20)",
    worst_case: "Impractical for large inputs due to exponential time",
    optimal: true,
    category: "backtracking",
};

const BRANCH_BOUND: AlgorithmMetadata = AlgorithmMetadata {
    id: "branch-bound",
    name: "Branch & Bound",
    description: "Intelligent tree search with pruning using bounds.",
    time_complexity: "O(2^n) worst case, much better average",
    space_complexity: "O(n)",
    best_for: "Medium-sized problems where pruning significantly reduces search space",
    worst_case: "Degrades to exhaustive search in worst case",
    optimal: true,
    category: "backtracking",
};

/// Returns the metadata for an algorithm. Infallible: the enum is closed.
#[must_use]
pub fn metadata(algorithm: Algorithm) -> &'static AlgorithmMetadata {
    match algorithm {
        Algorithm::Greedy => &GREEDY,
        Algorithm::DpTabulation => &DP_TABULATION,
        Algorithm::Memoization => &MEMOIZATION,
        Algorithm::Recursion => &RECURSION,
        Algorithm::BranchBound => &BRANCH_BOUND,
    }
}

/// Looks up metadata by identifier string.
///
/// # Errors
///
/// Returns [`SolverError::UnknownAlgorithm`] if the identifier is not
/// registered.
pub fn metadata_for_id(id: &str) -> Result<&'static AlgorithmMetadata, SolverError> {
    Algorithm::from_str(id).map(metadata)
}

/// Iterates over all algorithm metadata, in catalog order.
pub fn all() -> impl Iterator<Item = &'static AlgorithmMetadata> {
    Algorithm::ALL.into_iter().map(metadata)
}
