//! Solvers for the 0/1 and fractional knapsack problem
//!
//! Five interchangeable algorithms share one entry point, [`solve`]. The set
//! of algorithms is a closed enum, so dispatch is exhaustive and a new solver
//! cannot be added without the compiler pointing at every match site.

use std::{fmt, str::FromStr, time::Duration};

use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::{
    items::{Item, SelectedItem},
    validation,
};

pub mod branch_bound;
pub mod greedy;
pub mod memoization;
pub mod recursion;
pub mod tabulation;

/// Solver Errors
#[derive(Debug, Error)]
pub enum SolverError {
    /// The problem instance is malformed (empty items, non-positive capacity,
    /// non-finite numbers). Normally caught by [`crate::validation`] before a
    /// solver runs; solvers re-check defensively.
    #[error("invalid input: {message}")]
    InvalidInput {
        /// What was wrong with the instance
        message: String,
    },

    /// The requested algorithm identifier is not in the registered set.
    #[error("unknown algorithm: {id}")]
    UnknownAlgorithm {
        /// The identifier that failed to resolve
        id: String,
    },

    /// A table allocation would exceed the practical memory budget.
    #[error("dp table of {cells} cells exceeds the limit of {limit}")]
    ResourceExhausted {
        /// Number of cells the table would need
        cells: u128,
        /// Maximum number of cells the solver will allocate
        limit: u128,
    },

    /// Internal solver invariant was violated (this is a bug).
    #[error("solver invariant violated: {message}")]
    InvariantViolation {
        /// What invariant was violated
        message: &'static str,
    },
}

/// The registered knapsack algorithms.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Ratio-sorted greedy fill, fractional knapsack.
    Greedy,

    /// Bottom-up dynamic-programming tabulation, 0/1 knapsack.
    DpTabulation,

    /// Top-down memoized recursion, 0/1 knapsack.
    Memoization,

    /// Naive exponential recursion, 0/1 knapsack.
    Recursion,

    /// Best-first branch and bound, 0/1 knapsack.
    BranchBound,
}

impl Algorithm {
    /// All registered algorithms, in catalog order.
    pub const ALL: [Self; 5] = [
        Self::Greedy,
        Self::DpTabulation,
        Self::Memoization,
        Self::Recursion,
        Self::BranchBound,
    ];

    /// Returns the stable identifier used in exports and lookups.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Greedy => "greedy",
            Self::DpTabulation => "dp-tabulation",
            Self::Memoization => "memoization",
            Self::Recursion => "recursion",
            Self::BranchBound => "branch-bound",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Algorithm {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.id() == s)
            .ok_or_else(|| SolverError::UnknownAlgorithm { id: s.to_owned() })
    }
}

/// The decision a solver took for one trace step.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    /// The item was taken whole.
    Include,

    /// A fraction of the item was taken (greedy only).
    Partial,

    /// The item was rejected.
    Skip,
}

/// One entry of a human-readable decision trace.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    /// 1-based ordinal of the step.
    pub step_number: usize,

    /// Human-readable description of the decision.
    pub description: String,

    /// Accumulated weight after the step.
    pub current_weight: f64,

    /// Accumulated profit after the step.
    pub current_profit: f64,

    /// The decision taken.
    pub decision: Decision,
}

/// The structured result of a single solve.
///
/// `steps` is populated only by the greedy and tabulation solvers; the other
/// three always return an empty trace. That asymmetry is inherited from the
/// originating design and kept for behavioural parity.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveResult {
    /// The algorithm that produced this result.
    pub algorithm: Algorithm,

    /// Best achieved profit.
    pub max_profit: f64,

    /// Total weight of the selection.
    pub total_weight: f64,

    /// The chosen items. Input order for the tabulation, memoization and
    /// recursion solvers; decided (ratio-sorted) order for greedy and
    /// branch and bound.
    pub selected_items: Vec<SelectedItem>,

    /// Wall-clock time of the solve.
    #[serde(serialize_with = "serialize_micros", rename = "executionTime")]
    pub execution_time: Duration,

    /// Decision trace, possibly empty.
    pub steps: Vec<Step>,
}

impl SolveResult {
    /// Elapsed time in microseconds, the unit the export surface uses.
    #[must_use]
    pub fn execution_time_micros(&self) -> f64 {
        self.execution_time.as_secs_f64() * 1_000_000.0
    }
}

/// Serializes a [`Duration`] as fractional microseconds.
fn serialize_micros<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(duration.as_secs_f64() * 1_000_000.0)
}

/// What a solver algorithm itself produces; [`solve`] adds the algorithm tag
/// and the timing.
#[derive(Clone, Debug, Default)]
pub(crate) struct SolverOutput {
    pub max_profit: f64,
    pub total_weight: f64,
    pub selected_items: Vec<SelectedItem>,
    pub steps: Vec<Step>,
}

/// Solves the given instance with the selected algorithm.
///
/// # Errors
///
/// Returns a [`SolverError`] if the instance is malformed or the solver
/// exhausts its resource budget.
pub fn solve(
    algorithm: Algorithm,
    items: &[Item],
    capacity: f64,
) -> Result<SolveResult, SolverError> {
    validation::validate_items(items)?;
    validation::validate_capacity(capacity)?;

    let start = std::time::Instant::now();

    let output = match algorithm {
        Algorithm::Greedy => greedy::solve(items, capacity)?,
        Algorithm::DpTabulation => tabulation::solve(items, capacity)?,
        Algorithm::Memoization => memoization::solve(items, capacity)?,
        Algorithm::Recursion => recursion::solve(items, capacity)?,
        Algorithm::BranchBound => branch_bound::solve(items, capacity)?,
    };

    Ok(SolveResult {
        algorithm,
        max_profit: output.max_profit,
        total_weight: output.total_weight,
        selected_items: output.selected_items,
        execution_time: start.elapsed(),
        steps: output.steps,
    })
}

/// One row of an all-algorithms comparison.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonEntry {
    /// The result, zeroed out when the solver failed.
    #[serde(flatten)]
    pub result: SolveResult,

    /// The failure reason, if the solver failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Runs every registered algorithm on the same instance.
///
/// Failures are isolated per algorithm: a failing solver contributes a zeroed
/// placeholder carrying its error message, and the remaining solvers still
/// run to completion.
pub fn compare(items: &[Item], capacity: f64) -> Vec<ComparisonEntry> {
    Algorithm::ALL
        .into_iter()
        .map(|algorithm| match solve(algorithm, items, capacity) {
            Ok(result) => ComparisonEntry {
                result,
                error: None,
            },
            Err(error) => {
                log::warn!("{algorithm} failed: {error}");

                ComparisonEntry {
                    result: SolveResult {
                        algorithm,
                        max_profit: 0.0,
                        total_weight: 0.0,
                        selected_items: Vec::new(),
                        execution_time: Duration::ZERO,
                        steps: Vec::new(),
                    },
                    error: Some(error.to_string()),
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn algorithm_ids_round_trip() -> testresult::TestResult {
        for algorithm in Algorithm::ALL {
            let parsed: Algorithm = algorithm.id().parse()?;
            assert_eq!(parsed, algorithm);
        }
        Ok(())
    }

    #[test]
    fn unknown_algorithm_id_errors() {
        let result = Algorithm::from_str("simulated-annealing");

        assert!(matches!(
            result,
            Err(SolverError::UnknownAlgorithm { id }) if id == "simulated-annealing"
        ));
    }

    #[test]
    fn solve_rejects_empty_items() {
        let result = solve(Algorithm::Greedy, &[], 50.0);

        assert!(matches!(result, Err(SolverError::InvalidInput { .. })));
    }

    #[test]
    fn solve_rejects_non_positive_capacity() {
        let items = [Item::new("A", 10.0, 60.0)];

        let result = solve(Algorithm::DpTabulation, &items, 0.0);

        assert!(matches!(result, Err(SolverError::InvalidInput { .. })));
    }

    #[test]
    fn compare_isolates_failures() {
        // A capacity large enough for every solver except tabulation and
        // memoization, which refuse the table allocation.
        let items = [Item::new("A", 10.0, 60.0)];
        let capacity = 1.0e12;

        let entries = compare(&items, capacity);

        assert_eq!(entries.len(), Algorithm::ALL.len());

        let failed: Vec<_> = entries
            .iter()
            .filter(|entry| entry.error.is_some())
            .map(|entry| entry.result.algorithm)
            .collect();
        assert!(failed.contains(&Algorithm::DpTabulation), "{failed:?}");

        let greedy = entries
            .iter()
            .find(|entry| entry.result.algorithm == Algorithm::Greedy)
            .map(|entry| entry.result.max_profit);
        assert_eq!(greedy, Some(60.0));
    }
}
