//! Recommendation heuristic
//!
//! Ranks the registered algorithms for a given instance from its size and
//! capacity alone, without running anything. The thresholds and confidence
//! scores are fixed constants chosen for behavioural parity, not derived
//! from measurement.

use serde::Serialize;

use crate::{
    catalog::{self, AlgorithmMetadata},
    items::Item,
    solvers::{Algorithm, SolverError},
    validation,
};

/// A ranked recommendation for one instance.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    /// The recommended algorithm.
    pub algorithm: Algorithm,

    /// Heuristic confidence in (0, 1].
    pub confidence: f64,

    /// Why this algorithm fits the instance.
    pub reason: &'static str,

    /// Rough wall-clock estimate in milliseconds.
    #[serde(rename = "estimatedTime")]
    pub estimated_time_ms: f64,

    /// Static descriptive metadata for the algorithm.
    pub metadata: &'static AlgorithmMetadata,
}

/// A candidate before the catalog metadata is attached.
struct Candidate {
    algorithm: Algorithm,
    confidence: f64,
    reason: &'static str,
    estimated_time_ms: f64,
}

/// Recommends an algorithm for the instance.
///
/// # Errors
///
/// Returns [`SolverError::InvalidInput`] for a malformed instance.
pub fn recommend(items: &[Item], capacity: f64) -> Result<Recommendation, SolverError> {
    validation::validate_items(items)?;
    validation::validate_capacity(capacity)?;

    let n = items.len();
    let size = size_as_f64(n);
    let total_weight: f64 = items.iter().map(|item| item.weight).sum();

    let mut candidates = Vec::new();

    // Capacity above the total weight means everything fits fractionally and
    // greedy is already optimal.
    if capacity > total_weight {
        candidates.push(Candidate {
            algorithm: Algorithm::Greedy,
            confidence: 0.85,
            reason: "Capacity exceeds total weight - greedy algorithm is optimal for fractional knapsack",
            estimated_time_ms: size * 0.01,
        });
    }

    if n <= 50 && capacity <= 1000.0 {
        candidates.push(Candidate {
            algorithm: Algorithm::DpTabulation,
            confidence: 0.95,
            reason: "Medium dataset with reasonable capacity - DP tabulation guarantees optimal solution",
            estimated_time_ms: size * capacity * 0.001,
        });
    }

    if n <= 40 && capacity <= 500.0 {
        candidates.push(Candidate {
            algorithm: Algorithm::Memoization,
            confidence: 0.90,
            reason: "Dataset size suitable for memoization with good performance",
            estimated_time_ms: size * capacity * 0.0015,
        });
    }

    if (10..=30).contains(&n) {
        candidates.push(Candidate {
            algorithm: Algorithm::BranchBound,
            confidence: 0.80,
            reason: "Medium dataset where branch & bound can effectively prune search space",
            estimated_time_ms: size * 5.0,
        });
    }

    if n <= 15 {
        candidates.push(Candidate {
            algorithm: Algorithm::Recursion,
            confidence: 0.60,
            reason: "Small dataset suitable for pure recursion (educational purpose)",
            estimated_time_ms: size.exp2() * 0.01,
        });
    }

    if candidates.is_empty() {
        candidates.push(Candidate {
            algorithm: Algorithm::Greedy,
            confidence: 0.75,
            reason: "Default recommendation - fast and practical for large datasets",
            estimated_time_ms: size * 0.01,
        });
    }

    // Stable sort: equal confidences keep the threshold order above.
    candidates.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));

    let top = candidates
        .into_iter()
        .next()
        .ok_or(SolverError::InvariantViolation {
            message: "recommendation candidate list was empty",
        })?;

    Ok(Recommendation {
        algorithm: top.algorithm,
        confidence: top.confidence,
        reason: top.reason,
        estimated_time_ms: top.estimated_time_ms,
        metadata: catalog::metadata(top.algorithm),
    })
}

#[expect(
    clippy::cast_precision_loss,
    reason = "instance sizes are far below 2^53"
)]
fn size_as_f64(n: usize) -> f64 {
    n as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instance(n: usize, item_weight: f64) -> Vec<Item> {
        (0..n)
            .map(|i| Item::new(format!("Item {i}"), item_weight, 10.0))
            .collect()
    }

    #[test]
    fn tabulation_wins_inside_its_thresholds() {
        // n = 5, capacity = 1000, total weight 1500 > capacity: the
        // capacity-exceeds-weight rule stays quiet and tabulation's 0.95
        // outranks memoization (capacity too big), recursion and greedy.
        let items = instance(5, 300.0);

        let rec = recommend(&items, 1000.0).expect("recommendation");

        assert_eq!(rec.algorithm, Algorithm::DpTabulation);
        assert!((rec.confidence - 0.95).abs() < f64::EPSILON);
        assert_eq!(rec.metadata.id, "dp-tabulation");
    }

    #[test]
    fn loose_capacity_still_prefers_tabulation_over_greedy() {
        // Capacity above the total weight proposes greedy at 0.85, but
        // tabulation's 0.95 still wins while n and capacity are small.
        let items = instance(5, 10.0);

        let rec = recommend(&items, 100.0).expect("recommendation");

        assert_eq!(rec.algorithm, Algorithm::DpTabulation);
    }

    #[test]
    fn greedy_wins_when_only_the_capacity_rule_fires() {
        // n = 60 and capacity = 2000 disable every sized threshold; capacity
        // above total weight leaves greedy at 0.85 as the only candidate.
        let items = instance(60, 10.0);

        let rec = recommend(&items, 2000.0).expect("recommendation");

        assert_eq!(rec.algorithm, Algorithm::Greedy);
        assert!((rec.confidence - 0.85).abs() < f64::EPSILON);
    }

    #[test]
    fn greedy_fallback_when_no_threshold_fires() {
        // n = 60, capacity = 1500, total weight 3000: nothing fires.
        let items = instance(60, 50.0);

        let rec = recommend(&items, 1500.0).expect("recommendation");

        assert_eq!(rec.algorithm, Algorithm::Greedy);
        assert!((rec.confidence - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn capacity_threshold_flips_tabulation_to_greedy() {
        let items = instance(12, 50.0);

        // Inside tabulation's capacity threshold it wins at 0.95.
        let rec = recommend(&items, 400.0).expect("recommendation");
        assert_eq!(rec.algorithm, Algorithm::DpTabulation);

        // Past it, capacity also exceeds the total weight of 600 and the
        // greedy rule takes over at 0.85, ahead of branch-bound's 0.80.
        let rec = recommend(&items, 1200.0).expect("recommendation");
        assert_eq!(rec.algorithm, Algorithm::Greedy);
        assert!((rec.confidence - 0.85).abs() < f64::EPSILON);
    }

    #[test]
    fn recursion_only_fires_for_tiny_instances() {
        // n = 16 is just past recursion's ceiling; n = 15 is inside it.
        let wide = instance(16, 200.0);
        let tiny = instance(15, 200.0);

        // capacity 1100: tabulation and memoization out; 10 <= n <= 30 keeps
        // branch-bound in at 0.80.
        let rec = recommend(&wide, 1100.0).expect("recommendation");
        assert_eq!(rec.algorithm, Algorithm::BranchBound);

        let rec = recommend(&tiny, 1100.0).expect("recommendation");
        assert_eq!(rec.algorithm, Algorithm::BranchBound);
        // Recursion fired too, but at 0.60 it never tops the ranking here.
    }

    #[test]
    fn rejects_malformed_instances() {
        assert!(recommend(&[], 50.0).is_err());

        let items = instance(3, 10.0);
        assert!(recommend(&items, 0.0).is_err());
    }
}
