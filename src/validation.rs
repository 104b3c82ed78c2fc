//! Instance validation
//!
//! Upstream callers are expected to validate instances before invoking a
//! solver; the solvers still re-check defensively so malformed input fails
//! with [`SolverError::InvalidInput`] instead of producing nonsense.

use crate::{items::Item, solvers::SolverError};

/// Checks that the item list is non-empty and every item has a positive
/// finite weight and a non-negative finite value.
///
/// # Errors
///
/// Returns [`SolverError::InvalidInput`] describing the first offending item.
pub fn validate_items(items: &[Item]) -> Result<(), SolverError> {
    if items.is_empty() {
        return Err(SolverError::InvalidInput {
            message: "items must be a non-empty list".to_owned(),
        });
    }

    for item in items {
        if !item.weight.is_finite() || item.weight <= 0.0 {
            return Err(SolverError::InvalidInput {
                message: format!("item '{}' has invalid weight (must be > 0)", item.name),
            });
        }

        if !item.value.is_finite() || item.value < 0.0 {
            return Err(SolverError::InvalidInput {
                message: format!("item '{}' has invalid value (must be >= 0)", item.name),
            });
        }
    }

    Ok(())
}

/// Checks that the capacity is a positive finite number.
///
/// # Errors
///
/// Returns [`SolverError::InvalidInput`] if it is not.
pub fn validate_capacity(capacity: f64) -> Result<(), SolverError> {
    if !capacity.is_finite() {
        return Err(SolverError::InvalidInput {
            message: "capacity must be a finite number".to_owned(),
        });
    }

    if capacity <= 0.0 {
        return Err(SolverError::InvalidInput {
            message: "capacity must be greater than 0".to_owned(),
        });
    }

    Ok(())
}
