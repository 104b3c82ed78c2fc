//! Stowage prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    catalog::{self, AlgorithmMetadata},
    export::{ExportError, comparison_to_csv, to_csv, to_json},
    fixtures::{Difficulty, FixtureError, Preset, Presets},
    items::{Item, SelectedItem},
    recommend::{Recommendation, recommend},
    report::{ReportError, write_comparison, write_result},
    solvers::{
        Algorithm, ComparisonEntry, Decision, SolveResult, SolverError, Step, compare, solve,
    },
    validation::{validate_capacity, validate_items},
};
