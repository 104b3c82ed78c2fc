//! Stowage
//!
//! Stowage is a comparative optimization engine for the 0/1 and fractional
//! knapsack problem. The same instance can be solved by five algorithms with
//! different optimality guarantees and asymptotic costs, compared side by
//! side, and matched to the algorithm a heuristic considers the best fit.

pub mod catalog;
pub mod export;
pub mod fixtures;
pub mod items;
pub mod prelude;
pub mod recommend;
pub mod report;
pub mod solvers;
pub mod utils;
pub mod validation;
