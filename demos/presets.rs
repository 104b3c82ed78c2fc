//! Presets Demo
//!
//! Lists the available preset scenarios and solves each one with the
//! tabulation solver for a quick optimal reference value.
//!
//! Run with: `cargo run --example presets`

use anyhow::Result;
use clap::Parser;

use stowage::{
    solvers::{self, Algorithm},
    utils::DemoArgs,
};

/// Presets Demo
#[expect(clippy::print_stdout, reason = "Demo code")]
pub fn main() -> Result<()> {
    env_logger::init();

    let args = DemoArgs::parse();
    let presets = args.presets()?;

    for preset in presets.iter() {
        let (items, capacity) = preset.instance();
        let result = solvers::solve(Algorithm::DpTabulation, items, capacity)?;

        println!(
            "{:<24} [{:?}] {} items, capacity {:>7}, optimal profit {}",
            preset.name,
            preset.difficulty,
            items.len(),
            capacity,
            result.max_profit
        );
    }

    Ok(())
}
