//! Recommendation Demo
//!
//! Asks the heuristic which algorithm fits a preset scenario, then runs the
//! recommended algorithm and prints its result.
//!
//! Run with: `cargo run --example recommend`

use std::io;

use anyhow::Result;
use clap::Parser;

use stowage::{recommend, report, solvers, utils::DemoArgs};

/// Recommendation Demo
#[expect(clippy::print_stdout, reason = "Demo code")]
pub fn main() -> Result<()> {
    env_logger::init();

    let args = DemoArgs::parse();

    let presets = args.presets()?;
    let preset = presets.get(&args.preset)?;
    let (items, capacity) = preset.instance();

    let recommendation = recommend::recommend(items, capacity)?;

    println!("Recommended: {}", recommendation.metadata.name);
    println!("Confidence:  {:.2}", recommendation.confidence);
    println!("Reason:      {}", recommendation.reason);
    println!("Estimate:    ~{:.2} ms", recommendation.estimated_time_ms);
    println!(
        "Complexity:  {} time, {} space\n",
        recommendation.metadata.time_complexity, recommendation.metadata.space_complexity
    );

    let result = solvers::solve(recommendation.algorithm, items, capacity)?;
    report::write_result(io::stdout().lock(), &result)?;

    Ok(())
}
