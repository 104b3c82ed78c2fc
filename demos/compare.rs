//! Comparison Demo
//!
//! Runs every registered algorithm on one preset scenario and prints a
//! side-by-side table. Use `-p` to pick a preset by name, `-f` to load
//! presets from a YAML file, and `-o` to also write the comparison as CSV.
//!
//! Run with: `cargo run --example compare`

use std::{fs, io};

use anyhow::Result;
use clap::Parser;

use stowage::{
    export,
    report,
    solvers,
    utils::DemoArgs,
};

/// Comparison Demo
#[expect(clippy::print_stdout, reason = "Demo code")]
pub fn main() -> Result<()> {
    env_logger::init();

    let args = DemoArgs::parse();

    let presets = args.presets()?;
    let preset = presets.get(&args.preset)?;
    let (items, capacity) = preset.instance();

    println!(
        "{} ({} items, capacity {})\n",
        preset.name,
        items.len(),
        capacity
    );

    let entries = solvers::compare(items, capacity);
    report::write_comparison(io::stdout().lock(), &entries)?;

    if let Some(out) = args.out.as_deref() {
        fs::write(out, export::comparison_to_csv(&entries))?;
        println!("\nWrote {out}");
    }

    Ok(())
}
