//! Utils

use clap::Parser;

/// Arguments shared by the demo programs
#[derive(Debug, Parser)]
pub struct DemoArgs {
    /// Preset scenario to load
    #[clap(short, long, default_value = "Small Delivery")]
    pub preset: String,

    /// Load presets from a YAML file instead of the built-in set
    #[clap(short = 'f', long)]
    pub file: Option<String>,

    /// Output file path for exported CSV
    #[clap(short, long)]
    pub out: Option<String>,
}

impl DemoArgs {
    /// Loads the preset set selected by the arguments.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::fixtures::FixtureError`] if loading fails.
    pub fn presets(&self) -> Result<crate::fixtures::Presets, crate::fixtures::FixtureError> {
        match self.file.as_deref() {
            Some(path) => crate::fixtures::Presets::from_path(path),
            None => crate::fixtures::Presets::builtin(),
        }
    }
}
