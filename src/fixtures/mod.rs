//! Fixtures
//!
//! Preset problem instances for demos and quick testing. The built-in set is
//! embedded as YAML; additional sets can be loaded from disk in the same
//! format.

use std::{fs, path::Path};

use serde::Deserialize;
use thiserror::Error;

use crate::items::Item;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Preset not found
    #[error("Preset not found: {0}")]
    PresetNotFound(String),
}

/// How hard a preset is expected to be for the slower solvers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Small instance, any solver finishes instantly.
    Easy,

    /// Mid-sized instance.
    Medium,

    /// Large instance or large capacity.
    Hard,
}

/// One preset problem instance.
#[derive(Clone, Debug, Deserialize)]
pub struct Preset {
    /// Display name of the scenario.
    pub name: String,

    /// Scenario family (logistics, finance, ...).
    pub category: String,

    /// Expected difficulty.
    pub difficulty: Difficulty,

    /// One-line description.
    pub description: String,

    /// Knapsack capacity of the scenario.
    pub capacity: f64,

    /// The scenario's items.
    pub items: Vec<Item>,
}

impl Preset {
    /// The problem instance as solver inputs.
    #[must_use]
    pub fn instance(&self) -> (&[Item], f64) {
        (&self.items, self.capacity)
    }
}

/// A named collection of presets.
#[derive(Clone, Debug, Deserialize)]
pub struct Presets {
    presets: Vec<Preset>,
}

const BUILTIN_PRESETS: &str = include_str!("presets.yaml");

impl Presets {
    /// Loads the built-in preset set.
    ///
    /// # Errors
    ///
    /// Returns a [`FixtureError`] if the embedded YAML fails to parse, which
    /// would be a packaging defect.
    pub fn builtin() -> Result<Self, FixtureError> {
        Ok(serde_norway::from_str(BUILTIN_PRESETS)?)
    }

    /// Loads a preset set from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns a [`FixtureError`] if the file cannot be read or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_norway::from_str(&contents)?)
    }

    /// Finds a preset by name.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::PresetNotFound`] if no preset has that name.
    pub fn get(&self, name: &str) -> Result<&Preset, FixtureError> {
        self.presets
            .iter()
            .find(|preset| preset.name == name)
            .ok_or_else(|| FixtureError::PresetNotFound(name.to_owned()))
    }

    /// Iterates over the presets in definition order.
    pub fn iter(&self) -> impl Iterator<Item = &Preset> {
        self.presets.iter()
    }

    /// Number of presets in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.presets.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use testresult::TestResult;

    use super::*;
    use crate::validation;

    #[test]
    fn builtin_presets_parse_and_validate() -> TestResult {
        let presets = Presets::builtin()?;

        assert_eq!(presets.len(), 6);

        for preset in presets.iter() {
            let (items, capacity) = preset.instance();
            validation::validate_items(items)?;
            validation::validate_capacity(capacity)?;
        }
        Ok(())
    }

    #[test]
    fn get_by_name() -> TestResult {
        let presets = Presets::builtin()?;

        let delivery = presets.get("Small Delivery")?;
        assert_eq!(delivery.difficulty, Difficulty::Easy);
        assert_eq!(delivery.items.len(), 3);
        assert!((delivery.capacity - 50.0).abs() < f64::EPSILON);

        assert!(matches!(
            presets.get("Moon Launch"),
            Err(FixtureError::PresetNotFound(_))
        ));
        Ok(())
    }

    #[test]
    fn loads_a_custom_set_from_disk() -> TestResult {
        let mut file = tempfile::NamedTempFile::new()?;
        writeln!(
            file,
            "presets:\n  - name: Tiny\n    category: test\n    difficulty: easy\n    \
             description: one item\n    capacity: 5\n    items:\n      \
             - {{ name: Pebble, weight: 1, value: 1 }}"
        )?;

        let presets = Presets::from_path(file.path())?;

        assert_eq!(presets.len(), 1);
        let tiny = presets.get("Tiny")?;
        assert_eq!(tiny.items.first().map(|i| i.name.as_str()), Some("Pebble"));
        Ok(())
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = Presets::from_path("/nonexistent/presets.yaml");

        assert!(matches!(result, Err(FixtureError::Io(_))));
    }
}
