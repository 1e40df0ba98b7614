use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// What to do with a scene that contains corrupt meshes
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ScenePolicy {
    /// Any corrupt mesh invalidates the whole scene
    #[default]
    Reject,
    /// Corrupt meshes are removed and the rest is kept
    Prune,
}

/// Placeholder shown instead of a rejected scene
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FallbackKind {
    /// Wireframe UV sphere
    #[default]
    Sphere,
    /// Solid colored cube
    Cube,
}

/// Writes the same lowercase name the CLI and config files accept
fn write_value_name<T: ValueEnum>(value: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match value.to_possible_value() {
        Some(possible) => f.write_str(possible.get_name()),
        None => Ok(()),
    }
}

impl fmt::Display for ScenePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_value_name(self, f)
    }
}

impl fmt::Display for FallbackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_value_name(self, f)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Run the bounding sphere / box consistency test after the scalar scan
    pub check_bounds: bool,
    pub policy: ScenePolicy,
    pub fallback: FallbackKind,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            check_bounds: true,
            policy: ScenePolicy::Reject,
            fallback: FallbackKind::Sphere,
        }
    }
}

impl ValidatorConfig {
    /// Loads a JSON config; missing fields keep their defaults
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        Self::from_json(&text).with_context(|| format!("Invalid config file: {:?}", path))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}
