// cli.rs - Command-line interface configuration
use clap::Parser;
use std::path::PathBuf;

use crate::config::{FallbackKind, ScenePolicy, ValidatorConfig};

#[derive(Parser, Debug, Clone)]
#[command(name = "scene-guard")]
#[command(about = "Validate glTF scenes for corrupt mesh data", long_about = None)]
pub struct Cli {
    /// glTF / GLB files to check
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// JSON validator config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Reject the whole scene or prune corrupt meshes
    #[arg(long, value_enum)]
    pub policy: Option<ScenePolicy>,

    /// Placeholder reported for rejected scenes
    #[arg(long, value_enum)]
    pub fallback: Option<FallbackKind>,

    /// Skip the bounding volume consistency check
    #[arg(long = "no-bounds", default_value = "false")]
    pub no_bounds: bool,

    /// Print the report as JSON
    #[arg(long, default_value = "false")]
    pub json: bool,

    /// Exit with status 1 if any scene is invalid
    #[arg(long, default_value = "false")]
    pub strict: bool,
}

impl Cli {
    /// Applies command-line overrides on top of `base`
    pub fn apply(&self, mut base: ValidatorConfig) -> ValidatorConfig {
        if let Some(policy) = self.policy {
            base.policy = policy;
        }
        if let Some(fallback) = self.fallback {
            base.fallback = fallback;
        }
        if self.no_bounds {
            base.check_bounds = false;
        }
        base
    }
}
