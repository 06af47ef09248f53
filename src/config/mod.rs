pub mod toml_config;

use crate::utils::error::Result;
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "progress-tracker"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Tracks student progress across the Java, DSA, Databases and Spring courses")
)]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[cfg_attr(feature = "cli", arg(short, long))]
    pub config: Option<String>,

    #[cfg_attr(feature = "cli", arg(short, long, help = "Enable verbose output"))]
    pub verbose: bool,
}

impl CliConfig {
    /// Loads the file named by `--config`, or the built-in defaults.
    pub fn load(&self) -> Result<TomlConfig> {
        match &self.config {
            Some(path) => TomlConfig::from_file(path),
            None => Ok(TomlConfig::default()),
        }
    }
}
