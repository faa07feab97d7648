#[cfg(feature = "cli")]
pub mod cli;
pub mod store;
pub mod toml_config;

use crate::core::engine::MutationPlan;
use crate::utils::error::{MapError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const DEFAULT_MAP_PATH: &str = "antennas.txt";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub const NAMES: &'static [&'static str] = &["text", "json"];
}

impl FromStr for OutputFormat {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(MapError::InvalidConfigValueError {
                field: "output.format".to_string(),
                value: other.to_string(),
                reason: format!("Valid values: {}", Self::NAMES.join(", ")),
            }),
        }
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub map_path: String,
    pub plan: MutationPlan,
    pub format: OutputFormat,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            map_path: DEFAULT_MAP_PATH.to_string(),
            plan: MutationPlan::default(),
            format: OutputFormat::default(),
        }
    }
}

impl Validate for RunConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("map", &self.map_path)?;
        for antenna in &self.plan.insertions {
            validation::validate_frequency("insert", &antenna.frequency.to_string())?;
        }
        Ok(())
    }
}

#[cfg(feature = "cli")]
pub use cli::CliConfig;
