use crate::config::OutputFormat;
use crate::core::engine::MutationPlan;
use crate::core::{Antenna, Position};
use crate::utils::error::{MapError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub map: MapSection,
    pub output: Option<OutputSection>,
    #[serde(default)]
    pub insert: Vec<InsertEntry>,
    #[serde(default)]
    pub remove: Vec<Position>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapSection {
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSection {
    pub format: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsertEntry {
    pub frequency: String,
    pub x: usize,
    pub y: usize,
}

impl TomlConfig {
    /// Loads and parses a TOML configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| MapError::SourceUnavailable {
            path: path.as_ref().display().to_string(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| MapError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value, leaving unknown variables as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| MapError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn output_format(&self) -> Result<Option<OutputFormat>> {
        self.output
            .as_ref()
            .and_then(|o| o.format.as_deref())
            .map(|format| format.parse::<OutputFormat>())
            .transpose()
    }

    pub fn mutation_plan(&self) -> Result<MutationPlan> {
        let insertions = self
            .insert
            .iter()
            .map(|entry| {
                let frequency = validation::validate_frequency("insert.frequency", &entry.frequency)?;
                Ok(Antenna::new(frequency, Position::new(entry.x, entry.y)))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(MutationPlan {
            insertions,
            removals: self.remove.clone(),
        })
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("map.path", &self.map.path)?;

        if let Some(format) = self.output.as_ref().and_then(|o| o.format.as_deref()) {
            validation::validate_one_of("output.format", format, OutputFormat::NAMES)?;
        }

        for entry in &self.insert {
            validation::validate_frequency("insert.frequency", &entry.frequency)?;
        }

        Ok(())
    }
}
