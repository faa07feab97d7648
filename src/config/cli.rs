use crate::config::toml_config::TomlConfig;
use crate::config::{OutputFormat, RunConfig};
use crate::core::{Antenna, Position};
use crate::utils::error::Result;
use crate::utils::validation::{validate_frequency, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "antenna-map")]
#[command(about = "Maintain an antenna map file and report hazard positions")]
pub struct CliConfig {
    /// Map file to load and rewrite (default: antennas.txt)
    #[arg(short, long)]
    pub map: Option<String>,

    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Antenna to insert, as FREQ,X,Y (repeatable)
    #[arg(long = "insert", value_name = "FREQ,X,Y", value_parser = parse_insertion)]
    pub insertions: Vec<Antenna>,

    /// Position to remove, as X,Y (repeatable)
    #[arg(long = "remove", value_name = "X,Y", value_parser = parse_position)]
    pub removals: Vec<Position>,

    /// Report format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl CliConfig {
    /// Merges the optional TOML file with command line values. Command line
    /// values override the map path and format and append to the mutations.
    pub fn resolve(&self) -> Result<RunConfig> {
        let mut run = RunConfig::default();

        if let Some(path) = &self.config {
            let file = TomlConfig::from_file(path)?;
            file.validate()?;
            run.map_path = file.map.path.clone();
            run.plan = file.mutation_plan()?;
            if let Some(format) = file.output_format()? {
                run.format = format;
            }
        }

        if let Some(map) = &self.map {
            run.map_path = map.clone();
        }
        if let Some(format) = self.format {
            run.format = format;
        }
        run.plan.insertions.extend(self.insertions.iter().cloned());
        run.plan.removals.extend(self.removals.iter().copied());

        run.validate()?;
        Ok(run)
    }
}

fn parse_coordinate(value: &str) -> std::result::Result<usize, String> {
    value
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a non-negative integer", value.trim()))
}

pub fn parse_position(value: &str) -> std::result::Result<Position, String> {
    match value.split(',').collect::<Vec<_>>().as_slice() {
        [x, y] => Ok(Position::new(parse_coordinate(x)?, parse_coordinate(y)?)),
        _ => Err(format!("expected X,Y but got '{}'", value)),
    }
}

pub fn parse_insertion(value: &str) -> std::result::Result<Antenna, String> {
    match value.split(',').collect::<Vec<_>>().as_slice() {
        [frequency, x, y] => {
            let frequency = validate_frequency("insert", frequency).map_err(|e| e.to_string())?;
            Ok(Antenna::new(
                frequency,
                Position::new(parse_coordinate(x)?, parse_coordinate(y)?),
            ))
        }
        _ => Err(format!("expected FREQ,X,Y but got '{}'", value)),
    }
}
