pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::store::{FileMapStore, MemoryMapStore};
pub use core::engine::{MapEngine, MapReport, MutationOutcome, MutationPlan};
pub use core::hazard::{HazardDetector, HazardSet};
pub use core::session::MapSession;
pub use core::{Antenna, AntennaRegistry, Dimensions, Grid, GridLoader, MapStore, Position};
pub use utils::error::{MapError, Result};
