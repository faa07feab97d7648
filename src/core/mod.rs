pub mod engine;
pub mod grid;
pub mod hazard;
pub mod persister;
pub mod registry;
pub mod session;

pub use crate::domain::model::{Antenna, Dimensions, Grid, HazardPosition, Position};
pub use crate::domain::ports::MapStore;
pub use crate::utils::error::Result;
pub use grid::GridLoader;
pub use registry::AntennaRegistry;
