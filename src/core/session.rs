use crate::core::hazard::{HazardDetector, HazardSet};
use crate::core::persister::persist;
use crate::core::{Antenna, AntennaRegistry, GridLoader, MapStore, Position, Result};

/// A loaded map whose mutations are written back to its store.
pub struct MapSession<S: MapStore> {
    store: S,
    registry: AntennaRegistry,
}

impl<S: MapStore> MapSession<S> {
    /// Loads the grid from `store` and builds the registry from it.
    pub fn open(store: S) -> Result<Self> {
        let grid = GridLoader::load(&store)?;
        let registry = AntennaRegistry::from_grid(&grid)?;
        tracing::info!(
            "Loaded {} antennas from {} ({}x{})",
            registry.len(),
            store.location(),
            grid.rows(),
            grid.columns()
        );
        Ok(Self { store, registry })
    }

    pub fn registry(&self) -> &AntennaRegistry {
        &self.registry
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Inserts and persists. A rejected insert writes nothing; a failed write
    /// undoes the insert.
    pub fn insert_antenna(&mut self, frequency: char, position: Position) -> Result<Antenna> {
        let antenna = self.registry.insert(frequency, position)?.clone();

        if let Err(e) = persist(&self.registry, &self.store) {
            self.registry.remove(position);
            return Err(e);
        }

        tracing::info!(
            "Antenna {} inserted at ({}, {})",
            frequency,
            position.x,
            position.y
        );
        Ok(antenna)
    }

    /// Removes and persists. The map is rewritten even when nothing was
    /// removed. A failed write puts the removed antenna back.
    pub fn remove_antenna(&mut self, position: Position) -> Result<Option<Antenna>> {
        let detached = self.registry.detach(position);

        if let Err(e) = persist(&self.registry, &self.store) {
            if let Some((index, antenna)) = detached {
                self.registry.restore(index, antenna)?;
            }
            return Err(e);
        }

        let removed = detached.map(|(_, antenna)| antenna);

        match &removed {
            Some(antenna) => tracing::info!(
                "Antenna {} removed at ({}, {})",
                antenna.frequency,
                position.x,
                position.y
            ),
            None => tracing::warn!("No antenna at ({}, {}) to remove", position.x, position.y),
        }
        Ok(removed)
    }

    pub fn hazards(&self) -> Result<HazardSet> {
        HazardDetector::detect(&self.registry)
    }
}
