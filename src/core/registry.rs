use crate::core::{Antenna, Dimensions, Grid, Position, Result};
use crate::domain::model::EMPTY_CELL;
use crate::utils::error::MapError;
use crate::utils::validation::is_valid_frequency;

/// Owned collection of antennas with at most one antenna per position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AntennaRegistry {
    antennas: Vec<Antenna>,
    dimensions: Dimensions,
}

impl AntennaRegistry {
    pub fn new(dimensions: Dimensions) -> Self {
        Self {
            antennas: Vec::new(),
            dimensions,
        }
    }

    /// Every non-empty cell becomes an antenna, scanned in row-major order.
    pub fn from_grid(grid: &Grid) -> Result<Self> {
        let mut antennas = Vec::new();
        for (position, value) in grid.cells().filter(|(_, value)| *value != EMPTY_CELL) {
            antennas.try_reserve(1)?;
            antennas.push(Antenna::new(value, position));
        }

        tracing::debug!(
            "Built registry with {} antennas from {}x{} grid",
            antennas.len(),
            grid.rows(),
            grid.columns()
        );

        Ok(Self {
            antennas,
            dimensions: grid.dimensions(),
        })
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Adds an antenna unless the position is taken, out of bounds, or the
    /// frequency is not a valid symbol. On rejection the registry is unchanged.
    pub fn insert(&mut self, frequency: char, position: Position) -> Result<&Antenna> {
        if !is_valid_frequency(frequency) {
            return Err(MapError::InvalidFrequency { frequency });
        }

        if !self.dimensions.contains(position) {
            return Err(MapError::OutOfBounds {
                x: position.x,
                y: position.y,
                rows: self.dimensions.rows,
                columns: self.dimensions.columns,
            });
        }

        if self.contains(position) {
            tracing::warn!(
                "Antenna already present at ({}, {}), insert rejected",
                position.x,
                position.y
            );
            return Err(MapError::DuplicatePosition {
                x: position.x,
                y: position.y,
            });
        }

        self.antennas.try_reserve(1)?;
        self.antennas.push(Antenna::new(frequency, position));
        tracing::debug!(
            "Inserted antenna {} at ({}, {})",
            frequency,
            position.x,
            position.y
        );

        let last = self.antennas.len() - 1;
        Ok(&self.antennas[last])
    }

    /// Detaches the antenna at `position`, if any.
    pub fn remove(&mut self, position: Position) -> Option<Antenna> {
        self.detach(position).map(|(_, antenna)| antenna)
    }

    /// Like [`remove`](Self::remove), also returning the slot the antenna held
    /// so it can be put back with [`restore`](Self::restore).
    pub fn detach(&mut self, position: Position) -> Option<(usize, Antenna)> {
        let index = self.antennas.iter().position(|a| a.position == position)?;
        Some((index, self.antennas.remove(index)))
    }

    /// Reinserts a detached antenna at its former slot.
    pub fn restore(&mut self, index: usize, antenna: Antenna) -> Result<()> {
        if self.contains(antenna.position) {
            return Err(MapError::DuplicatePosition {
                x: antenna.position.x,
                y: antenna.position.y,
            });
        }
        self.antennas.try_reserve(1)?;
        self.antennas.insert(index.min(self.antennas.len()), antenna);
        Ok(())
    }

    pub fn get(&self, position: Position) -> Option<&Antenna> {
        self.antennas.iter().find(|a| a.position == position)
    }

    pub fn contains(&self, position: Position) -> bool {
        self.get(position).is_some()
    }

    pub fn len(&self) -> usize {
        self.antennas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.antennas.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Antenna> {
        self.antennas.iter()
    }

    pub fn ensure_not_empty(&self) -> Result<()> {
        if self.is_empty() {
            return Err(MapError::EmptyRegistry);
        }
        Ok(())
    }

    /// Distinct frequencies in sorted order.
    pub fn frequencies(&self) -> Vec<char> {
        let mut frequencies: Vec<char> = self.antennas.iter().map(|a| a.frequency).collect();
        frequencies.sort_unstable();
        frequencies.dedup();
        frequencies
    }
}

impl<'a> IntoIterator for &'a AntennaRegistry {
    type Item = &'a Antenna;
    type IntoIter = std::slice::Iter<'a, Antenna>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
