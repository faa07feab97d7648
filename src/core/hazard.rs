use crate::core::{AntennaRegistry, Dimensions, HazardPosition, Position, Result};
use serde::Serialize;

/// Up, down, left, right.
const OFFSETS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Unique hazard cells in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HazardSet {
    positions: Vec<HazardPosition>,
}

impl HazardSet {
    pub fn contains(&self, position: Position) -> bool {
        self.positions.contains(&position)
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HazardPosition> {
        self.positions.iter()
    }

    /// Positions in row-major order.
    pub fn sorted(&self) -> Vec<HazardPosition> {
        let mut positions = self.positions.clone();
        positions.sort_unstable();
        positions
    }
}

impl<'a> IntoIterator for &'a HazardSet {
    type Item = &'a HazardPosition;
    type IntoIter = std::slice::Iter<'a, HazardPosition>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn neighbor(position: Position, (dx, dy): (isize, isize), dimensions: Dimensions) -> Option<Position> {
    let candidate = Position::new(
        position.x.checked_add_signed(dx)?,
        position.y.checked_add_signed(dy)?,
    );
    dimensions.contains(candidate).then_some(candidate)
}

pub struct HazardDetector;

impl HazardDetector {
    /// Collects every in-bounds cell orthogonally adjacent to an antenna.
    ///
    /// Cells holding another antenna are not excluded.
    pub fn detect(registry: &AntennaRegistry) -> Result<HazardSet> {
        let dimensions = registry.dimensions();

        let mut visited: Vec<bool> = Vec::new();
        visited.try_reserve_exact(dimensions.cell_count())?;
        visited.resize(dimensions.cell_count(), false);

        let mut positions = Vec::new();
        for antenna in registry {
            for offset in OFFSETS {
                let Some(candidate) = neighbor(antenna.position, offset, dimensions) else {
                    continue;
                };

                let index = dimensions.index_of(candidate);
                if !visited[index] {
                    visited[index] = true;
                    positions.try_reserve(1)?;
                    positions.push(candidate);
                }
            }
        }

        tracing::debug!(
            "Detected {} hazard positions around {} antennas",
            positions.len(),
            registry.len()
        );
        Ok(HazardSet { positions })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Grid;
    use std::collections::BTreeSet;

    fn registry_from(map: &str) -> AntennaRegistry {
        AntennaRegistry::from_grid(&Grid::parse(map).unwrap()).unwrap()
    }

    fn as_set(hazards: &HazardSet) -> BTreeSet<(usize, usize)> {
        hazards.iter().map(|p| (p.x, p.y)).collect()
    }

    #[test]
    fn test_corner_antennas() {
        let hazards = HazardDetector::detect(&registry_from("..A\n...\nB..\n")).unwrap();
        assert_eq!(hazards.len(), 4);
        assert_eq!(
            as_set(&hazards),
            BTreeSet::from([(0, 1), (1, 2), (1, 0), (2, 1)])
        );
    }

    #[test]
    fn test_after_removal() {
        let mut registry = registry_from("..A\n...\nB..\n");
        registry.remove(Position::new(0, 2));
        let hazards = HazardDetector::detect(&registry).unwrap();
        assert_eq!(as_set(&hazards), BTreeSet::from([(1, 0), (2, 1)]));
    }

    #[test]
    fn test_shared_neighbors_reported_once() {
        let hazards = HazardDetector::detect(&registry_from("A.A\n")).unwrap();
        assert_eq!(hazards.sorted(), vec![Position::new(0, 1)]);
    }

    #[test]
    fn test_adjacent_antenna_cells_are_hazards() {
        let hazards = HazardDetector::detect(&registry_from("AB\n")).unwrap();
        assert!(hazards.contains(Position::new(0, 0)));
        assert!(hazards.contains(Position::new(0, 1)));
        assert_eq!(hazards.len(), 2);
    }

    #[test]
    fn test_order_independent() {
        let forward = registry_from("A...\n..B.\n....\n.C..\n");
        let mut reversed = AntennaRegistry::new(forward.dimensions());
        for antenna in forward.iter().rev() {
            reversed.insert(antenna.frequency, antenna.position).unwrap();
        }

        let a = HazardDetector::detect(&forward).unwrap();
        let b = HazardDetector::detect(&reversed).unwrap();
        assert_eq!(a.sorted(), b.sorted());
        assert_eq!(HazardDetector::detect(&forward).unwrap(), a);
    }

    #[test]
    fn test_single_cell_grid_has_no_hazards() {
        let hazards = HazardDetector::detect(&registry_from("A\n")).unwrap();
        assert!(hazards.is_empty());
    }
}
