use crate::core::{Dimensions, Grid, MapStore, Result};
use crate::utils::error::MapError;

impl Grid {
    /// Parses map text into a rectangular grid.
    ///
    /// The first line fixes the column count. Trailing empty lines are ignored;
    /// any other line whose length differs is a [`MapError::FormatError`] and no
    /// grid is returned.
    pub fn parse(content: &str) -> Result<Grid> {
        let mut lines: Vec<&str> = content.lines().collect();
        while lines.last().is_some_and(|line| line.is_empty()) {
            lines.pop();
        }

        let columns = lines.first().map(|line| line.chars().count()).unwrap_or(0);

        let mut cells: Vec<Vec<char>> = Vec::new();
        cells.try_reserve_exact(lines.len())?;

        for (index, line) in lines.iter().enumerate() {
            let mut row: Vec<char> = Vec::new();
            row.try_reserve_exact(columns)?;
            row.extend(line.chars());

            if row.len() != columns {
                return Err(MapError::FormatError {
                    line: index + 1,
                    expected: columns,
                    found: row.len(),
                });
            }

            cells.push(row);
        }

        Ok(Grid {
            dimensions: Dimensions::new(cells.len(), columns),
            cells,
        })
    }
}

pub struct GridLoader;

impl GridLoader {
    pub fn load<S: MapStore + ?Sized>(store: &S) -> Result<Grid> {
        tracing::debug!("Loading map from {}", store.location());
        let content = store.read_map()?;

        let grid = Grid::parse(&content).inspect_err(|e| {
            tracing::error!("Map {} rejected: {}", store.location(), e);
        })?;

        tracing::debug!(
            "Loaded {}x{} grid from {}",
            grid.rows(),
            grid.columns(),
            store.location()
        );
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::store::MemoryMapStore;
    use crate::core::Position;

    #[test]
    fn test_parse_rectangular_grid() {
        let grid = Grid::parse("..A\n...\nB..\n").unwrap();
        assert_eq!(grid.dimensions(), Dimensions::new(3, 3));
        assert_eq!(grid.get(Position::new(0, 2)), Some('A'));
        assert_eq!(grid.get(Position::new(2, 0)), Some('B'));
    }

    #[test]
    fn test_trailing_empty_lines_ignored() {
        let grid = Grid::parse("..\n..\n\n\n").unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.columns(), 2);
    }

    #[test]
    fn test_crlf_line_endings() {
        let grid = Grid::parse("a.\r\n.b\r\n").unwrap();
        assert_eq!(grid.dimensions(), Dimensions::new(2, 2));
        assert_eq!(grid.get(Position::new(1, 1)), Some('b'));
    }

    #[test]
    fn test_missing_final_newline() {
        let grid = Grid::parse("...\n.A.").unwrap();
        assert_eq!(grid.rows(), 2);
    }

    #[test]
    fn test_unequal_rows_rejected() {
        let err = Grid::parse("...\n....\n...\n").unwrap_err();
        match err {
            MapError::FormatError {
                line,
                expected,
                found,
            } => {
                assert_eq!(line, 2);
                assert_eq!(expected, 3);
                assert_eq!(found, 4);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_line_inside_grid_rejected() {
        assert!(matches!(
            Grid::parse("..\n\n..\n"),
            Err(MapError::FormatError { line: 2, .. })
        ));
    }

    #[test]
    fn test_empty_content() {
        let grid = Grid::parse("").unwrap();
        assert_eq!(grid.dimensions(), Dimensions::new(0, 0));
    }

    #[test]
    fn test_load_from_store() {
        let store = MemoryMapStore::new("A.\n.B\n");
        let grid = GridLoader::load(&store).unwrap();
        assert_eq!(grid.render(), "A.\n.B\n");
    }

    #[test]
    fn test_load_unavailable_store() {
        let store = MemoryMapStore::unavailable();
        assert!(matches!(
            GridLoader::load(&store),
            Err(MapError::SourceUnavailable { .. })
        ));
    }
}
