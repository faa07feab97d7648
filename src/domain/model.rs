use serde::{Deserialize, Serialize};

/// Marks a cell with no antenna.
pub const EMPTY_CELL: char = '.';

/// Grid coordinate: `x` is the row, `y` the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub rows: usize,
    pub columns: usize,
}

impl Dimensions {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self { rows, columns }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x < self.rows && position.y < self.columns
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.columns
    }

    /// Row-major index of an in-bounds position.
    pub fn index_of(&self, position: Position) -> usize {
        position.x * self.columns + position.y
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Antenna {
    pub frequency: char,
    pub position: Position,
}

impl Antenna {
    pub fn new(frequency: char, position: Position) -> Self {
        Self { frequency, position }
    }
}

/// A cell flagged as orthogonally adjacent to some antenna.
pub type HazardPosition = Position;

/// Rectangular character matrix as read from or written to a map file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub(crate) cells: Vec<Vec<char>>,
    pub(crate) dimensions: Dimensions,
}

impl Grid {
    /// A grid filled with [`EMPTY_CELL`].
    pub fn blank(dimensions: Dimensions) -> Self {
        Self {
            cells: vec![vec![EMPTY_CELL; dimensions.columns]; dimensions.rows],
            dimensions,
        }
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn rows(&self) -> usize {
        self.dimensions.rows
    }

    pub fn columns(&self) -> usize {
        self.dimensions.columns
    }

    pub fn get(&self, position: Position) -> Option<char> {
        self.cells.get(position.x)?.get(position.y).copied()
    }

    /// Returns false when the position is out of bounds.
    pub fn set(&mut self, position: Position, value: char) -> bool {
        match self.cells.get_mut(position.x).and_then(|row| row.get_mut(position.y)) {
            Some(cell) => {
                *cell = value;
                true
            }
            None => false,
        }
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, char)> + '_ {
        self.cells.iter().enumerate().flat_map(|(x, row)| {
            row.iter()
                .enumerate()
                .map(move |(y, &value)| (Position::new(x, y), value))
        })
    }

    /// File representation: every row followed by a newline.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.rows() * (self.columns() + 1));
        for row in &self.cells {
            out.extend(row.iter());
            out.push('\n');
        }
        out
    }
}
