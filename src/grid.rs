//! The 10×10 cell matrix each side's fleet lives on.

use core::fmt;

use crate::config::BOARD_SIZE;

const N: usize = BOARD_SIZE as usize;

/// State of a single board cell. Ship cells carry the length of the ship
/// they belong to, which is enough to identify it since each length occurs
/// once per fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Ship(usize),
    ShipHit(usize),
    Miss,
}

impl Cell {
    /// True once the cell has been attacked.
    pub fn is_guessed(self) -> bool {
        matches!(self, Cell::ShipHit(_) | Cell::Miss)
    }

    /// Length of the ship occupying the cell, hit or not.
    pub fn ship_length(self) -> Option<usize> {
        match self {
            Cell::Ship(len) | Cell::ShipHit(len) => Some(len),
            Cell::Empty | Cell::Miss => None,
        }
    }

    fn can_become(self, next: Cell) -> bool {
        match (self, next) {
            (Cell::Empty, Cell::Ship(_)) | (Cell::Empty, Cell::Miss) => true,
            (Cell::Ship(a), Cell::ShipHit(b)) => a == b,
            _ => false,
        }
    }
}

/// True iff both indices lie on the board. Takes signed values so neighbour
/// arithmetic can be checked before converting back to indices.
pub fn is_valid_coordinate(row: isize, col: isize) -> bool {
    (0..N as isize).contains(&row) && (0..N as isize).contains(&col)
}

#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [[Cell; N]; N],
}

impl Grid {
    /// An empty board.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; N]; N],
        }
    }

    /// Cell at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if either index is off the board.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Overwrite the cell at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if either index is off the board. Debug builds also panic on a
    /// transition other than placement (`Empty -> Ship`) or attack
    /// (`Ship -> ShipHit`, `Empty -> Miss`).
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        let current = self.cells[row][col];
        debug_assert!(
            current.can_become(cell),
            "illegal cell transition at ({}, {}): {:?} -> {:?}",
            row,
            col,
            current,
            cell
        );
        self.cells[row][col] = cell;
    }

    /// Number of cells holding a ship segment, hit or not.
    pub fn occupied_cells(&self) -> usize {
        self.iter().filter(|(_, _, c)| c.ship_length().is_some()).count()
    }

    /// Number of cells with the given state.
    pub fn count(&self, cell: Cell) -> usize {
        self.iter().filter(|(_, _, c)| *c == cell).count()
    }

    /// Row-major iterator over `(row, col, cell)`.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .flat_map(|(r, row)| row.iter().enumerate().map(move |(c, &cell)| (r, c, cell)))
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {{")?;
        for row in self.cells.iter() {
            write!(f, " ")?;
            for cell in row.iter() {
                let ch = match cell {
                    Cell::Empty => '.',
                    Cell::Ship(len) => char::from_digit(*len as u32, 10).unwrap_or('S'),
                    Cell::ShipHit(_) => 'X',
                    Cell::Miss => 'O',
                };
                write!(f, " {}", ch)?;
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}
