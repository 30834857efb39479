use crate::error::{ConfigError, MoveError};

use super::player::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    One,
    Two,
}

impl Cell {
    /// The player occupying this cell, if any
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::One => Some(Player::One),
            Cell::Two => Some(Player::Two),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// A cell coordinate. Row 0 is the bottom row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }

    /// Step `distance` cells along `(d_row, d_col)`, or `None` when that
    /// would leave the non-negative quadrant.
    pub(crate) fn offset(self, d_row: isize, d_col: isize, distance: usize) -> Option<Position> {
        let distance = isize::try_from(distance).ok()?;
        let row = self.row.checked_add_signed(d_row.checked_mul(distance)?)?;
        let col = self.col.checked_add_signed(d_col.checked_mul(distance)?)?;
        Some(Position { row, col })
    }
}

/// Largest supported board, in cells.
pub const MAX_CELLS: usize = 1 << 20;

/// Check that a `columns` x `rows` board is non-empty and at most
/// [`MAX_CELLS`] cells.
pub fn check_dimensions(columns: usize, rows: usize) -> Result<(), ConfigError> {
    if columns < 1 || columns > MAX_CELLS {
        return Err(ConfigError::InvalidColumns(columns));
    }
    match rows.checked_mul(columns) {
        Some(cells) if rows >= 1 && cells <= MAX_CELLS => Ok(()),
        _ => Err(ConfigError::InvalidRows(rows)),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    columns: usize,
    rows: usize,
    /// Indexed `[row][col]`, bottom row first.
    cells: Vec<Vec<Cell>>,
    turns_played: usize,
}

impl Board {
    /// Create a new empty board
    pub fn new(columns: usize, rows: usize) -> Result<Self, ConfigError> {
        check_dimensions(columns, rows)?;

        Ok(Board {
            columns,
            rows,
            cells: vec![vec![Cell::Empty; columns]; rows],
            turns_played: 0,
        })
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of pieces placed so far
    pub fn turns_played(&self) -> usize {
        self.turns_played
    }

    /// Get the cell at a specific position.
    /// Row 0 is the bottom. Panics if out of range.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Bounds-checked cell lookup
    pub fn cell_at(&self, pos: Position) -> Option<Cell> {
        self.cells.get(pos.row)?.get(pos.col).copied()
    }

    /// Lowest empty row in `col`, or `None` if the column is full or out of
    /// range.
    pub fn find_drop_row(&self, col: usize) -> Option<usize> {
        if col >= self.columns {
            return None;
        }
        (0..self.rows).find(|&row| self.cells[row][col].is_empty())
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        self.find_drop_row(col).is_none()
    }

    /// Columns that can still take a piece, left to right
    pub fn open_columns(&self) -> Vec<usize> {
        (0..self.columns)
            .filter(|&col| !self.is_column_full(col))
            .collect()
    }

    /// Drop a piece for `owner` into `col`, returning where it landed
    pub fn place(&mut self, col: usize, owner: Player) -> Result<Position, MoveError> {
        if col >= self.columns {
            return Err(MoveError::InvalidColumn {
                column: col,
                columns: self.columns,
            });
        }

        let row = self
            .find_drop_row(col)
            .ok_or(MoveError::ColumnFull { column: col })?;

        self.cells[row][col] = owner.to_cell();
        self.turns_played += 1;
        Ok(Position { row, col })
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.turns_played == self.rows * self.columns
    }
}
