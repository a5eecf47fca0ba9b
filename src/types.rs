//! Core board types: marks, cells, and immutable board snapshots.

use crate::spot::Spot;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// A player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Mark {
    /// The mark that moves first.
    #[display("X")]
    X,
    /// The mark that moves second.
    #[display("O")]
    O,
}

impl Mark {
    /// Returns the mark the turn passes to.
    pub fn opposite(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// Contents of a single board cell.
///
/// Serializes through `Option<Mark>`, so a board snapshot reads as
/// `["X", null, "O", ...]` in JSON.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(from = "Option<Mark>", into = "Option<Mark>")]
pub enum Cell {
    /// No mark placed yet.
    #[display(".")]
    Empty,
    /// Claimed by a player.
    #[display("{_0}")]
    Marked(Mark),
}

impl Cell {
    /// True when no mark has been placed.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(mark) => Some(mark),
        }
    }
}

impl From<Option<Mark>> for Cell {
    fn from(mark: Option<Mark>) -> Self {
        match mark {
            Some(mark) => Cell::Marked(mark),
            None => Cell::Empty,
        }
    }
}

impl From<Cell> for Option<Mark> {
    fn from(cell: Cell) -> Self {
        cell.mark()
    }
}

/// A 3x3 board snapshot, cells in row-major order.
///
/// Snapshots are value types. Placing a mark produces a new board via
/// [`Board::with_mark`], so a history can hold every position as played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Creates a board with every cell open.
    pub fn empty() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Contents of the cell at `spot`.
    pub fn cell(&self, spot: Spot) -> Cell {
        self.cells[spot.index()]
    }

    /// True when the cell at `spot` has no mark.
    pub fn is_vacant(&self, spot: Spot) -> bool {
        self.cell(spot).is_empty()
    }

    /// True when every cell is marked.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Spots still open for a move.
    pub fn vacant_spots(&self) -> Vec<Spot> {
        Spot::iter().filter(|spot| self.is_vacant(*spot)).collect()
    }

    /// Returns a copy of this board with `mark` placed at `spot`.
    pub fn with_mark(&self, spot: Spot, mark: Mark) -> Self {
        let mut next = *self;
        next.cells[spot.index()] = Cell::Marked(mark);
        next
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Compact single-line form for logs: "X.O/.X./..O".
        for (index, cell) in self.cells.iter().enumerate() {
            if index > 0 && index % 3 == 0 {
                write!(f, "/")?;
            }
            write!(f, "{cell}")?;
        }
        Ok(())
    }
}
