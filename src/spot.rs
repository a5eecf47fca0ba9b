//! Board coordinates as a closed enum.

use serde::{Deserialize, Serialize};

/// One of the nine cells on the board.
///
/// Variants are declared in row-major order, so the discriminant is the
/// board index (0-8). Using an enum instead of a raw index makes cell
/// arguments total: there is no out-of-range spot to reject at runtime.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum Spot {
    /// Index 0.
    TopLeft,
    /// Index 1.
    TopCenter,
    /// Index 2.
    TopRight,
    /// Index 3.
    MiddleLeft,
    /// Index 4.
    Center,
    /// Index 5.
    MiddleRight,
    /// Index 6.
    BottomLeft,
    /// Index 7.
    BottomCenter,
    /// Index 8.
    BottomRight,
}

impl Spot {
    /// All nine spots in board order.
    pub const ALL: [Spot; 9] = [
        Spot::TopLeft,
        Spot::TopCenter,
        Spot::TopRight,
        Spot::MiddleLeft,
        Spot::Center,
        Spot::MiddleRight,
        Spot::BottomLeft,
        Spot::BottomCenter,
        Spot::BottomRight,
    ];

    /// Row-major board index (0-8).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Row of this spot (0-2, top to bottom).
    pub const fn row(self) -> usize {
        self.index() / 3
    }

    /// Column of this spot (0-2, left to right).
    pub const fn column(self) -> usize {
        self.index() % 3
    }

    /// Looks up a spot by board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Looks up a spot by row and column.
    pub fn at(row: usize, column: usize) -> Option<Self> {
        if row < 3 && column < 3 {
            Self::from_index(row * 3 + column)
        } else {
            None
        }
    }

    /// The spot `rows` down and `columns` right of this one, if it stays
    /// on the board. Negative offsets move up and left.
    pub fn offset(self, rows: i32, columns: i32) -> Option<Self> {
        let row = self.row() as i32 + rows;
        let column = self.column() as i32 + columns;
        if row < 0 || column < 0 {
            return None;
        }
        Self::at(row as usize, column as usize)
    }
}

impl std::fmt::Display for Spot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Spot::TopLeft => "top-left",
            Spot::TopCenter => "top-center",
            Spot::TopRight => "top-right",
            Spot::MiddleLeft => "middle-left",
            Spot::Center => "center",
            Spot::MiddleRight => "middle-right",
            Spot::BottomLeft => "bottom-left",
            Spot::BottomCenter => "bottom-center",
            Spot::BottomRight => "bottom-right",
        };
        write!(f, "{label}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_all_matches_declaration_order() {
        for (index, spot) in Spot::ALL.iter().enumerate() {
            assert_eq!(spot.index(), index);
        }
        assert_eq!(Spot::iter().count(), 9);
    }

    #[test]
    fn test_from_index_roundtrip() {
        for spot in Spot::ALL {
            assert_eq!(Spot::from_index(spot.index()), Some(spot));
        }
        assert_eq!(Spot::from_index(9), None);
    }

    #[test]
    fn test_row_and_column() {
        assert_eq!(Spot::TopLeft.row(), 0);
        assert_eq!(Spot::TopLeft.column(), 0);
        assert_eq!(Spot::MiddleRight.row(), 1);
        assert_eq!(Spot::MiddleRight.column(), 2);
        assert_eq!(Spot::BottomCenter.row(), 2);
        assert_eq!(Spot::BottomCenter.column(), 1);
    }

    #[test]
    fn test_at_rejects_out_of_range() {
        assert_eq!(Spot::at(1, 1), Some(Spot::Center));
        assert_eq!(Spot::at(3, 0), None);
        assert_eq!(Spot::at(0, 3), None);
    }

    #[test]
    fn test_offset_stays_on_board() {
        assert_eq!(Spot::Center.offset(-1, 0), Some(Spot::TopCenter));
        assert_eq!(Spot::Center.offset(1, 1), Some(Spot::BottomRight));
        assert_eq!(Spot::TopLeft.offset(-1, 0), None);
        assert_eq!(Spot::TopLeft.offset(0, -1), None);
        assert_eq!(Spot::BottomRight.offset(0, 1), None);
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(Spot::Center.to_string(), "center");
        assert_eq!(Spot::TopRight.to_string(), "top-right");
    }
}
