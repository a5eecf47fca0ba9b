//! Win evaluation for board snapshots.

use crate::spot::Spot;
use crate::types::{Board, Mark};
use tracing::instrument;

/// The eight winning triples in evaluation order: rows top to bottom,
/// columns left to right, then the two diagonals.
const LINES: [[Spot; 3]; 8] = [
    // Rows
    [Spot::TopLeft, Spot::TopCenter, Spot::TopRight],
    [Spot::MiddleLeft, Spot::Center, Spot::MiddleRight],
    [Spot::BottomLeft, Spot::BottomCenter, Spot::BottomRight],
    // Columns
    [Spot::TopLeft, Spot::MiddleLeft, Spot::BottomLeft],
    [Spot::TopCenter, Spot::Center, Spot::BottomCenter],
    [Spot::TopRight, Spot::MiddleRight, Spot::BottomRight],
    // Diagonals
    [Spot::TopLeft, Spot::Center, Spot::BottomRight],
    [Spot::TopRight, Spot::Center, Spot::BottomLeft],
];

/// A decided board: the winning mark and the cells that decided it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Win {
    mark: Mark,
    spots: Vec<Spot>,
}

impl Win {
    /// The mark that won.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// The cells to highlight, in board order.
    ///
    /// Usually three, but a single move can complete several triples at
    /// once; every cell of every completed triple is included.
    pub fn spots(&self) -> &[Spot] {
        &self.spots
    }
}

/// Scans `board` for completed triples.
///
/// Returns `None` when no triple is complete, including on a full board.
/// When several triples are complete, the winner is the mark of the first
/// in scan order and the highlighted cells are the union of all of them.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Option<Win> {
    let completed: Vec<(Mark, &[Spot; 3])> = LINES
        .iter()
        .filter_map(|line| {
            let mark = board.cell(line[0]).mark()?;
            let claimed = board.cell(line[1]).mark() == Some(mark)
                && board.cell(line[2]).mark() == Some(mark);
            claimed.then_some((mark, line))
        })
        .collect();

    let (mark, _) = *completed.first()?;
    let mut spots: Vec<Spot> = completed
        .iter()
        .flat_map(|(_, line)| line.iter().copied())
        .collect();
    spots.sort_unstable();
    spots.dedup();
    Some(Win { mark, spots })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(marks: &[(Spot, Mark)]) -> Board {
        marks
            .iter()
            .fold(Board::empty(), |board, (spot, mark)| {
                board.with_mark(*spot, *mark)
            })
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(evaluate(&Board::empty()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_from(&[
            (Spot::TopLeft, Mark::X),
            (Spot::TopCenter, Mark::X),
            (Spot::TopRight, Mark::X),
        ]);
        let win = evaluate(&board).unwrap();
        assert_eq!(win.mark(), Mark::X);
        assert_eq!(
            win.spots(),
            [Spot::TopLeft, Spot::TopCenter, Spot::TopRight]
        );
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_from(&[
            (Spot::TopRight, Mark::O),
            (Spot::Center, Mark::O),
            (Spot::BottomLeft, Mark::O),
            (Spot::TopLeft, Mark::X),
            (Spot::MiddleLeft, Mark::X),
        ]);
        let win = evaluate(&board).unwrap();
        assert_eq!(win.mark(), Mark::O);
        assert_eq!(win.spots(), [Spot::TopRight, Spot::Center, Spot::BottomLeft]);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_from(&[(Spot::TopLeft, Mark::X), (Spot::TopCenter, Mark::X)]);
        assert_eq!(evaluate(&board), None);
    }

    #[test]
    fn test_no_winner_full_board() {
        // X O X / X X O / O X O, no three in a row anywhere.
        let board = board_from(&[
            (Spot::TopLeft, Mark::X),
            (Spot::TopCenter, Mark::O),
            (Spot::TopRight, Mark::X),
            (Spot::MiddleLeft, Mark::X),
            (Spot::Center, Mark::X),
            (Spot::MiddleRight, Mark::O),
            (Spot::BottomLeft, Mark::O),
            (Spot::BottomCenter, Mark::X),
            (Spot::BottomRight, Mark::O),
        ]);
        assert!(board.is_full());
        assert_eq!(evaluate(&board), None);
    }

    #[test]
    fn test_double_win_reports_union() {
        // X completes the top row and the left column with one mark at
        // top-left; all five cells light up.
        let board = board_from(&[
            (Spot::TopLeft, Mark::X),
            (Spot::TopCenter, Mark::X),
            (Spot::TopRight, Mark::X),
            (Spot::MiddleLeft, Mark::X),
            (Spot::BottomLeft, Mark::X),
            (Spot::Center, Mark::O),
            (Spot::MiddleRight, Mark::O),
            (Spot::BottomCenter, Mark::O),
        ]);
        let win = evaluate(&board).unwrap();
        assert_eq!(win.mark(), Mark::X);
        assert_eq!(
            win.spots(),
            [
                Spot::TopLeft,
                Spot::TopCenter,
                Spot::TopRight,
                Spot::MiddleLeft,
                Spot::BottomLeft,
            ]
        );
    }

    #[test]
    fn test_first_completed_line_names_the_winner() {
        // Unreachable in normal play, but the scan order still decides:
        // the top row is checked before the middle row, so X wins and the
        // highlight covers both completed triples.
        let board = board_from(&[
            (Spot::TopLeft, Mark::X),
            (Spot::TopCenter, Mark::X),
            (Spot::TopRight, Mark::X),
            (Spot::MiddleLeft, Mark::O),
            (Spot::Center, Mark::O),
            (Spot::MiddleRight, Mark::O),
        ]);
        let win = evaluate(&board).unwrap();
        assert_eq!(win.mark(), Mark::X);
        assert_eq!(win.spots().len(), 6);
    }
}
