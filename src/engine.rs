//! The rewindable game engine.
//!
//! A [`Game`] keeps every board snapshot since the start plus a step
//! pointer selecting which snapshot is displayed. Whose turn it is falls
//! out of the pointer's parity, so rewinding the pointer also rewinds the
//! turn. New moves branch from the displayed snapshot and discard anything
//! newer.

use crate::rules::{Win, evaluate};
use crate::spot::Spot;
use crate::types::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A history rollback offered to the player.
///
/// Produced by [`Game::available_jumps`]; `step` is always a valid target
/// for [`Game::jump_to`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Jump {
    step: usize,
    label: &'static str,
}

impl Jump {
    /// History index this control rewinds to.
    pub fn step(self) -> usize {
        self.step
    }

    /// Button text shown for this control.
    pub fn label(self) -> &'static str {
        self.label
    }
}

/// Game state: the full snapshot history and the displayed step.
///
/// Every query (`board`, `to_move`, `win`, `status_text`) answers for the
/// snapshot the step pointer selects, not necessarily the newest one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    snapshots: Vec<Board>,
    step: usize,
}

impl Game {
    /// Creates a fresh game: one empty snapshot, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::empty()],
            step: 0,
        }
    }

    /// The snapshot currently displayed.
    pub fn board(&self) -> &Board {
        &self.snapshots[self.step]
    }

    /// Index of the displayed snapshot, 0 for the empty start.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Number of stored snapshots. At least 1, since the empty start
    /// counts as a snapshot.
    pub fn snapshot_count(&self) -> usize {
        self.snapshots.len()
    }

    /// The mark that moves next, derived from step parity: even steps
    /// belong to X.
    pub fn to_move(&self) -> Mark {
        if self.step % 2 == 0 { Mark::X } else { Mark::O }
    }

    /// Win evaluation of the displayed snapshot.
    pub fn win(&self) -> Option<Win> {
        evaluate(self.board())
    }

    /// Places the next mark at `spot` and advances the step pointer.
    ///
    /// Ignored when the displayed snapshot already has a winner or the
    /// cell is taken; the state is unchanged in that case. A move made
    /// while displaying an older snapshot discards the newer snapshots
    /// before appending, so history never forks.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, spot: Spot) {
        let board = self.board();
        if evaluate(board).is_some() {
            debug!(step = self.step, "move ignored: position already won");
            return;
        }
        if !board.is_vacant(spot) {
            debug!(step = self.step, "move ignored: cell taken");
            return;
        }
        let next = board.with_mark(spot, self.to_move());
        self.snapshots.truncate(self.step + 1);
        self.snapshots.push(next);
        self.step = self.snapshots.len() - 1;
        debug!(step = self.step, board = %next, "move applied");
    }

    /// Moves the step pointer without touching the snapshots, so play can
    /// resume from any earlier position. Turn parity follows the pointer.
    ///
    /// Targets come from [`Game::available_jumps`]; passing a step at or
    /// beyond [`Game::snapshot_count`] is a caller bug.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, step: usize) {
        debug_assert!(
            step < self.snapshots.len(),
            "jump target {step} is outside history"
        );
        debug!(from = self.step, to = step, "rewinding");
        self.step = step;
    }

    /// One-line status for the displayed snapshot: `Winner: X` once a
    /// triple is complete, otherwise `Next player: O`. A full board with
    /// no winner still names a next player.
    pub fn status_text(&self) -> String {
        match self.win() {
            Some(win) => format!("Winner: {}", win.mark()),
            None => format!("Next player: {}", self.to_move()),
        }
    }

    /// The history controls currently offered, in display order.
    ///
    /// At most two: a rewind to the start (labeled `Play new game` when
    /// the displayed snapshot has a winner, `Reset game` otherwise), and
    /// an `Undo last move` rewind by one step. Undo is withheld at steps
    /// 0 and 1 and when only the start and one move exist, where reset
    /// covers it.
    pub fn available_jumps(&self) -> Vec<Jump> {
        let mut jumps = Vec::with_capacity(2);
        if self.step > 0 {
            let label = if self.win().is_some() {
                "Play new game"
            } else {
                "Reset game"
            };
            jumps.push(Jump { step: 0, label });
        }
        if self.step > 1 && self.snapshots.len() > 2 {
            jumps.push(Jump {
                step: self.step - 1,
                label: "Undo last move",
            });
        }
        jumps
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
