//! Tic-tac-toe with a rewindable move history.
//!
//! The engine keeps every board position as an immutable snapshot and a
//! step pointer selecting which one is live. Rewinding moves the pointer;
//! playing from an old position discards the snapshots after it. Whose
//! turn it is derives from the pointer, never stored separately.
//!
//! The crate exposes only game state and display queries; the terminal
//! frontend in the binary renders them.
//!
//! # Example
//!
//! ```
//! use tictactoe_rewind::{Game, Mark, Spot};
//!
//! let mut game = Game::new();
//! game.apply_move(Spot::Center); // X
//! game.apply_move(Spot::TopLeft); // O
//! assert_eq!(game.to_move(), Mark::X);
//! assert_eq!(game.status_text(), "Next player: X");
//!
//! // Rewind to the start; the later snapshots stay around.
//! game.jump_to(0);
//! assert_eq!(game.to_move(), Mark::X);
//! assert_eq!(game.snapshot_count(), 3);
//!
//! // Playing from here drops the old continuation.
//! game.apply_move(Spot::BottomRight);
//! assert_eq!(game.snapshot_count(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod engine;
mod rules;
mod spot;
mod types;

// Crate-level exports - engine
pub use engine::{Game, Jump};

// Crate-level exports - win evaluation
pub use rules::{Win, evaluate};

// Crate-level exports - board types
pub use spot::Spot;
pub use types::{Board, Cell, Mark};
