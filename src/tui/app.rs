//! Application state and input dispatch.

use crossterm::event::KeyCode;
use derive_getters::Getters;
use ratatui::layout::Rect;
use tictactoe_rewind::{Game, Spot};
use tracing::debug;

use super::ui;

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Leave the UI loop.
    Quit,
}

/// Application state: the game engine plus the cell cursor.
#[derive(Debug, Getters)]
pub struct App {
    game: Game,
    cursor: Spot,
}

impl App {
    /// Creates a fresh game with the cursor on the center cell.
    pub fn new() -> Self {
        Self {
            game: Game::new(),
            cursor: Spot::Center,
        }
    }

    /// Handles one key press.
    pub fn handle_key(&mut self, code: KeyCode) -> Control {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return Control::Quit,
            KeyCode::Up => self.nudge(-1, 0),
            KeyCode::Down => self.nudge(1, 0),
            KeyCode::Left => self.nudge(0, -1),
            KeyCode::Right => self.nudge(0, 1),
            KeyCode::Enter | KeyCode::Char(' ') => self.game.apply_move(self.cursor),
            KeyCode::Char(c @ '1'..='9') => {
                // 1-based row-major, matching the digits shown in open cells.
                if let Some(spot) = Spot::from_index(c as usize - '1' as usize) {
                    self.cursor = spot;
                    self.game.apply_move(spot);
                }
            }
            KeyCode::Char('r') => self.rewind_to_start(),
            KeyCode::Char('u') => self.undo_last_move(),
            _ => {}
        }
        Control::Continue
    }

    /// Routes a left click to the board cell or history control under it.
    pub fn handle_click(&mut self, column: u16, row: u16, frame: Rect) {
        let areas = ui::screen_areas(frame);
        if let Some(spot) = ui::hit_cell(&areas, column, row) {
            debug!(%spot, "cell clicked");
            self.cursor = spot;
            self.game.apply_move(spot);
        } else if let Some(slot) = ui::hit_jump(&areas, column, row) {
            let jumps = self.game.available_jumps();
            if let Some(jump) = jumps.get(slot) {
                debug!(step = jump.step(), "history control clicked");
                self.game.jump_to(jump.step());
            }
        }
    }

    /// Moves the cursor, stopping at the board edge.
    fn nudge(&mut self, rows: i32, columns: i32) {
        if let Some(next) = self.cursor.offset(rows, columns) {
            self.cursor = next;
        }
    }

    fn rewind_to_start(&mut self) {
        let jump = self
            .game
            .available_jumps()
            .into_iter()
            .find(|jump| jump.step() == 0);
        if let Some(jump) = jump {
            self.game.jump_to(jump.step());
        }
    }

    fn undo_last_move(&mut self) {
        let jump = self
            .game
            .available_jumps()
            .into_iter()
            .find(|jump| jump.step() > 0);
        if let Some(jump) = jump {
            self.game.jump_to(jump.step());
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
