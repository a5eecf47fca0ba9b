//! Command-line interface for tictactoe_rewind.

use clap::Parser;
use std::path::PathBuf;

/// Tic-Tac-Toe Rewind - terminal tic-tac-toe with an undoable history
#[derive(Parser, Debug)]
#[command(name = "tictactoe_rewind")]
#[command(about = "Terminal tic-tac-toe with a rewindable move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Where tracing output goes; the terminal itself belongs to the UI
    #[arg(long, default_value = "tictactoe_rewind.log")]
    pub log_file: PathBuf,
}
