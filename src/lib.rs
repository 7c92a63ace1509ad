//! A minimax agent for playing the board game 'Connect 4' against a human
//!
//! The agent looks a fixed number of plies ahead with alpha-beta pruning and
//! scores the positions at the search horizon with a window-counting heuristic.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_minimax::{grid::{Grid, Player}, search::Searcher};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! // the human has three in a row along the bottom row and the engine must block it
//! let mut grid = Grid::from_moves("172637", Player::Human)?;
//! let choice = Searcher::new().choose_move(&mut grid, Player::Engine)?;
//!
//! assert_eq!(choice.column, 3);
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod grid;

pub mod win;

pub mod evaluator;

pub mod search;


/// The number of rows on the game board
pub const ROWS: usize = 6;

/// The number of columns on the game board
pub const COLS: usize = 7;

/// The length of a run that wins the game
pub const WIN_LENGTH: usize = 4;

/// The number of plies the engine searches ahead when choosing a move
pub const MAX_SEARCH_DEPTH: usize = 6;

// a winning run must fit on the board along both axes
const_assert!(WIN_LENGTH <= ROWS && WIN_LENGTH <= COLS);
// move strings use a single digit per column
const_assert!(COLS <= 9);
