//! Tic-Tac-Toe with a ladder of computer players
//!
//! - [`board`]: the 3x3 board, its symmetries and the game on it
//! - [`ai`]: eight strategies from random play to memoised alpha-beta
//! - [`arena`]: repeated AI-versus-AI matches
//!
//! ```
//! use minogrid_tictactoe::{Ai, Game, Outcome, Strategy};
//!
//! let mut game = Game::new();
//! let mut o = Ai::new(Strategy::QuickPerfect, 1);
//! let mut x = Ai::new(Strategy::Perfect, 1);
//! while game.outcome() == Outcome::InProgress {
//!     let ai = if game.turn() == minogrid_tictactoe::Mark::O { &mut o } else { &mut x };
//!     let (col, row) = ai.find_move(&game).unwrap();
//!     game.play(col, row).unwrap();
//! }
//! assert_eq!(game.outcome(), Outcome::Draw);
//! ```

pub mod ai;
pub mod arena;
pub mod board;
pub mod error;

pub use ai::{Ai, Strategy};
pub use arena::{Arena, ArenaResult};
pub use board::{Board, Game, Mark, Outcome};
pub use error::TicTacToeError;
