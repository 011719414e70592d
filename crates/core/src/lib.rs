//! Field-level game logic - pure, deterministic, and testable
//!
//! This crate holds the rules of the playfield and nothing else: no timing,
//! no scoring, no rendering, no input. It can run in any environment
//! (terminal, GUI, headless simulation).
//!
//! # Module Structure
//!
//! - [`playfield`]: the field, its current piece and its observers
//! - [`grid`]: flat cell storage with row queries and line clears
//! - [`piece`]: a live tetromino, moved and rotated against the grid
//! - [`shapes`]: per-kind placement and rotation tables
//! - [`rng`]: 7-bag piece generation over a seeded LCG
//! - [`snapshot`]: owned copies of the field for observers
//! - [`error`]: contract violations
//!
//! # Rules
//!
//! - **Placement**: a piece may only cover empty squares on the field, or
//!   squares it already covers
//! - **Rotation**: one attempt per turn using the kind's rotation table; a
//!   blocked rotation fails
//! - **Line clear**: clearing a row drops every row above it by one
//! - **Lock out**: a piece at rest with any block in the hidden rows ends
//!   the game
//!
//! # Example
//!
//! ```
//! use minogrid_core::Playfield;
//! use minogrid_core::types::{Direction, PieceKind, Rotation};
//!
//! let mut field = Playfield::default();
//! assert!(field.spawn(PieceKind::T));
//!
//! field.move_current(Direction::Right).unwrap();
//! field.rotate_current(Rotation::Right).unwrap();
//! field.drop_current().unwrap();
//!
//! assert!(!field.lock_out());
//! assert!(field.row_is_empty(0).unwrap());
//! ```

pub mod error;
pub mod grid;
pub mod observer;
pub mod piece;
pub mod playfield;
pub mod rng;
pub mod shapes;
pub mod snapshot;

pub use minogrid_types as types;

// Re-export commonly used types for convenience
pub use error::FieldError;
pub use grid::Grid;
pub use observer::{Observer, Observers};
pub use piece::Piece;
pub use playfield::Playfield;
pub use rng::{PieceSource, Scripted, SevenBag, SimpleRng};
pub use snapshot::{FieldSnapshot, PieceSnapshot};
