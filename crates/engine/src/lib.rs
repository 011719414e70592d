//! Session control for a single playfield
//!
//! [`Session`] wires a [`minogrid_core::Playfield`] to a piece source and
//! turns [`Command`]s into field operations. Timing, scoring and input
//! mapping belong to the caller.
//!
//! ```
//! use minogrid_engine::{Command, Session};
//!
//! let mut session = Session::seeded(7);
//! session.start();
//! session.apply(Command::RotateRight).unwrap();
//! let outcome = session.hard_drop().unwrap().unwrap();
//! assert!(!outcome.game_over);
//! assert_eq!(session.pieces_locked(), 1);
//! ```

pub mod command;
pub mod session;

pub use minogrid_types as types;

pub use command::{Command, UnknownCommand};
pub use session::{LockOutcome, Session};
