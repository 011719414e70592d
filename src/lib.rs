//! Minogrid (workspace facade crate).
//!
//! Re-exports the member crates as `minogrid::{types,core,engine,tictactoe}`
//! and holds the configuration and logging setup shared by the binaries.

pub mod config;
pub mod logging;

pub use minogrid_core as core;
pub use minogrid_engine as engine;
pub use minogrid_tictactoe as tictactoe;
pub use minogrid_types as types;
