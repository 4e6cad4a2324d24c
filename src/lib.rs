//! # Kalaha
//!
//! A Mancala-family sowing game for any number of players. Every player owns
//! a store; stores sit evenly spaced on a single circle of pits. Stones are
//! sown one per pit, opponents' stores are skipped, a last stone in a
//! non-empty pit is relayed onward, and a last stone in the mover's own store
//! earns another move.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: pits, board, sowing, turn cycling
//! - [`console`] — Line-oriented console front end
//! - [`ui`] — Terminal UI: game view and board widget
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod console;
pub mod error;
pub mod game;
pub mod ui;
