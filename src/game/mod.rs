//! Core Kalaha game logic: pits on a circle, the sowing rules, and a game
//! state that cycles turns between players.

mod board;
mod pit;
mod player;
mod state;

pub use board::{store_ids, Board, BoardConfig};
pub use pit::{Pit, TurnOutcome};
pub use player::Player;
pub use state::{GameOutcome, GameState};
