//! Terminal UI: the game view for playing Kalaha and the board widget it
//! draws pits with.

mod app;
pub mod board_widget;
mod game_view;

pub use app::App;
