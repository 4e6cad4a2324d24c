use std::path::PathBuf;

use crate::game::Player;

/// Errors that can occur when building a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardConfigError {
    #[error("pits_per_player must be >= 1 (got {0})")]
    NoPits(usize),

    #[error("player_count must be >= 2 (got {0})")]
    TooFewPlayers(usize),

    #[error("board would hold more pits than can be addressed")]
    TooManyPits,

    #[error("board would hold more than {} stones in total", u32::MAX)]
    TooManyStones,
}

/// Errors that can occur when a move is requested.
///
/// Every variant is raised before any stone is moved, so a rejected move
/// leaves the board untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("cannot start a move from store {pit}")]
    IllegalOrigin { pit: usize },

    #[error("no stones in pit {pit}")]
    EmptyPit { pit: usize },

    #[error("pit {pit} does not exist (board has {pit_count} pits)")]
    UnknownPit { pit: usize, pit_count: usize },

    #[error("{player} owns no store on this board")]
    UnknownPlayer { player: Player },

    #[error("game is over")]
    GameOver,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("invalid board configuration: {0}")]
    Board(#[from] BoardConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_config_error_display() {
        assert_eq!(
            BoardConfigError::TooFewPlayers(1).to_string(),
            "player_count must be >= 2 (got 1)"
        );
        assert_eq!(
            BoardConfigError::NoPits(0).to_string(),
            "pits_per_player must be >= 1 (got 0)"
        );
        assert_eq!(
            BoardConfigError::TooManyStones.to_string(),
            "board would hold more than 4294967295 stones in total"
        );
    }

    #[test]
    fn test_move_error_display() {
        assert_eq!(
            MoveError::EmptyPit { pit: 4 }.to_string(),
            "no stones in pit 4"
        );
        assert_eq!(
            MoveError::IllegalOrigin { pit: 3 }.to_string(),
            "cannot start a move from store 3"
        );
        assert_eq!(
            MoveError::UnknownPlayer {
                player: Player::from_store(5)
            }
            .to_string(),
            "player #5 owns no store on this board"
        );
    }

    #[test]
    fn test_config_error_wraps_board_error() {
        let err = ConfigError::from(BoardConfigError::NoPits(0));
        assert_eq!(
            err.to_string(),
            "invalid board configuration: pits_per_player must be >= 1 (got 0)"
        );
    }
}
