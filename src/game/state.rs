use crate::error::{BoardConfigError, MoveError};

use super::{Board, BoardConfig, Player, TurnOutcome};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    /// Every player sharing the top score, in turn order
    Draw(Vec<Player>),
}

/// A game in progress: the board plus whose turn it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current: usize,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Start a game; the player owning store 0 moves first.
    pub fn new(config: BoardConfig) -> Result<Self, BoardConfigError> {
        let board = Board::new(config)?;
        let outcome = Self::final_outcome(&board);
        Ok(GameState {
            board,
            current: 0,
            outcome,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        Player::from_store(self.board.stores()[self.current])
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<&GameOutcome> {
        self.outcome.as_ref()
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Move for the current player from pit `start`.
    ///
    /// When the turn ends, play passes to the next player in store order. A
    /// rejected move changes nothing and the same player is still to move.
    pub fn apply_move(&mut self, start: usize) -> Result<TurnOutcome, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let turn = self.board.move_stones(self.current_player(), start)?;

        if let Some(outcome) = Self::final_outcome(&self.board) {
            tracing::info!(?outcome, scores = ?self.board.scores(), "game over");
            self.outcome = Some(outcome);
        } else if turn == TurnOutcome::Ends {
            self.current = (self.current + 1) % self.board.stores().len();
        }

        Ok(turn)
    }

    fn final_outcome(board: &Board) -> Option<GameOutcome> {
        if !board.is_game_over() {
            return None;
        }

        let scores = board.scores();
        let best = scores.iter().map(|&(_, stones)| stones).max()?;
        let mut leaders: Vec<Player> = scores
            .into_iter()
            .filter(|&(_, stones)| stones == best)
            .map(|(player, _)| player)
            .collect();

        if leaders.len() == 1 {
            leaders.pop().map(GameOutcome::Winner)
        } else {
            Some(GameOutcome::Draw(leaders))
        }
    }
}
