use serde::{Deserialize, Serialize};

use crate::error::{BoardConfigError, MoveError};

use super::pit::Sowing;
use super::{Pit, Player, TurnOutcome};

/// Board dimensions, fixed once the board is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub stones_per_pit: u32,
    pub pits_per_player: usize,
    pub player_count: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            stones_per_pit: 4,
            pits_per_player: 6,
            player_count: 2,
        }
    }
}

impl BoardConfig {
    pub fn new(stones_per_pit: u32, pits_per_player: usize, player_count: usize) -> Self {
        BoardConfig {
            stones_per_pit,
            pits_per_player,
            player_count,
        }
    }

    pub fn validate(&self) -> Result<(), BoardConfigError> {
        if self.pits_per_player < 1 {
            return Err(BoardConfigError::NoPits(self.pits_per_player));
        }
        if self.player_count < 2 {
            return Err(BoardConfigError::TooFewPlayers(self.player_count));
        }

        self.pits_per_player
            .checked_add(1)
            .and_then(|stride| stride.checked_mul(self.player_count))
            .ok_or(BoardConfigError::TooManyPits)?;

        // Every pit count is bounded by the board total, which never changes.
        let total = (self.stones_per_pit as u64)
            .checked_mul(self.pits_per_player as u64)
            .and_then(|stones| stones.checked_mul(self.player_count as u64));
        match total {
            Some(total) if total <= u32::MAX as u64 => Ok(()),
            _ => Err(BoardConfigError::TooManyStones),
        }
    }

    /// Total number of pits on the circle, stores included
    pub fn pit_count(&self) -> usize {
        self.player_count * (self.pits_per_player + 1)
    }
}

/// Ids of every store, in player order.
///
/// Each player's segment starts with their store followed by their regular
/// pits, so stores sit every `pits_per_player + 1` positions starting at 0.
pub fn store_ids(config: &BoardConfig) -> Vec<usize> {
    let stride = config.pits_per_player + 1;
    (0..config.player_count).map(|p| p * stride).collect()
}

/// The circle of pits.
///
/// Pit `i` is followed by pit `(i + 1) % pit_count`; the last pit wraps back
/// to pit 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    config: BoardConfig,
    pits: Vec<Pit>,
    stores: Vec<usize>,
}

impl Board {
    /// Build a board with empty stores and `stones_per_pit` in every other pit.
    pub fn new(config: BoardConfig) -> Result<Self, BoardConfigError> {
        config.validate()?;

        let stores = store_ids(&config);
        let stride = config.pits_per_player + 1;
        let pits = (0..config.pit_count())
            .map(|id| {
                if id % stride == 0 {
                    Pit::new(id, 0, Some(Player::from_store(id)))
                } else {
                    Pit::new(id, config.stones_per_pit, None)
                }
            })
            .collect();

        tracing::debug!(?config, ?stores, "board created");
        Ok(Board {
            config,
            pits,
            stores,
        })
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// All pits, indexed by id
    pub fn pits(&self) -> &[Pit] {
        &self.pits
    }

    pub fn pit(&self, id: usize) -> Option<&Pit> {
        self.pits.get(id)
    }

    /// Store ids in player order
    pub fn stores(&self) -> &[usize] {
        &self.stores
    }

    /// Players in turn order
    pub fn players(&self) -> impl Iterator<Item = Player> + '_ {
        self.stores.iter().map(|&store| Player::from_store(store))
    }

    /// Position of `player` in turn order, if they play on this board
    pub fn player_index(&self, player: Player) -> Option<usize> {
        self.stores.iter().position(|&store| store == player.store())
    }

    pub fn is_store(&self, id: usize) -> bool {
        id < self.pits.len() && id % (self.config.pits_per_player + 1) == 0
    }

    /// Id of the pit after `id` on the circle.
    pub fn next(&self, id: usize) -> usize {
        (id + 1) % self.pits.len()
    }

    pub fn total_stones(&self) -> u32 {
        self.pits.iter().map(Pit::stones).sum()
    }

    /// Pits a move may start from: regular pits holding stones.
    pub fn legal_origins(&self) -> Vec<usize> {
        self.pits
            .iter()
            .filter(|pit| !pit.is_store() && pit.stones() > 0)
            .map(Pit::id)
            .collect()
    }

    /// The game is over once every regular pit is empty.
    pub fn is_game_over(&self) -> bool {
        self.pits
            .iter()
            .all(|pit| pit.is_store() || pit.stones() == 0)
    }

    /// Stones in each player's store, in player order.
    pub fn scores(&self) -> Vec<(Player, u32)> {
        self.stores
            .iter()
            .map(|&store| (Player::from_store(store), self.pits[store].stones()))
            .collect()
    }

    /// Move for `player`, sowing every stone picked up from pit `start`.
    ///
    /// Stores can never be a starting point, whoever owns them. All checks
    /// happen before any stone moves.
    pub fn move_stones(&mut self, player: Player, start: usize) -> Result<TurnOutcome, MoveError> {
        if start >= self.pits.len() {
            return Err(MoveError::UnknownPit {
                pit: start,
                pit_count: self.pits.len(),
            });
        }
        if self.player_index(player).is_none() {
            return Err(MoveError::UnknownPlayer { player });
        }
        if self.is_store(start) {
            return Err(MoveError::IllegalOrigin { pit: start });
        }

        let mut remaining = self.pits[start].start_move()?;
        let mut current = start;
        loop {
            current = self.next(current);
            match self.pits[current].receive(player, remaining) {
                Sowing::Carry(stones) => remaining = stones,
                Sowing::Done(outcome) => {
                    tracing::debug!(%player, start, last = current, ?outcome, "move finished");
                    return Ok(outcome);
                }
            }
        }
    }
}
