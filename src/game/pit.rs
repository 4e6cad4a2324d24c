use crate::error::MoveError;

use super::Player;

/// Whether the player who just moved gets to move again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TurnOutcome {
    /// Last stone landed in the mover's own store.
    Continues,
    /// Last stone landed in an empty pit; play passes on.
    Ends,
}

/// Result of handing stones to a single pit while sowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Sowing {
    /// Keep sowing this many stones from the next pit.
    Carry(u32),
    /// The move is over.
    Done(TurnOutcome),
}

/// One position on the circle: either a player's store or a regular pit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pit {
    id: usize,
    stones: u32,
    owner: Option<Player>,
}

impl Pit {
    pub(crate) fn new(id: usize, stones: u32, owner: Option<Player>) -> Self {
        Pit { id, stones, owner }
    }

    /// Position on the circle, 0-based
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn stones(&self) -> u32 {
        self.stones
    }

    /// The player whose store this is, `None` for regular pits
    pub fn owner(&self) -> Option<Player> {
        self.owner
    }

    pub fn is_store(&self) -> bool {
        self.owner.is_some()
    }

    /// A store belonging to someone other than `player`. Regular pits never are.
    pub fn is_other_players(&self, player: Player) -> bool {
        matches!(self.owner, Some(owner) if owner != player)
    }

    /// Pick up every stone to begin a move from this pit.
    pub(crate) fn start_move(&mut self) -> Result<u32, MoveError> {
        if self.stones == 0 {
            return Err(MoveError::EmptyPit { pit: self.id });
        }
        Ok(self.take_all())
    }

    /// Hand `remaining` stones (at least one) to this pit on behalf of `player`.
    ///
    /// Another player's store is skipped and the stones pass on untouched.
    /// Otherwise one stone is dropped here. If that was the last one, the
    /// landing decides the move:
    ///
    /// - own store: the turn continues;
    /// - pit was empty before the drop: the turn ends. Nothing is captured,
    ///   the stone simply stays here;
    /// - pit already held stones: its whole content is picked up and relayed
    ///   from the next pit.
    pub(crate) fn receive(&mut self, player: Player, remaining: u32) -> Sowing {
        debug_assert!(remaining > 0, "pit {} handed no stones", self.id);

        if self.is_other_players(player) {
            return Sowing::Carry(remaining);
        }

        self.stones += 1;
        let remaining = remaining - 1;
        if remaining > 0 {
            return Sowing::Carry(remaining);
        }

        if self.owner == Some(player) {
            Sowing::Done(TurnOutcome::Continues)
        } else if self.stones == 1 {
            Sowing::Done(TurnOutcome::Ends)
        } else {
            tracing::trace!(pit = self.id, stones = self.stones, "relay");
            Sowing::Carry(self.take_all())
        }
    }

    fn take_all(&mut self) -> u32 {
        std::mem::take(&mut self.stones)
    }
}
