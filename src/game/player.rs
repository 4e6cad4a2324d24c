use std::fmt;

/// A player, identified by the id of the store pit they own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Player(usize);

impl Player {
    /// The player owning the store at pit `store`.
    pub fn from_store(store: usize) -> Self {
        Player(store)
    }

    /// Id of this player's store pit
    pub fn store(self) -> usize {
        self.0
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player #{}", self.0)
    }
}
