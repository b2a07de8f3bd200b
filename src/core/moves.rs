use std::fmt;

use serde::{Deserialize, Serialize};

/// Disc size. Discs are labelled `1..=n`, larger label means larger disc.
pub type Disc = u32;

/// Peg (tower) identifier, `1..=t`.
pub type PegId = u32;

/// A single relocation of the top disc of one peg onto another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub disc: Disc,
    pub from: PegId,
    pub to: PegId,
}

impl Move {
    #[inline]
    pub const fn new(disc: Disc, from: PegId, to: PegId) -> Self {
        Self { disc, from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "disc {} from tower {} to tower {}",
            self.disc, self.from, self.to
        )
    }
}
