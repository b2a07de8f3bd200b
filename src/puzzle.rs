//! Puzzle parameters: how many discs, how many towers, and where they start and end.
//!
//! The same header drives both the solver and the checker, but the two accept different
//! ranges. The solver needs a solvable, non-trivial instance; the checker only needs enough to
//! build the initial configuration so it can still report malformed moves.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::moves::PegId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    #[error("invalid puzzle: {reason}")]
    InvalidPuzzle { reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Puzzle {
    /// `n`
    pub discs: u32,
    /// `t`
    pub towers: u32,
    pub source: PegId,
    pub destination: PegId,
}

impl Puzzle {
    pub const fn new(discs: u32, towers: u32, source: PegId, destination: PegId) -> Self {
        Self {
            discs,
            towers,
            source,
            destination,
        }
    }

    #[inline]
    pub fn contains_tower(&self, peg: PegId) -> bool {
        (1..=self.towers).contains(&peg)
    }

    #[inline]
    pub fn contains_disc(&self, disc: u32) -> bool {
        (1..=self.discs).contains(&disc)
    }

    /// Preconditions of the move generator: `n >= 1`, `t >= 3`, both endpoints in range and
    /// distinct.
    pub fn validate_for_solver(&self) -> Result<(), PuzzleError> {
        if self.discs < 1 {
            return Err(invalid("at least one disc is required (n >= 1)"));
        }
        if self.towers < 3 {
            return Err(invalid("at least three towers are required (t >= 3)"));
        }
        self.validate_endpoints()?;
        if self.source == self.destination {
            return Err(invalid(format!(
                "source and destination must differ (both are {})",
                self.source
            )));
        }
        Ok(())
    }

    /// Preconditions of the sequence checker. Anything that still lets us lay out the initial
    /// towers is accepted.
    pub fn validate_for_checker(&self) -> Result<(), PuzzleError> {
        if self.towers < 1 {
            return Err(invalid("at least one tower is required (t >= 1)"));
        }
        self.validate_endpoints()
    }

    fn validate_endpoints(&self) -> Result<(), PuzzleError> {
        if !self.contains_tower(self.source) {
            return Err(invalid(format!(
                "source tower {} is outside 1..={}",
                self.source, self.towers
            )));
        }
        if !self.contains_tower(self.destination) {
            return Err(invalid(format!(
                "destination tower {} is outside 1..={}",
                self.destination, self.towers
            )));
        }
        Ok(())
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n={} t={} s={} d={}",
            self.discs, self.towers, self.source, self.destination
        )
    }
}

fn invalid(reason: impl Into<String>) -> PuzzleError {
    PuzzleError::InvalidPuzzle {
        reason: reason.into(),
    }
}
