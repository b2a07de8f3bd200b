use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::core::moves::{Disc, PegId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PegError {
    /// `move_top` was asked to lift a disc off an empty peg.
    #[error("cannot move from tower {peg}: it holds no discs")]
    EmptySourcePeg { peg: PegId },
}

/// `t` pegs, each a stack of disc sizes stored bottom to top.
///
/// Peg ids are 1-based. No range checking happens here: callers validate ids against
/// `1..=towers()` first, and an out-of-range id panics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PegState {
    pegs: Vec<Vec<Disc>>,
}

impl PegState {
    /// All `discs` stacked on `source`, disc `discs` at the bottom.
    pub fn new(towers: u32, discs: u32, source: PegId) -> Self {
        let mut pegs = vec![Vec::new(); towers as usize];
        pegs[slot(source)] = (1..=discs).rev().collect();
        Self { pegs }
    }

    #[inline]
    pub fn towers(&self) -> u32 {
        self.pegs.len() as u32
    }

    pub fn disc_count(&self) -> usize {
        self.pegs.iter().map(Vec::len).sum()
    }

    /// Contents of `peg`, bottom to top.
    #[inline]
    pub fn peg(&self, peg: PegId) -> &[Disc] {
        &self.pegs[slot(peg)]
    }

    #[inline]
    pub fn peek(&self, peg: PegId) -> Option<Disc> {
        self.pegs[slot(peg)].last().copied()
    }

    /// True iff `disc` may be placed on `peg`: the peg is empty or its top disc is larger.
    #[inline]
    pub fn is_legal_destination(&self, peg: PegId, disc: Disc) -> bool {
        self.peek(peg).map_or(true, |top| top > disc)
    }

    /// Lift the top disc of `from` and drop it on `to`, returning the disc.
    ///
    /// Legality of the destination is the caller's business; see [`Self::is_legal_destination`].
    pub fn move_top(&mut self, from: PegId, to: PegId) -> Result<Disc, PegError> {
        let disc = self.pegs[slot(from)]
            .pop()
            .ok_or(PegError::EmptySourcePeg { peg: from })?;
        self.pegs[slot(to)].push(disc);
        Ok(disc)
    }

    /// True iff every peg other than `peg` is empty.
    pub fn all_except(&self, peg: PegId) -> bool {
        self.pegs
            .iter()
            .enumerate()
            .all(|(i, p)| i == slot(peg) || p.is_empty())
    }

    /// Non-empty pegs other than `peg`, ascending.
    pub fn occupied_except(&self, peg: PegId) -> Vec<PegId> {
        self.iter()
            .filter(|&(id, discs)| id != peg && !discs.is_empty())
            .map(|(id, _)| id)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (PegId, &[Disc])> + '_ {
        self.pegs
            .iter()
            .enumerate()
            .map(|(i, p)| (i as PegId + 1, p.as_slice()))
    }

    /// Checks both state invariants:
    /// - every disc `1..=discs` sits on exactly one peg, and nothing else does
    /// - sizes strictly decrease from bottom to top on every peg
    pub fn is_well_formed(&self, discs: u32) -> bool {
        let mut seen = vec![false; discs as usize + 1];
        for p in &self.pegs {
            if p.windows(2).any(|w| w[0] <= w[1]) {
                return false;
            }
            for &d in p {
                if d == 0 || d > discs || seen[d as usize] {
                    return false;
                }
                seen[d as usize] = true;
            }
        }
        seen.iter().skip(1).all(|&b| b)
    }
}

impl fmt::Display for PegState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (id, discs) in self.iter() {
            writeln!(f, "Tower {id}: {}", render_discs(discs))?;
        }
        Ok(())
    }
}

/// Space-separated, bottom to top.
pub fn render_discs(discs: &[Disc]) -> String {
    discs
        .iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[inline]
fn slot(peg: PegId) -> usize {
    debug_assert!(peg >= 1, "peg ids are 1-based");
    (peg - 1) as usize
}
