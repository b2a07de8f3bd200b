use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::core::moves::{Disc, Move, PegId};

/// Which end of a move a tower id came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Endpoint {
    Source,
    Destination,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Source => f.write_str("source"),
            Endpoint::Destination => f.write_str("destination"),
        }
    }
}

/// The first rule a sequence breaks.
///
/// The first four are detected while replaying a move; the last two only once the input is
/// exhausted.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    #[error("the disc {disc} is out of range 1..={discs}")]
    DiscOutOfRange { disc: Disc, discs: u32 },

    #[error("the {endpoint} tower {tower} is out of range 1..={towers}")]
    TowerOutOfRange {
        endpoint: Endpoint,
        tower: PegId,
        towers: u32,
    },

    #[error("disc {disc} is not at the top of the source tower {tower}")]
    DiscNotOnTop {
        disc: Disc,
        tower: PegId,
        top: Option<Disc>,
    },

    #[error("destination tower {tower} has a smaller disc ({top}) than {disc} on the top")]
    IllegalMove { disc: Disc, tower: PegId, top: Disc },

    #[error(
        "all moves were executed, so all towers except the destination tower {destination} \
         should be empty (still holding discs: {})",
        render_ids(.occupied)
    )]
    TowersNotEmptied {
        destination: PegId,
        occupied: Vec<PegId>,
    },

    #[error("towers numbered {} have not been used", render_ids(.unused))]
    TowersUnused { unused: Vec<PegId> },
}

impl Violation {
    /// Stable name of the failure class.
    pub fn kind(&self) -> &'static str {
        match self {
            Violation::DiscOutOfRange { .. } => "DiscOutOfRange",
            Violation::TowerOutOfRange { .. } => "TowerOutOfRange",
            Violation::DiscNotOnTop { .. } => "DiscNotOnTop",
            Violation::IllegalMove { .. } => "IllegalMove",
            Violation::TowersNotEmptied { .. } => "TowersNotEmptied",
            Violation::TowersUnused { .. } => "TowersUnused",
        }
    }

    #[inline]
    pub fn is_end_of_sequence(&self) -> bool {
        matches!(
            self,
            Violation::TowersNotEmptied { .. } | Violation::TowersUnused { .. }
        )
    }
}

/// A [`Violation`] together with where it happened.
///
/// For move-time failures this carries the 1-based index of the move, the move, and the contents
/// of its two towers at that point (only for ids that were in range). The offending move is never
/// applied, so these are both the before and the after picture.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{}{violation}", location(.move_index, .mv))]
pub struct Rejection {
    pub violation: Violation,
    pub move_index: Option<usize>,
    #[serde(rename = "move")]
    pub mv: Option<Move>,
    pub source_tower: Option<Vec<Disc>>,
    pub destination_tower: Option<Vec<Disc>>,
}

impl Rejection {
    pub fn at_end(violation: Violation) -> Self {
        Self {
            violation,
            move_index: None,
            mv: None,
            source_tower: None,
            destination_tower: None,
        }
    }

    /// True once the move passed the range checks, so its towers were looked at.
    pub fn shows_towers(&self) -> bool {
        matches!(
            self.violation,
            Violation::DiscNotOnTop { .. } | Violation::IllegalMove { .. }
        )
    }
}

fn location(move_index: &Option<usize>, mv: &Option<Move>) -> String {
    match (move_index, mv) {
        (Some(i), Some(mv)) => format!("move error at move {i} ({mv}): "),
        _ => "sequence error: ".to_owned(),
    }
}

fn render_ids(ids: &[PegId]) -> String {
    ids.iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
