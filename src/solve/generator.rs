use thiserror::Error;
use tracing::{debug, trace};

use crate::core::moves::{Move, PegId};
use crate::core::pegs::{PegError, PegState};
use crate::puzzle::{Puzzle, PuzzleError};
use crate::solve::split::split_size;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Puzzle(#[from] PuzzleError),
    /// The recursion tried to lift a disc off an empty peg. Never happens for a validated
    /// puzzle; surfacing it means the decomposition itself is broken.
    #[error("solver invariant violated: {0}")]
    Peg(#[from] PegError),
}

/// One solving session: a private working configuration plus the moves emitted so far.
#[derive(Debug, Clone)]
pub struct MoveGenerator {
    puzzle: Puzzle,
    state: PegState,
    moves: Vec<Move>,
}

impl MoveGenerator {
    pub fn new(puzzle: Puzzle) -> Result<Self, PuzzleError> {
        puzzle.validate_for_solver()?;
        Ok(Self {
            puzzle,
            state: PegState::new(puzzle.towers, puzzle.discs, puzzle.source),
            moves: Vec::new(),
        })
    }

    /// Run the full recursion and hand back the move list.
    pub fn solve(mut self) -> Result<Vec<Move>, GenerateError> {
        let Puzzle {
            discs,
            towers,
            source,
            destination,
        } = self.puzzle;

        let buffers: Vec<PegId> = (1..=towers)
            .filter(|&p| p != source && p != destination)
            .collect();

        self.relocate(discs, towers, source, destination, &buffers)?;

        debug_assert!(self.state.all_except(destination));
        debug_assert!(self.state.is_well_formed(discs));
        debug!(puzzle = %self.puzzle, moves = self.moves.len(), "solved");
        Ok(self.moves)
    }

    /// Move the top `discs` discs of `from` onto `to`, using `towers` pegs in total, of which
    /// `buffers` are the free ones.
    fn relocate(
        &mut self,
        discs: u32,
        towers: u32,
        from: PegId,
        to: PegId,
        buffers: &[PegId],
    ) -> Result<(), GenerateError> {
        match discs {
            0 => return Ok(()),
            1 => return self.step(from, to),
            _ => {}
        }

        let k = split_size(discs, towers);
        debug_assert!(k >= 1 && k < discs);
        debug_assert_eq!(buffers.len() as u32, towers - 2);

        let parking = buffers[0];

        // Top k discs onto the parking tower; the destination is free for now.
        let mut around = buffers.to_vec();
        around[0] = to;
        self.relocate(k, towers, from, parking, &around)?;

        // The rest go straight across without touching the parking tower.
        self.relocate(discs - k, towers - 1, from, to, &buffers[1..])?;

        // Bring the parked discs home; the source is now free.
        let mut back = buffers.to_vec();
        back[0] = from;
        self.relocate(k, towers, parking, to, &back)
    }

    fn step(&mut self, from: PegId, to: PegId) -> Result<(), GenerateError> {
        let disc = self.state.move_top(from, to)?;
        trace!("move disc {disc} from T{from} to T{to}");
        self.moves.push(Move::new(disc, from, to));
        Ok(())
    }
}

/// Solve `puzzle`, returning moves in the order they are played.
pub fn generate(puzzle: &Puzzle) -> Result<Vec<Move>, GenerateError> {
    MoveGenerator::new(*puzzle)?.solve()
}
