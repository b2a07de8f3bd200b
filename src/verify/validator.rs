use rustc_hash::FxHashSet;
use serde::Serialize;
use tracing::{debug, trace};

use crate::core::moves::{Move, PegId};
use crate::core::pegs::PegState;
use crate::puzzle::{Puzzle, PuzzleError};
use crate::verify::violation::{Endpoint, Rejection, Violation};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "rejection", rename_all = "lowercase")]
pub enum Verdict {
    Correct,
    Incorrect(Rejection),
}

/// Outcome of replaying one sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub puzzle: Puzzle,
    pub verdict: Verdict,
    /// Moves examined, including a rejected one.
    pub moves_seen: usize,
    pub final_state: PegState,
}

impl ValidationReport {
    #[inline]
    pub fn is_correct(&self) -> bool {
        self.verdict == Verdict::Correct
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match &self.verdict {
            Verdict::Correct => None,
            Verdict::Incorrect(r) => Some(r),
        }
    }

    pub fn violation(&self) -> Option<&Violation> {
        self.rejection().map(|r| &r.violation)
    }
}

/// Streaming checker: feed moves with [`check`](Self::check) as they arrive, then call
/// [`finish`](Self::finish) once the input is exhausted.
///
/// Per move, in order:
/// 1. both endpoints are recorded as used
/// 2. the disc must be in `1..=n`
/// 3. the source tower must be in `1..=t`
/// 4. the destination tower must be in `1..=t`
/// 5. the disc must be on top of the source tower
/// 6. the destination must be empty or topped by a larger disc
///
/// The first failure is final: the state is left as it was before the offending move and later
/// moves are ignored.
#[derive(Debug, Clone)]
pub struct SequenceValidator {
    puzzle: Puzzle,
    state: PegState,
    used: FxHashSet<PegId>,
    moves_seen: usize,
    rejection: Option<Rejection>,
}

impl SequenceValidator {
    pub fn new(puzzle: Puzzle) -> Result<Self, PuzzleError> {
        puzzle.validate_for_checker()?;
        Ok(Self {
            puzzle,
            state: PegState::new(puzzle.towers, puzzle.discs, puzzle.source),
            used: FxHashSet::default(),
            moves_seen: 0,
            rejection: None,
        })
    }

    #[inline]
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    #[inline]
    pub fn state(&self) -> &PegState {
        &self.state
    }

    #[inline]
    pub fn moves_seen(&self) -> usize {
        self.moves_seen
    }

    #[inline]
    pub fn is_rejected(&self) -> bool {
        self.rejection.is_some()
    }

    /// Replay one move. After the first rejection every call returns that same rejection.
    pub fn check(&mut self, mv: Move) -> Result<(), Rejection> {
        if let Some(r) = &self.rejection {
            return Err(r.clone());
        }

        self.moves_seen += 1;
        self.used.insert(mv.from);
        self.used.insert(mv.to);

        if let Err(violation) = self.judge(mv) {
            let rejection = self.reject(mv, violation);
            debug!(
                index = self.moves_seen,
                kind = rejection.violation.kind(),
                "move rejected"
            );
            self.rejection = Some(rejection.clone());
            return Err(rejection);
        }

        if self.state.move_top(mv.from, mv.to).is_err() {
            // `judge` saw `mv.disc` on top of `mv.from`; keep the taxonomy closed anyway.
            let violation = Violation::DiscNotOnTop {
                disc: mv.disc,
                tower: mv.from,
                top: None,
            };
            let rejection = self.reject(mv, violation);
            self.rejection = Some(rejection.clone());
            return Err(rejection);
        }
        debug_assert!(self.state.is_well_formed(self.puzzle.discs));
        trace!(index = self.moves_seen, "move {mv}");
        Ok(())
    }

    /// Run the end-of-sequence checks (unless a move was already rejected) and produce the
    /// report.
    pub fn finish(mut self) -> ValidationReport {
        let verdict = match self.rejection.take() {
            Some(r) => Verdict::Incorrect(r),
            None => match self.final_checks() {
                Ok(()) => Verdict::Correct,
                Err(v) => {
                    debug!(kind = v.kind(), "sequence rejected");
                    Verdict::Incorrect(Rejection::at_end(v))
                }
            },
        };

        let correct = verdict == Verdict::Correct;
        debug!(
            puzzle = %self.puzzle,
            moves = self.moves_seen,
            correct,
            "validation finished"
        );

        ValidationReport {
            puzzle: self.puzzle,
            verdict,
            moves_seen: self.moves_seen,
            final_state: self.state,
        }
    }

    fn judge(&self, mv: Move) -> Result<(), Violation> {
        let p = &self.puzzle;

        if !p.contains_disc(mv.disc) {
            return Err(Violation::DiscOutOfRange {
                disc: mv.disc,
                discs: p.discs,
            });
        }
        if !p.contains_tower(mv.from) {
            return Err(Violation::TowerOutOfRange {
                endpoint: Endpoint::Source,
                tower: mv.from,
                towers: p.towers,
            });
        }
        if !p.contains_tower(mv.to) {
            return Err(Violation::TowerOutOfRange {
                endpoint: Endpoint::Destination,
                tower: mv.to,
                towers: p.towers,
            });
        }

        let top = self.state.peek(mv.from);
        if top != Some(mv.disc) {
            return Err(Violation::DiscNotOnTop {
                disc: mv.disc,
                tower: mv.from,
                top,
            });
        }

        if !self.state.is_legal_destination(mv.to, mv.disc) {
            // Not legal means the destination is non-empty.
            let top = self.state.peek(mv.to).unwrap_or_default();
            return Err(Violation::IllegalMove {
                disc: mv.disc,
                tower: mv.to,
                top,
            });
        }

        Ok(())
    }

    fn final_checks(&self) -> Result<(), Violation> {
        let p = &self.puzzle;

        if !self.state.all_except(p.destination) {
            return Err(Violation::TowersNotEmptied {
                destination: p.destination,
                occupied: self.state.occupied_except(p.destination),
            });
        }

        // With fewer discs than towers a good solution may leave towers untouched.
        if p.discs >= p.towers {
            let unused: Vec<PegId> = (1..=p.towers)
                .filter(|t| !self.used.contains(t))
                .collect();
            if !unused.is_empty() {
                return Err(Violation::TowersUnused { unused });
            }
        }

        Ok(())
    }

    fn reject(&self, mv: Move, violation: Violation) -> Rejection {
        let snapshot = |peg: PegId| {
            self.puzzle
                .contains_tower(peg)
                .then(|| self.state.peg(peg).to_vec())
        };
        Rejection {
            violation,
            move_index: Some(self.moves_seen),
            mv: Some(mv),
            source_tower: snapshot(mv.from),
            destination_tower: snapshot(mv.to),
        }
    }
}

/// Replay `moves` from scratch and judge the whole sequence.
pub fn validate<I>(puzzle: &Puzzle, moves: I) -> Result<ValidationReport, PuzzleError>
where
    I: IntoIterator<Item = Move>,
{
    let mut validator = SequenceValidator::new(*puzzle)?;
    for mv in moves {
        if validator.check(mv).is_err() {
            break;
        }
    }
    Ok(validator.finish())
}
