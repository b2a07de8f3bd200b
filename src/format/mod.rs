//! Plain-text solution files.
//!
//! A solution is a stream of whitespace-separated non-negative integers: the header `n t s d`
//! followed by one `disc from to` triple per move. Line breaks carry no meaning, but the writer
//! puts the header and each move on a line of its own.
//!
//! Files are named after their puzzle (see [`solution_file_name`]) so that a directory of
//! solutions stays self-describing.

use std::collections::VecDeque;
use std::fs;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::core::moves::Move;
use crate::puzzle::Puzzle;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("io error at {stage} for {path}: {error}")]
    Io {
        stage: &'static str,
        path: String,
        #[source]
        error: io::Error,
    },
    #[error("{path}: token #{position} ({token:?}) is not a non-negative integer")]
    Parse {
        path: String,
        position: usize,
        token: String,
    },
    #[error("{path}: input ends inside the {what} after {got} of {want} numbers")]
    Truncated {
        path: String,
        what: &'static str,
        got: usize,
        want: usize,
    },
    #[error("{path} already exists (use --force to overwrite)")]
    AlreadyExists { path: String },
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ExportOptions {
    /// Overwrite an existing solution file.
    pub force: bool,
}

/// `ToH_n{n}_t{t}_s{s}_d{d}.txt`
pub fn solution_file_name(puzzle: &Puzzle) -> String {
    format!(
        "ToH_n{}_t{}_s{}_d{}.txt",
        puzzle.discs, puzzle.towers, puzzle.source, puzzle.destination
    )
}

/// Pulls `u32` tokens out of a buffered reader one line at a time.
pub struct Tokens<R> {
    reader: R,
    label: String,
    line: String,
    pending: VecDeque<String>,
    position: usize,
}

impl<R: BufRead> Tokens<R> {
    /// `label` names the input in error messages (usually its path).
    pub fn new(reader: R, label: impl Into<String>) -> Self {
        Self {
            reader,
            label: label.into(),
            line: String::new(),
            pending: VecDeque::new(),
            position: 0,
        }
    }

    /// Next number, or `None` at end of input.
    pub fn next_number(&mut self) -> Result<Option<u32>, FormatError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                self.position += 1;
                return self.parse(token).map(Some);
            }

            self.line.clear();
            let read = self
                .reader
                .read_line(&mut self.line)
                .map_err(|e| FormatError::Io {
                    stage: "solution_read",
                    path: self.label.clone(),
                    error: e,
                })?;
            if read == 0 {
                return Ok(None);
            }
            // Only ASCII blanks separate numbers; other whitespace is part of a bad token.
            self.pending.extend(
                self.line
                    .split(|c: char| matches!(c, ' ' | '\t' | '\n' | '\r'))
                    .filter(|s| !s.is_empty())
                    .map(str::to_owned),
            );
        }
    }

    /// Read exactly `N` numbers. `Ok(None)` if the input was already exhausted.
    fn next_group<const N: usize>(
        &mut self,
        what: &'static str,
    ) -> Result<Option<[u32; N]>, FormatError> {
        let mut out = [0u32; N];
        for (got, slot) in out.iter_mut().enumerate() {
            match self.next_number()? {
                Some(v) => *slot = v,
                None if got == 0 => return Ok(None),
                None => {
                    return Err(FormatError::Truncated {
                        path: self.label.clone(),
                        what,
                        got,
                        want: N,
                    })
                }
            }
        }
        Ok(Some(out))
    }

    fn parse(&self, token: String) -> Result<u32, FormatError> {
        let parsed = if token.bytes().all(|b| b.is_ascii_digit()) {
            token.parse::<u32>().ok()
        } else {
            None
        };
        parsed.ok_or_else(|| FormatError::Parse {
            path: self.label.clone(),
            position: self.position,
            token,
        })
    }
}

/// Read the four-number header.
pub fn read_header<R: BufRead>(tokens: &mut Tokens<R>) -> Result<Puzzle, FormatError> {
    match tokens.next_group::<4>("header")? {
        Some([n, t, s, d]) => Ok(Puzzle::new(n, t, s, d)),
        None => Err(FormatError::Truncated {
            path: tokens.label.clone(),
            what: "header",
            got: 0,
            want: 4,
        }),
    }
}

/// Iterator over the move triples that follow the header. Stops after the first error.
pub struct MoveReader<R> {
    tokens: Tokens<R>,
    done: bool,
}

impl<R: BufRead> MoveReader<R> {
    pub fn new(tokens: Tokens<R>) -> Self {
        Self {
            tokens,
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for MoveReader<R> {
    type Item = Result<Move, FormatError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.tokens.next_group::<3>("move") {
            Ok(Some([disc, from, to])) => Some(Ok(Move::new(disc, from, to))),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// Parse the header of `reader` and return it with a lazy iterator over the moves.
pub fn read_solution<R: BufRead>(
    reader: R,
    label: impl Into<String>,
) -> Result<(Puzzle, MoveReader<R>), FormatError> {
    let mut tokens = Tokens::new(reader, label);
    let puzzle = read_header(&mut tokens)?;
    Ok((puzzle, MoveReader::new(tokens)))
}

pub fn open_solution(
    path: &Path,
) -> Result<(Puzzle, MoveReader<BufReader<fs::File>>), FormatError> {
    let f = fs::File::open(path).map_err(|e| FormatError::Io {
        stage: "solution_open",
        path: path.display().to_string(),
        error: e,
    })?;
    read_solution(BufReader::new(f), path.display().to_string())
}

/// Read a whole solution file into memory.
pub fn load_solution(path: &Path) -> Result<(Puzzle, Vec<Move>), FormatError> {
    let (puzzle, moves) = open_solution(path)?;
    let moves = moves.collect::<Result<Vec<_>, _>>()?;
    Ok((puzzle, moves))
}

/// Write the header line followed by one line per move.
pub fn write_solution<W: Write>(w: &mut W, puzzle: &Puzzle, moves: &[Move]) -> io::Result<()> {
    writeln!(
        w,
        "{} {} {} {}",
        puzzle.discs, puzzle.towers, puzzle.source, puzzle.destination
    )?;
    for mv in moves {
        writeln!(w, "{} {} {}", mv.disc, mv.from, mv.to)?;
    }
    Ok(())
}

/// Write `moves` to `out_dir/`[`solution_file_name`], creating the directory if needed.
pub fn export_solution(
    out_dir: &Path,
    puzzle: &Puzzle,
    moves: &[Move],
    options: ExportOptions,
) -> Result<PathBuf, FormatError> {
    fs::create_dir_all(out_dir).map_err(|e| FormatError::Io {
        stage: "solution_export_create_dir",
        path: out_dir.display().to_string(),
        error: e,
    })?;

    let path = out_dir.join(solution_file_name(puzzle));
    if path.exists() && !options.force {
        return Err(FormatError::AlreadyExists {
            path: path.display().to_string(),
        });
    }

    let f = fs::File::create(&path).map_err(|e| FormatError::Io {
        stage: "solution_export_create",
        path: path.display().to_string(),
        error: e,
    })?;
    let mut w = BufWriter::new(f);
    write_solution(&mut w, puzzle, moves)
        .and_then(|()| w.flush())
        .map_err(|e| FormatError::Io {
            stage: "solution_export_write",
            path: path.display().to_string(),
            error: e,
        })?;

    debug!(path = %path.display(), moves = moves.len(), "solution written");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<(Puzzle, Vec<Move>), FormatError> {
        let (puzzle, moves) = read_solution(text.as_bytes(), "<test>")?;
        Ok((puzzle, moves.collect::<Result<Vec<_>, _>>()?))
    }

    #[test]
    fn layout_is_irrelevant_between_tokens() {
        let (p, moves) = parse("2 3\t1\r\n3 1 1 2\n\n 2 1\n3 1 2 3\n").unwrap();
        assert_eq!(p, Puzzle::new(2, 3, 1, 3));
        assert_eq!(
            moves,
            vec![Move::new(1, 1, 2), Move::new(2, 1, 3), Move::new(1, 2, 3)]
        );
    }

    #[test]
    fn header_only_is_an_empty_sequence() {
        let (_, moves) = parse("4 4 1 4").unwrap();
        assert!(moves.is_empty());
    }

    #[test]
    fn trailing_partial_move_is_truncated() {
        let err = parse("2 3 1 3\n1 1 2\n2 1").unwrap_err();
        assert!(matches!(
            err,
            FormatError::Truncated {
                what: "move",
                got: 2,
                want: 3,
                ..
            }
        ));
    }

    #[test]
    fn short_header_is_truncated() {
        let err = parse("2 3").unwrap_err();
        assert!(matches!(
            err,
            FormatError::Truncated {
                what: "header",
                got: 2,
                ..
            }
        ));
    }

    #[test]
    fn signs_and_garbage_are_rejected() {
        for bad in ["2 3 1 3\n-1 1 2", "2 3 1 3\n+1 1 2", "2 3 x 3", "99999999999 3 1 3"] {
            assert!(
                matches!(parse(bad), Err(FormatError::Parse { .. })),
                "{bad}"
            );
        }
    }

    #[test]
    fn only_ascii_blanks_separate_tokens() {
        for bad in [
            "2 3 1 3\n1\u{a0}1 2",
            "2 3 1 3\n1 1\u{c}2",
            "2 3 1 3\n1 1\u{b}2",
            "2\u{2003}3 1 3",
        ] {
            assert!(
                matches!(parse(bad), Err(FormatError::Parse { .. })),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn writer_puts_one_record_per_line() {
        let mut out = Vec::new();
        write_solution(
            &mut out,
            &Puzzle::new(1, 3, 1, 2),
            &[Move::new(1, 1, 2)],
        )
        .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1 3 1 2\n1 1 2\n");
    }

    #[test]
    fn file_name_encodes_the_puzzle() {
        assert_eq!(
            solution_file_name(&Puzzle::new(5, 4, 1, 3)),
            "ToH_n5_t4_s1_d3.txt"
        );
    }
}
