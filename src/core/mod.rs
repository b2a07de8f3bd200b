//! Low-level primitives shared by the solver and the checker.
//!
//! - [`moves`]: disc / peg identifiers and the `(disc, from, to)` move record.
//! - [`pegs`]: the mutable peg configuration and its legality predicate.

pub mod moves;
pub mod pegs;
