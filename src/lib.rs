//! Solving and checking the generalised Tower of Hanoi: `n` discs on `t >= 3` towers.
//!
//! The solver ([`solve`]) splits the problem Frame–Stewart style and replays every move on a
//! working [`PegState`](core::pegs::PegState). The checker ([`verify`]) replays an arbitrary
//! sequence on the same model and reports the first rule it breaks. [`format`] reads and
//! writes the plain-text solution files both tools exchange.

pub mod core;
pub mod format;
pub mod logging;
pub mod puzzle;
pub mod solve;
pub mod verify;
