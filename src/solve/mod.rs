//! Move generation for the generalised puzzle (Frame–Stewart style splitting).
//!
//! - [`split`]: how many discs go to a buffer tower at each level.
//! - [`generator`]: the recursive solver, replaying every move on a working [`PegState`].
//! - [`count`]: the length of the generator's answer without materialising it.
//!
//! [`PegState`]: crate::core::pegs::PegState

pub mod count;
pub mod generator;
pub mod split;

pub use count::predicted_move_count;
pub use generator::{generate, GenerateError, MoveGenerator};
pub use split::split_size;
