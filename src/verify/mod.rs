//! Replaying and judging externally supplied move sequences.
//!
//! - [`violation`]: the failure taxonomy and the context captured with it.
//! - [`validator`]: the move-by-move state machine and the end-of-sequence checks.

pub mod validator;
pub mod violation;

pub use validator::{validate, SequenceValidator, ValidationReport, Verdict};
pub use violation::{Endpoint, Rejection, Violation};
