pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

/// Failure of a board query or mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// An edge, box, or player index outside the valid range.
    #[display("coordinate out of range")]
    OutOfRange,
    /// The edge or box already has an owner.
    #[display("already owned")]
    AlreadyOwned,
}

/// Failure of a pattern load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PatternError {
    /// The sample sequence does not cover the board exactly.
    #[display("pattern expects {expected} samples, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}
