//! Error types for orientation changes

use thiserror::Error;

/// Result type alias for orientation operations
pub type Result<T> = std::result::Result<T, RotateError>;

/// Reasons an orientation change resolves to nothing
///
/// None of these are fatal: the tool layer logs them and leaves the block
/// unchanged rather than breaking gameplay over an inconsistent family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RotateError {
    /// The block's family has no orientation scheme
    #[error("block family is not orientable")]
    NotOrientable,

    /// The block is not a member of the family it was looked up under
    #[error("block carries no orientation data for its family")]
    MissingOrientation,

    /// The family has no variant for the resolved orientation
    #[error("no variant registered for the target orientation")]
    NoVariant,

    /// No rotation satisfies both quarter-turn constraints
    #[error("no rotation satisfies the quarter-turn constraints")]
    Unsolvable,

    /// The clicked face normal does not pick out a single side
    #[error("hit normal is not axis-aligned")]
    AmbiguousNormal,
}
