//! Error types for the selection model

use thiserror::Error;

/// Errors raised by [`SelectionStore`](crate::SelectionStore) operations.
///
/// These are programming-contract violations, not transient conditions: a
/// failed call leaves the store exactly as it was.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectError {
    /// A projected position outside the current visible range was passed to
    /// a position-based operation.
    #[error("position {position} out of range for {len} visible items")]
    IndexOutOfRange { position: usize, len: usize },

    /// Item and id lists of different lengths were supplied together.
    #[error("got {items} items but {ids} ids")]
    ArityMismatch { items: usize, ids: usize },
}

/// Result type for selection operations.
pub type SelectResult<T> = Result<T, SelectError>;
