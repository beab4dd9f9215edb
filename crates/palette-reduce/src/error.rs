//! Error types for palette reduction

use std::fmt;

/// Error type for palette reduction.
///
/// Every variant signals a caller mistake; reduction itself cannot fail
/// on valid input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReduceError {
    /// No input colors were provided.
    EmptyInput,
    /// The requested palette size cannot be produced.
    ///
    /// The target must be at least 1 and at most 256 so that every
    /// returned index fits in a `u8`.
    InvalidTarget {
        /// The requested palette size
        target: usize,
    },
}

impl fmt::Display for ReduceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReduceError::EmptyInput => {
                write!(f, "cannot reduce an empty color sequence")
            }
            ReduceError::InvalidTarget { target } => {
                write!(f, "invalid target palette size {} (expected 1..=256)", target)
            }
        }
    }
}

impl std::error::Error for ReduceError {}
