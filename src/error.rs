use palette_reduce::ReduceError;
use thiserror::Error;

/// Errors raised while building or writing the palette table.
///
/// Every variant is fatal: the tool runs once per build and either
/// produces a complete, correct file or exits non-zero. There is no
/// degraded output mode.
#[derive(Debug, Error)]
pub enum TableError {
    /// The blend strip did not contain one color per unordered pair.
    ///
    /// This is an internal-consistency failure: it can only happen if the
    /// pair enumeration and the layout constants disagree.
    #[error("blend strip has {produced} colors (expected {expected})")]
    BlendCountMismatch { produced: usize, expected: usize },

    /// The reducer returned an index outside the blend slot range.
    #[error("reduced palette index {index} does not fit the blend slot range")]
    SlotOverflow { index: usize },

    /// Palette reduction failed.
    #[error("palette reduction failed: {0}")]
    Reduce(#[from] ReduceError),

    /// The output file could not be written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
