//! palette-reduce: deterministic color palette reduction
//!
//! This library maps a sequence of RGB colors onto a smaller representative
//! palette, returning both the reduced palette and a per-input index into it.
//! It exists for build-time asset pipelines that bake fixed palettes for
//! indexed-color hardware, so reproducibility is a hard requirement: the same
//! input always produces the same palette in the same order, with no
//! randomized seeding and no dithering.
//!
//! # Quick Start
//!
//! [`MaxCoverage`] is the provided [`PaletteReducer`] implementation:
//!
//! ```
//! use palette_reduce::{MaxCoverage, PaletteReducer, Rgb};
//!
//! let colors = vec![
//!     Rgb::new(0, 0, 0),
//!     Rgb::new(255, 255, 255),
//!     Rgb::new(0, 0, 0),
//! ];
//! let reduction = MaxCoverage.reduce(&colors, 8).unwrap();
//!
//! // Two distinct inputs fit the target exactly, so nothing is merged.
//! assert_eq!(reduction.palette.len(), 2);
//! assert_eq!(reduction.indices, vec![0, 1, 0]);
//! ```
//!
//! # Algorithm
//!
//! When the distinct input colors already fit the target size, they are
//! returned verbatim in first-occurrence order. Otherwise a median-cut
//! partition runs over the distinct colors weighted by occurrence count:
//! the box with the widest channel spread is split at its weighted median
//! until the target box count is reached, and each box is represented by
//! its weighted mean color. This is the maximum-coverage family of
//! quantizers — representatives track the populated regions of the input
//! rather than a fixed lattice.

pub mod color;
pub mod error;
pub mod reduce;

pub use color::Rgb;
pub use error::ReduceError;
pub use reduce::{MaxCoverage, PaletteReducer, Reduction};
