//! blendtab — blend-palette table generator for 15-bit indexed displays
//!
//! A one-shot build tool: it takes the fixed 16-color base palette,
//! averages every unordered pair of entries, reduces those 120 blends to
//! the 88 palette slots the target display has left over, and writes the
//! resulting pair-index table plus packed 15-bit palette as a 464-byte
//! binary asset. The tool runs once per build; any failure is fatal.
//!
//! This library crate exposes the construction and serialization steps
//! for integration testing; `main.rs` is a thin CLI over
//! [`table::BlendTable::build`] and [`output::write_file`].

pub mod error;
pub mod output;
pub mod pack;
pub mod palette;
pub mod table;

pub use error::TableError;
pub use table::BlendTable;
