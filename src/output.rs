//! Binary serialization of the palette table.
//!
//! The output layout is fixed at 464 bytes, little-endian:
//!
//! | Offset | Length | Content                                  |
//! |--------|--------|------------------------------------------|
//! | 0      | 256    | index table, one byte per (a, b) pair    |
//! | 256    | 32     | 16 packed solid base colors              |
//! | 288    | 176    | 88 packed reduced blend colors           |
//!
//! The blend section is padded with packed black (`0x8000`) when the
//! reducer produced fewer colors than the slot budget.

use std::fs;
use std::path::Path;

use palette_reduce::Rgb;

use crate::error::TableError;
use crate::pack::pack;
use crate::palette::BASE_COLORS;
use crate::table::{BlendTable, INDEX_ENTRIES, PALETTE_BLEND_LEN, PALETTE_SOLID_LEN};

/// Total size of the serialized table in bytes (464).
pub const FILE_LEN: usize = INDEX_ENTRIES + 2 * PALETTE_SOLID_LEN + 2 * PALETTE_BLEND_LEN;

/// Serialize the table into its fixed 464-byte layout.
pub fn to_bytes(table: &BlendTable) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(FILE_LEN);
    bytes.extend_from_slice(table.index_bytes());

    for &color in &BASE_COLORS {
        bytes.extend_from_slice(&pack(color).to_le_bytes());
    }

    let padding = pack(Rgb::new(0, 0, 0));
    for i in 0..PALETTE_BLEND_LEN {
        let packed = table
            .blend_palette()
            .get(i)
            .map_or(padding, |&color| pack(color));
        bytes.extend_from_slice(&packed.to_le_bytes());
    }

    debug_assert_eq!(bytes.len(), FILE_LEN);
    bytes
}

/// Write the serialized table to `path`.
///
/// # Errors
///
/// Returns [`TableError::Io`] if the path cannot be written.
pub fn write_file(table: &BlendTable, path: &Path) -> Result<(), TableError> {
    fs::write(path, to_bytes(table))?;
    Ok(())
}
