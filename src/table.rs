//! Index-table construction.
//!
//! The on-device palette has 256 slots, laid out as 16 overlay colors,
//! 16 solid colors, 120 reserved blending rows, then the generated region:
//! 16 solid entries followed by the reduced blend palette. The index table
//! maps any (color A, color B) selection to a slot in that generated
//! region — diagonal entries hit the solid colors, off-diagonal entries
//! hit the nearest reduced blend.

use palette_reduce::{PaletteReducer, Rgb};

use crate::error::TableError;
use crate::palette::{self, BASE_COLORS};

/// Overlay colors reserved ahead of the generated region.
pub const PALETTE_OVERLAY_LEN: usize = 16;
/// Solid base colors.
pub const PALETTE_SOLID_LEN: usize = 16;
/// Unordered blend pairs of the 16 base colors.
pub const BLEND_ROWS: usize = PALETTE_SOLID_LEN * (PALETTE_SOLID_LEN - 1) / 2;
/// First slot of the generated palette region (152).
pub const PALETTE_OFFSET: usize = PALETTE_OVERLAY_LEN + PALETTE_SOLID_LEN + BLEND_ROWS;
/// Slots available to the generated region (104).
pub const PALETTE_LEN: usize = 256 - PALETTE_OFFSET;
/// Slots available to the reduced blend palette (88).
pub const PALETTE_BLEND_LEN: usize = PALETTE_LEN - PALETTE_SOLID_LEN;
/// Entries in the pair-index table, one per (a, b) combination.
pub const INDEX_ENTRIES: usize = PALETTE_SOLID_LEN * PALETTE_SOLID_LEN;

/// Row-major cell address of pair (a, b).
#[inline]
fn cell(a: usize, b: usize) -> usize {
    a * PALETTE_SOLID_LEN + b
}

/// A fully constructed pair-index table plus its reduced blend palette.
///
/// Built once via [`BlendTable::build`] and then serialized; the table is
/// immutable after construction.
#[derive(Debug, Clone)]
pub struct BlendTable {
    /// Palette slot per (a, b) pair, addressed as `a * 16 + b`.
    index: [u8; INDEX_ENTRIES],
    /// Reduced blend colors, in reducer-assigned order. At most
    /// [`PALETTE_BLEND_LEN`] entries.
    blends: Vec<Rgb>,
}

impl BlendTable {
    /// Build the index table by blending every base-color pair and
    /// reducing the result to the available blend slots.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::BlendCountMismatch`] if the pair enumeration
    /// disagrees with the layout constants, [`TableError::SlotOverflow`]
    /// if the reducer hands back an index that cannot be encoded, and
    /// propagates reducer failures verbatim. All are fatal.
    pub fn build(reducer: &dyn PaletteReducer) -> Result<Self, TableError> {
        let strip = palette::blend_strip();
        if strip.len() != BLEND_ROWS {
            return Err(TableError::BlendCountMismatch {
                produced: strip.len(),
                expected: BLEND_ROWS,
            });
        }

        let reduction = reducer.reduce(&strip, PALETTE_BLEND_LEN)?;
        tracing::info!(
            produced = strip.len(),
            expected = BLEND_ROWS,
            reduced = reduction.palette.len(),
            target = PALETTE_BLEND_LEN,
            "reduced blend strip"
        );

        // Sentinel fill, then solid slots on the diagonal.
        let mut index = [PALETTE_OFFSET as u8; INDEX_ENTRIES];
        for a in 0..PALETTE_SOLID_LEN {
            index[cell(a, a)] = (PALETTE_OFFSET + a) as u8;
        }

        // Off-diagonal slots, written symmetrically. The pair walk must
        // match the strip enumeration so indices line up.
        for (i, (a, b)) in palette::blend_pairs().enumerate() {
            let reduced = reduction.indices[i] as usize;
            if reduced >= PALETTE_BLEND_LEN {
                return Err(TableError::SlotOverflow { index: reduced });
            }
            let slot = (PALETTE_OFFSET + PALETTE_SOLID_LEN + reduced) as u8;
            index[cell(a, b)] = slot;
            index[cell(b, a)] = slot;
        }

        Ok(Self {
            index,
            blends: reduction.palette,
        })
    }

    /// The raw 256-entry index table.
    #[inline]
    pub fn index_bytes(&self) -> &[u8; INDEX_ENTRIES] {
        &self.index
    }

    /// The palette slot assigned to the pair (a, b).
    #[inline]
    pub fn slot(&self, a: usize, b: usize) -> u8 {
        self.index[cell(a, b)]
    }

    /// The reduced blend palette, in slot order starting at
    /// `PALETTE_OFFSET + PALETTE_SOLID_LEN`.
    #[inline]
    pub fn blend_palette(&self) -> &[Rgb] {
        &self.blends
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use palette_reduce::MaxCoverage;

    fn build() -> BlendTable {
        BlendTable::build(&MaxCoverage).expect("table construction failed")
    }

    #[test]
    fn test_layout_constants() {
        assert_eq!(BLEND_ROWS, 120);
        assert_eq!(PALETTE_OFFSET, 152);
        assert_eq!(PALETTE_LEN, 104);
        assert_eq!(PALETTE_BLEND_LEN, 88);
        // The highest addressable blend slot must fit a byte.
        assert_eq!(PALETTE_OFFSET + PALETTE_SOLID_LEN + PALETTE_BLEND_LEN - 1, 255);
    }

    #[test]
    fn test_diagonal_holds_solid_slots() {
        let table = build();
        for a in 0..PALETTE_SOLID_LEN {
            assert_eq!(table.slot(a, a) as usize, PALETTE_OFFSET + a);
        }
    }

    #[test]
    fn test_table_is_symmetric() {
        let table = build();
        for a in 0..PALETTE_SOLID_LEN {
            for b in 0..PALETTE_SOLID_LEN {
                assert_eq!(table.slot(a, b), table.slot(b, a));
            }
        }
    }

    #[test]
    fn test_off_diagonal_entries_in_blend_range() {
        let table = build();
        let first_blend_slot = (PALETTE_OFFSET + PALETTE_SOLID_LEN) as u8;
        for a in 0..PALETTE_SOLID_LEN {
            for b in 0..PALETTE_SOLID_LEN {
                if a == b {
                    continue;
                }
                let slot = table.slot(a, b);
                assert!(
                    slot >= first_blend_slot,
                    "pair ({}, {}) left unmapped or sentinel: {}",
                    a,
                    b,
                    slot
                );
                let blend_idx = (slot - first_blend_slot) as usize;
                assert!(blend_idx < table.blend_palette().len());
            }
        }
    }

    #[test]
    fn test_blend_palette_within_budget() {
        let table = build();
        assert!(!table.blend_palette().is_empty());
        assert!(table.blend_palette().len() <= PALETTE_BLEND_LEN);
    }

    #[test]
    fn test_assigned_slot_points_at_pair_blend() {
        let table = build();
        let first_blend_slot = PALETTE_OFFSET + PALETTE_SOLID_LEN;
        for (a, b) in palette::blend_pairs() {
            let blended = BASE_COLORS[a].mix(BASE_COLORS[b]);
            let idx = table.slot(a, b) as usize - first_blend_slot;
            // The fixed palette has fewer than 88 distinct blends, so the
            // reducer keeps every color exact.
            assert_eq!(table.blend_palette()[idx], blended);
        }
    }

    #[test]
    fn test_build_is_deterministic() {
        let first = build();
        let second = build();
        assert_eq!(first.index_bytes(), second.index_bytes());
        assert_eq!(first.blend_palette(), second.blend_palette());
    }
}
