//! End-to-end test: build the table, write the binary file, and verify
//! every property of the fixed 464-byte layout from the outside.

use blendtab::output::{self, FILE_LEN};
use blendtab::pack::pack;
use blendtab::palette::BASE_COLORS;
use blendtab::table::{BlendTable, PALETTE_OFFSET, PALETTE_SOLID_LEN};
use palette_reduce::MaxCoverage;
use pretty_assertions::assert_eq;

fn generate() -> Vec<u8> {
    let table = BlendTable::build(&MaxCoverage).expect("table construction failed");
    output::to_bytes(&table)
}

#[test]
fn test_written_file_is_exactly_464_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.bin");

    let table = BlendTable::build(&MaxCoverage).unwrap();
    output::write_file(&table, &path).unwrap();

    let written = std::fs::read(&path).unwrap();
    assert_eq!(written.len(), FILE_LEN);
    assert_eq!(written, output::to_bytes(&table));
}

#[test]
fn test_diagonal_entries_hold_solid_slots() {
    let bytes = generate();
    // Diagonal cells sit at a*16+a = a*17: 0, 17, 34, ..., 255.
    for a in 0..PALETTE_SOLID_LEN {
        assert_eq!(bytes[a * 17] as usize, PALETTE_OFFSET + a);
    }
}

#[test]
fn test_index_section_is_symmetric() {
    let bytes = generate();
    for a in 0..PALETTE_SOLID_LEN {
        for b in 0..PALETTE_SOLID_LEN {
            assert_eq!(bytes[a * 16 + b], bytes[b * 16 + a]);
        }
    }
}

#[test]
fn test_index_entries_within_generated_region() {
    let bytes = generate();
    let first_blend_slot = (PALETTE_OFFSET + PALETTE_SOLID_LEN) as u8;
    for a in 0..PALETTE_SOLID_LEN {
        for b in 0..PALETTE_SOLID_LEN {
            let slot = bytes[a * 16 + b];
            assert!(slot >= PALETTE_OFFSET as u8);
            if a != b {
                assert!(
                    slot >= first_blend_slot,
                    "pair ({}, {}) maps below the blend region: {}",
                    a,
                    b,
                    slot
                );
            }
        }
    }
}

#[test]
fn test_solid_colors_packed_little_endian() {
    let bytes = generate();
    for (i, &color) in BASE_COLORS.iter().enumerate() {
        let offset = 256 + 2 * i;
        let raw = u16::from_le_bytes([bytes[offset], bytes[offset + 1]]);
        assert_eq!(raw, pack(color));
        assert_ne!(raw & 0x8000, 0);
    }
}

#[test]
fn test_repeated_runs_are_byte_identical() {
    assert_eq!(generate(), generate());
}
