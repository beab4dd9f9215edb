//! Palette reduction trait and the median-cut reducer.
//!
//! [`PaletteReducer`] is the seam between table-building code and the
//! quantization algorithm: input colors plus a target size in, reduced
//! palette plus per-input indices out. [`MaxCoverage`] is the shipped
//! implementation.

use std::collections::HashMap;

use crate::color::Rgb;
use crate::error::ReduceError;

/// The result of reducing a color sequence to a bounded palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reduction {
    /// The representative colors, at most `target` of them.
    pub palette: Vec<Rgb>,
    /// One palette index per input color, in input order.
    ///
    /// Every value is a valid index into `palette`.
    pub indices: Vec<u8>,
}

/// Maps a color sequence onto a bounded representative palette.
///
/// Implementations must be deterministic: the same input sequence and
/// target size always produce the same palette in the same order. Callers
/// bake the output into binary assets and rely on reproducible builds.
pub trait PaletteReducer {
    /// Reduce `colors` to a palette of at most `target` entries.
    ///
    /// # Errors
    ///
    /// Returns [`ReduceError::EmptyInput`] if `colors` is empty and
    /// [`ReduceError::InvalidTarget`] if `target` is 0 or exceeds 256
    /// (indices must fit in a `u8`).
    fn reduce(&self, colors: &[Rgb], target: usize) -> Result<Reduction, ReduceError>;
}

/// Deterministic median-cut reducer in the maximum-coverage family.
///
/// Distinct input colors that already fit the target are returned verbatim
/// in first-occurrence order. Otherwise the distinct colors, weighted by
/// occurrence count, are partitioned by repeated median cuts along the
/// widest channel, and each partition is represented by its weighted mean.
/// No dithering is performed.
///
/// # Example
///
/// ```
/// use palette_reduce::{MaxCoverage, PaletteReducer, Rgb};
///
/// // A 0..=255 grey ramp squeezed into four representatives.
/// let ramp: Vec<Rgb> = (0..=255).map(|v| Rgb::new(v, v, v)).collect();
/// let reduction = MaxCoverage.reduce(&ramp, 4).unwrap();
///
/// assert_eq!(reduction.palette.len(), 4);
/// assert!(reduction.indices.iter().all(|&i| (i as usize) < 4));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxCoverage;

impl PaletteReducer for MaxCoverage {
    fn reduce(&self, colors: &[Rgb], target: usize) -> Result<Reduction, ReduceError> {
        if colors.is_empty() {
            return Err(ReduceError::EmptyInput);
        }
        if target == 0 || target > 256 {
            return Err(ReduceError::InvalidTarget { target });
        }

        // Distinct colors in first-occurrence order, weighted by count.
        // The map is only used for slot lookup; all ordering comes from
        // the input sequence, keeping the result deterministic.
        let mut distinct: Vec<(Rgb, u32)> = Vec::new();
        let mut slot_of: HashMap<Rgb, usize> = HashMap::new();
        let mut input_slots: Vec<usize> = Vec::with_capacity(colors.len());
        for &color in colors {
            let slot = *slot_of.entry(color).or_insert_with(|| {
                distinct.push((color, 0));
                distinct.len() - 1
            });
            distinct[slot].1 += 1;
            input_slots.push(slot);
        }

        if distinct.len() <= target {
            // Nothing to merge: the distinct colors are the palette.
            let palette = distinct.iter().map(|&(color, _)| color).collect();
            let indices = input_slots.iter().map(|&slot| slot as u8).collect();
            return Ok(Reduction { palette, indices });
        }

        let (palette, box_of) = median_cut(&distinct, target);
        let indices = input_slots
            .iter()
            .map(|&slot| box_of[slot] as u8)
            .collect();
        Ok(Reduction { palette, indices })
    }
}

#[inline]
fn channel(color: Rgb, ch: usize) -> u8 {
    match ch {
        0 => color.r,
        1 => color.g,
        _ => color.b,
    }
}

fn channel_spread(distinct: &[(Rgb, u32)], members: &[usize], ch: usize) -> u8 {
    let mut min = u8::MAX;
    let mut max = u8::MIN;
    for &slot in members {
        let value = channel(distinct[slot].0, ch);
        min = min.min(value);
        max = max.max(value);
    }
    max - min
}

/// Partition the weighted distinct colors into at most `target` boxes and
/// return the per-box representative colors plus each slot's box index.
fn median_cut(distinct: &[(Rgb, u32)], target: usize) -> (Vec<Rgb>, Vec<usize>) {
    let mut boxes: Vec<Vec<usize>> = vec![(0..distinct.len()).collect()];

    while boxes.len() < target {
        // Pick the box with the widest channel spread. Strict comparison
        // with in-order scanning keeps ties stable.
        let mut pick: Option<(usize, usize)> = None;
        let mut best_spread = 0u8;
        for (box_idx, members) in boxes.iter().enumerate() {
            if members.len() < 2 {
                continue;
            }
            for ch in 0..3 {
                let spread = channel_spread(distinct, members, ch);
                if spread > best_spread {
                    best_spread = spread;
                    pick = Some((box_idx, ch));
                }
            }
        }
        // Only singleton boxes remain; the input cannot be split further.
        let Some((box_idx, ch)) = pick else { break };

        let mut members = std::mem::take(&mut boxes[box_idx]);
        // Sort along the split channel; full-color tiebreak keeps the
        // order independent of insertion history.
        members.sort_by_key(|&slot| (channel(distinct[slot].0, ch), distinct[slot].0));

        // Weighted median: cut where the accumulated count reaches half,
        // clamped so both halves stay non-empty.
        let total: u32 = members.iter().map(|&slot| distinct[slot].1).sum();
        let mut accumulated = 0u32;
        let mut cut = 1;
        for (i, &slot) in members.iter().enumerate() {
            accumulated += distinct[slot].1;
            if accumulated * 2 >= total {
                cut = i + 1;
                break;
            }
        }
        cut = cut.clamp(1, members.len() - 1);

        let upper = members.split_off(cut);
        boxes[box_idx] = members;
        boxes.push(upper);
    }

    let mut palette = Vec::with_capacity(boxes.len());
    let mut box_of = vec![0usize; distinct.len()];
    for (box_idx, members) in boxes.iter().enumerate() {
        let mut sums = [0u64; 3];
        let mut weight = 0u64;
        for &slot in members {
            let (color, count) = distinct[slot];
            sums[0] += color.r as u64 * count as u64;
            sums[1] += color.g as u64 * count as u64;
            sums[2] += color.b as u64 * count as u64;
            weight += count as u64;
            box_of[slot] = box_idx;
        }
        palette.push(Rgb::new(
            ((sums[0] + weight / 2) / weight) as u8,
            ((sums[1] + weight / 2) / weight) as u8,
            ((sums[2] + weight / 2) / weight) as u8,
        ));
    }

    (palette, box_of)
}
