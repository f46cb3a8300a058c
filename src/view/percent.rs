//! Percentage allocation for sibling rows.
//!
//! Per-item rounding cannot guarantee that siblings add up to 100. Each entry
//! gets its truncated share first; the percent points lost to truncation are
//! then handed out one by one to the entries with the largest truncation
//! remainder. Equal remainders go to the lower index first.

use crate::types::Percent;

/// Allocate integer percentages for `weights`.
///
/// The result has the same length as `weights` and sums to exactly 100, unless
/// the total weight is zero, in which case every entry is 0.
pub fn allocate(weights: &[u64]) -> Vec<Percent> {
    let total: u128 = weights.iter().map(|w| u128::from(*w)).sum();
    if total == 0 {
        return vec![0; weights.len()];
    }

    let mut percents: Vec<Percent> = weights
        .iter()
        .map(|w| (u128::from(*w) * 100 / total) as Percent)
        .collect();

    let assigned: u32 = percents.iter().map(|p| u32::from(*p)).sum();
    let remaining = (100 - assigned) as usize;
    debug_assert!(remaining < weights.len().max(1));

    if remaining > 0 {
        let mut by_remainder: Vec<(u128, usize)> = weights
            .iter()
            .enumerate()
            .map(|(index, w)| (u128::from(*w) * 100 % total, index))
            .collect();
        // largest remainder first; stable, so ties keep index order
        by_remainder.sort_by(|a, b| b.0.cmp(&a.0));
        for (_, index) in by_remainder.into_iter().take(remaining) {
            percents[index] += 1;
        }
    }
    percents
}
