// Copyright 2025 the FitType Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Candidate size sets.
//!
//! The fit search selects from a distinct, ascending set of positive integer
//! pixel sizes. Sets are built either by stepping through a `[min, max]`
//! range or by cleaning a caller-supplied preset list; both paths go through
//! the same sort/dedup/positive-only normalization, so cleaning is idempotent
//! and independent of input order.

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use smallvec::SmallVec;

/// A distinct, ascending set of candidate sizes in whole pixels.
///
/// Invariants: no duplicates, every value `> 0`, ascending order. Candidate
/// sets are typically small (a handful of presets, or a stepped range), so
/// storage is inline up to eight entries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SizeCandidates(SmallVec<[u32; 8]>);

impl SizeCandidates {
    /// Builds the stepped set `min, min + step, min + 2*step, ...` capped at
    /// `max` (inclusive only when a step lands exactly on it).
    ///
    /// Produces `floor((max - min) / step) + 1` raw values, each rounded to
    /// the nearest pixel, then normalized. Callers are expected to have
    /// validated `min > 0`, `max > min` and `step > 0` beforehand.
    #[must_use]
    pub fn from_steps(min_px: f64, max_px: f64, step_px: f64) -> Self {
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "Validated inputs keep the count non-negative and small"
        )]
        let count = ((max_px - min_px) / step_px).floor() as usize + 1;
        let mut raw: SmallVec<[f64; 8]> = SmallVec::new();
        for i in 0..count {
            raw.push(min_px + i as f64 * step_px);
        }
        Self::from_presets(raw)
    }

    /// Cleans an arbitrary list of pixel sizes into a candidate set.
    ///
    /// Each value is rounded to the nearest pixel; non-positive and non-finite
    /// entries are discarded and duplicates collapsed. The result may be
    /// empty, which callers treat as "auto-sizing disabled".
    #[must_use]
    pub fn from_presets(sizes_px: impl IntoIterator<Item = f64>) -> Self {
        let mut sizes: SmallVec<[u32; 8]> = SmallVec::new();
        for px in sizes_px {
            let px = px.round();
            // NaN fails both comparisons and is dropped with the rest.
            if px > 0.0 && px <= f64::from(u32::MAX) {
                #[allow(
                    clippy::cast_possible_truncation,
                    clippy::cast_sign_loss,
                    reason = "Value is checked to be in (0, u32::MAX] above"
                )]
                sizes.push(px as u32);
            }
        }
        sizes.sort_unstable();
        sizes.dedup();
        Self(sizes)
    }

    /// Returns `true` if the set has no candidates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of candidates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The smallest candidate, if any. This is the floor the fit search falls
    /// back to without probing it.
    #[must_use]
    pub fn smallest(&self) -> Option<u32> {
        self.0.first().copied()
    }

    /// The largest candidate, if any.
    #[must_use]
    pub fn largest(&self) -> Option<u32> {
        self.0.last().copied()
    }

    /// The candidates as an ascending slice.
    #[must_use]
    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::vec::Vec;

    use super::*;

    #[test]
    fn stepped_set_is_ascending_and_within_bounds() {
        let c = SizeCandidates::from_steps(10.0, 95.0, 7.0);
        let s = c.as_slice();
        assert!(!s.is_empty(), "stepped set must not be empty");
        assert!(s.windows(2).all(|w| w[0] < w[1]), "must be strictly ascending");
        assert!(s[0] >= 10, "first candidate below min");
        assert!(*s.last().unwrap() <= 95, "last candidate above max");
    }

    #[test]
    fn stepped_count_matches_floor_formula() {
        // floor((20 - 12) / 4) + 1 = 3 values.
        let c = SizeCandidates::from_steps(12.0, 20.0, 4.0);
        assert_eq!(c.as_slice(), &[12, 16, 20]);
    }

    #[test]
    fn stepped_max_excluded_when_not_reached_exactly() {
        let c = SizeCandidates::from_steps(12.0, 19.0, 4.0);
        assert_eq!(c.as_slice(), &[12, 16]);
    }

    #[test]
    fn stepped_values_round_to_nearest_pixel() {
        let c = SizeCandidates::from_steps(10.4, 12.0, 0.75);
        // Raw values 10.4, 11.15, 11.9 round to 10, 11, 12.
        assert_eq!(c.as_slice(), &[10, 11, 12]);
    }

    #[test]
    fn fine_steps_collapse_to_distinct_pixels() {
        let c = SizeCandidates::from_steps(10.0, 12.0, 0.25);
        assert_eq!(c.as_slice(), &[10, 11, 12]);
    }

    #[test]
    fn presets_drop_non_positive_and_duplicates() {
        let c = SizeCandidates::from_presets([10.0, -5.0, 10.0, 30.0, 0.0]);
        assert_eq!(c.as_slice(), &[10, 30]);
    }

    #[test]
    fn preset_cleaning_is_order_independent_and_idempotent() {
        let a = SizeCandidates::from_presets([30.0, 10.0, -5.0, 0.0, 10.0]);
        let b = SizeCandidates::from_presets([10.0, -5.0, 10.0, 30.0, 0.0]);
        assert_eq!(a, b);

        let again: Vec<f64> = a.as_slice().iter().map(|&px| f64::from(px)).collect();
        assert_eq!(SizeCandidates::from_presets(again), a);
    }

    #[test]
    fn presets_drop_nan_and_infinite_values() {
        let c = SizeCandidates::from_presets([f64::NAN, f64::INFINITY, 14.0]);
        assert_eq!(c.as_slice(), &[14]);
    }

    #[test]
    fn all_invalid_presets_yield_empty_set() {
        let c = SizeCandidates::from_presets([0.0, -1.0]);
        assert!(c.is_empty(), "only invalid presets must clean to empty");
        assert_eq!(c.smallest(), None);
        assert_eq!(c.largest(), None);
    }
}
