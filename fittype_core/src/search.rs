// Copyright 2025 the FitType Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Largest-fitting-size binary search.
//!
//! Given an ascending candidate set and a fits-or-overflows predicate, the
//! search returns the index of the largest candidate that fits. Index 0 (the
//! smallest candidate) is the guaranteed floor: it is returned when nothing
//! larger fits and is never itself probed. For `n` candidates the predicate
//! is invoked at most `ceil(log2(n))` times.

/// Errors returned by [`largest_fitting_index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitError {
    /// The candidate set was empty. Configuration normally prevents this, so
    /// hitting it indicates a broken calling sequence rather than bad input.
    NoCandidates,
}

/// How the search maintains its best-so-far index.
///
/// Android's `TextView` auto-sizing, which this search descends from, updates
/// its best index on *both* branches: to the pre-advance `low` on a fitting
/// probe, and to the already-decremented `high` on a non-fitting one. That
/// bookkeeping looks off-by-one next to the textbook formulation, so both are
/// available. The exhaustive tests in this module show the two always agree
/// on the returned index (for any predicate, monotonic or not); the quirk is
/// confined to transient values of `best` inside the loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchStrategy {
    /// Reproduce the `TextView` boundary bookkeeping verbatim.
    #[default]
    Compat,
    /// Textbook search: record `best = mid` on fit, leave it alone otherwise.
    Canonical,
}

/// Returns the index of the largest fitting candidate among `count` ascending
/// candidates, probing `fits(index)` for indices in `1..count`.
pub fn largest_fitting_index(
    count: usize,
    strategy: SearchStrategy,
    mut fits: impl FnMut(usize) -> bool,
) -> Result<usize, FitError> {
    if count == 0 {
        return Err(FitError::NoCandidates);
    }

    let mut best = 0_usize;
    let mut low = 1_usize;
    let mut high = count - 1;

    while low <= high {
        let mid = (low + high) / 2;
        if fits(mid) {
            match strategy {
                SearchStrategy::Compat => best = low,
                SearchStrategy::Canonical => best = mid,
            }
            low = mid + 1;
        } else {
            high = mid - 1;
            if strategy == SearchStrategy::Compat {
                best = high;
            }
        }
    }

    Ok(best)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use core::cell::Cell;

    use super::*;

    fn ceil_log2(n: usize) -> u32 {
        (n as f64).log2().ceil() as u32
    }

    #[test]
    fn empty_set_is_rejected() {
        let r = largest_fitting_index(0, SearchStrategy::Compat, |_| true);
        assert_eq!(r, Err(FitError::NoCandidates));
    }

    #[test]
    fn single_candidate_returns_floor_without_probing() {
        let r = largest_fitting_index(1, SearchStrategy::Compat, |_| {
            panic!("the floor must never be probed")
        });
        assert_eq!(r, Ok(0));
    }

    #[test]
    fn finds_largest_fitting_candidate() {
        // Candidates [12, 24, 36, 48, 60] where only sizes <= 36 fit.
        let sizes = [12_u32, 24, 36, 48, 60];
        for strategy in [SearchStrategy::Compat, SearchStrategy::Canonical] {
            let best =
                largest_fitting_index(sizes.len(), strategy, |i| sizes[i] <= 36).unwrap();
            assert_eq!(sizes[best], 36);
        }
    }

    #[test]
    fn nothing_above_floor_fits() {
        let best =
            largest_fitting_index(5, SearchStrategy::Compat, |_| false).unwrap();
        assert_eq!(best, 0);
    }

    #[test]
    fn everything_fits() {
        let best = largest_fitting_index(8, SearchStrategy::Compat, |_| true).unwrap();
        assert_eq!(best, 7);
    }

    #[test]
    fn probe_count_stays_within_log_bound() {
        for n in 1..=64_usize {
            for threshold in 0..n {
                let probes = Cell::new(0_u32);
                largest_fitting_index(n, SearchStrategy::Compat, |i| {
                    probes.set(probes.get() + 1);
                    i <= threshold
                })
                .unwrap();
                assert!(
                    probes.get() <= ceil_log2(n),
                    "n={n} threshold={threshold}: {} probes",
                    probes.get()
                );
            }
        }
    }

    #[test]
    fn strategies_agree_for_monotonic_predicates() {
        for n in 1..=10_usize {
            for threshold in 0..=n {
                let compat =
                    largest_fitting_index(n, SearchStrategy::Compat, |i| i <= threshold)
                        .unwrap();
                let canonical =
                    largest_fitting_index(n, SearchStrategy::Canonical, |i| i <= threshold)
                        .unwrap();
                assert_eq!(compat, canonical, "n={n} threshold={threshold}");
                assert_eq!(compat, threshold.min(n - 1), "n={n} threshold={threshold}");
            }
        }
    }

    #[test]
    fn strategies_agree_for_arbitrary_predicates() {
        // Every fits/overflows answer pattern over the probed indices, for
        // the boundary-prone small set sizes.
        for n in 2..=6_usize {
            for mask in 0_u32..(1 << (n - 1)) {
                let fits = |i: usize| mask & (1 << (i - 1)) != 0;
                let compat =
                    largest_fitting_index(n, SearchStrategy::Compat, fits).unwrap();
                let canonical =
                    largest_fitting_index(n, SearchStrategy::Canonical, fits).unwrap();
                assert_eq!(compat, canonical, "n={n} mask={mask:b}");
            }
        }
    }
}
