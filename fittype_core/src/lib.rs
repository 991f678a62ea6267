// Copyright 2025 the FitType Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Auto-sizing text-fit core for `FitType`.
//!
//! This crate answers one question: given a text, a style, a bounding box and
//! a set of candidate font sizes, what is the largest size at which the text
//! still fits? It does so without ever touching glyphs — measurement is
//! injected through [`fittype_text::OverflowMeasurer`], so the same search
//! drives a shaping engine, a web canvas, or a heuristic.
//!
//! The moving parts:
//! - [`ScaleMode`] — sizing modes (off, default range, explicit range,
//!   preset sizes), validated into an immutable [`FitConfig`].
//! - [`SizeCandidates`] — the distinct ascending pixel sizes to pick from.
//! - [`FitConfig::fit`] — binary search over the candidates, at most
//!   `ceil(log2(n))` measurement probes per call.
//!
//! Everything is synchronous and value-based; there is no cross-call state
//! and no memoization. Callers that find measurement expensive can cache
//! outside the seam.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod candidates;
#[cfg(not(feature = "std"))]
mod float;
mod search;
mod sizer;

pub use candidates::SizeCandidates;
pub use search::{FitError, SearchStrategy, largest_fitting_index};
pub use sizer::{
    ConfigError, DEFAULT_MAX_SIZE, DEFAULT_MIN_SIZE, DEFAULT_STEP_PX, Density, FitConfig,
    FitQuery, FitResult, ScaleMode,
};
