// Copyright 2025 the FitType Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Auto-sizing configuration and the fit entry point.
//!
//! [`ScaleMode`] is the caller-facing configuration: one variant per sizing
//! mode, each carrying only its own parameters. Configuring a mode is a pure
//! function producing an immutable [`FitConfig`]; fitting a query against a
//! config is a pure function producing a [`FitResult`]. Nothing is cached
//! between calls, so every layout pass recomputes from scratch and concurrent
//! fits just use separate configs.

extern crate alloc;

use alloc::vec::Vec;

use fittype_text::{FitConstraints, OverflowMeasurer, TextStyle};

use crate::candidates::SizeCandidates;
use crate::search::{FitError, SearchStrategy, largest_fitting_index};

/// Default minimum size for auto-sizing, in logical units.
pub const DEFAULT_MIN_SIZE: f64 = 12.0;

/// Default maximum size for auto-sizing, in logical units.
pub const DEFAULT_MAX_SIZE: f64 = 112.0;

/// Default step granularity, in pixels.
pub const DEFAULT_STEP_PX: f64 = 1.0;

/// Scale factor between the caller's logical units and device pixels.
///
/// Candidate sets are built in whole pixels; queries and results stay in
/// logical units. A density of 1.0 (the default) makes the two coincide.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Density(pub f64);

impl Density {
    /// Converts logical units to pixels.
    #[must_use]
    pub fn physical(self, units: f64) -> f64 {
        units * self.0
    }

    /// Converts pixels back to logical units.
    #[must_use]
    pub fn logical(self, px: f64) -> f64 {
        px / self.0
    }
}

impl Default for Density {
    fn default() -> Self {
        Self(1.0)
    }
}

/// Auto-sizing configuration modes.
#[derive(Clone, Debug, PartialEq)]
pub enum ScaleMode {
    /// Auto-sizing disabled; fitting returns the style's base font size.
    None,
    /// Scale within the default range ([`DEFAULT_MIN_SIZE`] to
    /// [`DEFAULT_MAX_SIZE`] logical units, stepped by [`DEFAULT_STEP_PX`]).
    Uniform,
    /// Scale within a caller-supplied range, all fields in logical units.
    SizeRange {
        /// Smallest size to consider. Must be positive.
        min: f64,
        /// Largest size to consider. Must exceed `min`.
        max: f64,
        /// Distance between neighboring candidates. Must be positive.
        step: f64,
    },
    /// Pick from a caller-supplied list of sizes in logical units.
    ///
    /// Non-positive entries are discarded and duplicates collapsed. If no
    /// valid entry remains, auto-sizing is silently disabled for the call
    /// rather than rejected — an empty preset list means "nothing to pick
    /// from", not a misconfiguration.
    Preset(Vec<f64>),
}

/// Errors raised when validating a [`ScaleMode::SizeRange`] configuration
/// (or the built-in [`ScaleMode::Uniform`] range, should the density make it
/// degenerate).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The minimum size is zero, negative or not finite after pixel
    /// conversion.
    MinNotPositive,
    /// The maximum size does not exceed the minimum (or is not finite) after
    /// pixel conversion.
    MaxNotAboveMin,
    /// The step granularity is zero, negative or not finite after pixel
    /// conversion.
    StepNotPositive,
}

impl ScaleMode {
    /// Validates this mode and builds an immutable [`FitConfig`] for it.
    ///
    /// Range bounds are checked after conversion to pixels, mirroring the
    /// candidate set they generate. `Preset` never fails: an empty cleaned
    /// set degrades to the no-scaling config.
    pub fn configure(&self, density: Density) -> Result<FitConfig, ConfigError> {
        let sizing = match self {
            Self::None => Sizing::Fixed,
            Self::Uniform => Sizing::Scaled(checked_steps(
                density.physical(DEFAULT_MIN_SIZE),
                density.physical(DEFAULT_MAX_SIZE),
                DEFAULT_STEP_PX,
            )?),
            Self::SizeRange { min, max, step } => Sizing::Scaled(checked_steps(
                density.physical(*min),
                density.physical(*max),
                density.physical(*step),
            )?),
            Self::Preset(sizes) => {
                let candidates =
                    SizeCandidates::from_presets(sizes.iter().map(|&s| density.physical(s)));
                if candidates.is_empty() {
                    Sizing::Fixed
                } else {
                    Sizing::Scaled(candidates)
                }
            }
        };
        Ok(FitConfig {
            density,
            strategy: SearchStrategy::default(),
            sizing,
        })
    }
}

fn checked_steps(min_px: f64, max_px: f64, step_px: f64) -> Result<SizeCandidates, ConfigError> {
    if !min_px.is_finite() || min_px <= 0.0 {
        return Err(ConfigError::MinNotPositive);
    }
    if !max_px.is_finite() || max_px <= min_px {
        return Err(ConfigError::MaxNotAboveMin);
    }
    if !step_px.is_finite() || step_px <= 0.0 {
        return Err(ConfigError::StepNotPositive);
    }
    Ok(SizeCandidates::from_steps(min_px, max_px, step_px))
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Sizing {
    Fixed,
    Scaled(SizeCandidates),
}

/// An immutable, reusable fit configuration produced by
/// [`ScaleMode::configure`].
#[derive(Clone, Debug, PartialEq)]
pub struct FitConfig {
    density: Density,
    strategy: SearchStrategy,
    sizing: Sizing,
}

impl FitConfig {
    /// Sets the search strategy (defaults to [`SearchStrategy::Compat`]).
    #[must_use]
    pub fn with_strategy(mut self, strategy: SearchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Returns `true` if this config performs auto-sizing.
    #[must_use]
    pub fn is_scaled(&self) -> bool {
        matches!(self.sizing, Sizing::Scaled(_))
    }

    /// The candidate set, when auto-sizing is enabled.
    #[must_use]
    pub fn candidates(&self) -> Option<&SizeCandidates> {
        match &self.sizing {
            Sizing::Fixed => None,
            Sizing::Scaled(c) => Some(c),
        }
    }

    /// Finds the optimal font size for `query`.
    ///
    /// A no-scaling config returns the query's base size without consulting
    /// the measurer. Otherwise the candidate set is binary-searched; each
    /// probe hands the measurer the query's style with `font_size` replaced
    /// by the candidate (converted to logical units). Measurer answers are
    /// trusted as-is.
    pub fn fit(
        &self,
        query: &FitQuery<'_>,
        measurer: &impl OverflowMeasurer,
    ) -> Result<FitResult, FitError> {
        let original = query.style.font_size;
        let candidates = match &self.sizing {
            Sizing::Fixed => {
                return Ok(FitResult {
                    original,
                    optimal: original,
                });
            }
            Sizing::Scaled(c) => c,
        };

        let sizes = candidates.as_slice();
        let best = largest_fitting_index(sizes.len(), self.strategy, |i| {
            let probe = query.style.with_font_size(self.density.logical(f64::from(sizes[i])));
            !measurer.overflows(query.text, &probe, &query.constraints)
        })?;

        Ok(FitResult {
            original,
            optimal: self.density.logical(f64::from(sizes[best])),
        })
    }
}

/// One fit computation's inputs: text, style and the box to fit into.
///
/// Queries are transient; build one per layout pass and drop it.
#[derive(Clone, Debug, PartialEq)]
pub struct FitQuery<'a> {
    /// The text to fit (plain; attributed runs flatten to their text here).
    pub text: &'a str,
    /// Style attributes. `font_size` doubles as the base size reported back
    /// in [`FitResult::original`]; the rest passes through to the measurer.
    pub style: TextStyle,
    /// The bounding box and line policy to fit within.
    pub constraints: FitConstraints,
}

impl<'a> FitQuery<'a> {
    /// Creates a fit query.
    #[must_use]
    pub fn new(text: &'a str, style: TextStyle, constraints: FitConstraints) -> Self {
        Self {
            text,
            style,
            constraints,
        }
    }
}

/// The outcome of a fit: the requested size and the size that fits.
///
/// Both values are in the caller's logical units. `original` is carried for
/// observability; `optimal` equals it when auto-sizing was disabled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitResult {
    /// The font size the query asked for.
    pub original: f64,
    /// The chosen size: the largest fitting candidate, or `original` when
    /// auto-sizing was off.
    pub optimal: f64,
}
