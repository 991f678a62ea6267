// Copyright 2025 the FitType Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text styling, fit constraints and the overflow measurement hook.
//!
//! The auto-sizing search in `fittype_core` never measures glyphs itself; it
//! asks a caller-supplied [`OverflowMeasurer`] whether a given text, styled at
//! a candidate size, overflows a bounding box. Shaping and layout stay
//! downstream, behind this trait.
//!
//! This crate is intentionally:
//! - small and dependency-free,
//! - `no_std`-friendly (it uses `alloc` for owned font family names), and
//! - backend-agnostic (shaping engines and web canvas measurement implement
//!   the same trait).

#![no_std]

extern crate alloc;

use alloc::sync::Arc;

/// The measurement interface consumed by the fit search.
///
/// Implementations answer a single question: does `text`, styled with `style`
/// (whose `font_size` the search overrides per probe), visually overflow
/// `constraints`? Overflow covers width, height and the optional line limit.
///
/// Implementations can be:
/// - heuristic (fast, but inaccurate),
/// - backed by a shaping engine (e.g. Parley), or
/// - backed by web platform text measurement (e.g. HTML canvas).
///
/// The measurer is trusted: the search performs no validation or retries on
/// its answers, and calls it at most `ceil(log2(n))` times per fit for `n`
/// candidate sizes.
pub trait OverflowMeasurer {
    /// Returns `true` if the styled text does not fit within `constraints`.
    fn overflows(&self, text: &str, style: &TextStyle, constraints: &FitConstraints) -> bool;
}

/// Text styling inputs relevant to fitting.
///
/// Everything except `font_size` is opaque to the fit search and is handed to
/// the measurer unchanged. More detailed typography (attributed runs, shaping
/// options, fallback, etc.) belongs in a higher-level text system.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in the caller's logical units (typically pixels).
    pub font_size: f64,
    /// The preferred font family.
    pub font_family: FontFamily,
    /// Font weight (e.g. `400` for normal, `700` for bold).
    pub font_weight: FontWeight,
    /// Font style (normal/italic/oblique).
    pub font_style: FontStyle,
    /// Explicit line height in logical units; `None` derives it from the
    /// font size.
    pub line_height: Option<f64>,
    /// Text decoration, carried for measurers that account for it.
    pub decoration: TextDecoration,
}

impl TextStyle {
    /// Creates a default `TextStyle` with the given `font_size`.
    #[must_use]
    pub fn new(font_size: f64) -> Self {
        Self {
            font_size,
            font_family: FontFamily::SansSerif,
            font_weight: FontWeight::NORMAL,
            font_style: FontStyle::Normal,
            line_height: None,
            decoration: TextDecoration::None,
        }
    }

    /// Returns a copy of this style with `font_size` replaced.
    ///
    /// The fit search uses this to derive per-probe styles; the explicit
    /// `line_height` (if any) is intentionally kept as-is.
    #[must_use]
    pub fn with_font_size(&self, font_size: f64) -> Self {
        let mut probe = self.clone();
        probe.font_size = font_size;
        probe
    }

    /// The line height used for box-fitting: explicit if set, else one em.
    #[must_use]
    pub fn resolved_line_height(&self) -> f64 {
        self.line_height.unwrap_or(self.font_size)
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(12.0)
    }
}

/// Font family selection.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// A generic serif family (CSS `serif`).
    Serif,
    /// A generic sans-serif family (CSS `sans-serif`).
    SansSerif,
    /// A generic monospace family (CSS `monospace`).
    Monospace,
    /// A named family (e.g. `"Inter"`, `"Helvetica Neue"`).
    Named(Arc<str>),
}

impl FontFamily {
    /// Returns the font family string for CSS-style font declarations.
    #[must_use]
    pub fn as_css_family(&self) -> &str {
        match self {
            Self::Serif => "serif",
            Self::SansSerif => "sans-serif",
            Self::Monospace => "monospace",
            Self::Named(name) => name,
        }
    }
}

/// CSS-style font weights.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontWeight(pub u16);

impl FontWeight {
    /// Normal weight (`400`).
    pub const NORMAL: Self = Self(400);
    /// Bold weight (`700`).
    pub const BOLD: Self = Self(700);
}

/// CSS-style font styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontStyle {
    /// Normal style.
    Normal,
    /// Italic style.
    Italic,
    /// Oblique style.
    Oblique,
}

/// Text decoration. Does not affect fitting in the shipped measurers, but is
/// part of the style contract so backends that pad decorated runs can honor it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextDecoration {
    /// No decoration.
    #[default]
    None,
    /// Underlined text.
    Underline,
    /// Struck-through text.
    LineThrough,
}

/// What happens to text that exceeds the constraints.
///
/// This is a passthrough for the measurer: truncated-with-ellipsis text still
/// counts as overflowing for fitting purposes, so the shipped measurers treat
/// both variants identically. Backends that reserve room for the ellipsis
/// glyph may distinguish them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Overflow {
    /// Clip overflowing glyphs at the box edge.
    #[default]
    Clip,
    /// Replace the overflowing tail with an ellipsis.
    Ellipsis,
}

/// The bounding box and line policy a fit probe is checked against.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitConstraints {
    /// Maximum width in logical units.
    pub max_width: f64,
    /// Maximum height in logical units.
    pub max_height: f64,
    /// Optional cap on the number of laid-out lines.
    pub max_lines: Option<usize>,
    /// Whether text may break at soft wrap opportunities. When `false`, each
    /// hard-broken line is laid out at its natural width.
    pub wrap: bool,
    /// Overflow policy, forwarded to the measurer.
    pub overflow: Overflow,
}

impl FitConstraints {
    /// Creates constraints for a bounding box, wrapping enabled, no line cap.
    #[must_use]
    pub fn new(max_width: f64, max_height: f64) -> Self {
        Self {
            max_width,
            max_height,
            max_lines: None,
            wrap: true,
            overflow: Overflow::Clip,
        }
    }

    /// Caps the number of lines.
    #[must_use]
    pub fn with_max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = Some(max_lines);
        self
    }

    /// Enables or disables soft wrapping.
    #[must_use]
    pub fn with_wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    /// Sets the overflow policy.
    #[must_use]
    pub fn with_overflow(mut self, overflow: Overflow) -> Self {
        self.overflow = overflow;
        self
    }
}

/// A tiny heuristic measurer suitable for demos, tests and early layout.
///
/// It assumes an average glyph width of ~0.6em, wraps greedily on whitespace,
/// and honors hard `\n` breaks. Empty text still occupies a single line, so
/// it can overflow a box shorter than one line height.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicMeasurer;

impl HeuristicMeasurer {
    const GLYPH_WIDTH_EM: f64 = 0.6;

    fn glyph_width(style: &TextStyle) -> f64 {
        Self::GLYPH_WIDTH_EM * style.font_size
    }

    /// Returns `(line_count, widest_line)` for the wrapped text.
    fn wrap_lines(text: &str, style: &TextStyle, constraints: &FitConstraints) -> (usize, f64) {
        let glyph = Self::glyph_width(style);
        let mut lines = 0_usize;
        let mut widest = 0.0_f64;

        for paragraph in text.split('\n') {
            if !constraints.wrap {
                lines += 1;
                widest = widest.max(glyph * paragraph.chars().count() as f64);
                continue;
            }

            let mut current = 0.0_f64;
            let mut started = false;
            for word in paragraph.split_whitespace() {
                let word_width = glyph * word.chars().count() as f64;
                if !started {
                    lines += 1;
                    started = true;
                    current = word_width;
                } else if current + glyph + word_width > constraints.max_width {
                    lines += 1;
                    current = word_width;
                } else {
                    current += glyph + word_width;
                }
                widest = widest.max(current);
            }
            if !started {
                // A blank paragraph still occupies a line.
                lines += 1;
            }
        }

        (lines, widest)
    }
}

impl OverflowMeasurer for HeuristicMeasurer {
    fn overflows(&self, text: &str, style: &TextStyle, constraints: &FitConstraints) -> bool {
        let (lines, widest) = Self::wrap_lines(text, style, constraints);
        if let Some(max_lines) = constraints.max_lines
            && lines > max_lines
        {
            return true;
        }

        let height = lines as f64 * style.resolved_line_height();
        widest > constraints.max_width || height > constraints.max_height
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn empty_text_occupies_one_line() {
        let m = HeuristicMeasurer;
        let style = TextStyle::new(100.0);
        assert!(!m.overflows("", &style, &FitConstraints::new(1.0, 100.0)));
        assert!(m.overflows("", &style, &FitConstraints::new(1.0, 50.0)));
    }

    #[test]
    fn wide_text_overflows_narrow_box() {
        let m = HeuristicMeasurer;
        let style = TextStyle::new(10.0);
        // "word" is 4 glyphs at 6.0 units each.
        let fits = FitConstraints::new(30.0, 100.0);
        let clipped = FitConstraints::new(20.0, 100.0);
        assert!(!m.overflows("word", &style, &fits));
        assert!(m.overflows("word", &style, &clipped));
    }

    #[test]
    fn wrapping_trades_width_for_height() {
        let m = HeuristicMeasurer;
        let style = TextStyle::new(10.0);
        // Two words of 24 units each wrap into two 10-unit-tall lines.
        let c = FitConstraints::new(30.0, 25.0);
        assert!(!m.overflows("word word", &style, &c));
        let short = FitConstraints::new(30.0, 15.0);
        assert!(m.overflows("word word", &style, &short));
    }

    #[test]
    fn line_limit_counts_wrapped_lines() {
        let m = HeuristicMeasurer;
        let style = TextStyle::new(10.0);
        let c = FitConstraints::new(30.0, 1000.0).with_max_lines(2);
        assert!(!m.overflows("word word", &style, &c));
        assert!(m.overflows("word word word", &style, &c));
    }

    #[test]
    fn no_wrap_lays_out_natural_width() {
        let m = HeuristicMeasurer;
        let style = TextStyle::new(10.0);
        let c = FitConstraints::new(30.0, 1000.0).with_wrap(false);
        assert!(m.overflows("word word", &style, &c));
    }

    #[test]
    fn hard_breaks_split_lines() {
        let m = HeuristicMeasurer;
        let style = TextStyle::new(10.0);
        let c = FitConstraints::new(30.0, 1000.0).with_max_lines(1);
        assert!(m.overflows("ab\ncd", &style, &c));
    }

    #[test]
    fn explicit_line_height_overrides_font_size() {
        let m = HeuristicMeasurer;
        let mut style = TextStyle::new(10.0);
        style.line_height = Some(30.0);
        let c = FitConstraints::new(100.0, 25.0);
        assert!(m.overflows("word", &style, &c));
    }
}
