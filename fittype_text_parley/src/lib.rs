// Copyright 2025 the FitType Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parley-backed overflow measurement adapter.
//!
//! This crate implements [`fittype_text::OverflowMeasurer`] using Parley, so
//! the fit search probes against real shaped line breaking instead of
//! heuristics.

#![no_std]

extern crate alloc;

use alloc::borrow::Cow;
use core::cell::RefCell;

use fittype_text::{
    FitConstraints, FontFamily, FontStyle, OverflowMeasurer, TextStyle,
};
use parley::style::{FontFamily as ParleyFontFamily, FontStack, GenericFamily, StyleProperty};
use parley::{Alignment, AlignmentOptions, FontContext, FontStyle as ParleyFontStyle, FontWeight};

/// An [`OverflowMeasurer`] backed by Parley.
///
/// Lines are broken at the constraint width; the laid-out text overflows when
/// it needs more lines than allowed, more height than the box provides, or —
/// for unbreakable content — more width than the box provides.
pub struct ParleyOverflowMeasurer {
    font_cx: RefCell<FontContext>,
    layout_cx: RefCell<parley::LayoutContext<()>>,
    display_scale: f32,
    quantize: bool,
}

impl core::fmt::Debug for ParleyOverflowMeasurer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ParleyOverflowMeasurer")
            .field("display_scale", &self.display_scale)
            .field("quantize", &self.quantize)
            .finish_non_exhaustive()
    }
}

impl ParleyOverflowMeasurer {
    /// Creates a new Parley-backed measurer using Parley's default system
    /// font configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            font_cx: RefCell::new(FontContext::new()),
            layout_cx: RefCell::new(parley::LayoutContext::new()),
            display_scale: 1.0,
            quantize: true,
        }
    }

    /// Sets the display scale passed to Parley.
    ///
    /// This is typically a device pixel ratio. Constraints are given in
    /// logical coordinates and scaled up before the layout pass.
    #[must_use]
    pub fn with_display_scale(mut self, display_scale: f32) -> Self {
        self.display_scale = display_scale.max(0.0);
        self
    }

    /// Sets whether Parley should quantize layout coordinates to pixel
    /// boundaries.
    #[must_use]
    pub fn with_quantize(mut self, quantize: bool) -> Self {
        self.quantize = quantize;
        self
    }

    fn parley_font_stack<'a>(family: &'a FontFamily) -> FontStack<'a> {
        let family = match family {
            FontFamily::Serif => ParleyFontFamily::Generic(GenericFamily::Serif),
            FontFamily::SansSerif => ParleyFontFamily::Generic(GenericFamily::SansSerif),
            FontFamily::Monospace => ParleyFontFamily::Generic(GenericFamily::Monospace),
            FontFamily::Named(name) => ParleyFontFamily::Named(Cow::Borrowed(name.as_ref())),
        };
        FontStack::from(family)
    }

    fn parley_font_style(style: FontStyle) -> ParleyFontStyle {
        match style {
            FontStyle::Normal => ParleyFontStyle::Normal,
            FontStyle::Italic => ParleyFontStyle::Italic,
            FontStyle::Oblique => ParleyFontStyle::Oblique(None),
        }
    }

    fn scaled_f32(value: f64, scale: f32) -> f32 {
        let value = value * f64::from(scale);
        if !value.is_finite() {
            return 0.0;
        }
        let value = value.max(0.0);
        if value >= f64::from(f32::MAX) {
            f32::MAX
        } else {
            #[allow(
                clippy::cast_possible_truncation,
                reason = "Value is clamped to f32::MAX above"
            )]
            {
                value as f32
            }
        }
    }
}

impl Default for ParleyOverflowMeasurer {
    fn default() -> Self {
        Self::new()
    }
}

impl OverflowMeasurer for ParleyOverflowMeasurer {
    fn overflows(&self, text: &str, style: &TextStyle, constraints: &FitConstraints) -> bool {
        if text.is_empty() {
            // An empty layout still occupies one line.
            let line_height = style.line_height.unwrap_or(style.font_size);
            return line_height > constraints.max_height;
        }

        let scale = self.display_scale.max(1.0e-6);
        let max_width = Self::scaled_f32(constraints.max_width, scale);
        let max_height = f64::from(Self::scaled_f32(constraints.max_height, scale));

        let mut font_cx = self.font_cx.borrow_mut();
        let mut layout_cx = self.layout_cx.borrow_mut();

        let mut builder = layout_cx.ranged_builder(&mut font_cx, text, scale, self.quantize);
        builder.push_default(StyleProperty::FontSize(Self::scaled_f32(
            style.font_size,
            1.0,
        )));
        builder.push_default(StyleProperty::FontStack(Self::parley_font_stack(
            &style.font_family,
        )));
        builder.push_default(StyleProperty::FontStyle(Self::parley_font_style(
            style.font_style,
        )));
        builder.push_default(StyleProperty::FontWeight(FontWeight::new(
            style.font_weight.0 as f32,
        )));

        let mut layout: parley::Layout<()> = builder.build(text);
        let break_width = constraints.wrap.then_some(max_width);
        layout.break_all_lines(break_width);
        layout.align(None, Alignment::Start, AlignmentOptions::default());

        let explicit_line_height = style
            .line_height
            .map(|lh| f64::from(Self::scaled_f32(lh, scale)));

        let mut lines = 0_usize;
        let mut height = 0.0_f64;
        let mut widest = 0.0_f64;
        for line in layout.lines() {
            let m = line.metrics();
            lines += 1;
            height += explicit_line_height
                .unwrap_or_else(|| f64::from(m.ascent) + f64::from(m.descent) + f64::from(m.leading));
            widest = widest.max(f64::from(m.advance));
        }

        if let Some(max_lines) = constraints.max_lines
            && lines > max_lines
        {
            return true;
        }
        widest > f64::from(max_width) || height > max_height
    }
}
