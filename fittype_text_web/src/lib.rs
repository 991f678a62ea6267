// Copyright 2025 the FitType Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web/WASM overflow measurement adapter.
//!
//! This crate provides a [`fittype_text::OverflowMeasurer`] implementation
//! for `wasm32-*` targets using HTML Canvas `measureText`. Canvas only
//! measures single lines, so wrapping is simulated by greedily packing words
//! against the width constraint before the box checks.
//!
//! Notes:
//! - This uses `web-sys`/`wasm-bindgen` only on `wasm32` targets.
//! - Non-`wasm32` builds fall back to [`HeuristicMeasurer`].

#![no_std]

extern crate alloc;

#[cfg(target_arch = "wasm32")]
use alloc::{format, string::String};
#[cfg(not(target_arch = "wasm32"))]
use fittype_text::HeuristicMeasurer;
use fittype_text::{FitConstraints, OverflowMeasurer, TextStyle};

/// A `wasm32` measurer backed by HTML Canvas 2D text metrics.
///
/// On non-`wasm32` targets, this type is still available but always falls
/// back to [`HeuristicMeasurer`].
#[derive(Clone, Debug)]
pub struct WebOverflowMeasurer {
    #[cfg(target_arch = "wasm32")]
    ctx: web_sys::CanvasRenderingContext2d,
}

#[cfg(not(target_arch = "wasm32"))]
impl Default for WebOverflowMeasurer {
    fn default() -> Self {
        Self::new()
    }
}

impl WebOverflowMeasurer {
    #[cfg(target_arch = "wasm32")]
    fn css_font(style: &TextStyle) -> String {
        let family = style.font_family.as_css_family();
        let weight = style.font_weight.0;
        let font_style = match style.font_style {
            fittype_text::FontStyle::Normal => "normal",
            fittype_text::FontStyle::Italic => "italic",
            fittype_text::FontStyle::Oblique => "oblique",
        };
        format!("{font_style} {weight} {}px {family}", style.font_size)
    }

    /// Creates a web measurer using an offscreen canvas.
    ///
    /// This requires a browser-like environment with `window` and `document`.
    #[cfg(target_arch = "wasm32")]
    pub fn new() -> Result<Self, wasm_bindgen::JsValue> {
        use wasm_bindgen::JsCast as _;

        let window = web_sys::window()
            .ok_or_else(|| wasm_bindgen::JsValue::from_str("fittype_text_web: missing window"))?;
        let document = window
            .document()
            .ok_or_else(|| wasm_bindgen::JsValue::from_str("fittype_text_web: missing document"))?;
        let canvas = document
            .create_element("canvas")?
            .dyn_into::<web_sys::HtmlCanvasElement>()?;
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| {
                wasm_bindgen::JsValue::from_str("fittype_text_web: missing 2d context")
            })?
            .dyn_into::<web_sys::CanvasRenderingContext2d>()?;
        Ok(Self { ctx })
    }

    /// Creates a web measurer that uses an existing canvas 2D context.
    ///
    /// This is useful for embedders that want to reuse an existing canvas (or
    /// an offscreen canvas) instead of having `fittype_text_web` create DOM
    /// nodes.
    #[cfg(target_arch = "wasm32")]
    #[must_use]
    pub fn from_canvas_context(ctx: web_sys::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    /// Creates a non-web measurer that always falls back to heuristics.
    #[cfg(not(target_arch = "wasm32"))]
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }

    #[cfg(target_arch = "wasm32")]
    fn line_width(&self, text: &str, style: &TextStyle) -> f64 {
        match self.ctx.measure_text(text) {
            Ok(m) => m.width(),
            // ~0.6em per glyph, matching the heuristic measurer.
            Err(_) => 0.6 * style.font_size * text.chars().count() as f64,
        }
    }

    /// Greedy word wrap on measured widths; returns `(lines, widest_line)`.
    #[cfg(target_arch = "wasm32")]
    fn wrap_lines(&self, text: &str, style: &TextStyle, constraints: &FitConstraints) -> (usize, f64) {
        let space = self.line_width(" ", style);
        let mut lines = 0_usize;
        let mut widest = 0.0_f64;

        for paragraph in text.split('\n') {
            if !constraints.wrap {
                lines += 1;
                widest = widest.max(self.line_width(paragraph, style));
                continue;
            }

            let mut current = 0.0_f64;
            let mut started = false;
            for word in paragraph.split_whitespace() {
                let word_width = self.line_width(word, style);
                if !started {
                    lines += 1;
                    started = true;
                    current = word_width;
                } else if current + space + word_width > constraints.max_width {
                    lines += 1;
                    current = word_width;
                } else {
                    current += space + word_width;
                }
                widest = widest.max(current);
            }
            if !started {
                lines += 1;
            }
        }

        (lines, widest)
    }

    #[cfg(target_arch = "wasm32")]
    fn line_height(&self, style: &TextStyle) -> f64 {
        if let Some(lh) = style.line_height {
            return lh;
        }

        // The bounding box fields are supported in modern browsers but may be
        // 0 or absent in older engines. Treat zeros as unknown.
        let metrics = match self.ctx.measure_text("Mg") {
            Ok(m) => m,
            Err(_) => return style.font_size,
        };
        let ascent = metrics.actual_bounding_box_ascent();
        let descent = metrics.actual_bounding_box_descent();

        let ascent = if ascent > 0.0 {
            ascent
        } else {
            0.8 * style.font_size
        };
        let descent = if descent > 0.0 {
            descent
        } else {
            0.2 * style.font_size
        };
        ascent + descent
    }
}

impl OverflowMeasurer for WebOverflowMeasurer {
    fn overflows(&self, text: &str, style: &TextStyle, constraints: &FitConstraints) -> bool {
        #[cfg(target_arch = "wasm32")]
        {
            self.ctx.set_font(&Self::css_font(style));
            let (lines, widest) = self.wrap_lines(text, style, constraints);
            if let Some(max_lines) = constraints.max_lines
                && lines > max_lines
            {
                return true;
            }
            let height = lines as f64 * self.line_height(style);
            widest > constraints.max_width || height > constraints.max_height
        }

        #[cfg(not(target_arch = "wasm32"))]
        HeuristicMeasurer.overflows(text, style, constraints)
    }
}
