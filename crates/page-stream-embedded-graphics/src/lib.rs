//! embedded-graphics mono-font measurement backend for `page-stream`.
//!
//! Implements the engine's [`TextMeasurer`] oracle on top of an
//! `embedded-graphics` [`MonoFont`], simulating the renderer's greedy
//! word-wrap so that fitting decisions and the eventual on-glass output use
//! the same width model.

#![cfg_attr(
    not(test),
    deny(
        clippy::expect_used,
        clippy::unwrap_used,
        clippy::panic,
        clippy::todo,
        clippy::unimplemented
    )
)]

use embedded_graphics::mono_font::{ascii::FONT_6X10, MonoFont};
use page_stream::{TextMeasurer, TextSize};
use std::sync::Arc;

/// [`TextMeasurer`] backed by a mono font's fixed glyph metrics.
///
/// Word-wrap model: lines break between words; a word wider than the wrap
/// width hard-wraps at glyph granularity; explicit newlines always break.
#[derive(Clone, Debug)]
pub struct EgTextMeasurer {
    font: &'static MonoFont<'static>,
    line_gap_px: i32,
}

impl EgTextMeasurer {
    /// Create a measurer using the default 6x10 ASCII font.
    pub fn new() -> Self {
        Self::with_font(&FONT_6X10)
    }

    /// Create a measurer for an explicit mono font.
    pub fn with_font(font: &'static MonoFont<'static>) -> Self {
        Self {
            font,
            line_gap_px: 0,
        }
    }

    /// Extra vertical gap between lines.
    pub fn with_line_gap(mut self, line_gap_px: i32) -> Self {
        self.line_gap_px = line_gap_px;
        self
    }

    /// Create a shared measurer trait object for session wiring.
    pub fn shared() -> Arc<dyn TextMeasurer> {
        Arc::new(Self::new())
    }

    fn glyph_width(&self) -> i32 {
        (self.font.character_size.width + self.font.character_spacing) as i32
    }

    fn line_height(&self) -> i32 {
        self.font.character_size.height as i32 + self.line_gap_px
    }
}

impl Default for EgTextMeasurer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextMeasurer for EgTextMeasurer {
    fn measure(&self, text: &str, max_width: i32) -> TextSize {
        if text.is_empty() {
            return TextSize::default();
        }

        let glyph_width = self.glyph_width().max(1);
        let cols = max_width / glyph_width;
        if cols < 1 {
            log::warn!(
                "wrap width {}px narrower than one {}px glyph",
                max_width,
                glyph_width
            );
        }
        let (lines, widest) = wrap_columns(text, cols.max(1) as usize);

        TextSize {
            width: widest as i32 * glyph_width,
            height: lines as i32 * self.line_height(),
        }
    }
}

/// Greedy word wrap on a character grid: returns (line count, widest line
/// in columns).
fn wrap_columns(text: &str, cols: usize) -> (usize, usize) {
    let mut lines = 0usize;
    let mut widest = 0usize;

    for paragraph in text.split('\n') {
        let mut line_len = 0usize;
        for word in paragraph.split_whitespace() {
            let mut len = word.chars().count();
            let sep = usize::from(line_len > 0);
            if line_len + sep + len <= cols {
                line_len += sep + len;
                continue;
            }
            if line_len > 0 {
                lines += 1;
                widest = widest.max(line_len);
                line_len = 0;
            }
            // A word wider than the line hard-wraps at glyph granularity.
            while len > cols {
                lines += 1;
                widest = widest.max(cols);
                len -= cols;
            }
            line_len = len;
        }
        // An empty paragraph still occupies a line.
        lines += 1;
        widest = widest.max(line_len);
    }

    (lines, widest)
}
