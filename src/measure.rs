//! Text measurement oracle and viewport geometry.
//!
//! Measurement is a pure query against an abstract layout backend: the
//! engine never touches a live display widget to ask how tall a block of
//! text would render. Backends live outside this crate (see the
//! `page-stream-embedded-graphics` adapter for a mono-font implementation).

use alloc::boxed::Box;
use alloc::sync::Arc;

/// Rendered size of a text block in logical pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextSize {
    /// Widest rendered line.
    pub width: i32,
    /// Total rendered height.
    pub height: i32,
}

/// Fixed page viewport in logical pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    /// Wrap width for page text.
    pub width: i32,
    /// Maximum rendered page height.
    pub height: i32,
}

impl Viewport {
    /// Create a viewport.
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Synchronous text-layout oracle.
///
/// Implementations measure `text` word-wrapped and left-aligned into a box
/// of `max_width` logical pixels with unbounded height, and must be free of
/// externally visible side effects: the fitter calls this up to
/// [`MAX_FIT_ITERATIONS`](crate::MAX_FIT_ITERATIONS) times per page turn.
pub trait TextMeasurer: Send + Sync {
    /// Measure the rendered size of `text` at the given wrap width.
    fn measure(&self, text: &str, max_width: i32) -> TextSize;
}

impl<'a, M: TextMeasurer + ?Sized> TextMeasurer for &'a M {
    fn measure(&self, text: &str, max_width: i32) -> TextSize {
        (**self).measure(text, max_width)
    }
}

impl<M: TextMeasurer + ?Sized> TextMeasurer for Box<M> {
    fn measure(&self, text: &str, max_width: i32) -> TextSize {
        (**self).measure(text, max_width)
    }
}

impl<M: TextMeasurer + ?Sized> TextMeasurer for Arc<M> {
    fn measure(&self, text: &str, max_width: i32) -> TextSize {
        (**self).measure(text, max_width)
    }
}
