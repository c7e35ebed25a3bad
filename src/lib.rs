//! Forward-only pagination for streamed UTF-8 text.
//!
//! `page-stream` turns a byte-addressable document that is too large to hold
//! in memory into a sequence of pages, each of which fills a fixed-size
//! viewport under word-wrap without ever tearing a multi-byte character.
//! The engine is platform-agnostic: bytes come in through a
//! [`ByteRangeSource`], layout questions go out through a [`TextMeasurer`],
//! and timers/buttons stay on the caller's side of [`AutoScroll`].
//!
//! The pipeline per page turn is: load a bounded raw chunk, repair its UTF-8
//! boundaries ([`trim_chunk`]), find the longest word-aligned prefix that
//! fits the viewport ([`fit_page`]), and advance the document cursor past
//! the fitted bytes plus the single-byte inter-page separator.
//!
//! # Usage
//!
//! ```rust
//! use page_stream::{
//!     PageTurn, PaginationSession, SessionConfig, SliceSource, TextMeasurer, TextSize, Viewport,
//! };
//!
//! // A character-grid oracle: `max_width` columns per line, one unit per row.
//! struct GridMeasurer;
//!
//! impl TextMeasurer for GridMeasurer {
//!     fn measure(&self, text: &str, max_width: i32) -> TextSize {
//!         let cols = max_width.max(1) as usize;
//!         let lines = text.chars().count().div_ceil(cols).max(1);
//!         TextSize { width: max_width, height: lines as i32 }
//!     }
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let doc = b"The quick brown fox jumps over the lazy dog";
//! let cfg = SessionConfig {
//!     max_chunk_bytes: 16,
//!     viewport: Viewport::new(8, 1),
//! };
//! let mut session = PaginationSession::new(SliceSource::new(doc), GridMeasurer, cfg);
//!
//! session.load_page(0)?;
//! assert_eq!(session.page_text(), "The");
//!
//! let mut pages = 1;
//! while session.advance()? == PageTurn::Loaded {
//!     pages += 1;
//! }
//! assert_eq!(pages, 7);
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
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

extern crate alloc;

pub mod autoscroll;
pub mod chunk;
pub mod error;
pub mod fit;
pub mod measure;
pub mod session;
pub mod source;

pub use autoscroll::{
    AutoScroll, AutoScrollConfig, PressAction, ScrollStep, TickOutcome, TickToken,
};
pub use chunk::{trim_chunk, utf8_prefix_len};
pub use error::SessionError;
pub use fit::{fit_page, MAX_FIT_ITERATIONS};
pub use measure::{TextMeasurer, TextSize, Viewport};
pub use session::{PageBounds, PageTurn, PaginationSession, SessionConfig};
#[cfg(feature = "std")]
pub use source::FileSource;
pub use source::{ByteRangeSource, SliceSource};
