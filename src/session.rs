//! Forward-only pagination cursor over a byte-range source.

use alloc::vec::Vec;

use crate::chunk;
use crate::error::SessionError;
use crate::fit;
use crate::measure::{TextMeasurer, Viewport};
use crate::source::ByteRangeSource;

/// Session sizing and viewport options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// Raw bytes loaded per page turn.
    ///
    /// Must comfortably exceed one viewport worth of text; the fitter trims
    /// the slack. The chunk buffer carries one extra terminator byte.
    pub max_chunk_bytes: usize,
    /// Page viewport the fitter targets.
    pub viewport: Viewport,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_chunk_bytes: 4096,
            viewport: Viewport::new(480, 800),
        }
    }
}

impl SessionConfig {
    /// Small-display preset matching the original watch reader (360-byte
    /// chunks into a 144x144 viewport).
    pub fn embedded() -> Self {
        Self {
            max_chunk_bytes: 360,
            viewport: Viewport::new(144, 144),
        }
    }
}

/// Byte range of the current page within the source document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PageBounds {
    /// Absolute offset of the page's first byte.
    pub offset: u64,
    /// Page length in bytes, trimmed slack excluded.
    pub len: usize,
}

/// Result of a page-turn request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageTurn {
    /// A new page is loaded; re-render it and reset the scroll position.
    Loaded,
    /// The source is exhausted; the current page is unchanged.
    EndOfDocument,
}

/// Forward-only document cursor producing viewport-sized pages.
///
/// The session is the single owner of the chunk buffers and the current
/// page offset/length; everything mutates on the one event-processing
/// thread, so no internal locking is needed. Loads land in a scratch
/// buffer and are swapped in only on success, so a failed or end-of-document
/// load never disturbs the displayed page.
#[derive(Debug)]
pub struct PaginationSession<S, M> {
    source: S,
    measurer: M,
    cfg: SessionConfig,
    buf: Vec<u8>,
    scratch: Vec<u8>,
    offset: u64,
    page_len: usize,
}

impl<S, M> PaginationSession<S, M>
where
    S: ByteRangeSource,
    M: TextMeasurer,
{
    /// Create a session with no page loaded yet; call
    /// [`load_page`](Self::load_page) with the starting offset.
    pub fn new(source: S, measurer: M, cfg: SessionConfig) -> Self {
        Self {
            source,
            measurer,
            cfg,
            buf: Vec::new(),
            scratch: Vec::with_capacity(cfg.max_chunk_bytes + 1),
            offset: 0,
            page_len: 0,
        }
    }

    /// Load the page starting at the absolute byte `offset`.
    ///
    /// Reads a bounded chunk, repairs its UTF-8 boundaries, fits it to the
    /// viewport, and moves the cursor. On [`PageTurn::EndOfDocument`]
    /// (empty read, or a chunk that trims to nothing) and on errors, the
    /// cursor and the displayed page are left untouched.
    pub fn load_page(&mut self, offset: u64) -> Result<PageTurn, SessionError<S::Error>> {
        let max = self.cfg.max_chunk_bytes;
        self.scratch.resize(max + 1, 0);
        let loaded = self
            .source
            .read_range(offset, &mut self.scratch[..max])
            .map_err(SessionError::Source)?;
        if loaded == 0 {
            return Ok(PageTurn::EndOfDocument);
        }

        let clean = chunk::trim_chunk(&mut self.scratch, loaded);
        if clean == 0 {
            // Nothing but an unterminated multi-byte tail; the document
            // effectively ends here.
            return Ok(PageTurn::EndOfDocument);
        }

        let text = match core::str::from_utf8(&self.scratch[..clean]) {
            Ok(text) => text,
            Err(_) => {
                log::error!("trimmed chunk at offset {} is not valid UTF-8", offset);
                return Err(SessionError::Unfittable { offset });
            }
        };
        let fitted = fit::fit_page(text, &self.measurer, self.cfg.viewport);
        if fitted == 0 {
            return Err(SessionError::Unfittable { offset });
        }

        core::mem::swap(&mut self.buf, &mut self.scratch);
        self.offset = offset;
        self.page_len = fitted;
        Ok(PageTurn::Loaded)
    }

    /// Turn to the next page.
    ///
    /// Advances past the fitted bytes plus one separator byte. The
    /// separator is assumed to be a single-byte whitespace character; a
    /// document whose inter-page boundary uses multi-byte or repeated
    /// separators misaligns the next load, which the boundary repair then
    /// patches with visible space placeholders.
    pub fn advance(&mut self) -> Result<PageTurn, SessionError<S::Error>> {
        let next = self.offset + self.page_len as u64 + 1;
        self.load_page(next)
    }

    /// Text of the current page; empty before the first successful load.
    pub fn page_text(&self) -> &str {
        core::str::from_utf8(&self.buf[..self.page_len]).unwrap_or_default()
    }

    /// Byte range of the current page.
    pub fn current_page(&self) -> PageBounds {
        PageBounds {
            offset: self.offset,
            len: self.page_len,
        }
    }

    /// Session configuration.
    pub fn config(&self) -> SessionConfig {
        self.cfg
    }
}
