//! Greedy page fitting against a text-measurement oracle.

use crate::measure::{TextMeasurer, Viewport};

/// Upper bound on fit iterations per page turn.
///
/// Sized well above the plausible number of words in a chunk; exhausting it
/// means the measurer violated the contract that shrinking text never grows
/// its rendered height.
pub const MAX_FIT_ITERATIONS: usize = 200;

/// Find the longest prefix of `text` that renders within the viewport.
///
/// Starts from the full text and greedily shrinks from the end, snapping to
/// word boundaries: each step drops the trailing word and the whitespace run
/// before it, then re-measures at the viewport width. When a candidate has
/// no whitespace left to snap to (a single token wider than the viewport),
/// the candidate is halved to the previous character boundary instead, so an
/// unbreakable token degrades to character-level truncation rather than
/// looping.
///
/// Returns a byte length in `1..=text.len()` that is always a character
/// boundary of `text`. Returns 0 only when nothing fits at all or the
/// iteration bound is exhausted; callers treat that as a fatal invariant
/// violation, since an empty page always fits.
///
/// The result is idempotent (re-fitting a fitted prefix returns it
/// unchanged) and monotone in viewport height.
pub fn fit_page<M: TextMeasurer + ?Sized>(text: &str, measurer: &M, viewport: Viewport) -> usize {
    let bytes = text.as_bytes();
    let mut candidate = bytes.len();
    let mut iterations = 0;

    while candidate > 0 && iterations < MAX_FIT_ITERATIONS {
        iterations += 1;
        let size = measurer.measure(&text[..candidate], viewport.width);
        if size.height <= viewport.height {
            return candidate;
        }
        candidate = match prev_word_break(bytes, candidate) {
            Some(shorter) => shorter,
            None => {
                log::warn!(
                    "no word break in {} unfit bytes; forcing character-level truncation",
                    candidate
                );
                floor_char_boundary(text, candidate / 2)
            }
        };
    }

    if !text.is_empty() {
        log::error!(
            "page fit failed after {} iterations for a {}x{} viewport",
            iterations,
            viewport.width,
            viewport.height
        );
    }
    0
}

/// Previous word-aligned candidate length: drops the trailing word and the
/// whitespace run before it. `None` when no earlier break exists.
///
/// ASCII whitespace never appears inside a multi-byte sequence, so the
/// returned index is always a character boundary.
fn prev_word_break(bytes: &[u8], end: usize) -> Option<usize> {
    let mut i = end;
    while i > 0 && !bytes[i - 1].is_ascii_whitespace() {
        i -= 1;
    }
    while i > 0 && bytes[i - 1].is_ascii_whitespace() {
        i -= 1;
    }
    (i > 0).then_some(i)
}

fn floor_char_boundary(text: &str, mut index: usize) -> usize {
    while index > 0 && !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}
