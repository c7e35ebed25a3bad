//! Shared fixtures for the integration suite.

use page_stream::{SessionConfig, Viewport};

const SENTENCE: &str = "Жили были старик со старухой у самого синего моря они жили в ветхой землянке ровно тридцать лет и три года";

/// Cyrillic sample text, twelve sentences long.
///
/// Every word is separated by exactly one ASCII space, which is the
/// separator model the session's page turns assume, and every non-space
/// character is two bytes wide, so chunk cuts routinely land inside a
/// character.
pub fn sample_document() -> String {
    let mut doc = String::new();
    for i in 0..12 {
        if i > 0 {
            doc.push(' ');
        }
        doc.push_str(SENTENCE);
    }
    doc
}

/// Session sizing used across the suite: 160-byte chunks into a 96x30
/// viewport. With the default 6x10 font that is three lines of sixteen
/// columns, far less than a chunk holds, so every interior page break is
/// forced onto a word boundary.
pub fn reader_config() -> SessionConfig {
    SessionConfig {
        max_chunk_bytes: 160,
        viewport: Viewport::new(96, 30),
    }
}
