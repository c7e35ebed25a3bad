//! Chunk-boundary repair under hostile alignment: chunk sizes that cut
//! multi-byte characters, and page loads that start inside one.

mod common;

use common::fixtures::sample_document;
use page_stream::{
    PageTurn, PaginationSession, SessionConfig, SliceSource, TextMeasurer, Viewport,
};
use page_stream_embedded_graphics::EgTextMeasurer;

/// An odd chunk size over two-byte Cyrillic text guarantees that chunk
/// reads routinely end in the middle of a character.
fn tight_config() -> SessionConfig {
    SessionConfig {
        max_chunk_bytes: 81,
        viewport: Viewport::new(60, 20),
    }
}

#[test]
fn mid_character_chunk_cuts_never_tear_a_page() {
    let doc = sample_document();
    let mut session = PaginationSession::new(
        SliceSource::new(doc.as_bytes()),
        EgTextMeasurer::new(),
        tight_config(),
    );

    assert_eq!(session.load_page(0), Ok(PageTurn::Loaded));
    let mut pages = Vec::new();
    loop {
        let bounds = session.current_page();
        let text = session.page_text().to_owned();
        // The page is exactly the document slice it claims to be: the
        // dropped partial character stays in the source for the next read.
        let end = bounds.offset as usize + bounds.len;
        assert_eq!(&doc[bounds.offset as usize..end], text);
        pages.push(text);

        assert!(pages.len() < 300, "pagination failed to terminate");
        match session.advance() {
            Ok(PageTurn::Loaded) => {}
            Ok(PageTurn::EndOfDocument) => break,
            Err(err) => panic!("page turn failed: {err}"),
        }
    }

    assert_eq!(pages.join(" "), doc);
}

#[test]
fn load_from_any_offset_makes_forward_progress() {
    let doc = sample_document();
    let measurer = EgTextMeasurer::new();
    let cfg = tight_config();

    for offset in 0..40u64 {
        let mut session =
            PaginationSession::new(SliceSource::new(doc.as_bytes()), EgTextMeasurer::new(), cfg);
        assert_eq!(session.load_page(offset), Ok(PageTurn::Loaded), "at {offset}");

        let bounds = session.current_page();
        assert_eq!(bounds.offset, offset);
        assert!(bounds.len >= 1);

        let size = measurer.measure(session.page_text(), cfg.viewport.width);
        assert!(size.height <= cfg.viewport.height, "at {offset}");
    }
}

#[test]
fn offset_inside_a_character_is_padded_with_spaces() {
    let doc = sample_document();
    let mut session = PaginationSession::new(
        SliceSource::new(doc.as_bytes()),
        EgTextMeasurer::new(),
        tight_config(),
    );

    // "Жили" starts with a two-byte character; offset 1 lands on its
    // continuation byte.
    assert_eq!(session.load_page(1), Ok(PageTurn::Loaded));
    let text = session.page_text();
    assert!(text.starts_with(' '), "got {text:?}");
    assert!(text[1..].starts_with("или"), "got {text:?}");
}
