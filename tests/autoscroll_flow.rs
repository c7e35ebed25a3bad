//! Continuous-reading flow: the auto-advance controller driving a real
//! session all the way to the end of the document.

mod common;

use common::fixtures::{reader_config, sample_document};
use page_stream::{
    AutoScroll, AutoScrollConfig, PageTurn, PaginationSession, PressAction, SliceSource,
    TickOutcome,
};
use page_stream_embedded_graphics::EgTextMeasurer;

fn reading_session(doc: &str) -> PaginationSession<SliceSource<'_>, EgTextMeasurer> {
    let mut session = PaginationSession::new(
        SliceSource::new(doc.as_bytes()),
        EgTextMeasurer::new(),
        reader_config(),
    );
    assert_eq!(session.load_page(0), Ok(PageTurn::Loaded));
    session
}

/// Page count from a plain manual walk, for cross-checking the controller.
fn count_pages(doc: &str) -> usize {
    let mut session = reading_session(doc);
    let mut pages = 1;
    while session.advance() == Ok(PageTurn::Loaded) {
        pages += 1;
        assert!(pages < 200, "pagination failed to terminate");
    }
    pages
}

#[test]
fn continuous_reading_visits_every_page() {
    let doc = sample_document();
    let expected = count_pages(&doc);
    assert!(expected > 10, "expected a multi-page document");

    let mut session = reading_session(&doc);
    let viewport = reader_config().viewport;
    let mut auto = AutoScroll::new(AutoScrollConfig::for_max_scroll(viewport.height));
    let token = auto.toggle().expect("controller should start");

    let mut turns = 0;
    let mut ticks = 0;
    loop {
        ticks += 1;
        assert!(ticks < 100_000, "auto-advance failed to terminate");
        match auto.on_tick(token, &mut session).expect("tick failed") {
            TickOutcome::Scrolled(pos) => assert!(pos < viewport.height),
            TickOutcome::PageAdvanced => turns += 1,
            TickOutcome::EndOfDocument => break,
            TickOutcome::Stale => panic!("token went stale mid-run"),
        }
    }

    assert_eq!(turns, expected - 1);
    assert!(!auto.is_running(), "controller must stop itself at the end");
}

#[test]
fn stopping_mid_read_keeps_the_page() {
    let doc = sample_document();
    let mut session = reading_session(&doc);
    let mut auto = AutoScroll::new(AutoScrollConfig::for_max_scroll(
        reader_config().viewport.height,
    ));
    let token = auto.toggle().expect("controller should start");

    for _ in 0..3 {
        let outcome = auto.on_tick(token, &mut session).expect("tick failed");
        assert!(matches!(outcome, TickOutcome::Scrolled(_)));
    }
    assert!(auto.toggle().is_none()); // stop

    let page_before = session.current_page();
    assert_eq!(
        auto.on_tick(token, &mut session),
        Ok(TickOutcome::Stale),
        "in-flight tick after stop must be dropped"
    );
    assert_eq!(session.current_page(), page_before);
}

#[test]
fn speed_presses_change_the_pacing_mid_run() {
    let doc = sample_document();
    let mut session = reading_session(&doc);
    let mut auto = AutoScroll::new(AutoScrollConfig::for_max_scroll(
        reader_config().viewport.height,
    ));
    let token = auto.toggle().expect("controller should start");

    assert_eq!(auto.on_tick(token, &mut session), Ok(TickOutcome::Scrolled(3)));

    // Already at the interval floor, so a down press grows the step.
    assert_eq!(
        auto.press_down(),
        PressAction::SpeedChanged {
            interval_ms: 100,
            delta: 4,
        }
    );
    assert_eq!(auto.on_tick(token, &mut session), Ok(TickOutcome::Scrolled(7)));
}
