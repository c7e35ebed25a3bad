//! Auto-advance controller for continuous reading.
//!
//! The controller owns the virtual scroll position and the pacing state; the
//! platform owns the actual timer. While running, the caller schedules a
//! tick every [`tick_interval_ms`](AutoScroll::tick_interval_ms)
//! milliseconds and forwards it to [`on_tick`](AutoScroll::on_tick) with the
//! token obtained from [`toggle`](AutoScroll::toggle). Stopping invalidates
//! the token, so a tick that was already in flight when the user stopped is
//! reported as [`TickOutcome::Stale`] and must not be rescheduled; there
//! are no dangling callbacks.

use crate::error::SessionError;
use crate::measure::TextMeasurer;
use crate::session::{PageTurn, PaginationSession};
use crate::source::ByteRangeSource;

/// Pacing bounds for the auto-advance controller.
///
/// Defaults carry the original watch reader's constants: 3 px every 100 ms
/// against a 144 px viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AutoScrollConfig {
    /// Scroll position at which the next page is requested; normally the
    /// viewport height.
    pub max_scroll: i32,
    /// Tick interval when scrolling starts.
    pub start_interval_ms: u32,
    /// Scroll step when scrolling starts.
    pub start_delta: i32,
    /// Fastest allowed tick interval.
    pub min_interval_ms: u32,
    /// Slowest allowed tick interval.
    pub max_interval_ms: u32,
    /// Interval adjustment per speed press.
    pub interval_step_ms: u32,
}

impl Default for AutoScrollConfig {
    fn default() -> Self {
        Self {
            max_scroll: 144,
            start_interval_ms: 100,
            start_delta: 3,
            min_interval_ms: 100,
            max_interval_ms: 1000,
            interval_step_ms: 10,
        }
    }
}

impl AutoScrollConfig {
    /// Defaults with `max_scroll` taken from a viewport height.
    pub fn for_max_scroll(max_scroll: i32) -> Self {
        Self {
            max_scroll,
            ..Self::default()
        }
    }
}

/// Capability to deliver ticks for one running span.
///
/// Issued by [`AutoScroll::toggle`] when scrolling starts and invalidated
/// when it stops; a stale token makes [`AutoScroll::on_tick`] a no-op.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickToken(u32);

/// Result of one controller tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Scroll position moved; present it and reschedule.
    Scrolled(i32),
    /// The bottom was crossed and the next page is loaded; re-render,
    /// present the carry-over scroll position, and reschedule.
    PageAdvanced,
    /// The document is exhausted; the controller has stopped itself.
    EndOfDocument,
    /// The token is stale (controller stopped since the tick was
    /// scheduled); do not reschedule.
    Stale,
}

/// Discrete scroll request delegated to the viewport while stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollStep {
    /// Scroll up one step.
    Up,
    /// Scroll down one step.
    Down,
}

/// Effect of an up/down button press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PressAction {
    /// Pacing changed while running.
    SpeedChanged {
        /// New tick interval.
        interval_ms: u32,
        /// New per-tick scroll step.
        delta: i32,
    },
    /// Stopped: the press is an ordinary scroll, handled by the viewport.
    Scroll(ScrollStep),
}

/// Stopped ⇄ Running auto-advance state machine.
#[derive(Clone, Copy, Debug)]
pub struct AutoScroll {
    cfg: AutoScrollConfig,
    scroll_pos: i32,
    delta: i32,
    interval_ms: u32,
    running: bool,
    generation: u32,
}

impl AutoScroll {
    /// Create a stopped controller.
    pub fn new(cfg: AutoScrollConfig) -> Self {
        Self {
            cfg,
            scroll_pos: 0,
            delta: cfg.start_delta,
            interval_ms: cfg.start_interval_ms,
            running: false,
            generation: 0,
        }
    }

    /// Whether the controller is currently running.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Current virtual scroll position.
    pub fn scroll_position(&self) -> i32 {
        self.scroll_pos
    }

    /// Interval at which the caller should schedule the next tick.
    pub fn tick_interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Current per-tick scroll step.
    pub fn tick_delta(&self) -> i32 {
        self.delta
    }

    /// Flip between Stopped and Running.
    ///
    /// Returns `Some(token)` when scrolling starts (schedule the first tick
    /// at [`tick_interval_ms`](Self::tick_interval_ms)) and `None` when it
    /// stops, which also invalidates any outstanding token.
    pub fn toggle(&mut self) -> Option<TickToken> {
        if self.running {
            self.stop();
            None
        } else {
            self.running = true;
            Some(TickToken(self.generation))
        }
    }

    /// Stop and invalidate outstanding tick tokens.
    pub fn stop(&mut self) {
        self.running = false;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Process one timer tick.
    ///
    /// Advances the scroll position; on crossing `max_scroll`, resets it to
    /// a small carry-over (`2 * delta`, so motion reads as continuous) and
    /// turns the page. At end of document the controller stops itself.
    pub fn on_tick<S, M>(
        &mut self,
        token: TickToken,
        session: &mut PaginationSession<S, M>,
    ) -> Result<TickOutcome, SessionError<S::Error>>
    where
        S: ByteRangeSource,
        M: TextMeasurer,
    {
        if !self.running || token.0 != self.generation {
            return Ok(TickOutcome::Stale);
        }

        self.scroll_pos += self.delta;
        if self.scroll_pos < self.cfg.max_scroll {
            return Ok(TickOutcome::Scrolled(self.scroll_pos));
        }

        self.scroll_pos = self.delta * 2;
        match session.advance()? {
            PageTurn::Loaded => Ok(TickOutcome::PageAdvanced),
            PageTurn::EndOfDocument => {
                self.stop();
                Ok(TickOutcome::EndOfDocument)
            }
        }
    }

    /// Up press: slow down while running, otherwise an ordinary scroll-up.
    ///
    /// Slowing is two-stage: shrink the step back to 1 px first, then
    /// stretch the interval toward its ceiling.
    pub fn press_up(&mut self) -> PressAction {
        if !self.running {
            return PressAction::Scroll(ScrollStep::Up);
        }
        if self.delta > 1 {
            self.delta -= 1;
        } else if self.interval_ms < self.cfg.max_interval_ms {
            self.interval_ms =
                (self.interval_ms + self.cfg.interval_step_ms).min(self.cfg.max_interval_ms);
        }
        PressAction::SpeedChanged {
            interval_ms: self.interval_ms,
            delta: self.delta,
        }
    }

    /// Down press: speed up while running, otherwise an ordinary
    /// scroll-down.
    ///
    /// Speeding is two-stage: shrink the interval to its floor first, then
    /// grow the step up to half the viewport.
    pub fn press_down(&mut self) -> PressAction {
        if !self.running {
            return PressAction::Scroll(ScrollStep::Down);
        }
        if self.interval_ms > self.cfg.min_interval_ms {
            self.interval_ms = self
                .interval_ms
                .saturating_sub(self.cfg.interval_step_ms)
                .max(self.cfg.min_interval_ms);
        } else if self.delta < self.cfg.max_scroll / 2 {
            self.delta += 1;
        }
        PressAction::SpeedChanged {
            interval_ms: self.interval_ms,
            delta: self.delta,
        }
    }
}
