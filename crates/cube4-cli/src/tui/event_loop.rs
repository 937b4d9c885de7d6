use std::time::{Duration, Instant};

use crossterm::event;

use crate::tui::event::TuiEvent;

/// Decides which event comes next.
///
/// Ticks are only produced while a tick interval is set, so an idle game
/// blocks on terminal input instead of spinning. Redraws happen whenever
/// something may have changed the screen (a tick or a terminal event).
#[derive(Debug)]
pub(super) struct EventLoop {
    tick_interval: Option<Duration>,
    last_tick: Instant,
    dirty: bool,
}

impl Default for EventLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl EventLoop {
    pub fn new() -> Self {
        Self {
            tick_interval: None,
            last_tick: Instant::now(),
            dirty: true, // first frame
        }
    }

    /// Sets the tick interval; `None` stops ticking.
    ///
    /// Turning ticks on restarts the interval, so the first tick arrives one
    /// full interval later.
    pub(super) fn set_tick_interval(&mut self, interval: Option<Duration>) {
        if self.tick_interval.is_none() && interval.is_some() {
            self.last_tick = Instant::now();
        }
        self.tick_interval = interval;
    }

    pub(super) fn tick_interval(&self) -> Option<Duration> {
        self.tick_interval
    }

    /// Returns the next event, blocking until one is due.
    pub(super) fn next(&mut self) -> anyhow::Result<TuiEvent> {
        loop {
            let now = Instant::now();
            if self.tick_due(now) {
                self.last_tick = now;
                self.dirty = true;
                return Ok(TuiEvent::Tick);
            }

            if self.dirty {
                self.dirty = false;
                return Ok(TuiEvent::Render);
            }

            if let Some(timeout) = self.compute_timeout(now)
                && !event::poll(timeout)?
            {
                continue;
            }

            self.dirty = true;
            return Ok(event::read()?.into());
        }
    }

    fn tick_due(&self, now: Instant) -> bool {
        self.tick_interval
            .is_some_and(|interval| now.duration_since(self.last_tick) >= interval)
    }

    /// Time left until the next tick, or `None` to block on terminal input.
    fn compute_timeout(&self, now: Instant) -> Option<Duration> {
        let next_tick_at = self.last_tick + self.tick_interval?;
        Some(next_tick_at.saturating_duration_since(now))
    }
}
