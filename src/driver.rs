//! Frame clock: turns wall time into a count of due simulation ticks.
//!
//! The driver never touches the game. The event loop asks how many ticks
//! are due and steps the game that many times, so the step function stays
//! a plain synchronous call.

use crate::constants::{DEFAULT_FPS, MAX_CATCH_UP_TICKS};
use std::time::{Duration, Instant};

/// Fixed-rate tick scheduler with a catch-up cap.
#[derive(Debug, Clone)]
pub struct FrameDriver {
    frame: Duration,
    max_catch_up: u32,
    accumulator: Duration,
    last_poll: Option<Instant>,
    running: bool,
    ticks_issued: u64,
}

impl Default for FrameDriver {
    fn default() -> Self {
        Self::new(DEFAULT_FPS)
    }
}

impl FrameDriver {
    /// A stopped driver for `fps` frames per second (0 is treated as 1).
    pub fn new(fps: u32) -> Self {
        Self {
            frame: Duration::from_secs(1) / fps.max(1),
            max_catch_up: MAX_CATCH_UP_TICKS,
            accumulator: Duration::ZERO,
            last_poll: None,
            running: false,
            ticks_issued: 0,
        }
    }

    pub fn with_max_catch_up(mut self, max: u32) -> Self {
        self.max_catch_up = max.max(1);
        self
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn ticks_issued(&self) -> u64 {
        self.ticks_issued
    }

    /// Begin issuing ticks, measuring from `now`.
    pub fn start(&mut self, now: Instant) {
        self.running = true;
        self.accumulator = Duration::ZERO;
        self.last_poll = Some(now);
    }

    /// Cancel the repeating schedule. Pending time is discarded.
    pub fn stop(&mut self) {
        if self.running {
            log::debug!("frame driver stopped after {} ticks", self.ticks_issued);
        }
        self.running = false;
        self.accumulator = Duration::ZERO;
        self.last_poll = None;
    }

    /// Number of ticks due since the previous poll.
    ///
    /// After a stall longer than the catch-up cap, the backlog beyond the
    /// cap is dropped instead of replayed.
    pub fn poll(&mut self, now: Instant) -> u32 {
        if !self.running {
            return 0;
        }
        let last = self.last_poll.unwrap_or(now);
        self.accumulator += now.saturating_duration_since(last);
        self.last_poll = Some(now);

        let mut due = 0;
        while self.accumulator >= self.frame && due < self.max_catch_up {
            self.accumulator -= self.frame;
            due += 1;
        }
        if self.accumulator >= self.frame {
            log::debug!(
                "frame driver dropping {:?} of backlog",
                self.accumulator
            );
            self.accumulator = Duration::ZERO;
        }
        self.ticks_issued += due as u64;
        due
    }

    /// How long the caller may wait before the next tick is due.
    pub fn time_until_next(&self, now: Instant) -> Duration {
        let Some(last) = self.last_poll.filter(|_| self.running) else {
            return self.frame;
        };
        let pending = self.accumulator + now.saturating_duration_since(last);
        self.frame.saturating_sub(pending)
    }
}
