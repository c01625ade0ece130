//! Countdown timer operations.

use super::types::{CountdownTimer, TimerEvent};
use std::time::Duration;

const ONE_SECOND: Duration = Duration::from_secs(1);

impl CountdownTimer {
    /// Pick a duration in minutes, clamped to the configured range.
    /// Ignored while running. Returns whether the duration was applied.
    pub fn set_duration(&mut self, minutes: u32) -> bool {
        if self.running {
            return false;
        }
        let clamped = minutes.clamp(self.config.min_minutes, self.config.max_minutes);
        self.selected_minutes = clamped;
        self.total_seconds = clamped as u64 * 60;
        self.remaining_seconds = self.total_seconds;
        self.accumulator = Duration::ZERO;
        true
    }

    /// Select the preset at `index` (0-based).
    pub fn select_preset(&mut self, index: usize) -> bool {
        match self.config.presets.get(index).copied() {
            Some(minutes) => self.set_duration(minutes),
            None => false,
        }
    }

    /// Apply a typed custom duration. Text that is not a whole number of
    /// minutes inside the configured range is rejected and the current
    /// selection stays.
    pub fn set_custom(&mut self, text: &str) -> bool {
        let Ok(minutes) = text.trim().parse::<u32>() else {
            return false;
        };
        if !(self.config.min_minutes..=self.config.max_minutes).contains(&minutes) {
            return false;
        }
        self.set_duration(minutes)
    }

    /// Nudge the selected duration by `delta` minutes.
    pub fn adjust_minutes(&mut self, delta: i32) -> bool {
        let target = (self.selected_minutes as i64 + delta as i64).max(0) as u32;
        self.set_duration(target)
    }

    /// Start or pause. Starting from 0:00 restores the full duration first.
    pub fn toggle(&mut self) {
        if self.remaining_seconds == 0 {
            self.remaining_seconds = self.total_seconds;
        }
        self.running = !self.running;
        self.accumulator = Duration::ZERO;
        log::debug!(
            "timer {} at {}",
            if self.running { "started" } else { "paused" },
            self.display()
        );
    }

    /// Stop and restore the full duration.
    pub fn reset(&mut self) {
        self.running = false;
        self.remaining_seconds = self.total_seconds;
        self.accumulator = Duration::ZERO;
    }

    /// Advance wall time by `dt`. Counts down in whole seconds and expires
    /// the completion notice.
    pub fn update(&mut self, dt: Duration) -> Option<TimerEvent> {
        if let Some(left) = self.notice_remaining {
            self.notice_remaining = left.checked_sub(dt).filter(|d| !d.is_zero());
        }

        if !self.running {
            return None;
        }

        self.accumulator += dt;
        while self.accumulator >= ONE_SECOND {
            self.accumulator -= ONE_SECOND;
            if self.remaining_seconds <= 1 {
                self.complete();
                return Some(TimerEvent::Completed);
            }
            self.remaining_seconds -= 1;
        }
        None
    }

    fn complete(&mut self) {
        self.running = false;
        self.accumulator = Duration::ZERO;
        self.notice_remaining = Some(Duration::from_secs(self.config.done_notice_secs));
        self.remaining_seconds = if self.config.reset_on_complete {
            self.total_seconds
        } else {
            0
        };
        log::info!("timer session of {} min completed", self.selected_minutes);
    }
}
