//! Countdown timer state.

use crate::config::TimerConfig;
use std::time::Duration;

/// Notifications produced while the timer runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// The countdown reached zero. Fired once per session.
    Completed,
}

#[derive(Debug, Clone)]
pub struct CountdownTimer {
    pub config: TimerConfig,
    /// Selected duration in whole minutes, always within the configured range.
    pub selected_minutes: u32,
    pub total_seconds: u64,
    pub remaining_seconds: u64,
    pub running: bool,
    /// Time accumulated toward the next whole second.
    pub(crate) accumulator: Duration,
    /// Time left on the "session done" notice, if it is showing.
    pub(crate) notice_remaining: Option<Duration>,
}

impl CountdownTimer {
    /// A paused timer set to the configured default duration.
    pub fn new(config: TimerConfig) -> Self {
        let minutes = config
            .default_minutes
            .clamp(config.min_minutes, config.max_minutes.max(config.min_minutes));
        let total = minutes as u64 * 60;
        Self {
            config,
            selected_minutes: minutes,
            total_seconds: total,
            remaining_seconds: total,
            running: false,
            accumulator: Duration::ZERO,
            notice_remaining: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// True while the "session done" notice should be displayed.
    pub fn notice_visible(&self) -> bool {
        self.notice_remaining.is_some()
    }

    /// Whether `minutes` matches one of the configured presets.
    pub fn is_preset(&self, minutes: u32) -> bool {
        self.config.presets.contains(&minutes)
    }

    /// Text for the custom-minutes field: empty when a preset is selected.
    pub fn custom_field_text(&self) -> String {
        if self.is_preset(self.selected_minutes) {
            String::new()
        } else {
            self.selected_minutes.to_string()
        }
    }

    /// Remaining time as `m:ss`.
    pub fn display(&self) -> String {
        format_time(self.remaining_seconds)
    }

    /// Label for the start/pause control.
    pub fn button_label(&self) -> &'static str {
        if self.running {
            "Pause boredom"
        } else if self.remaining_seconds == 0 || self.remaining_seconds == self.total_seconds {
            "Start being bored"
        } else {
            "Resume"
        }
    }

    pub fn hint(&self) -> &'static str {
        if self.notice_visible() {
            "Session done. You were bored. Well done."
        } else {
            "Permission to do nothing. Really."
        }
    }
}

/// Format whole seconds as `m:ss` (minutes are not wrapped into hours).
pub fn format_time(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
