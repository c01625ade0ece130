//! Scroll speed ramp.

use crate::config::GameConfig;

/// Raises the scroll speed by a fixed step every `period` frames until the
/// cap is reached.
#[derive(Debug, Clone, PartialEq)]
pub struct DifficultyController {
    speed: f64,
    elapsed_frames: u64,
    min_speed: f64,
    max_speed: f64,
    increment: f64,
    period: u64,
}

impl DifficultyController {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            speed: config.min_speed,
            elapsed_frames: 0,
            min_speed: config.min_speed,
            max_speed: config.max_speed,
            increment: config.speed_increment,
            period: config.speed_period.max(1),
        }
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Frames since the session started.
    pub fn elapsed_frames(&self) -> u64 {
        self.elapsed_frames
    }

    /// Back to minimum speed at frame zero.
    pub fn reset(&mut self) {
        self.speed = self.min_speed;
        self.elapsed_frames = 0;
    }

    /// Count one frame; returns true if the speed went up.
    pub fn advance(&mut self) -> bool {
        self.elapsed_frames += 1;
        if self.elapsed_frames % self.period == 0 && self.speed < self.max_speed {
            self.speed = (self.speed + self.increment).min(self.max_speed);
            return true;
        }
        false
    }
}
