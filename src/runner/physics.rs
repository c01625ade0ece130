//! Runner physics: constant gravity, a single jump impulse, ground clamp.

use super::types::Rect;
use crate::config::GameConfig;

/// The runner's body. Only the vertical axis moves.
#[derive(Debug, Clone, PartialEq)]
pub struct RunnerBody {
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Rows per tick, negative = upward.
    pub velocity: f64,
    pub width: f64,
    pub height: f64,
    pub on_ground: bool,
    ground_level: f64,
    gravity: f64,
    jump_impulse: f64,
}

impl RunnerBody {
    /// A body standing on the ground.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            x: config.runner_x,
            y: config.ground_level(),
            velocity: 0.0,
            width: config.runner_width,
            height: config.runner_height,
            on_ground: true,
            ground_level: config.ground_level(),
            gravity: config.gravity,
            jump_impulse: config.jump_impulse,
        }
    }

    /// Resting y of the top edge.
    pub fn ground_level(&self) -> f64 {
        self.ground_level
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn apply_gravity(&mut self) {
        if !self.on_ground {
            self.velocity += self.gravity;
        }
    }

    pub fn integrate(&mut self) {
        self.y += self.velocity;
    }

    /// Snap back to the ground if the body sank below it.
    pub fn clamp_to_ground(&mut self) {
        if self.y >= self.ground_level {
            self.y = self.ground_level;
            self.velocity = 0.0;
            self.on_ground = true;
        }
    }

    /// One physics tick.
    pub fn step(&mut self) {
        self.apply_gravity();
        self.integrate();
        self.clamp_to_ground();
    }

    /// Launch upward. Returns false (and changes nothing) while airborne.
    pub fn jump(&mut self) -> bool {
        if !self.on_ground {
            return false;
        }
        self.velocity = self.jump_impulse;
        self.on_ground = false;
        true
    }
}
