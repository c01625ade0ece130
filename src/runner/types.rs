//! Bone Run data structures.

use serde::Serialize;

/// Lifecycle phase of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Phase {
    /// Waiting for the first start command. Nothing advances.
    #[default]
    Idle,
    Playing,
    /// Frozen at the moment of collision until restarted.
    GameOver,
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Playing => "Playing",
            Self::GameOver => "GameOver",
        }
    }
}

/// Axis-aligned rectangle in world coordinates (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// A bone scrolling toward the runner. No identity beyond its position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Obstacle {
    pub rect: Rect,
}

impl Obstacle {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
        }
    }

    /// True once the right edge has passed the left boundary.
    pub fn is_past_left_edge(&self) -> bool {
        self.rect.right() < 0.0
    }
}

/// Read-only copy of the simulation taken after a tick or command.
///
/// Renderers and score displays work from this; it holds no references
/// into the live game.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub phase: Phase,
    pub runner: Rect,
    pub runner_on_ground: bool,
    /// In spawn order, which is also draw order.
    pub obstacles: Vec<Rect>,
    pub score: u32,
    pub speed: f64,
    pub elapsed_frames: u64,
    pub world_width: f64,
    pub world_height: f64,
    pub ground_y: f64,
}

impl Snapshot {
    pub fn runner_y(&self) -> f64 {
        self.runner.y
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }
}
