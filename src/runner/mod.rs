//! Bone Run: the runner simulation.
//!
//! A side-scrolling obstacle course advanced one tick per display frame.
//! The runner stands at a fixed column and jumps over batches of bones
//! that scroll in from the right, faster as the session goes on. Touching
//! a bone ends the run.

pub mod collision;
pub mod difficulty;
pub mod logic;
pub mod physics;
pub mod spawner;
pub mod types;

pub use collision::overlaps;
pub use difficulty::DifficultyController;
pub use logic::{Command, RunnerGame};
pub use physics::RunnerBody;
pub use spawner::{FixedSource, ObstacleGenerator, RandomSource, RngSource};
pub use types::*;
