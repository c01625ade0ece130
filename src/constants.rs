// World geometry (pixels, origin top-left, y grows downward)
pub const WORLD_WIDTH: f64 = 600.0;
pub const WORLD_HEIGHT: f64 = 200.0;
pub const GROUND_Y: f64 = WORLD_HEIGHT - 40.0;

// Runner
pub const RUNNER_X: f64 = 60.0;
pub const RUNNER_WIDTH: f64 = 36.0;
pub const RUNNER_HEIGHT: f64 = 40.0;
pub const GRAVITY: f64 = 0.8;
pub const JUMP_IMPULSE: f64 = -14.0;

// Bones
pub const BONE_WIDTH: f64 = 24.0;
pub const BONE_HEIGHT: f64 = 20.0;
/// Bones float slightly above the ground line.
pub const BONE_LIFT: f64 = 4.0;
/// Gap between bones of one batch, enough to land and jump again.
pub const BONE_GAP: f64 = 130.0;
pub const BONE_SPAWN_INTERVAL: u32 = 90;
pub const BONE_BATCH_MIN: u32 = 1;
pub const BONE_BATCH_MAX: u32 = 3;

// Difficulty
pub const SPEED_MIN: f64 = 4.0;
pub const SPEED_MAX: f64 = 10.0;
pub const SPEED_INCREMENT: f64 = 0.25;
pub const SPEED_PERIOD_FRAMES: u64 = 120;

// Frame driver
pub const DEFAULT_FPS: u32 = 60;
/// Upper bound on catch-up ticks per poll after a stall.
pub const MAX_CATCH_UP_TICKS: u32 = 5;

// Countdown timer (minutes unless noted)
pub const TIMER_MIN_MINUTES: u32 = 1;
pub const TIMER_MAX_MINUTES: u32 = 120;
pub const TIMER_DEFAULT_MINUTES: u32 = 5;
pub const TIMER_PRESETS: [u32; 4] = [2, 5, 10, 15];
pub const TIMER_DONE_NOTICE_SECONDS: u64 = 4;

// Input polling while no frame is due
pub const INPUT_POLL_MS: u64 = 8;
