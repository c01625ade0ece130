//! Tunable parameters for the runner simulation, the countdown timer and the
//! frame driver.
//!
//! Every field has a built-in default, so a config file only needs to list
//! what it overrides. Files are JSON and live either at an explicit path or
//! at `config.json` in the platform config directory.

use crate::constants::*;
use crate::ui::theme::Theme;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Simulation parameters. Units are world pixels and ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub world_width: f64,
    pub world_height: f64,
    /// Y coordinate of the ground line; the runner's feet rest here.
    pub ground_y: f64,

    pub runner_x: f64,
    pub runner_width: f64,
    pub runner_height: f64,
    /// Added to vertical velocity every airborne tick.
    pub gravity: f64,
    /// Vertical velocity set by a jump (negative = upward).
    pub jump_impulse: f64,

    pub bone_width: f64,
    pub bone_height: f64,
    /// Distance between a bone's bottom edge and the ground line.
    pub bone_lift: f64,
    /// Empty space between consecutive bones of one batch.
    pub bone_gap: f64,
    pub spawn_interval: u32,
    pub batch_min: u32,
    pub batch_max: u32,

    pub min_speed: f64,
    pub max_speed: f64,
    pub speed_increment: f64,
    /// Frames between speed increments.
    pub speed_period: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            ground_y: GROUND_Y,
            runner_x: RUNNER_X,
            runner_width: RUNNER_WIDTH,
            runner_height: RUNNER_HEIGHT,
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            bone_width: BONE_WIDTH,
            bone_height: BONE_HEIGHT,
            bone_lift: BONE_LIFT,
            bone_gap: BONE_GAP,
            spawn_interval: BONE_SPAWN_INTERVAL,
            batch_min: BONE_BATCH_MIN,
            batch_max: BONE_BATCH_MAX,
            min_speed: SPEED_MIN,
            max_speed: SPEED_MAX,
            speed_increment: SPEED_INCREMENT,
            speed_period: SPEED_PERIOD_FRAMES,
        }
    }
}

impl GameConfig {
    /// Resting y of the runner's top edge.
    pub fn ground_level(&self) -> f64 {
        self.ground_y - self.runner_height
    }

    /// Y of a bone's top edge.
    pub fn bone_y(&self) -> f64 {
        self.ground_y - self.bone_height - self.bone_lift
    }

    pub fn validate(&self) -> Result<(), String> {
        let positive = [
            ("world_width", self.world_width),
            ("world_height", self.world_height),
            ("runner_width", self.runner_width),
            ("runner_height", self.runner_height),
            ("bone_width", self.bone_width),
            ("bone_height", self.bone_height),
            ("gravity", self.gravity),
            ("min_speed", self.min_speed),
        ];
        for (name, value) in positive {
            if !(value > 0.0) {
                return Err(format!("{} must be positive (got {})", name, value));
            }
        }
        if self.ground_y > self.world_height || self.ground_level() < 0.0 {
            return Err("ground_y must leave room for the runner inside the world".to_string());
        }
        if self.runner_x < 0.0 || self.runner_x + self.runner_width > self.world_width {
            return Err(format!(
                "runner ({}..{}) must fit left of the spawn column at {}",
                self.runner_x,
                self.runner_x + self.runner_width,
                self.world_width
            ));
        }
        if self.bone_y() < 0.0 {
            return Err("bones must fit between the top of the world and the ground".to_string());
        }
        if !(self.jump_impulse < 0.0) {
            return Err("jump_impulse must be negative (upward)".to_string());
        }
        if self.bone_gap < 0.0 || self.bone_lift < 0.0 || self.speed_increment < 0.0 {
            return Err("bone_gap, bone_lift and speed_increment cannot be negative".to_string());
        }
        if self.min_speed > self.max_speed {
            return Err(format!(
                "min_speed ({}) exceeds max_speed ({})",
                self.min_speed, self.max_speed
            ));
        }
        if self.spawn_interval == 0 || self.speed_period == 0 {
            return Err("spawn_interval and speed_period must be at least 1".to_string());
        }
        if self.batch_min == 0 || self.batch_min > self.batch_max {
            return Err(format!(
                "batch size range {}..={} is empty",
                self.batch_min, self.batch_max
            ));
        }
        Ok(())
    }
}

/// Countdown timer parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerConfig {
    pub min_minutes: u32,
    pub max_minutes: u32,
    pub default_minutes: u32,
    pub presets: Vec<u32>,
    /// How long the "session done" notice stays up.
    pub done_notice_secs: u64,
    /// Restore the full duration on completion instead of showing 0:00.
    pub reset_on_complete: bool,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            min_minutes: TIMER_MIN_MINUTES,
            max_minutes: TIMER_MAX_MINUTES,
            default_minutes: TIMER_DEFAULT_MINUTES,
            presets: TIMER_PRESETS.to_vec(),
            done_notice_secs: TIMER_DONE_NOTICE_SECONDS,
            reset_on_complete: true,
        }
    }
}

impl TimerConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.min_minutes == 0 || self.min_minutes > self.max_minutes {
            return Err(format!(
                "timer range {}..={} minutes is invalid",
                self.min_minutes, self.max_minutes
            ));
        }
        let in_range = |m: u32| (self.min_minutes..=self.max_minutes).contains(&m);
        if !in_range(self.default_minutes) {
            return Err(format!(
                "default_minutes {} is outside {}..={}",
                self.default_minutes, self.min_minutes, self.max_minutes
            ));
        }
        if let Some(bad) = self.presets.iter().copied().find(|&m| !in_range(m)) {
            return Err(format!("timer preset {} is out of range", bad));
        }
        Ok(())
    }
}

/// Everything the application reads from its config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub timer: TimerConfig,
    pub fps: u32,
    pub theme: Theme,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            timer: TimerConfig::default(),
            fps: DEFAULT_FPS,
            theme: Theme::default(),
        }
    }
}

impl AppConfig {
    /// Default config file location (`<config dir>/bone-run/config.json`).
    pub fn default_path() -> io::Result<PathBuf> {
        let project_dirs = ProjectDirs::from("", "", "bone-run").ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "Could not determine config directory")
        })?;
        Ok(project_dirs.config_dir().join("config.json"))
    }

    /// Load and validate a config file.
    pub fn load(path: &Path) -> io::Result<Self> {
        let text = fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&text)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` when given, otherwise from the default location,
    /// falling back to built-in defaults when no default file exists.
    pub fn load_or_default(path: Option<&Path>) -> io::Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match Self::default_path() {
            Ok(default) if default.exists() => Self::load(&default),
            _ => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> io::Result<()> {
        let invalid = |msg: String| io::Error::new(io::ErrorKind::InvalidData, msg);
        self.game.validate().map_err(invalid)?;
        self.timer.validate().map_err(invalid)?;
        if self.fps == 0 {
            return Err(invalid("fps must be at least 1".to_string()));
        }
        Ok(())
    }

    pub fn to_json(&self) -> io::Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn test_default_geometry() {
        let game = GameConfig::default();
        assert!((game.ground_level() - 120.0).abs() < f64::EPSILON);
        assert!((game.bone_y() - 136.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "game": {{ "max_speed": 7.5 }}, "fps": 30 }}"#).unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert!((config.game.max_speed - 7.5).abs() < f64::EPSILON);
        assert!((config.game.gravity - GRAVITY).abs() < f64::EPSILON);
        assert_eq!(config.fps, 30);
        assert_eq!(config.timer, TimerConfig::default());
        assert_eq!(config.theme, Theme::Dark);
    }

    #[test]
    fn test_theme_read_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "theme": "light" }}"#).unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.theme, Theme::Light);
    }

    #[test]
    fn test_invalid_speed_range_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "game": {{ "min_speed": 12.0 }} }}"#).unwrap();

        let err = AppConfig::load(file.path()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert!(err.to_string().contains("min_speed"));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let err = AppConfig::load(file.path()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        let err = AppConfig::load_or_default(Some(&missing)).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_timer_validation() {
        let mut timer = TimerConfig::default();
        timer.presets.push(500);
        assert!(timer.validate().is_err());

        let timer = TimerConfig {
            min_minutes: 10,
            max_minutes: 5,
            ..TimerConfig::default()
        };
        assert!(timer.validate().is_err());
    }

    #[test]
    fn test_game_validation_rejects_upward_gravity() {
        let game = GameConfig {
            gravity: -1.0,
            ..GameConfig::default()
        };
        assert!(game.validate().unwrap_err().contains("gravity"));

        let game = GameConfig {
            jump_impulse: 3.0,
            ..GameConfig::default()
        };
        assert!(game.validate().is_err());

        let game = GameConfig {
            batch_min: 4,
            ..GameConfig::default()
        };
        assert!(game.validate().is_err());
    }

    #[test]
    fn test_runner_must_sit_left_of_spawn_column() {
        let past_spawn = GameConfig {
            runner_x: 580.0,
            ..GameConfig::default()
        };
        assert!(past_spawn.validate().unwrap_err().contains("runner"));

        let flush = GameConfig {
            runner_x: 564.0,
            ..GameConfig::default()
        };
        assert!(flush.validate().is_ok());
    }

    #[test]
    fn test_round_trips_through_json() {
        let config = AppConfig::default();
        let text = config.to_json().unwrap();
        let back: AppConfig = serde_json::from_str(&text).unwrap();
        assert_eq!(back, config);
    }
}
