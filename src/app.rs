//! Application state: one game, one timer, one frame driver.
//!
//! The binary's event loop feeds `AppInput`s and frame polls into `App`;
//! the UI draws from it. Nothing here touches the terminal.

use crate::config::AppConfig;
use crate::driver::FrameDriver;
use crate::input::AppInput;
use crate::runner::{Command, RandomSource, RngSource, RunnerGame, Snapshot};
use crate::timer::{CountdownTimer, TimerEvent};
use crate::ui::theme::Theme;
use rand::rngs::StdRng;
use std::time::Instant;

/// Longest custom duration that can be typed (digits).
const MAX_ENTRY_DIGITS: usize = 3;

pub struct App<S: RandomSource = RngSource<StdRng>> {
    pub game: RunnerGame<S>,
    pub timer: CountdownTimer,
    pub driver: FrameDriver,
    pub theme: Theme,
    /// Digits typed into the custom-minutes field while it has focus.
    pub custom_entry: Option<String>,
    pub should_quit: bool,
    /// Snapshot taken after the most recent tick or command.
    snapshot: Snapshot,
    last_frame: Option<Instant>,
}

impl<S: RandomSource> App<S> {
    pub fn new(config: &AppConfig, source: S, theme: Theme) -> Self {
        let game = RunnerGame::new(config.game.clone(), source);
        let snapshot = game.snapshot();
        Self {
            game,
            timer: CountdownTimer::new(config.timer.clone()),
            driver: FrameDriver::new(config.fps),
            theme,
            custom_entry: None,
            should_quit: false,
            snapshot,
            last_frame: None,
        }
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn is_editing(&self) -> bool {
        self.custom_entry.is_some()
    }

    /// Start the frame schedule.
    pub fn start(&mut self, now: Instant) {
        self.driver.start(now);
        self.last_frame = Some(now);
    }

    /// Cancel the frame schedule; the game is left as it is.
    pub fn shutdown(&mut self) {
        self.driver.stop();
        self.should_quit = true;
    }

    pub fn handle_input(&mut self, input: AppInput) -> Option<Command> {
        let mut command = None;
        match input {
            AppInput::PrimaryAction => {
                command = self.game.primary_action();
                self.refresh_snapshot();
            }
            AppInput::ToggleTimer => self.timer.toggle(),
            AppInput::ResetTimer => self.timer.reset(),
            AppInput::SelectPreset(index) => {
                self.timer.select_preset(index);
            }
            AppInput::AdjustMinutes(delta) => {
                self.timer.adjust_minutes(delta);
            }
            AppInput::BeginCustom => {
                // The field is locked while the countdown runs
                if !self.timer.is_running() {
                    self.custom_entry = Some(self.timer.custom_field_text());
                }
            }
            AppInput::EntryChar(c) => {
                if let Some(entry) = self.custom_entry.as_mut() {
                    if entry.len() < MAX_ENTRY_DIGITS {
                        entry.push(c);
                    }
                }
            }
            AppInput::EntryBackspace => {
                if let Some(entry) = self.custom_entry.as_mut() {
                    entry.pop();
                }
            }
            AppInput::EntryConfirm => {
                if let Some(entry) = self.custom_entry.take() {
                    if !self.timer.set_custom(&entry) {
                        log::debug!("rejected custom duration '{}'", entry);
                    }
                }
            }
            AppInput::EntryCancel => self.custom_entry = None,
            AppInput::Quit => self.shutdown(),
        }
        command
    }

    /// Run every tick that is due at `now` and advance the timer by the
    /// wall time since the previous frame. Returns the number of ticks run
    /// and any timer notification.
    pub fn on_frame(&mut self, now: Instant) -> (u32, Option<TimerEvent>) {
        let due = self.driver.poll(now);
        for _ in 0..due {
            self.game.tick();
        }
        if due > 0 {
            self.refresh_snapshot();
        }

        let dt = self
            .last_frame
            .map(|last| now.saturating_duration_since(last))
            .unwrap_or_default();
        self.last_frame = Some(now);
        let event = self.timer.update(dt);

        (due, event)
    }

    fn refresh_snapshot(&mut self) {
        self.snapshot = self.game.snapshot();
    }
}

impl App {
    /// App with an OS-seeded bone generator, or a fixed one when `seed` is given.
    pub fn from_config(config: &AppConfig, seed: Option<u64>) -> Self {
        let source = match seed {
            Some(seed) => RngSource::seeded(seed),
            None => RngSource::from_entropy(),
        };
        Self::new(config, source, config.theme)
    }
}
