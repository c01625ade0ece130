//! Bone Run game logic: phase machine and the per-tick pipeline.

use super::collision::first_overlap;
use super::difficulty::DifficultyController;
use super::physics::RunnerBody;
use super::spawner::{ObstacleGenerator, RandomSource, RngSource};
use super::types::{Obstacle, Phase, Snapshot};
use crate::config::GameConfig;
use rand::rngs::StdRng;

/// Commands accepted from the input side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Jump,
    Restart,
}

/// Owns the whole simulation state. One instance per play surface.
///
/// Commands that make no sense in the current phase are ignored rather
/// than reported, so input handlers can fire them freely.
#[derive(Debug, Clone)]
pub struct RunnerGame<S: RandomSource = RngSource<StdRng>> {
    config: GameConfig,
    phase: Phase,
    runner: RunnerBody,
    obstacles: Vec<Obstacle>,
    generator: ObstacleGenerator,
    difficulty: DifficultyController,
    score: u32,
    source: S,
}

impl RunnerGame<RngSource<StdRng>> {
    /// Game whose bone batches are fixed by `seed`.
    pub fn seeded(config: GameConfig, seed: u64) -> Self {
        Self::new(config, RngSource::seeded(seed))
    }
}

impl<S: RandomSource> RunnerGame<S> {
    /// A fresh game in the Idle phase.
    pub fn new(config: GameConfig, source: S) -> Self {
        Self {
            phase: Phase::Idle,
            runner: RunnerBody::new(&config),
            obstacles: Vec::new(),
            generator: ObstacleGenerator::new(&config),
            difficulty: DifficultyController::new(&config),
            score: 0,
            source,
            config,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn speed(&self) -> f64 {
        self.difficulty.speed()
    }

    pub fn elapsed_frames(&self) -> u64 {
        self.difficulty.elapsed_frames()
    }

    pub fn spawn_counter(&self) -> u32 {
        self.generator.counter()
    }

    pub fn runner(&self) -> &RunnerBody {
        &self.runner
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// Idle -> Playing. Ignored in any other phase.
    pub fn start(&mut self) -> bool {
        if self.phase != Phase::Idle {
            return false;
        }
        self.begin_session();
        true
    }

    /// Jump while Playing. Ignored otherwise, and ignored mid-air.
    pub fn jump(&mut self) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }
        self.runner.jump()
    }

    /// GameOver -> Playing. Ignored in any other phase.
    pub fn restart(&mut self) -> bool {
        if self.phase != Phase::GameOver {
            return false;
        }
        self.begin_session();
        true
    }

    /// The single "primary action" input: start, jump or restart depending
    /// on the phase. Returns the command that took effect, if any.
    pub fn primary_action(&mut self) -> Option<Command> {
        match self.phase {
            Phase::Idle => self.start().then_some(Command::Start),
            Phase::Playing => self.jump().then_some(Command::Jump),
            Phase::GameOver => self.restart().then_some(Command::Restart),
        }
    }

    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::Start => self.start(),
            Command::Jump => self.jump(),
            Command::Restart => self.restart(),
        }
    }

    /// Drop the current run and wait for a new start command.
    pub fn reset_to_idle(&mut self) {
        self.reset_state();
        if self.phase != Phase::Idle {
            log::debug!("{} -> Idle", self.phase.name());
        }
        self.phase = Phase::Idle;
    }

    /// Advance one frame. Only Playing advances; returns whether it did.
    pub fn tick(&mut self) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }

        // 1. Runner physics
        self.runner.step();

        // 2. Speed ramp
        if self.difficulty.advance() {
            log::trace!(
                "speed {:.2} at frame {}",
                self.difficulty.speed(),
                self.difficulty.elapsed_frames()
            );
        }

        // 3. Spawn
        self.generator.advance(&mut self.source, &mut self.obstacles);

        // 4. Scroll
        let speed = self.difficulty.speed();
        for obstacle in &mut self.obstacles {
            obstacle.rect.x -= speed;
        }

        // 5. One point per bone that left the screen
        let before = self.obstacles.len();
        self.obstacles.retain(|o| !o.is_past_left_edge());
        self.score += (before - self.obstacles.len()) as u32;

        // 6. Collision
        let runner = self.runner.rect();
        if let Some(index) = first_overlap(&runner, self.obstacles.iter().map(|o| &o.rect)) {
            log::debug!(
                "Playing -> GameOver (bone #{} at x={:.1})",
                index,
                self.obstacles[index].rect.x
            );
            log::info!(
                "run ended: score {} after {} frames",
                self.score,
                self.difficulty.elapsed_frames()
            );
            self.phase = Phase::GameOver;
        }

        true
    }

    /// Read-only copy for renderers and score displays.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            runner: self.runner.rect(),
            runner_on_ground: self.runner.on_ground,
            obstacles: self.obstacles.iter().map(|o| o.rect).collect(),
            score: self.score,
            speed: self.difficulty.speed(),
            elapsed_frames: self.difficulty.elapsed_frames(),
            world_width: self.config.world_width,
            world_height: self.config.world_height,
            ground_y: self.config.ground_y,
        }
    }

    fn reset_state(&mut self) {
        self.runner = RunnerBody::new(&self.config);
        self.obstacles.clear();
        self.generator.reset();
        self.difficulty.reset();
        self.score = 0;
    }

    fn begin_session(&mut self) {
        self.reset_state();
        log::debug!("{} -> Playing", self.phase.name());
        self.phase = Phase::Playing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::spawner::FixedSource;

    fn playing_game() -> RunnerGame<FixedSource> {
        let mut game = RunnerGame::new(GameConfig::default(), FixedSource::always(1));
        game.start();
        game
    }

    fn bone_at(game: &RunnerGame<FixedSource>, x: f64) -> Obstacle {
        let c = game.config();
        Obstacle::new(x, c.bone_y(), c.bone_width, c.bone_height)
    }

    // ── Phase transitions ──

    #[test]
    fn test_new_game_is_idle_and_clean() {
        let game = RunnerGame::seeded(GameConfig::default(), 1);
        assert_eq!(game.phase(), Phase::Idle);
        assert_eq!(game.score(), 0);
        assert!(game.obstacles().is_empty());
        assert!(game.runner().on_ground);
        assert!((game.speed() - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_idle_tick_does_not_advance() {
        let mut game = RunnerGame::seeded(GameConfig::default(), 1);
        let before = game.snapshot();
        for _ in 0..500 {
            assert!(!game.tick());
        }
        assert_eq!(game.snapshot(), before);
        assert_eq!(game.spawn_counter(), 0);
    }

    #[test]
    fn test_idle_jump_changes_nothing() {
        let mut game = RunnerGame::seeded(GameConfig::default(), 1);
        let before = game.snapshot();
        assert!(!game.jump());
        assert_eq!(game.snapshot(), before);
        assert_eq!(game.phase(), Phase::Idle);
    }

    #[test]
    fn test_start_only_from_idle() {
        let mut game = playing_game();
        assert_eq!(game.phase(), Phase::Playing);
        for _ in 0..10 {
            game.tick();
        }
        // Second start must not reset the running session
        assert!(!game.start());
        assert_eq!(game.elapsed_frames(), 10);
    }

    #[test]
    fn test_restart_ignored_unless_game_over() {
        let mut game = RunnerGame::new(GameConfig::default(), FixedSource::always(1));
        assert!(!game.restart());
        assert_eq!(game.phase(), Phase::Idle);

        game.start();
        game.tick();
        assert!(!game.restart());
        assert_eq!(game.elapsed_frames(), 1);
    }

    #[test]
    fn test_collision_enters_game_over_and_freezes() {
        let mut game = playing_game();
        let bone = bone_at(&game, 100.0);
        game.obstacles.push(bone);

        // Bone moves to 96.0 first: right at the runner's edge, no overlap yet
        assert!(game.tick());
        assert_eq!(game.phase(), Phase::Playing);
        assert!(game.tick());
        assert_eq!(game.phase(), Phase::GameOver);

        let frozen = game.snapshot();
        for _ in 0..50 {
            assert!(!game.tick());
        }
        assert_eq!(game.snapshot(), frozen);
    }

    #[test]
    fn test_game_over_ignores_jump_then_restart_resets() {
        let mut game = playing_game();
        game.score = 7;
        let bone = bone_at(&game, 70.0);
        game.obstacles.push(bone);
        for _ in 0..200 {
            game.difficulty.advance();
        }
        game.tick();
        assert_eq!(game.phase(), Phase::GameOver);

        let frozen = game.snapshot();
        assert!(!game.jump());
        assert_eq!(game.snapshot(), frozen);

        assert!(game.restart());
        assert_eq!(game.phase(), Phase::Playing);
        assert_eq!(game.score(), 0);
        assert!((game.speed() - game.config().min_speed).abs() < f64::EPSILON);
        assert!(game.obstacles().is_empty());
        assert_eq!(game.elapsed_frames(), 0);
        assert_eq!(game.spawn_counter(), 0);
        assert!(game.runner().on_ground);
    }

    #[test]
    fn test_primary_action_follows_phase() {
        let mut game = RunnerGame::new(GameConfig::default(), FixedSource::always(1));
        assert_eq!(game.primary_action(), Some(Command::Start));
        assert_eq!(game.phase(), Phase::Playing);

        assert_eq!(game.primary_action(), Some(Command::Jump));
        // Airborne: the press does nothing
        game.tick();
        assert_eq!(game.primary_action(), None);

        let bone = bone_at(&game, game.runner().x);
        game.runner = RunnerBody::new(game.config());
        game.obstacles.push(bone);
        game.tick();
        assert_eq!(game.phase(), Phase::GameOver);

        assert_eq!(game.primary_action(), Some(Command::Restart));
        assert_eq!(game.phase(), Phase::Playing);
    }

    #[test]
    fn test_reset_to_idle() {
        let mut game = playing_game();
        for _ in 0..100 {
            game.tick();
        }
        game.reset_to_idle();
        assert_eq!(game.phase(), Phase::Idle);
        assert!(game.obstacles().is_empty());
        assert_eq!(game.elapsed_frames(), 0);
    }

    // ── Per-tick pipeline ──

    #[test]
    fn test_first_batch_spawns_on_interval_and_scrolls_same_tick() {
        let mut game = playing_game();
        for _ in 0..89 {
            game.tick();
        }
        assert!(game.obstacles().is_empty());
        game.tick();
        assert_eq!(game.obstacles().len(), 1);
        assert!((game.obstacles()[0].rect.x - 596.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_score_counts_each_bone_leaving_screen() {
        let mut game = playing_game();
        game.runner.jump();
        // Two bones far left of the runner, about to leave
        game.obstacles.push(bone_at(&game, -22.0));
        game.obstacles.push(bone_at(&game, -21.0));
        game.obstacles.push(bone_at(&game, 400.0));

        game.tick();
        assert_eq!(game.score(), 2);
        assert_eq!(game.obstacles().len(), 1);
        assert_eq!(game.phase(), Phase::Playing);
    }

    #[test]
    fn test_bone_with_right_edge_at_zero_stays() {
        let mut game = playing_game();
        game.runner.jump();
        // After scrolling by 4: x = -24, right edge exactly 0
        game.obstacles.push(bone_at(&game, -20.0));
        game.tick();
        assert_eq!(game.score(), 0);
        assert_eq!(game.obstacles().len(), 1);
        game.tick();
        assert_eq!(game.score(), 1);
        assert!(game.obstacles().is_empty());
    }

    #[test]
    fn test_airborne_runner_clears_bone() {
        let mut game = playing_game();
        game.jump();
        for _ in 0..5 {
            game.tick();
        }
        assert!(game.runner().y < 96.0);
        let bone = bone_at(&game, 70.0);
        game.obstacles.push(bone);
        game.tick();
        assert_eq!(game.phase(), Phase::Playing);
    }

    #[test]
    fn test_repeated_jump_has_no_extra_effect() {
        let mut game = playing_game();
        assert!(game.jump());
        let after_first = game.runner().clone();
        for _ in 0..5 {
            assert!(!game.jump());
        }
        assert_eq!(*game.runner(), after_first);

        game.tick();
        let mid_air = game.runner().clone();
        assert!(!game.jump());
        assert_eq!(*game.runner(), mid_air);
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut game = playing_game();
        game.obstacles.push(bone_at(&game, 300.0));
        let snap = game.snapshot();
        assert_eq!(snap.phase, Phase::Playing);
        assert_eq!(snap.obstacles.len(), 1);
        assert!((snap.runner_y() - 120.0).abs() < f64::EPSILON);
        assert!(snap.runner_on_ground);
        assert!((snap.world_width - 600.0).abs() < f64::EPSILON);
        assert!(!snap.is_game_over());
    }
}
