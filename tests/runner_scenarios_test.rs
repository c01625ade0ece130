//! Integration test: full Bone Run sessions
//!
//! Drives `RunnerGame` tick by tick the way the app loop does and checks
//! whole-run behavior: crashing into the first bone, clearing bones with
//! well-timed jumps, restarts, scoring and speed ramp.

use bone_run::config::GameConfig;
use bone_run::runner::{Command, FixedSource, Phase, RandomSource, RunnerGame};
use proptest::prelude::*;

/// Jump when the next bone is close enough that the jump arc clears it.
fn autopilot<S: RandomSource>(game: &mut RunnerGame<S>) {
    let runner = game.runner();
    if !runner.on_ground {
        return;
    }
    let front = runner.x + runner.width;
    let speed = game.speed();
    let next = game
        .obstacles()
        .iter()
        .map(|o| o.rect)
        .filter(|r| r.right() > runner.x)
        .min_by(|a, b| a.x.total_cmp(&b.x));
    if let Some(bone) = next {
        if bone.x >= front + speed && bone.x <= front + 8.0 * speed {
            game.jump();
        }
    }
}

/// One bone spawns at tick 250; the next batch is not due until tick 500.
fn single_bone_config() -> GameConfig {
    GameConfig {
        spawn_interval: 250,
        ..GameConfig::default()
    }
}

#[test]
fn test_no_jumps_ends_on_first_bone() {
    let mut game = RunnerGame::seeded(GameConfig::default(), 7);
    assert!(game.start());

    let mut ticks = 0;
    while game.phase() == Phase::Playing && ticks < 400 {
        game.tick();
        ticks += 1;
    }

    assert_eq!(game.phase(), Phase::GameOver);
    // First batch spawns at tick 90 and needs well over 100 ticks to arrive
    assert!(ticks > 200, "crashed after only {} ticks", ticks);
    assert_eq!(game.score(), 0);
    assert!(game.runner().on_ground);

    let snapshot = game.snapshot();
    assert!(snapshot.is_game_over());
    assert!(snapshot
        .obstacles
        .iter()
        .any(|bone| bone.x < snapshot.runner.right() && bone.right() > snapshot.runner.x));
}

#[test]
fn test_timed_jump_clears_single_bone() {
    let mut game = RunnerGame::new(single_bone_config(), FixedSource::always(1));
    game.start();

    let mut on_screen = false;
    let mut passed_runner = false;
    let mut jumps = 0;
    for _ in 0..490 {
        let was_on_ground = game.runner().on_ground;
        autopilot(&mut game);
        if was_on_ground && !game.runner().on_ground {
            jumps += 1;
        }
        game.tick();
        assert_eq!(game.phase(), Phase::Playing);

        let snapshot = game.snapshot();
        assert!(snapshot.obstacles.len() <= 1);
        if let Some(bone) = snapshot.obstacles.first() {
            on_screen |= bone.x < snapshot.world_width;
            passed_runner |= bone.x < snapshot.runner.right() && bone.right() > snapshot.runner.x;
        }
    }

    assert!(on_screen);
    assert!(passed_runner);
    assert_eq!(jumps, 1);
    assert_eq!(game.score(), 1);
    assert!(game.obstacles().is_empty());
}

#[test]
fn test_autopilot_survives_many_batches() {
    let mut game = RunnerGame::new(GameConfig::default(), FixedSource::always(1));
    game.start();

    for tick in 0..1500 {
        autopilot(&mut game);
        game.tick();
        assert_eq!(game.phase(), Phase::Playing, "crashed at tick {}", tick);
    }

    assert!(game.score() >= 10, "score {}", game.score());
    assert!(game.speed() > GameConfig::default().min_speed);
}

#[test]
fn test_game_over_ignores_jump_and_restarts_clean() {
    let mut game = RunnerGame::seeded(GameConfig::default(), 3);
    game.start();
    while game.phase() == Phase::Playing {
        game.tick();
    }

    let crashed = game.snapshot();
    assert!(!game.jump());
    assert!(!game.tick());
    assert_eq!(game.snapshot(), crashed);

    assert_eq!(game.primary_action(), Some(Command::Restart));
    assert_eq!(game.phase(), Phase::Playing);
    assert_eq!(game.score(), 0);
    assert_eq!(game.elapsed_frames(), 0);
    assert!(game.obstacles().is_empty());
    assert!((game.speed() - game.config().min_speed).abs() < f64::EPSILON);
    assert!(game.runner().on_ground);
}

#[test]
fn test_idle_jump_changes_nothing() {
    let mut game = RunnerGame::seeded(GameConfig::default(), 11);
    let before = game.snapshot();
    assert!(!game.apply(Command::Jump));
    assert!(!game.apply(Command::Restart));
    assert_eq!(game.snapshot(), before);
    assert_eq!(game.phase(), Phase::Idle);
}

#[test]
fn test_each_bone_scores_once() {
    // Bones lifted above the runner's head never collide
    let config = GameConfig {
        bone_lift: 60.0,
        ..GameConfig::default()
    };
    let interval = config.spawn_interval as u64;
    let mut game = RunnerGame::new(config, FixedSource::always(3));
    game.start();

    for n in 1..=900u64 {
        game.tick();
        let spawned = 3 * (n / interval) as u32;
        assert_eq!(game.score() + game.obstacles().len() as u32, spawned);
    }
    assert_eq!(game.phase(), Phase::Playing);
    assert!(game.score() >= 3);
}

#[test]
fn test_reset_to_idle_mid_run() {
    let mut game = RunnerGame::seeded(GameConfig::default(), 5);
    game.start();
    for _ in 0..150 {
        game.tick();
    }
    game.reset_to_idle();

    assert_eq!(game.phase(), Phase::Idle);
    assert_eq!(game.score(), 0);
    assert!(game.obstacles().is_empty());
    assert_eq!(game.spawn_counter(), 0);
    assert!(game.start());
}

#[test]
fn test_same_seed_same_run() {
    let mut a = RunnerGame::seeded(GameConfig::default(), 99);
    let mut b = RunnerGame::seeded(GameConfig::default(), 99);
    a.start();
    b.start();
    for _ in 0..600 {
        autopilot(&mut a);
        autopilot(&mut b);
        a.tick();
        b.tick();
        assert_eq!(a.snapshot(), b.snapshot());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_run_invariants_hold(
        seed in any::<u64>(),
        jumps in proptest::collection::vec(0u64..600, 0..20),
    ) {
        let mut game = RunnerGame::seeded(GameConfig::default(), seed);
        game.start();
        let ground = game.runner().ground_level();
        let max_speed = game.config().max_speed;

        let mut last_speed = game.speed();
        let mut last_score = game.score();
        for tick in 0..600u64 {
            if jumps.contains(&tick) {
                game.jump();
            }
            game.tick();

            let runner = game.runner();
            prop_assert!(runner.y <= ground + 1e-9);
            if runner.on_ground {
                prop_assert_eq!(runner.velocity, 0.0);
            }
            prop_assert!(game.speed() >= last_speed);
            prop_assert!(game.speed() <= max_speed);
            prop_assert!(game.score() >= last_score);
            last_speed = game.speed();
            last_score = game.score();

            if game.phase() == Phase::GameOver {
                break;
            }
        }
    }
}
