//! Bone batch generation.

use super::types::Obstacle;
use crate::config::GameConfig;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Source of random integers for the generator.
///
/// Injected into the game so runs can be replayed from a seed or scripted
/// outright in tests.
pub trait RandomSource {
    /// A value in `low..=high`. Implementations may assume `low <= high`.
    fn next_in_range(&mut self, low: u32, high: u32) -> u32;
}

/// Adapts any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R: RngCore>(R);

impl<R: RngCore> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self(rng)
    }
}

impl RngSource<StdRng> {
    /// Reproducible source: same seed, same bone batches.
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }
}

impl<R: RngCore> RandomSource for RngSource<R> {
    fn next_in_range(&mut self, low: u32, high: u32) -> u32 {
        self.0.gen_range(low..=high)
    }
}

/// Replays a fixed sequence of values, clamped into the requested range.
#[derive(Debug, Clone)]
pub struct FixedSource {
    values: Vec<u32>,
    cursor: usize,
}

impl FixedSource {
    /// Cycles through `values`; an empty list always yields the range minimum.
    pub fn new(values: Vec<u32>) -> Self {
        Self { values, cursor: 0 }
    }

    pub fn always(value: u32) -> Self {
        Self::new(vec![value])
    }
}

impl RandomSource for FixedSource {
    fn next_in_range(&mut self, low: u32, high: u32) -> u32 {
        if self.values.is_empty() {
            return low;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor = self.cursor.wrapping_add(1);
        value.clamp(low, high)
    }
}

/// Emits a batch of bones every `interval` ticks.
#[derive(Debug, Clone, PartialEq)]
pub struct ObstacleGenerator {
    counter: u32,
    interval: u32,
    batch_min: u32,
    batch_max: u32,
    spawn_x: f64,
    y: f64,
    width: f64,
    height: f64,
    gap: f64,
}

impl ObstacleGenerator {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            counter: 0,
            interval: config.spawn_interval.max(1),
            batch_min: config.batch_min,
            batch_max: config.batch_max.max(config.batch_min),
            spawn_x: config.world_width,
            y: config.bone_y(),
            width: config.bone_width,
            height: config.bone_height,
            gap: config.bone_gap,
        }
    }

    /// Ticks since the last batch.
    pub fn counter(&self) -> u32 {
        self.counter
    }

    pub fn reset(&mut self) {
        self.counter = 0;
    }

    /// Count one tick and append a batch to `active` when the interval is
    /// reached. Returns how many bones were spawned.
    pub fn advance<S: RandomSource + ?Sized>(
        &mut self,
        source: &mut S,
        active: &mut Vec<Obstacle>,
    ) -> usize {
        self.counter += 1;
        if self.counter < self.interval {
            return 0;
        }
        self.counter = 0;

        let count = source.next_in_range(self.batch_min, self.batch_max);
        active.extend(self.batch(count));
        count as usize
    }

    /// A batch of `count` bones lined up offscreen to the right.
    pub fn batch(&self, count: u32) -> impl Iterator<Item = Obstacle> + '_ {
        let stride = self.width + self.gap;
        (0..count).map(move |i| {
            Obstacle::new(
                self.spawn_x + i as f64 * stride,
                self.y,
                self.width,
                self.height,
            )
        })
    }
}
