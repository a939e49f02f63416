//! Random source for everything in the game that is left to chance.
//!
//! The game never calls a global RNG. A [`Dice`] is handed to the [`Game`](crate::game::Game)
//! at construction, so tests can plug in a [`ScriptedDice`] and know exactly
//! what every roll will be.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

pub trait Dice {
    /// Uniform integer in `1..=max`. A `max` below 1 is treated as 1.
    fn roll(&mut self, max: i32) -> i32;

    /// True with probability `p`.
    fn chance(&mut self, p: f64) -> bool;

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn pick(&mut self, len: usize) -> usize;
}

/// Dice backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngDice<R> {
    rng: R,
}

impl RngDice<StdRng> {
    pub fn from_seed(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }

    pub fn from_entropy() -> Self {
        Self { rng: StdRng::from_os_rng() }
    }
}

impl<R: Rng> RngDice<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Dice for RngDice<R> {
    fn roll(&mut self, max: i32) -> i32 {
        let v = self.rng.random_range(1..=max.max(1));
        tracing::trace!(max, v, "roll");
        v
    }

    fn chance(&mut self, p: f64) -> bool {
        let v = self.rng.random_bool(p.clamp(0.0, 1.0));
        tracing::trace!(p, v, "chance");
        v
    }

    fn pick(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

/// Dice that replay pre-recorded outcomes.
///
/// When a queue runs dry the dice fall back to: a roll of `max`, a failed
/// chance, and index 0.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDice {
    rolls: VecDeque<i32>,
    chances: VecDeque<bool>,
    picks: VecDeque<usize>,
}

impl ScriptedDice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rolls(mut self, rolls: impl IntoIterator<Item = i32>) -> Self {
        self.rolls.extend(rolls);
        self
    }

    pub fn chances(mut self, chances: impl IntoIterator<Item = bool>) -> Self {
        self.chances.extend(chances);
        self
    }

    pub fn picks(mut self, picks: impl IntoIterator<Item = usize>) -> Self {
        self.picks.extend(picks);
        self
    }
}

impl Dice for ScriptedDice {
    fn roll(&mut self, max: i32) -> i32 {
        let max = max.max(1);
        self.rolls.pop_front().map_or(max, |v| v.clamp(1, max))
    }

    fn chance(&mut self, _p: f64) -> bool {
        self.chances.pop_front().unwrap_or(false)
    }

    fn pick(&mut self, len: usize) -> usize {
        self.picks.pop_front().map_or(0, |v| v.min(len.saturating_sub(1)))
    }
}
