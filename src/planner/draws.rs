use std::collections::VecDeque;

use rand::Rng;

/// Source of candidate picks for the meal assembler.
///
/// `draw(len)` returns an index in `0..len`; `len` is always at least 1.
pub trait DrawSource {
    fn draw(&mut self, len: usize) -> usize;
}

/// Uniform draws from any `rand` generator.
#[derive(Debug)]
pub struct RngDraws<R>(pub R);

impl<R: Rng> DrawSource for RngDraws<R> {
    fn draw(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }
}

impl<R: Rng> RngDraws<R> {
    pub fn new(rng: R) -> Self {
        Self(rng)
    }
}

/// A fixed sequence of picks, each reduced modulo the pool size.
///
/// Once the script runs out every further draw returns 0.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDraws {
    picks: VecDeque<usize>,
}

impl ScriptedDraws {
    pub fn new(picks: impl IntoIterator<Item = usize>) -> Self {
        Self {
            picks: picks.into_iter().collect(),
        }
    }

    /// Picks not yet consumed.
    pub fn remaining(&self) -> usize {
        self.picks.len()
    }
}

impl DrawSource for ScriptedDraws {
    fn draw(&mut self, len: usize) -> usize {
        self.picks.pop_front().map_or(0, |p| p % len)
    }
}
