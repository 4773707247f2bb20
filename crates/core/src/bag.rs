//! Bag module - the piece supply
//!
//! Implements a "bag" randomizer: every configured shape appears exactly once
//! per shuffle cycle, in a uniformly random order. The queue is refilled with a
//! fresh permutation only once it runs dry, which bounds the drought of any
//! one kind to roughly two cycles.
//!
//! Shuffling uses a small seeded LCG so a seed replays the same supply.

use std::collections::VecDeque;

use crate::error::ConfigError;
use crate::shapes::Shape;
use crate::types::PieceKind;

/// Seeded linear congruential generator (Knuth's MMIX constants)
///
/// Only the high 32 bits of the 64-bit state are handed out; the low bits of
/// an LCG cycle with short periods.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    pub fn new(seed: u64) -> Self {
        Self {
            state: seed ^ 0x9E37_79B9_7F4A_7C15,
        }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.state >> 32) as u32
    }

    /// Value in `[0, max)`; `max` must be non-zero
    pub fn next_below(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Fisher-Yates shuffle
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_below((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

#[derive(Debug, Clone)]
pub struct Bag {
    /// Shapes that make up one shuffle cycle
    kinds: Vec<Shape>,
    /// Shapes still to be drawn, front first
    queue: VecDeque<Shape>,
    rng: SimpleRng,
}

impl Bag {
    /// A bag holding the seven canonical shapes
    pub fn new(seed: u64) -> Self {
        Self {
            kinds: Shape::canonical_set(),
            queue: VecDeque::new(),
            rng: SimpleRng::new(seed),
        }
    }

    /// A bag holding only `kinds`
    pub fn with_kinds(kinds: Vec<Shape>, seed: u64) -> Result<Self, ConfigError> {
        let mut bag = Self::new(seed);
        bag.replace(kinds)?;
        Ok(bag)
    }

    /// Refill the queue with one permutation of the configured set
    ///
    /// With `reset_all` the pending queue is discarded first (game start).
    /// Otherwise a permutation is appended only when the queue is exhausted, so
    /// calling this mid-cycle never disturbs the current cycle.
    pub fn shuffle(&mut self, reset_all: bool) {
        if reset_all {
            self.queue.clear();
        }
        if !self.queue.is_empty() {
            return;
        }
        let mut cycle = self.kinds.clone();
        self.rng.shuffle(&mut cycle);
        self.queue.extend(cycle);
    }

    /// Draw the next shape, refilling first if the queue is exhausted
    pub fn next_kind(&mut self) -> Shape {
        self.shuffle(false);
        match self.queue.pop_front() {
            Some(shape) => shape,
            // `kinds` is never empty, so a refill always yields something.
            None => unreachable!("bag refilled from an empty kind set"),
        }
    }

    /// The shape at the front of the queue, if the current cycle is not exhausted
    pub fn current_kind(&self) -> Option<&Shape> {
        self.queue.front()
    }

    /// The kind the next `next_kind` call will return
    ///
    /// When the queue is exhausted this previews the coming shuffle on a copy of
    /// the RNG, so the preview always agrees with the following draw.
    pub fn peek_next(&self) -> PieceKind {
        if let Some(shape) = self.queue.front() {
            return shape.kind();
        }
        let mut preview_rng = self.rng.clone();
        let mut cycle: Vec<PieceKind> = self.kinds.iter().map(Shape::kind).collect();
        preview_rng.shuffle(&mut cycle);
        cycle[0]
    }

    /// Extend the configured set; the already-drawn queue is left alone
    pub fn add(&mut self, custom: Vec<Shape>) {
        self.kinds.extend(custom);
    }

    /// Replace the configured set; the already-drawn queue is left alone
    pub fn replace(&mut self, kinds: Vec<Shape>) -> Result<(), ConfigError> {
        if kinds.is_empty() {
            return Err(ConfigError::EmptyBag);
        }
        self.kinds = kinds;
        Ok(())
    }

    /// Configured shapes per cycle
    pub fn kinds(&self) -> &[Shape] {
        &self.kinds
    }

    /// Shapes remaining in the current cycle
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl Default for Bag {
    fn default() -> Self {
        Self::new(1)
    }
}
