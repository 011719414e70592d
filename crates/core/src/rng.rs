//! RNG module - 7-bag piece generation
//!
//! Each bag holds one of each kind, shuffled. Kinds are drawn until the bag
//! is empty, then a fresh bag is shuffled. Any seven consecutive draws that
//! start on a bag boundary contain every kind exactly once.
//!
//! Also provides a simple LCG so games replay exactly from a seed.

use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Random value in `[0, max)`; `max` must be non-zero
    pub fn next_range(&mut self, max: u32) -> u32 {
        debug_assert!(max > 0);
        // Multiply-shift keeps the high bits; the low bits of an LCG cycle.
        ((u64::from(self.next_u32()) * u64::from(max)) >> 32) as u32
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }

    /// Pick one element uniformly, `None` for an empty slice
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        if slice.is_empty() {
            return None;
        }
        let i = self.next_range(slice.len() as u32) as usize;
        slice.get(i)
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Anything that can hand out the next piece kind
pub trait PieceSource {
    fn next_kind(&mut self) -> PieceKind;
}

/// Shuffled 7-bag generator; an endless iterator of kinds
#[derive(Debug, Clone)]
pub struct SevenBag {
    bag: [PieceKind; 7],
    bag_index: usize,
    rng: SimpleRng,
}

impl SevenBag {
    pub fn new(seed: u32) -> Self {
        let mut bag = Self {
            bag: PieceKind::ALL,
            bag_index: 0,
            rng: SimpleRng::new(seed),
        };
        bag.refill();
        bag
    }

    fn refill(&mut self) {
        self.bag = PieceKind::ALL;
        self.rng.shuffle(&mut self.bag);
        self.bag_index = 0;
    }

    /// The kind the next draw will return, without drawing it.
    ///
    /// Past the end of a bag the preview shuffles a copy of the RNG, so it
    /// matches what the next draw will shuffle.
    pub fn peek(&self) -> PieceKind {
        if let Some(&kind) = self.bag.get(self.bag_index) {
            return kind;
        }
        let mut preview_rng = self.rng.clone();
        let mut next_bag = PieceKind::ALL;
        preview_rng.shuffle(&mut next_bag);
        next_bag[0]
    }

    pub fn draw(&mut self) -> PieceKind {
        if self.bag_index >= self.bag.len() {
            self.refill();
        }
        let kind = self.bag[self.bag_index];
        self.bag_index += 1;
        kind
    }

    /// Kinds left in the current bag
    pub fn remaining(&self) -> &[PieceKind] {
        &self.bag[self.bag_index..]
    }
}

impl Default for SevenBag {
    fn default() -> Self {
        Self::new(1)
    }
}

impl Iterator for SevenBag {
    type Item = PieceKind;

    fn next(&mut self) -> Option<PieceKind> {
        Some(self.draw())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl PieceSource for SevenBag {
    fn next_kind(&mut self) -> PieceKind {
        self.draw()
    }
}

/// A fixed sequence of kinds, repeated forever
#[derive(Debug, Clone)]
pub struct Scripted {
    kinds: Vec<PieceKind>,
    pos: usize,
}

impl Scripted {
    /// Cycle through `kinds`; an empty script yields `O` forever
    pub fn new(kinds: impl IntoIterator<Item = PieceKind>) -> Self {
        let mut kinds: Vec<PieceKind> = kinds.into_iter().collect();
        if kinds.is_empty() {
            kinds.push(PieceKind::O);
        }
        Self { kinds, pos: 0 }
    }
}

impl PieceSource for Scripted {
    fn next_kind(&mut self) -> PieceKind {
        let kind = self.kinds[self.pos % self.kinds.len()];
        self.pos += 1;
        kind
    }
}

impl<S: PieceSource + ?Sized> PieceSource for Box<S> {
    fn next_kind(&mut self) -> PieceKind {
        (**self).next_kind()
    }
}
