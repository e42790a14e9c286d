//! Fallback move selection
//!
//! Used when the minimax root finds no candidate. Kept behind a trait so
//! tests can swap the random choice for a deterministic one.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::board::Pos;

/// Chooses one move out of a candidate list
pub trait MovePicker {
    /// Pick a candidate, `None` when the list is empty
    fn pick(&mut self, candidates: &[Pos]) -> Option<Pos>;
}

/// Uniformly random choice
#[derive(Debug, Clone)]
pub struct RandomPicker {
    rng: StdRng,
}

impl RandomPicker {
    /// Picker seeded from OS entropy
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible picker
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl MovePicker for RandomPicker {
    fn pick(&mut self, candidates: &[Pos]) -> Option<Pos> {
        candidates.choose(&mut self.rng).copied()
    }
}

/// Always the first candidate (row-major first empty cell)
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstPicker;

impl MovePicker for FirstPicker {
    fn pick(&mut self, candidates: &[Pos]) -> Option<Pos> {
        candidates.first().copied()
    }
}

impl<P: MovePicker + ?Sized> MovePicker for Box<P> {
    fn pick(&mut self, candidates: &[Pos]) -> Option<Pos> {
        (**self).pick(candidates)
    }
}
