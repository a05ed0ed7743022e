//! Choice sources: the one seam through which the engine picks filler phrases
//! and verbs. Production uses an entropy-seeded RNG; tests pin output with a
//! fixed seed or `FirstChoice`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub trait ChoiceSource: Send {
    /// Returns an index in `0..len`. Callers never pass `len == 0`.
    fn choose_index(&mut self, len: usize) -> usize;
}

/// Picks one element of `items`, or `None` when the slice is empty.
pub fn choose<'a, T>(source: &mut dyn ChoiceSource, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    let idx = source.choose_index(items.len()).min(items.len() - 1);
    items.get(idx)
}

/// Uniform selection backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomChoice<R = StdRng> {
    rng: R,
}

impl RandomChoice<StdRng> {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded when a seed is configured, entropy otherwise.
    pub fn from_seed_opt(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::seeded)
    }
}

impl<R: Rng + Send> RandomChoice<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng + Send> ChoiceSource for RandomChoice<R> {
    fn choose_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Always takes the first candidate.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstChoice;

impl ChoiceSource for FirstChoice {
    fn choose_index(&mut self, _len: usize) -> usize {
        0
    }
}
