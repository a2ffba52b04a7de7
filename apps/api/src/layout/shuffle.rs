use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// How the wall's buckets are ordered on each request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShuffleMode {
    /// Fresh entropy per request.
    Random,
    /// Same order on every request. Set via `LAYOUT_SEED`.
    Seeded(u64),
}

impl ShuffleMode {
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or(ShuffleMode::Random, ShuffleMode::Seeded)
    }

    pub fn rng(self) -> StdRng {
        match self {
            ShuffleMode::Random => StdRng::from_entropy(),
            ShuffleMode::Seeded(seed) => StdRng::seed_from_u64(seed),
        }
    }
}

/// Uniform in-place Fisher–Yates shuffle.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    items.shuffle(rng);
}
