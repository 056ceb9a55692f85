//! Deterministic per-person and simulation-level RNG wrappers.
//!
//! # Determinism strategy
//!
//! Each person gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (person_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive person IDs uniformly across the seed space.
//! This means:
//!
//! - People never share RNG state (no contention, no ordering dependency).
//! - All RNG calls are local to the owning thread; no synchronisation needed.
//! - Site choices and preferred types are reproducible per person for a
//!   given global seed, even though thread interleaving is not.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::PersonId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── PersonRng ─────────────────────────────────────────────────────────────────

/// Per-person deterministic RNG.
///
/// Create one per person at simulation init.  The type is `!Sync` to prevent
/// accidental sharing across threads — each person thread owns its own.
pub struct PersonRng(SmallRng);

impl PersonRng {
    /// Seed deterministically from the run's global seed and a person ID.
    pub fn new(global_seed: u64, person: PersonId) -> Self {
        let seed = global_seed ^ (person.0 as u64).wrapping_mul(MIXING_CONSTANT);
        PersonRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Choose a random element from a slice; `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Simulation-level RNG for global operations (depot seeding, the van's
/// travel times, etc.).
///
/// Used only in single-threaded or exclusively-owned contexts.  If another
/// worker needs randomness, derive it a child `SimRng` instead of sharing.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` with a different seed offset — useful for
    /// seeding per-worker RNGs deterministically from the root seed.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}
