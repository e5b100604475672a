//! Uniform random draws backing the randomized queue and the sampling clients.
//!
//! The global generator is per thread: each thread gets its own, seeded from
//! OS entropy, and [`set_seed`] reseeds only the calling thread's. Independent
//! generators are either derived from it with [`UniformRandom::new`] or built
//! deterministically with [`UniformRandom::seeded`].

use std::cell::RefCell;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::error::{Error, Result};

thread_local! {
    // See interior mutability pattern
    static GLOBAL: RefCell<UniformRandom> = RefCell::new(UniformRandom::from_entropy());
}

/// A source of uniform integers, Bernoulli trials and uniform shuffles.
#[derive(Debug, Clone)]
pub struct UniformRandom {
    rng: StdRng,
}

impl UniformRandom {
    /// Creates a generator seeded from the current thread's global generator,
    /// so that `set_seed` makes every later `new()` reproducible as well.
    pub fn new() -> UniformRandom {
        let seed = GLOBAL.with(|global| global.borrow_mut().rng.gen::<u64>());
        UniformRandom::seeded(seed)
    }

    pub fn seeded(seed: u64) -> UniformRandom {
        UniformRandom { rng: StdRng::seed_from_u64(seed) }
    }

    fn from_entropy() -> UniformRandom {
        UniformRandom { rng: StdRng::from_entropy() }
    }

    /// Returns an integer in `[0, n)`, each value equally likely.
    pub fn uniform(&mut self, n: usize) -> Result<usize> {
        if n == 0 {
            return Err(Error::InvalidArgument("n must be positive, got 0".into()));
        }
        Ok(self.rng.gen_range(0..n))
    }

    /// Returns `true` with probability `p`.
    pub fn bernoulli(&mut self, p: f64) -> Result<bool> {
        // Also rejects NaN
        if !(0.0..=1.0).contains(&p) {
            return Err(Error::InvalidArgument(format!("probability must be in [0, 1], got {}", p)));
        }
        Ok(self.rng.gen_bool(p))
    }

    /// Shuffles `items` in place; every permutation is equally likely.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }
}

impl Default for UniformRandom {
    fn default() -> Self {
        UniformRandom::new()
    }
}

/// Reseeds the calling thread's global generator.
pub fn set_seed(seed: u64) {
    GLOBAL.with(|global| *global.borrow_mut() = UniformRandom::seeded(seed));
}

pub fn uniform(n: usize) -> Result<usize> {
    GLOBAL.with(|global| global.borrow_mut().uniform(n))
}

pub fn bernoulli(p: f64) -> Result<bool> {
    GLOBAL.with(|global| global.borrow_mut().bernoulli(p))
}

pub fn shuffle<T>(items: &mut [T]) {
    GLOBAL.with(|global| global.borrow_mut().shuffle(items))
}
