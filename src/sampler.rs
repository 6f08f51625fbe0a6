use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

use crate::pool::{pool, CaseMode, DIGITS};

/// Anything that can pick a position in a pool of `bound` characters.
pub trait IndexSource {
    /// Returns an index in `[0, bound)`. `bound` is never zero.
    fn next_index(&mut self, bound: usize) -> usize;
}

impl<R: Rng> IndexSource for R {
    fn next_index(&mut self, bound: usize) -> usize {
        self.gen_range(0..bound)
    }
}

/// Draws random strings from the built-in character pools.
///
/// Every draw is independent and with replacement. Non-positive lengths
/// produce an empty string rather than an error.
pub struct StringSampler<S = ThreadRng> {
    source: S,
}

impl StringSampler<ThreadRng> {
    pub fn new() -> Self {
        Self {
            source: rand::thread_rng(),
        }
    }
}

impl Default for StringSampler<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl StringSampler<StdRng> {
    /// Reproducible sampler; same seed, same strings.
    pub fn seeded(seed: u64) -> Self {
        log::debug!("Seeding sampler with {}", seed);
        Self {
            source: StdRng::seed_from_u64(seed),
        }
    }
}

impl<S: IndexSource> StringSampler<S> {
    pub fn with_source(source: S) -> Self {
        Self { source }
    }

    pub fn random_alpha(&mut self, length: i64, case_mode: CaseMode) -> String {
        self.sample(length, &pool(case_mode, false))
    }

    pub fn random_numeric_string(&mut self, length: i64) -> String {
        self.sample(length, DIGITS)
    }

    pub fn random_alpha_numeric(&mut self, length: i64, case_mode: CaseMode) -> String {
        self.sample(length, &pool(case_mode, true))
    }

    fn sample(&mut self, length: i64, choose_from: &str) -> String {
        // pools are ASCII, so byte indexing is char indexing
        let chars = choose_from.as_bytes();
        if length <= 0 || chars.is_empty() {
            return String::new();
        }

        (0..length)
            .map(|_| chars[self.source.next_index(chars.len())] as char)
            .collect()
    }
}

pub fn random_alpha(length: i64, case_mode: CaseMode) -> String {
    StringSampler::new().random_alpha(length, case_mode)
}

pub fn random_numeric_string(length: i64) -> String {
    StringSampler::new().random_numeric_string(length)
}

pub fn random_alpha_numeric(length: i64, case_mode: CaseMode) -> String {
    StringSampler::new().random_alpha_numeric(length, case_mode)
}
