//! Random sources and run configuration.

use crate::error::*;
use std::fmt;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

/// Explicitly owned random source for generation.
///
/// A `Source` is a SplitMix64 stream. Every generator draws from the source
/// it is handed, so two runs started from the same seed see the same values.
/// The source implements [`rand::RngCore`], which lets generators use the
/// distributions and shuffling helpers from `rand`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    seed: u64,
    state: u64,
    gamma: u64,
}

impl Source {
    /// Create a source from a single seed value.
    pub fn from_seed(seed: u64) -> Self {
        let state = splitmix64_mix(seed);
        let gamma = mix_gamma(state);
        Source { seed, state, gamma }
    }

    /// Create a source seeded from the thread-local entropy pool.
    pub fn from_entropy() -> Self {
        use rand::Rng;
        Source::from_seed(rand::thread_rng().gen())
    }

    /// The seed this source was created from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Split off an independent source, advancing this one.
    pub fn split(&mut self) -> Source {
        let seed = self.next_u64();
        Source::from_seed(seed)
    }

    /// Generate the next random value and advance the stream.
    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(self.gamma);
        splitmix64_mix(self.state)
    }
}

impl rand::RngCore for Source {
    fn next_u32(&mut self) -> u32 {
        (Source::next_u64(self) >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        Source::next_u64(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = Source::next_u64(self).to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> std::result::Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Source({})", self.seed)
    }
}

/// A random source shared between concurrent check runs.
///
/// All draws go through one lock; the lock is held for exactly one
/// `generate()` call and released before the predicate runs.
#[derive(Debug, Clone)]
pub struct SharedSource {
    inner: Arc<Mutex<Source>>,
}

impl SharedSource {
    /// Wrap a source for shared use.
    pub fn new(source: Source) -> Self {
        SharedSource {
            inner: Arc::new(Mutex::new(source)),
        }
    }

    /// The process-wide source, seeded from entropy on first use.
    pub fn global() -> &'static SharedSource {
        static GLOBAL: OnceLock<SharedSource> = OnceLock::new();
        GLOBAL.get_or_init(|| SharedSource::new(Source::from_entropy()))
    }

    /// Draw one value from `generator` while holding the lock.
    pub fn draw<G>(&self, generator: &G) -> G::Value
    where
        G: crate::gen::Generator + ?Sized,
    {
        // A panicking generator cannot leave the stream half-updated.
        let mut source = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        generator.generate(&mut source)
    }

    /// The seed the underlying source was created from.
    pub fn seed(&self) -> u64 {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .seed()
    }
}

/// Default number of samples drawn by a check run.
pub const DEFAULT_TEST_LIMIT: usize = 20;

/// Configuration for check runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Number of samples to draw and evaluate.
    pub test_limit: usize,

    /// Seed for the run's source; a fresh entropy seed is used when `None`.
    pub seed: Option<u64>,

    /// Whether each sample outcome is written as a trace line.
    pub trace: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            test_limit: DEFAULT_TEST_LIMIT,
            seed: None,
            trace: true,
        }
    }
}

impl Config {
    /// Environment variable overriding the number of samples.
    pub const TESTS_VAR: &'static str = "GENCHECK_TESTS";

    /// Environment variable fixing the seed.
    pub const SEED_VAR: &'static str = "GENCHECK_SEED";

    /// Create a new config with the given number of tests.
    pub fn with_tests(mut self, tests: usize) -> Self {
        self.test_limit = tests;
        self
    }

    /// Create a new config that replays the given seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Turn per-sample trace output on or off.
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    /// Defaults overridden by `GENCHECK_TESTS` and `GENCHECK_SEED`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for the two variables.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        if let Some(raw) = lookup(Self::TESTS_VAR) {
            config.test_limit = parse_var(Self::TESTS_VAR, &raw)?;
        }
        if let Some(raw) = lookup(Self::SEED_VAR) {
            config.seed = Some(parse_var(Self::SEED_VAR, &raw)?);
        }
        Ok(config)
    }

    /// The source a run with this config starts from.
    pub fn source(&self) -> Source {
        match self.seed {
            Some(seed) => Source::from_seed(seed),
            None => Source::from_entropy(),
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, raw: &str) -> Result<T> {
    raw.trim()
        .parse()
        .map_err(|_| GencheckError::InvalidConfiguration {
            message: format!("{name} must be a non-negative integer, got {raw:?}"),
        })
}

/// SplitMix64 mixing function for high-quality output.
fn splitmix64_mix(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9e3779b97f4a7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
    z ^ (z >> 31)
}

/// Generate a good gamma value for SplitMix64 streams.
fn mix_gamma(mut z: u64) -> u64 {
    z = splitmix64_mix(z);
    // Ensure gamma is odd for maximal period
    (z | 1).wrapping_mul(0x9e3779b97f4a7c15)
}
