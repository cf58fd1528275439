use crate::core::errors::SimError;
use crate::core::execution::config::check_non_negative;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Uniform};

/// Lower bound (inclusive) of the random courier eta, seconds
pub const MIN_RANDOM_ETA: f64 = 3.0;
/// Upper bound (exclusive) of the random courier eta, seconds
pub const MAX_RANDOM_ETA: f64 = 15.0;

/// Source of the delay between order submission and courier arrival
#[derive(Debug, Clone)]
pub enum EtaSource {
    /// Every courier takes exactly this many seconds
    Fixed(f64),
    /// Couriers take a uniformly drawn time in `[MIN_RANDOM_ETA, MAX_RANDOM_ETA)`
    Uniform {
        rng: StdRng,
        distribution: Uniform<f64>,
    },
}

impl EtaSource {
    /// Every courier takes `eta` seconds; must be finite and non-negative
    pub fn fixed(eta: f64) -> Result<Self, SimError> {
        check_non_negative("eta", eta)?;
        Ok(EtaSource::Fixed(eta))
    }

    /// Uniform draw from a seeded generator, reproducible across runs
    pub fn seeded(seed: u64) -> Self {
        Self::uniform_from(StdRng::seed_from_u64(seed))
    }

    /// Uniform draw from an entropy-seeded generator
    pub fn from_entropy() -> Self {
        Self::uniform_from(StdRng::from_entropy())
    }

    /// Pick the source a configuration asks for: a fixed eta wins over any seed
    pub fn from_settings(eta: Option<f64>, seed: Option<u64>) -> Result<Self, SimError> {
        match (eta, seed) {
            (Some(eta), _) => Self::fixed(eta),
            (None, Some(seed)) => Ok(Self::seeded(seed)),
            (None, None) => Ok(Self::from_entropy()),
        }
    }

    fn uniform_from(rng: StdRng) -> Self {
        EtaSource::Uniform {
            rng,
            distribution: Uniform::new(MIN_RANDOM_ETA, MAX_RANDOM_ETA),
        }
    }

    /// Next courier eta in seconds
    pub fn next_eta(&mut self) -> f64 {
        match self {
            EtaSource::Fixed(eta) => *eta,
            EtaSource::Uniform { rng, distribution } => distribution.sample(rng),
        }
    }
}
