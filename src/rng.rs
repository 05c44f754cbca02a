// src/rng.rs
//! Noise Sources for Monte Carlo Simulations
//!
//! # Design
//!
//! The solver consumes one standard-normal variate per time step and scales it
//! into a Wiener increment itself (`dW = √Δt · Z`). Keeping generation apart
//! from integration means a scheme can reuse the same increment in several
//! evaluations (predictor and corrector) within one step.
//!
//! # Reproducibility
//!
//! A source built with [`NormalNoise::new`] yields the same sequence for the
//! same seed. [`NormalNoise::from_entropy`] (also the `Default`) seeds from the
//! operating system and is meant for production runs.
//!
//! # Thread Safety
//!
//! `generate` takes `&mut self`; one instance feeds one consumer. Concurrent
//! simulation needs one independently seeded source per worker.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};

/// Producer of independent standard-normal variates
pub trait NoiseSource {
    /// Draw one N(0,1) variate, advancing the internal state
    fn generate(&mut self) -> f64;
}

impl<N: NoiseSource + ?Sized> NoiseSource for &mut N {
    fn generate(&mut self) -> f64 {
        (**self).generate()
    }
}

impl<N: NoiseSource + ?Sized> NoiseSource for Box<N> {
    fn generate(&mut self) -> f64 {
        (**self).generate()
    }
}

/// Standard-normal noise backed by `StdRng`
#[derive(Debug, Clone)]
pub struct NormalNoise {
    rng: StdRng,
    seed: Option<u64>,
}

impl NormalNoise {
    /// Deterministic source for a fixed seed
    pub fn new(seed: u64) -> Self {
        NormalNoise {
            rng: seed_rng_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Source seeded from system entropy
    pub fn from_entropy() -> Self {
        NormalNoise {
            rng: StdRng::from_entropy(),
            seed: None,
        }
    }

    /// Seed used at construction, `None` when drawn from entropy
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl Default for NormalNoise {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl NoiseSource for NormalNoise {
    fn generate(&mut self) -> f64 {
        get_normal_draw(&mut self.rng)
    }
}

pub fn seed_rng_from_u64(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub fn get_normal_draw<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    StandardNormal.sample(rng)
}
