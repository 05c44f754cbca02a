//! TOML simulation configuration
//!
//! ```toml
//! s0 = 100.0
//! t = 1.0
//! steps = 500
//! trials = 100000
//! scheme = "milstein"
//! seed = 42
//!
//! [model]
//! type = "gbm"
//! mu = 0.05
//! sigma = 0.2
//!
//! [payoff]
//! type = "asian_put"
//! k = 100.0
//! ```
//!
//! Omitted model parameters take the model defaults; omitting `seed` seeds
//! the noise source from system entropy.

use crate::error::SdeResult;
use crate::mc::builder::SimulationBuilder;
use crate::mc::payoffs::Payoff;
use crate::models::StochasticModel;
use crate::rng::NormalNoise;
use crate::solvers::SchemeKind;
use serde::{Deserialize, Serialize};

/// Serializable description of a single simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SimulationSpec {
    #[serde(default)]
    pub name: Option<String>,
    pub model: StochasticModel,
    #[serde(default)]
    pub scheme: SchemeKind,
    pub payoff: Payoff,
    pub s0: f64,
    pub t: f64,
    pub steps: usize,
    pub trials: usize,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl SimulationSpec {
    pub fn from_toml_str(s: &str) -> SdeResult<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Builder carrying every field; validation happens in `build()`
    pub fn into_builder(self) -> SimulationBuilder<NormalNoise> {
        let noise = match self.seed {
            Some(seed) => NormalNoise::new(seed),
            None => NormalNoise::from_entropy(),
        };
        SimulationBuilder::new()
            .initial_condition(self.s0, self.t, self.steps, self.trials)
            .model(self.model)
            .scheme(self.scheme)
            .payoff(self.payoff)
            .noise(noise)
    }
}

/// A list of runs, written as `[[simulation]]` tables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationSuite {
    #[serde(rename = "simulation", default)]
    pub simulations: Vec<SimulationSpec>,
}

impl SimulationSuite {
    pub fn from_toml_str(s: &str) -> SdeResult<Self> {
        Ok(toml::from_str(s)?)
    }
}
