//! Stochastic models
//!
//! The set of supported dynamics is closed: [`StochasticModel`] enumerates
//! them and dispatches by `match`. Individual models also implement
//! [`SdeModel`] directly so schemes can be used with a concrete model type.

pub mod cev;
pub mod cir;
pub mod gbm;
pub mod model;

pub use cev::Cev;
pub use cir::Cir;
pub use gbm::Gbm;
pub use model::SdeModel;

use crate::error::SdeResult;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StochasticModel {
    Gbm(Gbm),
    Cev(Cev),
    Cir(Cir),
}

impl StochasticModel {
    pub fn validate(&self) -> SdeResult<()> {
        match self {
            StochasticModel::Gbm(m) => m.validate(),
            StochasticModel::Cev(m) => m.validate(),
            StochasticModel::Cir(m) => m.validate(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            StochasticModel::Gbm(_) => "GBM",
            StochasticModel::Cev(_) => "CEV",
            StochasticModel::Cir(_) => "CIR",
        }
    }
}

impl SdeModel for StochasticModel {
    #[inline]
    fn drift(&self, s: f64, t: f64) -> f64 {
        match self {
            StochasticModel::Gbm(m) => m.drift(s, t),
            StochasticModel::Cev(m) => m.drift(s, t),
            StochasticModel::Cir(m) => m.drift(s, t),
        }
    }

    #[inline]
    fn diffusion(&self, s: f64, t: f64) -> f64 {
        match self {
            StochasticModel::Gbm(m) => m.diffusion(s, t),
            StochasticModel::Cev(m) => m.diffusion(s, t),
            StochasticModel::Cir(m) => m.diffusion(s, t),
        }
    }
}

impl From<Gbm> for StochasticModel {
    fn from(m: Gbm) -> Self {
        StochasticModel::Gbm(m)
    }
}

impl From<Cev> for StochasticModel {
    fn from(m: Cev) -> Self {
        StochasticModel::Cev(m)
    }
}

impl From<Cir> for StochasticModel {
    fn from(m: Cir) -> Self {
        StochasticModel::Cir(m)
    }
}
