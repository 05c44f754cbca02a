// src/models/cev.rs
use super::model::SdeModel;
use crate::error::{validation::*, SdeResult};
use serde::{Deserialize, Serialize};

/// Constant elasticity of variance: `dS = μ S dt + σ S^γ dW`
///
/// For non-integer `gamma` the diffusion is only real for `S >= 0`; keeping the
/// path non-negative is the caller's job (the solver aborts on negative values).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cev {
    pub mu: f64,
    pub sigma: f64,
    pub gamma: f64,
}

impl Cev {
    pub fn new(mu: f64, sigma: f64, gamma: f64) -> SdeResult<Self> {
        let cev = Cev { mu, sigma, gamma };
        cev.validate()?;
        Ok(cev)
    }

    pub fn validate(&self) -> SdeResult<()> {
        validate_finite("mu", self.mu)?;
        validate_non_negative("sigma", self.sigma)?;
        validate_finite("gamma", self.gamma)
    }
}

impl Default for Cev {
    fn default() -> Self {
        Cev {
            mu: 0.05,
            sigma: 0.2,
            gamma: 0.5,
        }
    }
}

impl SdeModel for Cev {
    fn drift(&self, s: f64, _t: f64) -> f64 {
        self.mu * s
    }

    fn diffusion(&self, s: f64, _t: f64) -> f64 {
        self.sigma * s.powf(self.gamma)
    }
}
