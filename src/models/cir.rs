// src/models/cir.rs
//! Cox-Ingersoll-Ross mean-reverting square-root process
//!
//! ```text
//! dS_t = κ(θ - S_t) dt + σ√S_t dW_t
//! ```
//!
//! # Feller Condition
//!
//! The process stays strictly positive in continuous time when `2κθ > σ²`.
//! A discretized path can still cross zero for coarse steps; the solver
//! reports that as a negative asset price rather than clamping.

use super::model::SdeModel;
use crate::error::{validation::*, SdeResult};
use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cir {
    pub kappa: f64, // Mean reversion speed
    pub theta: f64, // Long-term level
    pub sigma: f64, // Volatility
}

impl Cir {
    pub fn new(kappa: f64, theta: f64, sigma: f64) -> SdeResult<Self> {
        let cir = Cir {
            kappa,
            theta,
            sigma,
        };
        cir.validate()?;
        Ok(cir)
    }

    pub fn validate(&self) -> SdeResult<()> {
        validate_finite("kappa", self.kappa)?;
        validate_finite("theta", self.theta)?;
        validate_non_negative("sigma", self.sigma)?;

        if !self.satisfies_feller() {
            warn!(
                kappa = self.kappa,
                theta = self.theta,
                sigma = self.sigma,
                "Feller condition violated (2κθ ≤ σ²); paths may reach zero"
            );
        }
        Ok(())
    }

    /// `2κθ > σ²`
    pub fn satisfies_feller(&self) -> bool {
        2.0 * self.kappa * self.theta > self.sigma * self.sigma
    }
}

impl Default for Cir {
    fn default() -> Self {
        Cir {
            kappa: 0.1,
            theta: 0.2,
            sigma: 0.3,
        }
    }
}

impl SdeModel for Cir {
    fn drift(&self, s: f64, _t: f64) -> f64 {
        self.kappa * (self.theta - s)
    }

    fn diffusion(&self, s: f64, _t: f64) -> f64 {
        self.sigma * s.sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean_reverting_drift() {
        let cir = Cir::new(2.0, 0.04, 0.1).unwrap();
        assert!(cir.drift(0.10, 0.0) < 0.0);
        assert!(cir.drift(0.01, 0.0) > 0.0);
        assert_eq!(cir.drift(0.04, 0.0), 0.0);
    }

    #[test]
    fn test_square_root_diffusion() {
        let cir = Cir::new(2.0, 0.04, 0.1).unwrap();
        assert_relative_eq!(cir.diffusion(0.04, 0.0), 0.02, max_relative = 1e-14);
    }

    #[test]
    fn test_feller() {
        assert!(Cir::new(2.0, 0.04, 0.1).unwrap().satisfies_feller());
        // Defaults are allowed but violate Feller: 2 * 0.1 * 0.2 = 0.04 < 0.09
        assert!(!Cir::default().satisfies_feller());
    }

    #[test]
    fn test_rejects_negative_sigma() {
        assert!(Cir::new(1.0, 0.05, -0.3).is_err());
    }
}
