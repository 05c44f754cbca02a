// src/models/gbm.rs
use super::model::SdeModel;
use crate::error::{validation::*, SdeResult};
use serde::{Deserialize, Serialize};

/// Geometric Brownian motion: `dS = μ S dt + σ S dW`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Gbm {
    pub mu: f64,
    pub sigma: f64,
}

impl Gbm {
    pub fn new(mu: f64, sigma: f64) -> SdeResult<Self> {
        let gbm = Gbm { mu, sigma };
        gbm.validate()?;
        Ok(gbm)
    }

    pub fn validate(&self) -> SdeResult<()> {
        validate_finite("mu", self.mu)?;
        validate_non_negative("sigma", self.sigma)
    }

    /// Closed-form log-normal step, exact for any `dt`
    pub fn exact_step(&self, s_t: f64, dt: f64, normal_draw: f64) -> f64 {
        s_t * ((self.mu - 0.5 * self.sigma * self.sigma) * dt
            + self.sigma * dt.sqrt() * normal_draw)
            .exp()
    }
}

impl Default for Gbm {
    fn default() -> Self {
        Gbm {
            mu: 0.05,
            sigma: 0.2,
        }
    }
}

impl SdeModel for Gbm {
    fn drift(&self, s: f64, _t: f64) -> f64 {
        self.mu * s
    }

    fn diffusion(&self, s: f64, _t: f64) -> f64 {
        self.sigma * s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_coefficients() {
        let gbm = Gbm::new(0.05, 0.2).unwrap();
        assert_relative_eq!(gbm.drift(100.0, 0.0), 5.0);
        assert_relative_eq!(gbm.diffusion(100.0, 0.5), 20.0);
    }

    #[test]
    fn test_rejects_invalid_parameters() {
        assert!(Gbm::new(f64::NAN, 0.2).is_err());
        assert!(Gbm::new(0.05, -0.2).is_err());
        assert!(Gbm::new(0.05, 0.0).is_ok());
    }

    #[test]
    fn test_exact_step_without_noise() {
        let gbm = Gbm::new(0.05, 0.0).unwrap();
        assert_relative_eq!(
            gbm.exact_step(100.0, 1.0, 0.3),
            100.0 * 0.05f64.exp(),
            max_relative = 1e-14
        );
    }
}
