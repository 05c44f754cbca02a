// src/solvers/euler_maruyama.rs
//! Euler-Maruyama Scheme for SDE Integration
//!
//! # Mathematical Framework
//!
//! For a general SDE:
//! ```text
//! dX_t = a(X_t, t) dt + b(X_t, t) dW_t
//! ```
//!
//! The Euler-Maruyama scheme provides the discretization:
//! ```text
//! X_{n+1} = X_n + a(X_n, t_n) Δt + b(X_n, t_n) ΔW_n
//! ```
//!
//! # Convergence Properties
//!
//! - **Strong convergence**: Order 0.5 in step size
//! - **Weak convergence**: Order 1.0 in step size

use super::Discretization;
use crate::error::{validation::validate_time_step, SdeResult};
use crate::models::{SdeModel, StochasticModel};
use std::sync::Arc;

/// Euler-Maruyama numerical scheme for SDE integration
#[derive(Debug)]
pub struct EulerMaruyama<M = StochasticModel> {
    model: Arc<M>,
}

impl<M: SdeModel> EulerMaruyama<M> {
    pub fn new(model: Arc<M>) -> Self {
        EulerMaruyama { model }
    }

    pub fn model(&self) -> &Arc<M> {
        &self.model
    }
}

impl<M> Clone for EulerMaruyama<M> {
    fn clone(&self) -> Self {
        EulerMaruyama {
            model: Arc::clone(&self.model),
        }
    }
}

impl<M: SdeModel> Discretization for EulerMaruyama<M> {
    fn advance(&self, s: f64, t: f64, dt: f64, dw: f64) -> SdeResult<f64> {
        validate_time_step(dt)?;
        Ok(s + self.model.drift(s, t) * dt + self.model.diffusion(s, t) * dw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Gbm;
    use approx::assert_relative_eq;

    #[test]
    fn test_single_step() {
        let scheme = EulerMaruyama::new(Arc::new(Gbm::new(0.05, 0.2).unwrap()));
        // 100 + 5 * 0.01 + 20 * 0.1
        let next = scheme.advance(100.0, 0.0, 0.01, 0.1).unwrap();
        assert_relative_eq!(next, 102.05, max_relative = 1e-14);
    }

    #[test]
    fn test_rejects_non_positive_dt() {
        let scheme = EulerMaruyama::new(Arc::new(Gbm::default()));
        assert!(scheme.advance(100.0, 0.0, 0.0, 0.1).is_err());
        assert!(scheme.advance(100.0, 0.0, -1.0, 0.1).is_err());
    }
}
