//! Fluent assembly of a [`SimulationConfig`]
//!
//! The builder owns a single `Arc<StochasticModel>` and builds the chosen
//! scheme around it, so model and scheme can never drift apart.

use crate::error::{SdeError, SdeResult};
use crate::mc::mc_engine::SimulationConfig;
use crate::mc::payoffs::Payoff;
use crate::models::StochasticModel;
use crate::rng::NormalNoise;
use crate::solvers::SchemeKind;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct SimulationBuilder<N = NormalNoise> {
    model: Option<Arc<StochasticModel>>,
    scheme: Option<SchemeKind>,
    noise: Option<N>,
    payoff: Option<Payoff>,
    s0: f64,
    t: f64,
    steps: usize,
    trials: usize,
}

impl<N> Default for SimulationBuilder<N> {
    fn default() -> Self {
        SimulationBuilder {
            model: None,
            scheme: None,
            noise: None,
            payoff: None,
            s0: 0.0,
            t: 0.0,
            steps: 0,
            trials: 0,
        }
    }
}

impl SimulationBuilder<NormalNoise> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeded standard-normal noise
    pub fn seed(self, seed: u64) -> Self {
        self.noise(NormalNoise::new(seed))
    }
}

impl<N> SimulationBuilder<N> {
    pub fn initial_condition(mut self, s0: f64, t: f64, steps: usize, trials: usize) -> Self {
        self.s0 = s0;
        self.t = t;
        self.steps = steps;
        self.trials = trials;
        self
    }

    pub fn model(mut self, model: impl Into<StochasticModel>) -> Self {
        self.model = Some(Arc::new(model.into()));
        self
    }

    /// Use an already shared model instance
    pub fn shared_model(mut self, model: Arc<StochasticModel>) -> Self {
        self.model = Some(model);
        self
    }

    pub fn scheme(mut self, kind: SchemeKind) -> Self {
        self.scheme = Some(kind);
        self
    }

    /// Set the noise source; the builder takes on its type
    pub fn noise<M>(self, noise: M) -> SimulationBuilder<M> {
        SimulationBuilder {
            model: self.model,
            scheme: self.scheme,
            noise: Some(noise),
            payoff: self.payoff,
            s0: self.s0,
            t: self.t,
            steps: self.steps,
            trials: self.trials,
        }
    }

    pub fn payoff(mut self, payoff: Payoff) -> Self {
        self.payoff = Some(payoff);
        self
    }

    /// Validate every field and assemble the configuration
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` for a missing component or a non-positive
    /// `s0`, `t`, `steps` or `trials`; `InvalidParameter` for invalid model or
    /// payoff parameters.
    pub fn build(self) -> SdeResult<SimulationConfig<N>> {
        let model = self.model.ok_or_else(|| missing("model"))?;
        let kind = self.scheme.ok_or_else(|| missing("scheme"))?;
        let noise = self.noise.ok_or_else(|| missing("noise"))?;
        let payoff = self.payoff.ok_or_else(|| missing("payoff"))?;

        let config = SimulationConfig {
            scheme: kind.build(Arc::clone(&model)),
            model,
            noise,
            payoff,
            s0: self.s0,
            t: self.t,
            steps: self.steps,
            trials: self.trials,
        };
        config.validate()?;
        Ok(config)
    }
}

fn missing(field: &str) -> SdeError {
    SdeError::InvalidConfiguration {
        field: field.to_string(),
        reason: "component not set".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Cev, Gbm};

    fn complete() -> SimulationBuilder {
        SimulationBuilder::new()
            .initial_condition(100.0, 1.0, 50, 10)
            .model(Gbm::default())
            .scheme(SchemeKind::Euler)
            .seed(1)
            .payoff(Payoff::EuropeanCall { k: 100.0 })
    }

    #[test]
    fn test_build_complete() {
        let cfg = complete().build().unwrap();
        assert!(Arc::ptr_eq(cfg.scheme.model(), &cfg.model));
        assert_eq!(cfg.noise.seed(), Some(1));
        assert_eq!(cfg.steps, 50);
        assert_eq!(cfg.dt(), 0.02);
    }

    #[test]
    fn test_missing_component() {
        let err = SimulationBuilder::new()
            .initial_condition(100.0, 1.0, 50, 10)
            .model(Gbm::default())
            .scheme(SchemeKind::Euler)
            .payoff(Payoff::EuropeanCall { k: 100.0 })
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            SdeError::InvalidConfiguration {
                field: "noise".to_string(),
                reason: "component not set".to_string(),
            }
        );
    }

    #[test]
    fn test_rejects_non_positive_initial_condition() {
        for (s0, t, steps, trials) in [
            (0.0, 1.0, 50, 10),
            (100.0, 0.0, 50, 10),
            (100.0, 1.0, 0, 10),
            (100.0, 1.0, 50, 0),
            (-5.0, 1.0, 50, 10),
        ] {
            let result = complete().initial_condition(s0, t, steps, trials).build();
            assert!(
                matches!(result, Err(SdeError::InvalidConfiguration { .. })),
                "accepted s0={} t={} steps={} trials={}",
                s0,
                t,
                steps,
                trials
            );
        }
    }

    #[test]
    fn test_accepts_long_paths() {
        let cfg = complete()
            .initial_condition(100.0, 1.0, 200_000, 1)
            .build()
            .unwrap();
        assert_eq!(cfg.steps, 200_000);
    }

    #[test]
    fn test_accepts_zero_strike() {
        let cfg = complete()
            .payoff(Payoff::EuropeanCall { k: 0.0 })
            .build()
            .unwrap();
        assert_eq!(cfg.payoff, Payoff::EuropeanCall { k: 0.0 });
    }

    #[test]
    fn test_rejects_invalid_model() {
        let result = complete()
            .model(Cev {
                mu: 0.05,
                sigma: -0.2,
                gamma: 0.5,
            })
            .build();
        assert!(matches!(result, Err(SdeError::InvalidParameter { .. })));
    }
}
