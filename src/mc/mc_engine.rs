// src/mc/mc_engine.rs
use crate::error::{validation::*, SdeError, SdeResult};
use crate::mc::payoffs::Payoff;
use crate::models::StochasticModel;
use crate::rng::{NoiseSource, NormalNoise};
use crate::solvers::{Discretization, Scheme};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Everything one Monte Carlo run needs
///
/// `scheme` should be built around the same `model` (see
/// [`SimulationBuilder`](crate::mc::builder::SimulationBuilder), which
/// guarantees it).
#[derive(Debug, Clone)]
pub struct SimulationConfig<N = NormalNoise> {
    pub model: Arc<StochasticModel>,
    pub scheme: Scheme,
    pub noise: N,
    pub payoff: Payoff,
    pub s0: f64,
    pub t: f64,
    pub steps: usize,
    pub trials: usize,
}

impl<N> SimulationConfig<N> {
    /// Validate the run parameters, the model and the payoff
    pub fn validate(&self) -> SdeResult<()> {
        validate_positive_field("s0", self.s0)?;
        validate_positive_field("t", self.t)?;
        validate_steps(self.steps)?;
        validate_trials(self.trials)?;
        self.model.validate()?;
        self.payoff.validate()?;

        if !Arc::ptr_eq(self.scheme.model(), &self.model) && **self.scheme.model() != *self.model
        {
            warn!(
                config_model = ?self.model,
                scheme_model = ?self.scheme.model(),
                "scheme integrates a different model than the one configured"
            );
        }
        Ok(())
    }

    pub fn dt(&self) -> f64 {
        self.t / self.steps as f64
    }
}

/// Result of a run: sample mean of payoffs and its sampling variance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct McEstimate {
    /// Arithmetic mean of the per-trial payoffs
    pub price: f64,
    /// Variance of the mean, `s² / M`
    pub variance: f64,
    pub trials: usize,
}

impl McEstimate {
    pub fn std_error(&self) -> f64 {
        self.variance.sqrt()
    }

    /// `(price - z·se, price + z·se)`; `z = 1.96` for 95%
    pub fn confidence_interval(&self, z: f64) -> (f64, f64) {
        let half_width = z * self.std_error();
        (self.price - half_width, self.price + half_width)
    }

    /// Present value under a constant rate: scales by `e^{-rT}`
    pub fn discounted(&self, rate: f64, maturity: f64) -> McEstimate {
        let discount = (-rate * maturity).exp();
        McEstimate {
            price: self.price * discount,
            variance: self.variance * discount * discount,
            trials: self.trials,
        }
    }
}

/// Monte Carlo solver
///
/// # Algorithm
///
/// For each of `M` trials:
/// ```text
/// S_0 = s0
/// S_{j+1} = scheme.advance(S_j, j·Δt, Δt, √Δt · Z_j),   Z_j ~ N(0,1)
/// ```
/// then the payoff is evaluated on the full path or on `S_N`, as the payoff
/// requires. The result is the undiscounted mean payoff; see
/// [`McEstimate::discounted`] for present value.
///
/// # Errors
///
/// The whole run fails (no partial result) on:
/// - invalid configuration or `Δt <= 0`
/// - a simulated value below zero (`NegativeAssetPrice`)
/// - a non-finite simulated value or mean payoff (`NumericalInstability`)
#[derive(Debug)]
pub struct McSolver<N = NormalNoise> {
    config: SimulationConfig<N>,
}

impl<N: NoiseSource> McSolver<N> {
    pub fn new(config: SimulationConfig<N>) -> SdeResult<Self> {
        config.validate()?;
        Ok(McSolver { config })
    }

    pub fn config(&self) -> &SimulationConfig<N> {
        &self.config
    }

    pub fn into_config(self) -> SimulationConfig<N> {
        self.config
    }

    /// Estimated (undiscounted) price
    pub fn solve(&mut self) -> SdeResult<f64> {
        self.solve_with_stats().map(|estimate| estimate.price)
    }

    pub fn solve_with_stats(&mut self) -> SdeResult<McEstimate> {
        let SimulationConfig {
            scheme,
            noise,
            payoff,
            s0,
            t,
            steps,
            trials,
            ..
        } = &mut self.config;
        let (s0, steps, trials) = (*s0, *steps, *trials);

        let dt = *t / steps as f64;
        validate_time_step(dt)?;
        let sqrt_dt = dt.sqrt();
        let needs_path = payoff.requires_full_path();

        debug!(
            model = scheme.model().name(),
            scheme = ?scheme.kind(),
            payoff = payoff.name(),
            s0,
            t = *t,
            steps,
            trials,
            needs_path,
            "starting Monte Carlo run"
        );

        let mut path = Vec::with_capacity(steps + 1);
        let mut sum_payoff = 0.0;
        // Welford running mean and sum of squared deviations
        let mut running_mean = 0.0;
        let mut m2 = 0.0;

        for trial in 0..trials {
            path.clear();
            path.push(s0);

            let mut s = s0;
            for j in 0..steps {
                let dw = sqrt_dt * noise.generate();
                s = scheme.advance(s, j as f64 * dt, dt, dw)?;

                if s < 0.0 {
                    error!(trial, step = j + 1, value = s, "negative asset price; aborting run");
                    return Err(SdeError::NegativeAssetPrice {
                        value: s,
                        step: j + 1,
                    });
                }
                if !s.is_finite() {
                    return Err(SdeError::NumericalInstability {
                        method: format!("{:?} scheme", scheme.kind()),
                        reason: format!(
                            "non-finite value {} at step {} of trial {}",
                            s,
                            j + 1,
                            trial
                        ),
                    });
                }
                path.push(s);
            }

            let value = if needs_path {
                payoff.path(&path)?
            } else {
                payoff.terminal(s)
            };
            sum_payoff += value;
            let delta = value - running_mean;
            running_mean += delta / (trial + 1) as f64;
            m2 += delta * (value - running_mean);
        }

        let n = trials as f64;
        let price = sum_payoff / n;
        if !price.is_finite() {
            return Err(SdeError::NumericalInstability {
                method: "Monte Carlo".to_string(),
                reason: format!("mean payoff is not finite: {}", price),
            });
        }

        let variance = if trials > 1 {
            (m2 / (n - 1.0) / n).max(0.0)
        } else {
            0.0
        };

        let estimate = McEstimate {
            price,
            variance,
            trials,
        };
        info!(
            price = estimate.price,
            std_error = estimate.std_error(),
            trials,
            "Monte Carlo run complete"
        );
        Ok(estimate)
    }
}
