//! Discretization schemes
//!
//! A scheme advances a process value by one time step given a Wiener
//! increment supplied by the caller. Schemes are stateless apart from the
//! shared model they hold; every `advance` rejects `dt <= 0`.

pub mod euler_maruyama;
pub mod milstein;
pub mod predictor_corrector;

pub use euler_maruyama::EulerMaruyama;
pub use milstein::Milstein;
pub use predictor_corrector::DriftAdjustedPredictorCorrector;

use crate::error::SdeResult;
use crate::models::StochasticModel;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One-step integrator for a scalar SDE
pub trait Discretization {
    /// Advance `s` from `t` to `t + dt` using the Wiener increment `dw`
    fn advance(&self, s: f64, t: f64, dt: f64, dw: f64) -> SdeResult<f64>;
}

/// Selector used by configuration to pick a scheme
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemeKind {
    #[default]
    Euler,
    Milstein,
    PredictorCorrector,
}

impl SchemeKind {
    /// Build the scheme around a shared model
    pub fn build(self, model: Arc<StochasticModel>) -> Scheme {
        match self {
            SchemeKind::Euler => Scheme::Euler(EulerMaruyama::new(model)),
            SchemeKind::Milstein => Scheme::Milstein(Milstein::new(model)),
            SchemeKind::PredictorCorrector => {
                Scheme::PredictorCorrector(DriftAdjustedPredictorCorrector::new(model))
            }
        }
    }
}

/// Closed set of schemes over [`StochasticModel`]
#[derive(Clone, Debug)]
pub enum Scheme {
    Euler(EulerMaruyama),
    Milstein(Milstein),
    PredictorCorrector(DriftAdjustedPredictorCorrector),
}

impl Scheme {
    pub fn kind(&self) -> SchemeKind {
        match self {
            Scheme::Euler(_) => SchemeKind::Euler,
            Scheme::Milstein(_) => SchemeKind::Milstein,
            Scheme::PredictorCorrector(_) => SchemeKind::PredictorCorrector,
        }
    }

    pub fn model(&self) -> &Arc<StochasticModel> {
        match self {
            Scheme::Euler(s) => s.model(),
            Scheme::Milstein(s) => s.model(),
            Scheme::PredictorCorrector(s) => s.model(),
        }
    }
}

impl Discretization for Scheme {
    #[inline]
    fn advance(&self, s: f64, t: f64, dt: f64, dw: f64) -> SdeResult<f64> {
        match self {
            Scheme::Euler(scheme) => scheme.advance(s, t, dt, dw),
            Scheme::Milstein(scheme) => scheme.advance(s, t, dt, dw),
            Scheme::PredictorCorrector(scheme) => scheme.advance(s, t, dt, dw),
        }
    }
}
