//! Option Payoff Functions
//!
//! # Mathematical Definitions
//!
//! ## European Options
//! - **Call**: max(S_T - K, 0)
//! - **Put**: max(K - S_T, 0)
//!
//! ## Path-Dependent Options
//! - **Asian**: call/put against the geometric mean of the path,
//!   `G = exp((1/n) Σ ln S_i)`
//! - **Barrier**: knocked in/out when the underlying touches level B
//!
//! # Evaluation Forms
//!
//! Every payoff has a terminal form ([`Payoff::terminal`]) taking only S_T and
//! a path form ([`Payoff::path`]) taking `[S_0, S_1, ..., S_N]`. The solver
//! asks [`Payoff::requires_full_path`] which one to call.
//!
//! # Barrier Monitoring
//!
//! With [`BarrierMonitoring::Terminal`] (the default) the barrier is tested
//! against S_T only. This is not true barrier semantics; use
//! [`BarrierMonitoring::Discrete`] to test every simulated value.

use crate::error::{validation::*, SdeError, SdeResult};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    /// Vanilla intrinsic value of `s` against strike `k`
    #[inline]
    pub fn intrinsic(self, s: f64, k: f64) -> f64 {
        match self {
            OptionType::Call => (s - k).max(0.0),
            OptionType::Put => (k - s).max(0.0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BarrierDirection {
    Up,
    Down,
}

impl BarrierDirection {
    /// Touching the level counts as a hit
    #[inline]
    pub fn is_hit(self, s: f64, barrier: f64) -> bool {
        match self {
            BarrierDirection::Up => s >= barrier,
            BarrierDirection::Down => s <= barrier,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BarrierKnock {
    In,
    Out,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BarrierMonitoring {
    /// Test the terminal value only
    #[default]
    Terminal,
    /// Test every simulated value, S_0 included
    Discrete,
}

/// Enumeration of supported option payoff types
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Payoff {
    /// European call option: max(S_T - K, 0)
    EuropeanCall { k: f64 },

    /// European put option: max(K - S_T, 0)
    EuropeanPut { k: f64 },

    /// Geometric-average Asian call: max(G - K, 0)
    AsianCall { k: f64 },

    /// Geometric-average Asian put: max(K - G, 0)
    AsianPut { k: f64 },

    /// Single-barrier knock-in / knock-out option
    Barrier {
        k: f64,
        barrier: f64,
        option: OptionType,
        direction: BarrierDirection,
        knock: BarrierKnock,
        #[serde(default)]
        monitoring: BarrierMonitoring,
    },
}

impl Payoff {
    /// Terminal-monitored barrier from the usual flag triple
    pub fn barrier(k: f64, barrier: f64, is_call: bool, is_up: bool, is_in: bool) -> Self {
        Payoff::Barrier {
            k,
            barrier,
            option: if is_call {
                OptionType::Call
            } else {
                OptionType::Put
            },
            direction: if is_up {
                BarrierDirection::Up
            } else {
                BarrierDirection::Down
            },
            knock: if is_in {
                BarrierKnock::In
            } else {
                BarrierKnock::Out
            },
            monitoring: BarrierMonitoring::Terminal,
        }
    }

    /// Same contract with a different monitoring rule; no-op for non-barriers
    pub fn with_monitoring(self, rule: BarrierMonitoring) -> Self {
        match self {
            Payoff::Barrier {
                k,
                barrier,
                option,
                direction,
                knock,
                ..
            } => Payoff::Barrier {
                k,
                barrier,
                option,
                direction,
                knock,
                monitoring: rule,
            },
            other => other,
        }
    }

    pub fn validate(&self) -> SdeResult<()> {
        match self {
            Payoff::EuropeanCall { k }
            | Payoff::EuropeanPut { k }
            | Payoff::AsianCall { k }
            | Payoff::AsianPut { k } => validate_non_negative("k", *k),
            Payoff::Barrier { k, barrier, .. } => {
                validate_non_negative("k", *k)?;
                validate_positive("barrier", *barrier)
            }
        }
    }

    /// Whether the solver must hand over the whole path
    pub fn requires_full_path(&self) -> bool {
        match self {
            Payoff::EuropeanCall { .. } | Payoff::EuropeanPut { .. } => false,
            Payoff::AsianCall { .. } | Payoff::AsianPut { .. } => true,
            Payoff::Barrier { monitoring, .. } => *monitoring == BarrierMonitoring::Discrete,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Payoff::EuropeanCall { .. } => "European call",
            Payoff::EuropeanPut { .. } => "European put",
            Payoff::AsianCall { .. } => "Asian call",
            Payoff::AsianPut { .. } => "Asian put",
            Payoff::Barrier { .. } => "Barrier",
        }
    }

    /// Payoff from the terminal value alone
    ///
    /// Asian payoffs are not defined by a single price and return 0.
    pub fn terminal(&self, s: f64) -> f64 {
        match self {
            Payoff::EuropeanCall { k } => OptionType::Call.intrinsic(s, *k),
            Payoff::EuropeanPut { k } => OptionType::Put.intrinsic(s, *k),
            Payoff::AsianCall { .. } | Payoff::AsianPut { .. } => 0.0,
            Payoff::Barrier {
                k,
                barrier,
                option,
                direction,
                knock,
                ..
            } => {
                let hit = direction.is_hit(s, *barrier);
                barrier_value(*knock, hit, option.intrinsic(s, *k))
            }
        }
    }

    /// Payoff from the complete path `[S_0, ..., S_N]`
    ///
    /// # Errors
    ///
    /// - `InvalidParameter` for an empty path
    /// - `NegativeAssetPrice` when an Asian payoff sees a value ≤ 0
    pub fn path(&self, path: &[f64]) -> SdeResult<f64> {
        let s_t = *path.last().ok_or_else(|| SdeError::InvalidParameter {
            parameter: "path".to_string(),
            value: 0.0,
            constraint: "must contain at least one value".to_string(),
        })?;

        match self {
            Payoff::EuropeanCall { .. } | Payoff::EuropeanPut { .. } => Ok(self.terminal(s_t)),
            Payoff::AsianCall { k } => Ok(OptionType::Call.intrinsic(geometric_mean(path)?, *k)),
            Payoff::AsianPut { k } => Ok(OptionType::Put.intrinsic(geometric_mean(path)?, *k)),
            Payoff::Barrier {
                k,
                barrier,
                option,
                direction,
                knock,
                monitoring,
            } => match monitoring {
                BarrierMonitoring::Terminal => Ok(self.terminal(s_t)),
                BarrierMonitoring::Discrete => {
                    let hit = path.iter().any(|&s| direction.is_hit(s, *barrier));
                    Ok(barrier_value(*knock, hit, option.intrinsic(s_t, *k)))
                }
            },
        }
    }
}

#[inline]
fn barrier_value(knock: BarrierKnock, hit: bool, intrinsic: f64) -> f64 {
    match (knock, hit) {
        (BarrierKnock::In, true) | (BarrierKnock::Out, false) => intrinsic,
        _ => 0.0,
    }
}

/// `exp(mean(ln S_i))`; every value must be strictly positive
fn geometric_mean(path: &[f64]) -> SdeResult<f64> {
    let mut log_sum = 0.0;
    for (step, &price) in path.iter().enumerate() {
        if !(price > 0.0) {
            return Err(SdeError::NegativeAssetPrice { value: price, step });
        }
        log_sum += price.ln();
    }
    Ok((log_sum / path.len() as f64).exp())
}
