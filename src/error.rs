// src/error.rs
use thiserror::Error;

/// Error types for the sde-pricer library
///
/// Every failure is terminal for the current `solve()` call; nothing in the
/// crate retries or silently clamps.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SdeError {
    /// A numeric precondition failed at the point of use (e.g. `dt <= 0`)
    #[error("Invalid parameter '{parameter}' = {value}: {constraint}")]
    InvalidParameter {
        parameter: String,
        value: f64,
        constraint: String,
    },

    /// A simulated or supplied price fell below zero where the model or payoff
    /// requires non-negativity
    #[error("Negative asset price {value} encountered at path index {step}")]
    NegativeAssetPrice { value: f64, step: usize },

    /// Malformed simulation configuration
    #[error("Invalid configuration for '{field}': {reason}")]
    InvalidConfiguration { field: String, reason: String },

    /// Non-finite values produced during simulation
    #[error("Numerical instability in {method}: {reason}")]
    NumericalInstability { method: String, reason: String },

    /// TOML configuration could not be parsed
    #[error("Failed to parse simulation config: {0}")]
    ConfigParse(String),
}

impl From<toml::de::Error> for SdeError {
    fn from(err: toml::de::Error) -> Self {
        SdeError::ConfigParse(err.to_string())
    }
}

/// Result type alias for sde-pricer operations
pub type SdeResult<T> = Result<T, SdeError>;

/// Validation utilities
pub mod validation {
    use super::{SdeError, SdeResult};

    /// Validate that a parameter is positive
    pub fn validate_positive(name: &str, value: f64) -> SdeResult<()> {
        // NaN fails the comparison and is rejected here as well
        if !(value > 0.0) || !value.is_finite() {
            Err(SdeError::InvalidParameter {
                parameter: name.to_string(),
                value,
                constraint: "must be positive (> 0) and finite".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a parameter is non-negative
    pub fn validate_non_negative(name: &str, value: f64) -> SdeResult<()> {
        if !(value >= 0.0) || !value.is_finite() {
            Err(SdeError::InvalidParameter {
                parameter: name.to_string(),
                value,
                constraint: "must be non-negative (≥ 0) and finite".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a value is finite and not NaN
    pub fn validate_finite(name: &str, value: f64) -> SdeResult<()> {
        if !value.is_finite() {
            Err(SdeError::InvalidParameter {
                parameter: name.to_string(),
                value,
                constraint: "must be finite (not NaN or infinite)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate a time step handed to a discretization scheme
    pub fn validate_time_step(dt: f64) -> SdeResult<()> {
        if !(dt > 0.0) {
            Err(SdeError::InvalidParameter {
                parameter: "dt".to_string(),
                value: dt,
                constraint: "time step must be positive (> 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate a configuration field that must be strictly positive
    pub fn validate_positive_field(field: &str, value: f64) -> SdeResult<()> {
        if !(value > 0.0) || !value.is_finite() {
            Err(SdeError::InvalidConfiguration {
                field: field.to_string(),
                reason: format!("must be positive and finite, got {}", value),
            })
        } else {
            Ok(())
        }
    }

    /// Validate trial count
    pub fn validate_trials(trials: usize) -> SdeResult<()> {
        if trials == 0 {
            Err(SdeError::InvalidConfiguration {
                field: "trials".to_string(),
                reason: "must be greater than 0".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate steps count
    pub fn validate_steps(steps: usize) -> SdeResult<()> {
        if steps == 0 {
            Err(SdeError::InvalidConfiguration {
                field: "steps".to_string(),
                reason: "must be greater than 0".to_string(),
            })
        } else {
            Ok(())
        }
    }
}
