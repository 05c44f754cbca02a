// src/models/model.rs

/// Drift and diffusion coefficients of a scalar SDE `dS = a(S,t) dt + b(S,t) dW`
///
/// Implementations are pure: no side effects and no interior mutability, so a
/// single instance can be shared by any number of schemes.
pub trait SdeModel {
    fn drift(&self, s: f64, t: f64) -> f64;
    fn diffusion(&self, s: f64, t: f64) -> f64;
}
