// src/analytics/bs_analytic.rs
//! Analytical Black-Scholes prices for European options
//!
//! Under the Black-Scholes model the underlying follows
//! ```text
//! dS_t = r S_t dt + σ S_t dW_t
//! ```
//! and European options have closed-form values involving Φ(x). These serve
//! as reference prices for the simulation engine with a GBM model.

use crate::math_utils::norm_cdf;

fn d1_d2(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> (f64, f64) {
    let vol_sqrt_t = sigma * t.sqrt();
    let d1 = ((s / k).ln() + (r + 0.5 * sigma * sigma) * t) / vol_sqrt_t;
    (d1, d1 - vol_sqrt_t)
}

/// Black-Scholes European call option price
///
/// # Formula
/// ```text
/// C = S Φ(d₁) - K e^(-rT) Φ(d₂)
/// d₁ = [ln(S/K) + (r + σ²/2)T] / (σ√T),   d₂ = d₁ - σ√T
/// ```
pub fn bs_call_price(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
    let (d1, d2) = d1_d2(s, k, r, sigma, t);
    s * norm_cdf(d1) - k * (-r * t).exp() * norm_cdf(d2)
}

/// Black-Scholes European put option price
///
/// # Formula
/// ```text
/// P = K e^(-rT) Φ(-d₂) - S Φ(-d₁)
/// ```
pub fn bs_put_price(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
    let (d1, d2) = d1_d2(s, k, r, sigma, t);
    k * (-r * t).exp() * norm_cdf(-d2) - s * norm_cdf(-d1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_reference_call() {
        assert_abs_diff_eq!(bs_call_price(100.0, 100.0, 0.05, 0.2, 1.0), 10.4506, epsilon = 1e-4);
    }

    #[test]
    fn test_put_call_parity() {
        let (s, k, r, sigma, t) = (95.0, 100.0, 0.03, 0.25, 0.75);
        let lhs = bs_call_price(s, k, r, sigma, t) - bs_put_price(s, k, r, sigma, t);
        let rhs = s - k * (-r * t).exp();
        assert_abs_diff_eq!(lhs, rhs, epsilon = 1e-10);
    }
}
