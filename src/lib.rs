//! # sde-pricer: Monte Carlo Option Pricing over Scalar SDEs
//!
//! Prices terminal-value and path-dependent options by simulating a scalar
//! stochastic process with a chosen discretization scheme.
//!
//! ## Components
//!
//! - **Models**: GBM, CEV and CIR drift/diffusion coefficients
//! - **Schemes**: Euler-Maruyama, Milstein (finite-difference `b'`) and a
//!   drift-adjusted predictor-corrector
//! - **Noise**: seeded or entropy-seeded standard-normal sources
//! - **Payoffs**: European, geometric Asian and barrier options
//! - **Solver**: sequential trial loop returning the mean payoff
//!
//! ## Quick Start
//!
//! ```rust
//! use sde_pricer::mc::{McMediator, Payoff, SimulationBuilder};
//! use sde_pricer::models::Gbm;
//! use sde_pricer::solvers::SchemeKind;
//!
//! let builder = SimulationBuilder::new()
//!     .initial_condition(100.0, 1.0, 100, 10_000)
//!     .model(Gbm::new(0.05, 0.2).expect("valid parameters"))
//!     .scheme(SchemeKind::Euler)
//!     .seed(42)
//!     .payoff(Payoff::EuropeanCall { k: 100.0 });
//!
//! let mut mediator = McMediator::new(builder).expect("valid configuration");
//! let run = mediator.run_timed().expect("simulation succeeds");
//!
//! // The solver returns the undiscounted mean payoff
//! let pv = run.estimate.discounted(0.05, 1.0);
//! println!("Price: {:.4} ± {:.4}", pv.price, pv.std_error());
//! ```
//!
//! ## Discounting
//!
//! [`McSolver::solve`](mc::McSolver::solve) returns `E[payoff]` without
//! present-value scaling. Use [`McEstimate::discounted`](mc::McEstimate::discounted)
//! to apply `e^{-rT}`.

// Module declarations
pub mod analytics;
pub mod config;
pub mod error;
pub mod math_utils;
pub mod mc;
pub mod models;
pub mod rng;
pub mod solvers;

// Re-export commonly used types for convenience
pub use error::{SdeError, SdeResult};
