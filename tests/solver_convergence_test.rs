use sde_pricer::mc::{McMediator, Payoff, SimulationBuilder};
use sde_pricer::models::{Cev, Cir, Gbm, StochasticModel};
use sde_pricer::rng::{self, NoiseSource, NormalNoise};
use sde_pricer::solvers::{Discretization, EulerMaruyama, Milstein, SchemeKind};
use std::sync::Arc;

#[test]
fn test_zero_volatility_paths_are_deterministic() {
    let (s0, mu, t_end, num_steps) = (100.0, 0.05, 1.0, 10_000);
    let dt = t_end / num_steps as f64;
    let model = Arc::new(StochasticModel::Gbm(Gbm::new(mu, 0.0).unwrap()));

    let mut terminals = Vec::new();
    for kind in [
        SchemeKind::Euler,
        SchemeKind::Milstein,
        SchemeKind::PredictorCorrector,
    ] {
        let scheme = kind.build(Arc::clone(&model));
        let mut noise = NormalNoise::new(42);
        let mut s = s0;
        for j in 0..num_steps {
            let dw = dt.sqrt() * noise.generate();
            s = scheme.advance(s, j as f64 * dt, dt, dw).unwrap();

            let t = (j + 1) as f64 * dt;
            let exact = s0 * (mu * t).exp();
            assert!(
                ((s - exact) / exact).abs() < 1e-6,
                "{:?} drifted from exact path at t={}: {} vs {}",
                kind,
                t,
                s,
                exact
            );
        }
        terminals.push(s);
    }

    // The Itô correction vanishes with σ = 0, so Milstein reproduces Euler
    assert_eq!(terminals[0], terminals[1]);
}

#[test]
fn test_zero_volatility_price_through_solver() {
    for kind in [
        SchemeKind::Euler,
        SchemeKind::Milstein,
        SchemeKind::PredictorCorrector,
    ] {
        let builder = SimulationBuilder::new()
            .initial_condition(100.0, 1.0, 10_000, 3)
            .model(Gbm::new(0.05, 0.0).unwrap())
            .scheme(kind)
            .seed(1)
            .payoff(Payoff::EuropeanCall { k: 100.0 });
        let price = McMediator::new(builder).unwrap().run_simulation().unwrap();
        let exact = 100.0 * 0.05f64.exp() - 100.0;
        assert!((price - exact).abs() < 1e-4, "{:?}: {} vs {}", kind, price, exact);
    }
}

// Exact solution path for Geometric Brownian Motion
fn gbm_exact_terminal(gbm: &Gbm, s0: f64, dt: f64, normal_draws: &[f64]) -> f64 {
    normal_draws
        .iter()
        .fold(s0, |s, &z| gbm.exact_step(s, dt, z))
}

fn strong_rmse<S: Discretization>(scheme: &S, gbm: &Gbm, num_steps: usize) -> f64 {
    let (s0, t_end, num_paths) = (100.0, 1.0, 1_000);
    let dt = t_end / num_steps as f64;

    let mut sum_sq_diff = 0.0;
    for i in 0..num_paths {
        let mut rng = rng::seed_rng_from_u64(42 + i as u64);
        let normal_draws: Vec<f64> = (0..num_steps)
            .map(|_| rng::get_normal_draw(&mut rng))
            .collect();

        let mut s_numerical = s0;
        for (k, z) in normal_draws.iter().enumerate() {
            s_numerical = scheme
                .advance(s_numerical, k as f64 * dt, dt, z * dt.sqrt())
                .unwrap();
        }
        let s_exact = gbm_exact_terminal(gbm, s0, dt, &normal_draws);
        sum_sq_diff += (s_numerical - s_exact).powi(2);
    }
    (sum_sq_diff / num_paths as f64).sqrt()
}

#[test]
fn test_euler_maruyama_gbm_strong_convergence() {
    let gbm = Gbm::new(0.05, 0.2).unwrap();
    let scheme = EulerMaruyama::new(Arc::new(gbm));

    let rms_errors: Vec<f64> = [10, 20, 40, 80, 160]
        .iter()
        .map(|&n| strong_rmse(&scheme, &gbm, n))
        .collect();
    println!("\nEuler-Maruyama GBM Strong Convergence RMSEs: {:?}", rms_errors);

    // Strong order 0.5: halving dt shrinks the error by about √2
    for i in 0..(rms_errors.len() - 1) {
        let ratio = rms_errors[i] / rms_errors[i + 1];
        assert!(
            ratio > 1.15 && ratio < 1.75,
            "Strong convergence ratio not as expected at step {}: {}",
            i,
            ratio
        );
    }
}

#[test]
fn test_milstein_beats_euler_pathwise() {
    let gbm = Gbm::new(0.05, 0.2).unwrap();
    let euler = EulerMaruyama::new(Arc::new(gbm));
    let milstein = Milstein::new(Arc::new(gbm));

    for num_steps in [10, 40] {
        let e = strong_rmse(&euler, &gbm, num_steps);
        let m = strong_rmse(&milstein, &gbm, num_steps);
        println!("steps={} euler={} milstein={}", num_steps, e, m);
        assert!(m < e, "Milstein RMSE {} not below Euler {}", m, e);
    }
}

#[test]
fn test_cir_weak_mean() {
    let (s0, t_end) = (0.06, 1.0);
    let cir = Cir::new(2.0, 0.04, 0.1).unwrap();

    let builder = SimulationBuilder::new()
        .initial_condition(s0, t_end, 100, 20_000)
        .model(cir)
        .scheme(SchemeKind::Euler)
        .seed(17)
        .payoff(Payoff::EuropeanCall { k: 0.0 });
    let mean = McMediator::new(builder).unwrap().run_simulation().unwrap();

    let exact = cir.theta + (s0 - cir.theta) * (-cir.kappa * t_end).exp();
    assert!(
        (mean - exact).abs() < 4e-4,
        "CIR simulated mean {} vs exact {}",
        mean,
        exact
    );
}

#[test]
fn test_cev_weak_mean_across_schemes() {
    let (s0, mu, t_end): (f64, f64, f64) = (100.0, 0.05, 1.0);
    let exact = s0 * (mu * t_end).exp();

    for kind in [
        SchemeKind::Euler,
        SchemeKind::Milstein,
        SchemeKind::PredictorCorrector,
    ] {
        let builder = SimulationBuilder::new()
            .initial_condition(s0, t_end, 100, 20_000)
            .model(Cev::new(mu, 0.2, 0.5).unwrap())
            .scheme(kind)
            .seed(23)
            .payoff(Payoff::EuropeanCall { k: 0.0 });
        let mean = McMediator::new(builder).unwrap().run_simulation().unwrap();
        assert!(
            (mean - exact).abs() < 0.1,
            "{:?}: CEV simulated mean {} vs exact {}",
            kind,
            mean,
            exact
        );
    }
}
