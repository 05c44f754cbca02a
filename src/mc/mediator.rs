//! Wires a [`SimulationBuilder`] to a [`McSolver`] and times runs

use crate::error::SdeResult;
use crate::math_utils::StopWatch;
use crate::mc::builder::SimulationBuilder;
use crate::mc::mc_engine::{McEstimate, McSolver};
use crate::rng::{NoiseSource, NormalNoise};

/// An estimate together with the wall-clock time it took
#[derive(Debug, Clone, Copy)]
pub struct TimedRun {
    pub estimate: McEstimate,
    pub elapsed_secs: f64,
}

pub struct McMediator<N = NormalNoise> {
    solver: McSolver<N>,
}

impl<N: NoiseSource> McMediator<N> {
    pub fn new(builder: SimulationBuilder<N>) -> SdeResult<Self> {
        let config = builder.build()?;
        Ok(McMediator {
            solver: McSolver::new(config)?,
        })
    }

    pub fn run_simulation(&mut self) -> SdeResult<f64> {
        self.solver.solve()
    }

    pub fn run_timed(&mut self) -> SdeResult<TimedRun> {
        let mut stopwatch = StopWatch::new();
        stopwatch.start();
        let estimate = self.solver.solve_with_stats()?;
        stopwatch.stop();

        Ok(TimedRun {
            estimate,
            elapsed_secs: stopwatch.elapsed_secs(),
        })
    }

    pub fn solver(&self) -> &McSolver<N> {
        &self.solver
    }
}
