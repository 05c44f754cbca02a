// src/math_utils.rs
use statrs::function::erf;
use std::f64::consts::SQRT_2;
use std::time::{Duration, Instant};

pub fn norm_cdf(x: f64) -> f64 {
    0.5 * (1.0 + erf::erf(x / SQRT_2))
}

/// Wall-clock stopwatch for timing solver runs
///
/// Purely observational; it never touches simulation state.
#[derive(Debug, Clone, Copy, Default)]
pub struct StopWatch {
    start_time: Option<Instant>,
    end_time: Option<Instant>,
}

impl StopWatch {
    pub fn new() -> StopWatch {
        StopWatch::default()
    }

    /// Record the start time and clear any previous stop
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
        self.end_time = None;
    }

    pub fn stop(&mut self) {
        self.end_time = Some(Instant::now());
    }

    pub fn reset(&mut self) {
        self.start_time = None;
        self.end_time = None;
    }

    /// Time between `start` and `stop`; zero unless both were called
    pub fn elapsed(&self) -> Duration {
        match (self.start_time, self.end_time) {
            (Some(start), Some(end)) => end.saturating_duration_since(start),
            _ => Duration::ZERO,
        }
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed().as_secs_f64()
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_secs() * 1000.0
    }
}
