pub mod builder;
pub mod mc_engine;
pub mod mediator;
pub mod payoffs;

pub use builder::SimulationBuilder;
pub use mc_engine::{McEstimate, McSolver, SimulationConfig};
pub use mediator::{McMediator, TimedRun};
pub use payoffs::{BarrierDirection, BarrierKnock, BarrierMonitoring, OptionType, Payoff};
