// src/simulators/mod.rs

pub mod engine;
pub mod series;
pub mod shocks;
pub mod steppable;

pub use engine::{BlockRates, SimulationResult, Simulator};
pub use series::CumulativeSeries;
pub use shocks::{ShockSchedule, ShockWindow};
pub use steppable::Steppable;
