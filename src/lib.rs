// src/lib.rs

// === 1. Declare all the top-level modules ===
pub mod config;
pub mod error;
pub mod model;
pub mod optimizer;
pub mod report;
pub mod simulators;
pub mod telemetry;

// === 2. Re-export the public-facing components to create a clean API ===

// --- From `config` ---
pub use config::{ModelParams, NormalLpBasis, RentPolicy, ShockConfig, SimulationConfig};

// --- From `error` ---
pub use error::{Result, SimError};

// --- From `model` ---
pub use model::ProfitModel;

// --- From `optimizer` ---
pub use optimizer::{FeeGrid, Optimum, maximize, maximize_over_liquidity};

// --- From `simulators` ---
pub use simulators::{
    BlockRates, CumulativeSeries, ShockSchedule, ShockWindow, SimulationResult, Simulator,
    Steppable,
};

// --- From `report` ---
pub use report::{LineChart, RunReport, Summary};
