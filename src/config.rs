// src/config.rs

//! A centralized place for the model coefficients and run parameters.
//! Every run takes its parameters from an immutable struct built here,
//! so the provenance of a number in a report is always traceable.

use serde::{Deserialize, Serialize};

// --- Noise traders ---
pub const DEFAULT_H0: f64 = 1.0;
pub const DEFAULT_B: f64 = 5.0; // fee elasticity of noise volume
pub const DEFAULT_ALPHA: f64 = 0.5; // liquidity elasticity of noise volume

// --- Arbitrage ---
pub const DEFAULT_A0: f64 = 0.05; // arbitrage intensity at zero fee
pub const DEFAULT_C: f64 = 2.0;
// Excess decays faster than total arbitrage (d > c).
pub const DEFAULT_D: f64 = 8.0;
pub const DEFAULT_BETA: f64 = 0.5;

// --- Fee grid ---
pub const DEFAULT_FEE_MIN: f64 = 0.0001;
pub const DEFAULT_FEE_MAX: f64 = 0.2;
pub const DEFAULT_GRID_POINTS: usize = 500;

// --- Rent ---
pub const DEFAULT_EPOCH_LEN: usize = 20;
pub const DEFAULT_COMPETITIVE_FRACTION: f64 = 0.95;

// --- Price shocks ---
pub const SHOCK_WINDOW_COUNT: usize = 5;
pub const SHOCK_WINDOW_LEN: usize = 3;
pub const SHOCK_EARLIEST_START: usize = 20;
pub const SHOCK_TAIL_MARGIN: usize = 10;
pub const SHOCK_MIN_MAGNITUDE: f64 = 0.02;
pub const SHOCK_MAX_MAGNITUDE: f64 = 0.08;

/// Shape coefficients of the volume and arbitrage curves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelParams {
    /// Noise-trader volume per unit pool value at zero fee and L = 1.
    pub h0: f64,
    /// Decay of noise volume with fee.
    pub b: f64,
    /// Liquidity exponent of noise volume.
    pub alpha: f64,
    /// Arbitrage profit per unit pool value at zero fee and L = 1.
    pub a0: f64,
    /// Decay of arbitrage profit with fee.
    pub c: f64,
    /// Decay of arbitrage excess with fee.
    pub d: f64,
    /// Liquidity exponent of arbitrage.
    pub beta: f64,
}

impl Default for ModelParams {
    fn default() -> Self {
        Self {
            h0: DEFAULT_H0,
            b: DEFAULT_B,
            alpha: DEFAULT_ALPHA,
            a0: DEFAULT_A0,
            c: DEFAULT_C,
            d: DEFAULT_D,
            beta: DEFAULT_BETA,
        }
    }
}

/// How the rent paid by the manager to the LPs evolves over a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RentPolicy {
    /// The same rent every block.
    Fixed(f64),
    /// Starts at `initial`; at every epoch boundary the rent becomes
    /// `fraction` of the mean gross manager revenue observed over the
    /// epoch that just ended.
    Competitive {
        initial: f64,
        fraction: f64,
        epoch_len: usize,
    },
}

impl RentPolicy {
    pub fn competitive(initial: f64) -> Self {
        RentPolicy::Competitive {
            initial,
            fraction: DEFAULT_COMPETITIVE_FRACTION,
            epoch_len: DEFAULT_EPOCH_LEN,
        }
    }

    pub fn initial_rent(&self) -> f64 {
        match *self {
            RentPolicy::Fixed(rent) => rent,
            RentPolicy::Competitive { initial, .. } => initial,
        }
    }
}

/// Random price-shock bursts added to the zero-fee arbitrage profit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShockConfig {
    /// Number of disjoint bursts.
    pub count: usize,
    /// Length of each burst in blocks.
    pub window_len: usize,
    /// No burst starts before this block.
    pub earliest_start: usize,
    /// No burst starts in the last `tail_margin` blocks.
    pub tail_margin: usize,
    pub min_magnitude: f64,
    pub max_magnitude: f64,
}

impl Default for ShockConfig {
    fn default() -> Self {
        Self {
            count: SHOCK_WINDOW_COUNT,
            window_len: SHOCK_WINDOW_LEN,
            earliest_start: SHOCK_EARLIEST_START,
            tail_margin: SHOCK_TAIL_MARGIN,
            min_magnitude: SHOCK_MIN_MAGNITUDE,
            max_magnitude: SHOCK_MAX_MAGNITUDE,
        }
    }
}

/// Which arbitrage loss a normal-AMM LP is charged for each block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NormalLpBasis {
    /// Arbitrage at the pool's own fee, `a0 * L^beta * exp(-c f)`, minus the shock.
    #[default]
    AtFee,
    /// Zero-fee arbitrage plus the shock, `a0 * L^beta + shock`.
    ZeroFee,
}

/// Everything a single simulation run needs besides the model and the RNG.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of blocks to simulate.
    pub blocks: usize,
    /// Fee set by the manager (and used by the fixed-fee pool).
    pub fee: f64,
    pub liquidity: f64,
    /// LP cost of capital per block.
    pub capital_cost: f64,
    pub rent: RentPolicy,
    /// `None` runs without shocks.
    pub shocks: Option<ShockConfig>,
    #[serde(default)]
    pub normal_lp: NormalLpBasis,
}

impl SimulationConfig {
    /// Fixed rent, no shocks.
    pub fn new(blocks: usize, fee: f64, liquidity: f64, rent: f64, capital_cost: f64) -> Self {
        Self {
            blocks,
            fee,
            liquidity,
            capital_cost,
            rent: RentPolicy::Fixed(rent),
            shocks: None,
            normal_lp: NormalLpBasis::AtFee,
        }
    }

    pub fn with_rent_policy(mut self, rent: RentPolicy) -> Self {
        self.rent = rent;
        self
    }

    pub fn with_shocks(mut self, shocks: ShockConfig) -> Self {
        self.shocks = Some(shocks);
        self
    }

    pub fn with_normal_lp(mut self, basis: NormalLpBasis) -> Self {
        self.normal_lp = basis;
        self
    }
}
