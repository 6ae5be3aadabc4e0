// src/simulators/engine.rs

use super::series::CumulativeSeries;
use super::shocks::ShockSchedule;
use super::steppable::Steppable;
use crate::config::{NormalLpBasis, RentPolicy, SimulationConfig};
use crate::error::{Result, SimError};
use crate::model::ProfitModel;
use rand::Rng;
use serde::Serialize;
use statrs::statistics::Statistics;
use tracing::{debug, info};

/// Everything evaluated for a single block.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BlockRates {
    pub block: usize,
    pub shock: f64,
    pub rent: f64,
    /// Gross manager revenue before rent.
    pub gross: f64,
    pub manager: f64,
    pub lp_auction: f64,
    pub lp_normal: f64,
}

/// The numeric output of a run, one entry per block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationResult {
    pub manager: CumulativeSeries,
    pub lp_auction: CumulativeSeries,
    pub lp_normal: CumulativeSeries,
    pub rents: Vec<f64>,
    pub gross: Vec<f64>,
    pub shocks: ShockSchedule,
}

impl SimulationResult {
    fn new(blocks: usize, shocks: ShockSchedule) -> Self {
        Self {
            manager: CumulativeSeries::with_capacity(blocks),
            lp_auction: CumulativeSeries::with_capacity(blocks),
            lp_normal: CumulativeSeries::with_capacity(blocks),
            rents: Vec::with_capacity(blocks),
            gross: Vec::with_capacity(blocks),
            shocks,
        }
    }

    fn record(&mut self, rates: &BlockRates) {
        self.manager.push(rates.manager);
        self.lp_auction.push(rates.lp_auction);
        self.lp_normal.push(rates.lp_normal);
        self.rents.push(rates.rent);
        self.gross.push(rates.gross);
    }

    pub fn blocks(&self) -> usize {
        self.manager.len()
    }

    pub fn final_manager(&self) -> f64 {
        self.manager.last().unwrap_or(0.0)
    }

    pub fn final_lp_auction(&self) -> f64 {
        self.lp_auction.last().unwrap_or(0.0)
    }

    pub fn final_lp_normal(&self) -> f64 {
        self.lp_normal.last().unwrap_or(0.0)
    }

    /// Cumulative auction-LP profit minus cumulative normal-LP profit.
    pub fn lp_advantage(&self) -> f64 {
        self.final_lp_auction() - self.final_lp_normal()
    }
}

fn require_finite(parameter: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SimError::invalid_config(parameter, format!("must be finite, got {}", value)))
    }
}

fn validate(config: &SimulationConfig) -> Result<()> {
    if config.blocks == 0 {
        return Err(SimError::invalid_config("blocks", "must be positive"));
    }
    require_finite("fee", config.fee)?;
    if config.fee < 0.0 {
        return Err(SimError::invalid_config("fee", "must not be negative"));
    }
    require_finite("capital_cost", config.capital_cost)?;
    match config.rent {
        RentPolicy::Fixed(rent) => require_finite("rent", rent)?,
        RentPolicy::Competitive {
            initial,
            fraction,
            epoch_len,
        } => {
            require_finite("rent", initial)?;
            require_finite("competitive_fraction", fraction)?;
            if epoch_len == 0 {
                return Err(SimError::invalid_config("epoch_len", "must be positive"));
            }
        }
    }
    Ok(())
}

/// Block-by-block simulation of one fee/liquidity setting.
///
/// Each block looks up its shock, refreshes a competitive rent at epoch
/// boundaries, evaluates the three actors' profit rates and adds them to
/// the cumulative series.
pub struct Simulator {
    model: ProfitModel,
    config: SimulationConfig,
    block: usize,
    rent: f64,
    result: SimulationResult,
}

impl Simulator {
    /// Validates `config` and draws the shock schedule from `rng`.
    pub fn new<R: Rng + ?Sized>(
        model: ProfitModel,
        config: SimulationConfig,
        rng: &mut R,
    ) -> Result<Self> {
        validate(&config)?;
        let shocks = match config.shocks {
            Some(cfg) => ShockSchedule::generate(&cfg, config.blocks, rng)?,
            None => ShockSchedule::none(config.blocks),
        };
        Self::with_schedule(model, config, shocks)
    }

    /// Uses a precomputed shock schedule instead of drawing one.
    pub fn with_schedule(
        model: ProfitModel,
        config: SimulationConfig,
        shocks: ShockSchedule,
    ) -> Result<Self> {
        validate(&config)?;
        if shocks.len() != config.blocks {
            return Err(SimError::invalid_config(
                "shocks",
                format!("has {} entries for {} blocks", shocks.len(), config.blocks),
            ));
        }
        // Surface liquidity domain errors before the first block.
        model.noise_volume(config.fee, config.liquidity)?;
        model.arbitrage_profit_zero(config.liquidity, 0.0)?;

        for w in shocks.windows() {
            debug!(start = w.start, len = w.len, magnitude = w.magnitude, "price shock scheduled");
        }
        Ok(Self {
            model,
            config,
            block: 0,
            rent: config.rent.initial_rent(),
            result: SimulationResult::new(config.blocks, shocks),
        })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn shocks(&self) -> &ShockSchedule {
        &self.result.shocks
    }

    /// Rent that applies to the next block.
    pub fn current_rent(&self) -> f64 {
        self.rent
    }

    pub fn result(&self) -> &SimulationResult {
        &self.result
    }

    /// Runs the remaining blocks and returns the full result.
    pub fn run(&mut self) -> Result<SimulationResult> {
        while self.step()?.is_some() {}
        let result = &self.result;
        info!(
            blocks = result.blocks(),
            manager = result.final_manager(),
            lp_auction = result.final_lp_auction(),
            lp_normal = result.final_lp_normal(),
            "simulation complete"
        );
        Ok(self.result.clone())
    }

    fn refresh_rent(&mut self, block: usize) {
        if let RentPolicy::Competitive {
            fraction,
            epoch_len,
            ..
        } = self.config.rent
        {
            if block > 0 && block % epoch_len == 0 {
                let observed = self.result.gross[block - epoch_len..block].iter().mean();
                self.rent = fraction * observed;
                debug!(block, observed, rent = self.rent, "competitive rent update");
            }
        }
    }
}

impl Steppable for Simulator {
    type Output = BlockRates;

    fn step(&mut self) -> Result<Option<BlockRates>> {
        let block = self.block;
        if block >= self.config.blocks {
            return Ok(None);
        }
        self.refresh_rent(block);

        let SimulationConfig {
            fee,
            liquidity,
            capital_cost,
            normal_lp,
            ..
        } = self.config;
        let shock = self.result.shocks.at(block);
        let rent = self.rent;
        let rates = BlockRates {
            block,
            shock,
            rent,
            gross: self.model.gross_manager_revenue(fee, liquidity, shock)?,
            manager: self.model.manager_profit(fee, liquidity, rent, shock)?,
            lp_auction: self
                .model
                .lp_profit_auction(fee, liquidity, rent, capital_cost, shock)?,
            lp_normal: match normal_lp {
                NormalLpBasis::AtFee => self
                    .model
                    .lp_profit_normal(fee, liquidity, capital_cost, shock)?,
                NormalLpBasis::ZeroFee => self
                    .model
                    .lp_profit_normal_zero_fee(fee, liquidity, capital_cost, shock)?,
            },
        };
        self.result.record(&rates);
        self.block += 1;
        Ok(Some(rates))
    }

    fn current_block(&self) -> usize {
        self.block
    }

    fn reset(&mut self) {
        let shocks = self.result.shocks.clone();
        self.result = SimulationResult::new(self.config.blocks, shocks);
        self.rent = self.config.rent.initial_rent();
        self.block = 0;
    }
}
