// src/bin/manager_epoch.rs

//! A manager holding the fee slot for one epoch at constant fee and rent.
//!
//! The chart plots the total at the start of each block (`rate * t`, from
//! zero). The JSON series and the final total include block `t` itself.

use amm_auction_sim::report::{self, LineChart, RunReport, Summary};
use amm_auction_sim::{ModelParams, ProfitModel, SimError, SimulationConfig, Simulator, telemetry};
use rand::SeedableRng;
use rand::rngs::StdRng;

const BLOCKS: usize = 100;
const LIQUIDITY: f64 = 1.0;
const FEE: f64 = 0.02; // 2%
const RENT: f64 = 0.03;
const SEED: u64 = 0;

fn main() -> Result<(), SimError> {
    telemetry::init();

    let params = ModelParams::default();
    let model = ProfitModel::new(params);
    let config = SimulationConfig::new(BLOCKS, FEE, LIQUIDITY, RENT, 0.0);
    // No shocks are configured, the RNG is never drawn from.
    let mut rng = StdRng::seed_from_u64(SEED);
    let result = Simulator::new(model, config, &mut rng)?.run()?;

    let mut summary = Summary::new("Manager profit over epoch");
    summary
        .add("Manager instantaneous profit rate", model.manager_profit(FEE, LIQUIDITY, RENT, 0.0)?)
        .add("Manager cumulative profit", result.final_manager());
    summary.emit();

    let chart = LineChart::new("Manager profit over epoch")
        .x_label("Time (blocks)")
        .line("Manager cumulative profit", &result.manager.before_each_block());
    let report = RunReport::new("manager_epoch", params)
        .with_config(config)
        .with_summary(&summary)
        .simulation("", &result);
    report::write_outputs(".", &report, &chart)?;
    Ok(())
}
