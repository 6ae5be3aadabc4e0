// src/bin/fee_comparison.rs

//! Optimal LP profit in a fixed-fee AMM versus an auction AMM whose LPs keep
//! the fee income and only lose the arbitrage excess.

use amm_auction_sim::optimizer::{linspace, optimum_per_liquidity};
use amm_auction_sim::report::{self, LineChart, RunReport, Summary};
use amm_auction_sim::{FeeGrid, ModelParams, ProfitModel, SimError, maximize, telemetry};

const CAPITAL_COST: f64 = 0.001;
const REFERENCE_LIQUIDITY: f64 = 1.0;

fn main() -> Result<(), SimError> {
    telemetry::init();

    let params = ModelParams::default();
    let model = ProfitModel::new(params);
    let grid = FeeGrid::default();

    // --- LP profit vs liquidity ---
    let liquidities = linspace(0.1, 10.0, 50)?;
    let fixed = optimum_per_liquidity(&grid, &liquidities, |f, l| {
        model.lp_profit_fixed_fee(f, l, CAPITAL_COST)
    })?;
    let auction = optimum_per_liquidity(&grid, &liquidities, |f, l| {
        model.lp_profit_fee_capture(f, l, CAPITAL_COST)
    })?;
    let fixed_best: Vec<f64> = fixed.iter().map(|o| o.profit).collect();
    let auction_best: Vec<f64> = auction.iter().map(|o| o.profit).collect();

    // --- LP profit vs arbitrage intensity, at the reference liquidity ---
    let intensities = linspace(0.01, 0.2, 50)?;
    let mut intensity_gap = Vec::with_capacity(intensities.len());
    for &a0 in &intensities {
        let m = ProfitModel::new(ModelParams { a0, ..params });
        let f = maximize(&grid, |fee| m.lp_profit_fixed_fee(fee, REFERENCE_LIQUIDITY, CAPITAL_COST))?;
        let a = maximize(&grid, |fee| m.lp_profit_fee_capture(fee, REFERENCE_LIQUIDITY, CAPITAL_COST))?;
        intensity_gap.push(a.profit - f.profit);
    }

    // --- Headline numbers ---
    let fixed_ref = maximize(&grid, |f| {
        model.lp_profit_fixed_fee(f, REFERENCE_LIQUIDITY, CAPITAL_COST)
    })?;
    let auction_ref = maximize(&grid, |f| {
        model.lp_profit_fee_capture(f, REFERENCE_LIQUIDITY, CAPITAL_COST)
    })?;

    let mut summary = Summary::new("LP profit: fixed-fee vs auction AMM");
    summary
        .add("Grid resolution", grid.resolution())
        .add("Fixed-fee optimal fee (L=1)", fixed_ref.fee)
        .add("Fixed-fee optimal LP profit (L=1)", fixed_ref.profit)
        .add("Auction optimal fee (L=1)", auction_ref.fee)
        .add("Auction optimal LP profit (L=1)", auction_ref.profit)
        .add("Difference (auction - fixed)", auction_ref.profit - fixed_ref.profit);
    summary.emit();

    let chart = LineChart::new("LP Profit vs Liquidity")
        .x_label("Relative Liquidity L")
        .y_label("LP Profit per unit value")
        .line_xy("Fixed-Fee AMM (optimal fee)", &liquidities, &fixed_best)
        .line_xy("Auction AMM (optimal fee)", &liquidities, &auction_best);
    let report = RunReport::new("lp_profit_vs_liquidity", params)
        .with_summary(&summary)
        .series("liquidity", &liquidities)
        .series("fixed_fee_best", &fixed_best)
        .series("auction_best", &auction_best)
        .series("arbitrage_intensity", &intensities)
        .series("auction_minus_fixed_by_intensity", &intensity_gap);
    let path = report::write_outputs(".", &report, &chart)?;
    println!("Graph saved as '{}'", path.display());
    Ok(())
}
