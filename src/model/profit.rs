// src/model/profit.rs

//! Closed-form volume, arbitrage and profit rates, all expressed per unit
//! of pool value per block.

use crate::config::ModelParams;
use crate::error::{Result, SimError};

/// `base^exponent`, failing instead of producing NaN or infinity.
fn checked_powf(parameter: &'static str, base: f64, exponent: f64) -> Result<f64> {
    let value = base.powf(exponent);
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SimError::Domain {
            parameter,
            value: base,
        })
    }
}

/// `exp(-rate * fee)`.
fn decay(fee: f64, rate: f64) -> Result<f64> {
    let value = (-rate * fee).exp();
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SimError::Domain {
            parameter: "fee",
            value: fee,
        })
    }
}

fn finite(parameter: &'static str, input: f64, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SimError::Domain {
            parameter,
            value: input,
        })
    }
}

/// The single shared definition of the fee/liquidity response curves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfitModel {
    params: ModelParams,
}

impl Default for ProfitModel {
    fn default() -> Self {
        Self::new(ModelParams::default())
    }
}

impl ProfitModel {
    pub fn new(params: ModelParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &ModelParams {
        &self.params
    }

    /// Noise-trader volume: `h0 * L^alpha * exp(-b f)`.
    pub fn noise_volume(&self, fee: f64, liquidity: f64) -> Result<f64> {
        let p = &self.params;
        let scale = checked_powf("liquidity", liquidity, p.alpha)?;
        finite("fee", fee, p.h0 * scale * decay(fee, p.b)?)
    }

    /// Arbitrage profit at zero fee plus an additive shock: `a0 * L^beta + shock`.
    pub fn arbitrage_profit_zero(&self, liquidity: f64, shock: f64) -> Result<f64> {
        let p = &self.params;
        let scale = checked_powf("liquidity", liquidity, p.beta)?;
        finite("shock", shock, p.a0 * scale + shock)
    }

    /// Arbitrage profit at fee `f`: `a0 * L^beta * exp(-c f)`.
    pub fn arbitrage_profit(&self, fee: f64, liquidity: f64) -> Result<f64> {
        let p = &self.params;
        let scale = checked_powf("liquidity", liquidity, p.beta)?;
        finite("fee", fee, p.a0 * scale * decay(fee, p.c)?)
    }

    /// Arbitrage excess left for outside arbitrageurs: `a0 * L^beta * exp(-d f)`.
    pub fn arbitrage_excess(&self, fee: f64, liquidity: f64) -> Result<f64> {
        let p = &self.params;
        let scale = checked_powf("liquidity", liquidity, p.beta)?;
        finite("fee", fee, p.a0 * scale * decay(fee, p.d)?)
    }

    /// What a manager captures before paying rent: fee income plus the
    /// arbitrage it internalises.
    pub fn gross_manager_revenue(&self, fee: f64, liquidity: f64, shock: f64) -> Result<f64> {
        let fee_income = fee * self.noise_volume(fee, liquidity)?;
        finite(
            "fee",
            fee,
            fee_income + self.arbitrage_profit_zero(liquidity, shock)?
                - self.arbitrage_excess(fee, liquidity)?,
        )
    }

    pub fn manager_profit(&self, fee: f64, liquidity: f64, rent: f64, shock: f64) -> Result<f64> {
        finite("rent", rent, self.gross_manager_revenue(fee, liquidity, shock)? - rent)
    }

    /// LP of a plain fixed-fee pool: fees minus the arbitrage lost at that fee
    /// minus cost of capital.
    pub fn lp_profit_fixed_fee(&self, fee: f64, liquidity: f64, capital_cost: f64) -> Result<f64> {
        let fee_income = fee * self.noise_volume(fee, liquidity)?;
        finite(
            "capital_cost",
            capital_cost,
            fee_income - self.arbitrage_profit(fee, liquidity)? - capital_cost,
        )
    }

    /// Fixed-fee LP while a price shock inflates the arbitrage it loses.
    /// The arbitrage lost is taken at the pool's own fee.
    pub fn lp_profit_normal(
        &self,
        fee: f64,
        liquidity: f64,
        capital_cost: f64,
        shock: f64,
    ) -> Result<f64> {
        finite(
            "shock",
            shock,
            self.lp_profit_fixed_fee(fee, liquidity, capital_cost)? - shock,
        )
    }

    /// Normal-AMM LP charged the full zero-fee arbitrage plus the shock:
    /// `f * H0 - (a0 * L^beta + shock) - r`.
    pub fn lp_profit_normal_zero_fee(
        &self,
        fee: f64,
        liquidity: f64,
        capital_cost: f64,
        shock: f64,
    ) -> Result<f64> {
        let fee_income = fee * self.noise_volume(fee, liquidity)?;
        finite(
            "capital_cost",
            capital_cost,
            fee_income - self.arbitrage_profit_zero(liquidity, shock)? - capital_cost,
        )
    }

    /// LP of an auction pool: rent received minus the arbitrage the manager
    /// does not rebate minus cost of capital.
    pub fn lp_profit_auction(
        &self,
        fee: f64,
        liquidity: f64,
        rent: f64,
        capital_cost: f64,
        shock: f64,
    ) -> Result<f64> {
        let leaked = self.arbitrage_profit_zero(liquidity, shock)?
            - self.arbitrage_excess(fee, liquidity)?;
        if !rent.is_finite() {
            return Err(SimError::Domain {
                parameter: "rent",
                value: rent,
            });
        }
        finite("capital_cost", capital_cost, rent - leaked - capital_cost)
    }

    /// LP of an auction pool that keeps the fee income itself and only loses
    /// the arbitrage excess.
    pub fn lp_profit_fee_capture(&self, fee: f64, liquidity: f64, capital_cost: f64) -> Result<f64> {
        let fee_income = fee * self.noise_volume(fee, liquidity)?;
        finite(
            "capital_cost",
            capital_cost,
            fee_income - self.arbitrage_excess(fee, liquidity)? - capital_cost,
        )
    }
}
