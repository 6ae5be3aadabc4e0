// src/optimizer/grid.rs

//! Exhaustive fee search over a fixed uniform grid.
//!
//! This is deliberately not a numerical optimizer: the answer is the best
//! grid point, so it is only as precise as the grid spacing
//! `(max - min) / (points - 1)`. With the default 500 points over
//! [0.0001, 0.2] that is roughly 4e-4 in fee.

use crate::config::{DEFAULT_FEE_MAX, DEFAULT_FEE_MIN, DEFAULT_GRID_POINTS};
use crate::error::{Result, SimError};
use serde::Serialize;

/// Evenly spaced candidate fees, endpoints included.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeeGrid {
    min: f64,
    max: f64,
    points: usize,
}

impl FeeGrid {
    pub fn new(min: f64, max: f64, points: usize) -> Result<Self> {
        if points == 0 {
            return Err(SimError::EmptyGrid);
        }
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(SimError::InvalidGrid { min, max });
        }
        Ok(Self { min, max, points })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn len(&self) -> usize {
        self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points == 0
    }

    /// Distance between neighbouring fees; zero for a single-point grid.
    pub fn resolution(&self) -> f64 {
        if self.points < 2 {
            0.0
        } else {
            (self.max - self.min) / (self.points - 1) as f64
        }
    }

    /// The i-th fee. The last point is exactly `max`.
    pub fn fee_at(&self, i: usize) -> f64 {
        if self.points > 1 && i == self.points - 1 {
            self.max
        } else {
            self.min + i as f64 * self.resolution()
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.points).map(move |i| self.fee_at(i))
    }
}

impl Default for FeeGrid {
    fn default() -> Self {
        Self {
            min: DEFAULT_FEE_MIN,
            max: DEFAULT_FEE_MAX,
            points: DEFAULT_GRID_POINTS,
        }
    }
}

/// Best grid point found by a search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Optimum {
    pub fee: f64,
    pub profit: f64,
    /// Liquidity at which the optimum was attained, when the search swept it.
    pub liquidity: Option<f64>,
}

/// Evaluates `objective` at every grid fee and keeps the first maximum.
/// A non-finite objective value fails the whole search at that fee.
pub fn maximize<F>(grid: &FeeGrid, mut objective: F) -> Result<Optimum>
where
    F: FnMut(f64) -> Result<f64>,
{
    let mut best: Option<Optimum> = None;
    for fee in grid.iter() {
        let profit = objective(fee)?;
        if !profit.is_finite() {
            return Err(SimError::Domain {
                parameter: "fee",
                value: fee,
            });
        }
        let improves = match best {
            None => true,
            Some(current) => profit > current.profit,
        };
        if improves {
            best = Some(Optimum {
                fee,
                profit,
                liquidity: None,
            });
        }
    }
    best.ok_or(SimError::EmptyGrid)
}

/// Grid optimum for each liquidity, then the best of those.
pub fn maximize_over_liquidity<F>(
    grid: &FeeGrid,
    liquidities: &[f64],
    mut objective: F,
) -> Result<Optimum>
where
    F: FnMut(f64, f64) -> Result<f64>,
{
    let mut best: Option<Optimum> = None;
    for &liquidity in liquidities {
        let mut at_liquidity = maximize(grid, |fee| objective(fee, liquidity))?;
        at_liquidity.liquidity = Some(liquidity);
        if best.map_or(true, |current| at_liquidity.profit > current.profit) {
            best = Some(at_liquidity);
        }
    }
    best.ok_or(SimError::EmptyGrid)
}

/// Grid optimum for each liquidity, in input order.
pub fn optimum_per_liquidity<F>(
    grid: &FeeGrid,
    liquidities: &[f64],
    mut objective: F,
) -> Result<Vec<Optimum>>
where
    F: FnMut(f64, f64) -> Result<f64>,
{
    liquidities
        .iter()
        .map(|&liquidity| {
            let mut optimum = maximize(grid, |fee| objective(fee, liquidity))?;
            optimum.liquidity = Some(liquidity);
            Ok(optimum)
        })
        .collect()
}

/// `count` evenly spaced values over `[start, end]`, endpoints included.
pub fn linspace(start: f64, end: f64, count: usize) -> Result<Vec<f64>> {
    Ok(FeeGrid::new(start, end, count)?.iter().collect())
}
