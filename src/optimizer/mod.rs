// src/optimizer/mod.rs

pub mod grid;

pub use grid::{FeeGrid, Optimum, linspace, maximize, maximize_over_liquidity, optimum_per_liquidity};
