// src/simulators/shocks.rs

//! Random price-shock bursts. A shock adds to the arbitrage available at
//! zero fee for a few consecutive blocks.

use crate::config::ShockConfig;
use crate::error::{Result, SimError};
use rand::Rng;
use rand::seq::index;
use rand_distr::{Distribution, Uniform};
use serde::Serialize;

/// One burst: `magnitude` added to every block in `start..start + len`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShockWindow {
    pub start: usize,
    pub len: usize,
    pub magnitude: f64,
}

impl ShockWindow {
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// Per-block additive shocks for one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShockSchedule {
    values: Vec<f64>,
    windows: Vec<ShockWindow>,
}

impl ShockSchedule {
    /// All-zero schedule.
    pub fn none(blocks: usize) -> Self {
        Self {
            values: vec![0.0; blocks],
            windows: Vec::new(),
        }
    }

    /// Draws `cfg.count` disjoint bursts.
    ///
    /// The eligible start range `[earliest_start, blocks - tail_margin)` is cut
    /// into slots of `window_len` blocks and whole slots are sampled without
    /// replacement, so no two bursts can overlap.
    pub fn generate<R: Rng + ?Sized>(cfg: &ShockConfig, blocks: usize, rng: &mut R) -> Result<Self> {
        if cfg.window_len == 0 {
            return Err(SimError::invalid_config("window_len", "must be positive"));
        }
        if !cfg.min_magnitude.is_finite()
            || !cfg.max_magnitude.is_finite()
            || cfg.min_magnitude >= cfg.max_magnitude
        {
            return Err(SimError::invalid_config(
                "max_magnitude",
                format!("must be finite and above min_magnitude ({})", cfg.min_magnitude),
            ));
        }

        let latest = blocks.saturating_sub(cfg.tail_margin);
        let slots = latest.saturating_sub(cfg.earliest_start) / cfg.window_len;
        if cfg.count > slots {
            return Err(SimError::ShockSchedule {
                requested: cfg.count,
                available: slots,
            });
        }

        let mut picked = index::sample(rng, slots, cfg.count).into_vec();
        picked.sort_unstable();

        let magnitude = Uniform::new(cfg.min_magnitude, cfg.max_magnitude);
        let mut schedule = Self::none(blocks);
        for slot in picked {
            let window = ShockWindow {
                start: cfg.earliest_start + slot * cfg.window_len,
                len: cfg.window_len,
                magnitude: magnitude.sample(rng),
            };
            for value in &mut schedule.values[window.start..window.end()] {
                *value += window.magnitude;
            }
            schedule.windows.push(window);
        }
        Ok(schedule)
    }

    /// Wraps explicit per-block shocks. No window metadata is recorded.
    pub fn from_values(values: Vec<f64>) -> Self {
        Self {
            values,
            windows: Vec::new(),
        }
    }

    /// Shock at `block`; zero past the end.
    pub fn at(&self, block: usize) -> f64 {
        self.values.get(block).copied().unwrap_or(0.0)
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn windows(&self) -> &[ShockWindow] {
        &self.windows
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
