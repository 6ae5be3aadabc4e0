// src/simulators/steppable.rs

use crate::error::Result;

/// A trait for any block-indexed simulation.
/// Blocks are processed strictly in order; there are no transitions back
/// except a full `reset`.
pub trait Steppable {
    /// What one block produces.
    type Output;

    /// Processes the next block. Returns `Ok(None)` once the run is complete.
    fn step(&mut self) -> Result<Option<Self::Output>>;

    /// Index of the next block to be processed.
    fn current_block(&self) -> usize;

    /// Rewinds to block 0.
    fn reset(&mut self);
}
