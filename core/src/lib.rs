#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use grid::*;
pub use scramble::*;
pub use types::*;

mod engine;
mod error;
mod grid;
mod scramble;
mod types;

/// Scramble intensity used when the caller does not pick one.
pub const DEFAULT_STEPS: CellCount = 14;

/// Upper bound on the scramble intensity accepted from callers.
pub const MAX_STEPS: CellCount = 999;

/// Size and scramble intensity of a puzzle instance.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PuzzleConfig {
    pub size: Coord,
    pub steps: CellCount,
}

impl PuzzleConfig {
    pub const fn new_unchecked(size: Coord, steps: CellCount) -> Self {
        Self { size, steps }
    }

    pub fn new(size: Coord, steps: CellCount) -> Self {
        let size = size.clamp(1, MAX_SIZE);
        let steps = steps.clamp(0, MAX_STEPS);
        Self::new_unchecked(size, steps)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size, self.size)
    }
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self::new_unchecked(5, DEFAULT_STEPS)
    }
}
