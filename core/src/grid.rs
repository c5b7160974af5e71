use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Square grid of binary cell states, `true` meaning lit.
///
/// Mutation goes exclusively through the cross-flip transition; there is no
/// public mutable indexing. Combined with scrambling-by-flips this keeps
/// every grid an engine can hold solvable.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    cells: Array2<bool>,
}

impl Grid {
    /// All-inactive grid of the given side length.
    pub fn all_off(size: Coord) -> Self {
        Self {
            cells: Array2::default((size, size).to_nd_index()),
        }
    }

    /// Side length of the (square) grid.
    pub fn size(&self) -> Coord {
        self.cells.dim().0.try_into().unwrap()
    }

    pub fn total_cells(&self) -> CellCount {
        self.cells.len().try_into().unwrap()
    }

    /// How many cells are currently lit.
    pub fn lit_count(&self) -> CellCount {
        self.cells
            .iter()
            .filter(|&&lit| lit)
            .count()
            .try_into()
            .unwrap()
    }

    /// True iff every cell is inactive.
    pub fn is_clear(&self) -> bool {
        !self.cells.iter().any(|&lit| lit)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size && coords.1 < size {
            Ok(coords)
        } else {
            Err(PuzzleError::OutOfBounds)
        }
    }

    /// Flips `center` and each of its in-bounds orthogonal neighbors.
    ///
    /// The center must be in bounds; neighbors that fall outside the grid
    /// are skipped. This is the single transition rule: it is an involution
    /// and any two flips commute, so a grid's state is fully determined by
    /// the flip parity of each position.
    pub(crate) fn flip_cross(&mut self, center: Coord2) {
        self.toggle(center);
        let neighbors: NeighborIter = self.cells.iter_neighbors(center);
        for coords in neighbors {
            self.toggle(coords);
        }
    }

    fn toggle(&mut self, coords: Coord2) {
        let cell = &mut self.cells[coords.to_nd_index()];
        *cell = !*cell;
    }
}

impl Index<Coord2> for Grid {
    type Output = bool;

    fn index(&self, (row, col): Coord2) -> &Self::Output {
        &self.cells[(row as usize, col as usize)]
    }
}
