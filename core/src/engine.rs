use serde::{Deserialize, Serialize};

use crate::*;

/// Largest supported grid side length.
pub const MAX_SIZE: Coord = 32;

/// Outcome of an accepted activation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ActivateOutcome {
    Toggled,
    Solved,
}

impl ActivateOutcome {
    pub const fn is_solved(self) -> bool {
        matches!(self, Self::Solved)
    }
}

/// Owns the grid and applies the Lights Out rules to it.
///
/// The engine has no terminal state: once [`is_solved`](Self::is_solved)
/// turns true the caller decides what happens next, and further activations
/// keep working (free play). Move counting and timing are caller concerns.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PuzzleEngine {
    grid: Grid,
}

impl PuzzleEngine {
    /// Creates an engine with an all-inactive grid of side length `size`.
    pub fn new(size: Coord) -> Result<Self> {
        if size == 0 || size > MAX_SIZE {
            return Err(PuzzleError::InvalidSize);
        }
        Ok(Self {
            grid: Grid::all_off(size),
        })
    }

    pub fn size(&self) -> Coord {
        self.grid.size()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn cell_at(&self, coords: Coord2) -> bool {
        self.grid[coords]
    }

    /// True iff every cell is inactive.
    pub fn is_solved(&self) -> bool {
        self.grid.is_clear()
    }

    /// Flips the cell at `coords` and its in-bounds orthogonal neighbors.
    ///
    /// The center itself must be in bounds; an out-of-bounds center is
    /// rejected with [`PuzzleError::OutOfBounds`] and the grid is left
    /// untouched. Neighbors falling outside the grid are silently skipped.
    pub fn activate(&mut self, coords: Coord2) -> Result<ActivateOutcome> {
        let coords = self.grid.validate_coords(coords)?;
        self.grid.flip_cross(coords);
        log::debug!(
            "activated {:?}, {} of {} cells lit",
            coords,
            self.grid.lit_count(),
            self.grid.total_cells()
        );

        Ok(if self.grid.is_clear() {
            ActivateOutcome::Solved
        } else {
            ActivateOutcome::Toggled
        })
    }

    /// Replaces the grid with a scrambled-but-solvable layout.
    ///
    /// Resets to all-inactive, then applies `steps` activations at uniform
    /// random positions drawn from an RNG seeded with `seed`. Because the
    /// flip is an involution and flips commute, every layout produced this
    /// way can be cleared again. Move counters and snapshots held by the
    /// caller are untouched.
    pub fn scramble(&mut self, steps: CellCount, seed: u64) -> &Grid {
        self.grid = RandomScrambler::new(seed, steps).scramble(self.size());
        &self.grid
    }

    /// Deep, independent copy of the current grid.
    pub fn snapshot(&self) -> Grid {
        self.grid.clone()
    }

    /// Replaces the grid with a deep copy of `snapshot`.
    ///
    /// Used for "reset to puzzle start" without re-scrambling. Snapshots of
    /// a different size are rejected.
    pub fn restore(&mut self, snapshot: &Grid) -> Result<()> {
        if snapshot.size() != self.grid.size() {
            return Err(PuzzleError::SnapshotShapeMismatch);
        }
        self.grid = snapshot.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn lit_cells(engine: &PuzzleEngine) -> Vec<Coord2> {
        let size = engine.size();
        let mut lit = Vec::new();
        for row in 0..size {
            for col in 0..size {
                if engine.cell_at((row, col)) {
                    lit.push((row, col));
                }
            }
        }
        lit
    }

    #[test]
    fn rejects_degenerate_sizes() {
        assert_eq!(PuzzleEngine::new(0), Err(PuzzleError::InvalidSize));
        assert_eq!(
            PuzzleEngine::new(MAX_SIZE + 1),
            Err(PuzzleError::InvalidSize)
        );
        assert!(PuzzleEngine::new(1).is_ok());
        assert!(PuzzleEngine::new(MAX_SIZE).is_ok());
    }

    #[test]
    fn new_engine_starts_solved() {
        let engine = PuzzleEngine::new(3).unwrap();
        assert!(engine.is_solved());
        assert_eq!(engine.grid().lit_count(), 0);
    }

    #[test]
    fn center_activation_flips_exactly_the_cross() {
        let mut engine = PuzzleEngine::new(3).unwrap();

        let outcome = engine.activate((1, 1)).unwrap();

        assert_eq!(outcome, ActivateOutcome::Toggled);
        assert!(!engine.is_solved());
        assert_eq!(lit_cells(&engine), [(0, 1), (1, 0), (1, 1), (1, 2), (2, 1)]);
    }

    #[test]
    fn corner_activation_flips_three_cells() {
        let mut engine = PuzzleEngine::new(3).unwrap();

        engine.activate((0, 0)).unwrap();

        assert_eq!(lit_cells(&engine), [(0, 0), (0, 1), (1, 0)]);
    }

    #[test]
    fn activation_is_an_involution() {
        let mut engine = PuzzleEngine::new(4).unwrap();
        engine.scramble(9, 77);
        let before = engine.snapshot();

        engine.activate((2, 3)).unwrap();
        assert_ne!(*engine.grid(), before);
        let outcome = engine.activate((2, 3)).unwrap();

        assert_eq!(*engine.grid(), before);
        // restoring the scrambled state cannot be reported as solved
        assert_eq!(outcome.is_solved(), before.is_clear());
    }

    #[test]
    fn repeated_center_activation_resolves_the_concrete_scenario() {
        let mut engine = PuzzleEngine::new(3).unwrap();
        assert!(engine.is_solved());

        assert_eq!(engine.activate((1, 1)), Ok(ActivateOutcome::Toggled));
        assert!(!engine.is_solved());

        assert_eq!(engine.activate((1, 1)), Ok(ActivateOutcome::Solved));
        assert!(engine.is_solved());
    }

    #[test]
    fn activations_commute() {
        let moves = [(0, 0), (1, 2), (2, 1), (1, 1)];

        let mut forward = PuzzleEngine::new(3).unwrap();
        for &coords in &moves {
            forward.activate(coords).unwrap();
        }

        let mut backward = PuzzleEngine::new(3).unwrap();
        for &coords in moves.iter().rev() {
            backward.activate(coords).unwrap();
        }

        assert_eq!(forward.grid(), backward.grid());
    }

    #[test]
    fn out_of_bounds_center_is_rejected_without_mutation() {
        let mut engine = PuzzleEngine::new(3).unwrap();
        engine.scramble(5, 1);
        let before = engine.snapshot();

        assert_eq!(engine.activate((3, 0)), Err(PuzzleError::OutOfBounds));
        assert_eq!(engine.activate((0, 3)), Err(PuzzleError::OutOfBounds));
        assert_eq!(engine.activate((255, 255)), Err(PuzzleError::OutOfBounds));

        assert_eq!(*engine.grid(), before);
    }

    #[test]
    fn zero_step_scramble_is_the_trivial_puzzle() {
        let mut engine = PuzzleEngine::new(3).unwrap();
        engine.activate((1, 1)).unwrap();

        engine.scramble(0, 42);

        assert!(engine.is_solved());
    }

    #[test]
    fn scramble_is_reproducible_from_its_seed() {
        let mut a = PuzzleEngine::new(5).unwrap();
        let mut b = PuzzleEngine::new(5).unwrap();

        a.scramble(14, 123);
        b.scramble(14, 123);
        assert_eq!(a.grid(), b.grid());

        b.scramble(14, 124);
        assert_ne!(a.grid(), b.grid());
    }

    #[test]
    fn scrambled_grids_can_always_be_cleared() {
        use rand::prelude::*;

        // replaying the seed's positions through activate() must cancel the
        // scramble, whatever the step count
        for steps in [1, 2, 7, 14, 40] {
            let seed = 9000 + steps as u64;
            let mut engine = PuzzleEngine::new(5).unwrap();
            engine.scramble(steps, seed);

            let mut rng = SmallRng::seed_from_u64(seed);
            for _ in 0..steps {
                let row = rng.random_range(0..5);
                let col = rng.random_range(0..5);
                engine.activate((row, col)).unwrap();
            }

            assert!(engine.is_solved(), "steps={} left the grid lit", steps);
        }
    }

    #[test]
    fn snapshot_restore_round_trips() {
        let mut engine = PuzzleEngine::new(4).unwrap();
        engine.scramble(11, 5);
        let start = engine.snapshot();

        engine.activate((0, 0)).unwrap();
        engine.activate((3, 3)).unwrap();
        assert_ne!(*engine.grid(), start);

        engine.restore(&start).unwrap();
        assert_eq!(*engine.grid(), start);
    }

    #[test]
    fn snapshots_are_independent_of_later_mutation() {
        let mut engine = PuzzleEngine::new(3).unwrap();
        engine.scramble(6, 31);
        let snapshot = engine.snapshot();
        let frozen = snapshot.clone();

        engine.activate((1, 1)).unwrap();
        engine.scramble(20, 99);

        assert_eq!(snapshot, frozen);
    }

    #[test]
    fn restore_rejects_mismatched_snapshot_size() {
        let mut engine = PuzzleEngine::new(3).unwrap();
        let other = PuzzleEngine::new(4).unwrap().snapshot();

        assert_eq!(
            engine.restore(&other),
            Err(PuzzleError::SnapshotShapeMismatch)
        );
        assert!(engine.is_solved());
    }
}
