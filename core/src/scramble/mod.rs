use crate::*;
pub use random::*;

mod random;

/// Produces a starting layout for a grid of the given side length.
///
/// Implementations must only build layouts reachable from the all-inactive
/// grid through activations, which is what keeps the puzzle solvable.
pub trait GridScrambler {
    fn scramble(self, size: Coord) -> Grid;
}
