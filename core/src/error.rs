use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    #[error("Invalid grid size")]
    InvalidSize,
    #[error("Coordinates outside the grid")]
    OutOfBounds,
    #[error("Snapshot shape does not match the grid")]
    SnapshotShapeMismatch,
}

pub type Result<T> = core::result::Result<T, PuzzleError>;
