use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures that can happen while building a generation.
///
/// Stepping itself never fails; every error is raised at construction.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// A sequence needs at least three cells to form a neighborhood.
    #[error("sequence of length {len} is too short, at least 3 cells are required")]
    InvalidLength { len: usize },
    #[error("grid of {rows}x{cols} is empty")]
    EmptyGrid { rows: usize, cols: usize },
    #[error("a {rows}x{cols} grid has more cells than fit in memory")]
    ShapeOverflow { rows: usize, cols: usize },
    #[error("expected {expected} cells but {actual} were provided")]
    ShapeMismatch { expected: usize, actual: usize },
    #[error("cell ({row}, {col}) is outside of the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}
