//! Grid construction and lookup errors.

use std::fmt;

use crate::geom::Pos;

/// Errors raised by [`ElevationGrid`](crate::ElevationGrid).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A position outside `[0, rows) × [0, cols)` was looked up.
    OutOfBounds { pos: Pos, rows: i32, cols: i32 },
    /// A row's length differs from the first row's.
    Ragged {
        row: usize,
        expected: usize,
        got: usize,
    },
    /// A flat buffer does not hold `rows * cols` values.
    SizeMismatch { expected: usize, got: usize },
    /// `rows * cols` overflows, or a dimension exceeds `i32::MAX`.
    TooLarge { rows: usize, cols: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { pos, rows, cols } => {
                write!(f, "position {pos} outside {rows}x{cols} grid")
            }
            Self::Ragged { row, expected, got } => {
                write!(f, "row {row} has {got} cells, expected {expected}")
            }
            Self::SizeMismatch { expected, got } => {
                write!(f, "grid needs {expected} cells, got {got}")
            }
            Self::TooLarge { rows, cols } => {
                write!(f, "{rows}x{cols} grid is too large")
            }
        }
    }
}

impl std::error::Error for GridError {}
