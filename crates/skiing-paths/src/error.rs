use std::fmt;

use skiing_core::Pos;

/// Errors returned by [`PathFinder`](crate::PathFinder).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveError {
    /// The terrain has zero rows or zero columns; no path exists.
    EmptyGrid,
    /// A requested start position lies outside the terrain.
    OutOfBounds(Pos),
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => f.write_str("no path exists: the grid is empty"),
            Self::OutOfBounds(p) => write!(f, "position {p} is outside the grid"),
        }
    }
}

impl std::error::Error for SolveError {}

/// Reasons a [`Path`](crate::Path) is not a valid descent on a terrain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    /// The path holds no positions.
    Empty,
    /// A step leaves the terrain.
    OutOfBounds(Pos),
    /// Two consecutive positions are not axis neighbours.
    NotAdjacent { from: Pos, to: Pos },
    /// A step does not go strictly downhill.
    NotDescending { from: Pos, to: Pos },
    /// The recorded top or bottom elevation disagrees with the terrain.
    ElevationMismatch(Pos),
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("path holds no positions"),
            Self::OutOfBounds(p) => write!(f, "path leaves the grid at {p}"),
            Self::NotAdjacent { from, to } => write!(f, "{from} and {to} are not adjacent"),
            Self::NotDescending { from, to } => {
                write!(f, "step {from} -> {to} is not strictly downhill")
            }
            Self::ElevationMismatch(p) => write!(f, "recorded elevation at {p} is stale"),
        }
    }
}

impl std::error::Error for PathError {}
