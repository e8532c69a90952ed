//! Longest steepest descent over elevation grids.
//!
//! A descent moves between axis-adjacent cells (up, left, down, right) and
//! must go strictly downhill at every step. The best descent has the most
//! cells; among those, the largest drop from first to last elevation.
//!
//! Edges only point to strictly lower cells, so the implicit graph is a DAG
//! and the best descent from a cell is fixed once its lower neighbours are
//! known. [`PathFinder`] memoizes exactly that, one entry per cell, which
//! makes a whole-grid solve linear in the number of cells.
//!
//! # Strategies
//!
//! | [`Strategy`] | Visits |
//! |---|---|
//! | `Exhaustive` | every cell, row-major, depth-first (default) |
//! | `Peaks` | only cells without a higher neighbour as candidates |
//! | `Ascending` | cells by ascending elevation, no traversal stack |
//! | `Parallel` | elevation levels on the rayon pool (`parallel` feature) |
//!
//! All strategies return the same [`Path`].
//!
//! ```
//! use skiing_core::ElevationGrid;
//! use skiing_paths::PathFinder;
//!
//! let grid = ElevationGrid::from_rows(vec![vec![5, 4, 3, 2, 1]]).unwrap();
//! let best = PathFinder::new(&grid).solve().unwrap();
//! assert_eq!(best.len(), 5);
//! assert_eq!(best.drop(), 4);
//! ```

mod ascending;
mod error;
mod finder;
mod path;
mod solve;
mod strategy;
mod traits;

pub use error::{PathError, SolveError};
pub use finder::{CellState, PathFinder, SolveStats};
pub use path::Path;
pub use strategy::{ParseStrategyError, Strategy};
pub use traits::Terrain;
