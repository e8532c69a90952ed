//! **skiing-core**: elevation grid and cell geometry.
//!
//! This crate provides the data model shared by the descent solver and the
//! command-line application: [`Pos`] cell positions, [`Bounds`] with flat
//! row-major indexing, and the immutable [`ElevationGrid`].

pub mod error;
pub mod geom;
pub mod grid;

pub use error::GridError;
pub use geom::{Bounds, BoundsIter, Pos};
pub use grid::ElevationGrid;
