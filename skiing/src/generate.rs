//! Random map generation for benchmarking and demos.

use std::io::{self, Write};

use rand::rngs::StdRng;
use rand::{Rng, RngExt, SeedableRng};
use skiing_core::{ElevationGrid, GridError};

use crate::config::GenerateConfig;

/// Generate a map with elevations drawn uniformly from `0..=max_elevation`.
///
/// A configured seed makes the map reproducible. Fails with
/// [`GridError::TooLarge`] before drawing anything when the dimensions
/// cannot form a grid.
pub fn generate(cfg: &GenerateConfig) -> Result<ElevationGrid, GridError> {
    match cfg.seed {
        Some(seed) => generate_with(cfg, &mut StdRng::seed_from_u64(seed)),
        None => generate_with(cfg, &mut rand::rng()),
    }
}

/// Generate a map drawing elevations from `rng`.
pub fn generate_with(
    cfg: &GenerateConfig,
    rng: &mut impl Rng,
) -> Result<ElevationGrid, GridError> {
    let (rows, cols) = (cfg.rows, cfg.cols);
    let n = rows
        .checked_mul(cols)
        .filter(|_| i32::try_from(rows).is_ok() && i32::try_from(cols).is_ok())
        .ok_or(GridError::TooLarge { rows, cols })?;
    let max = cfg.max_elevation.max(0);
    let cells: Vec<i32> = (0..n).map(|_| rng.random_range(0..=max)).collect();
    ElevationGrid::from_vec(rows, cols, cells)
}

/// Write `grid` in the map-file format read by [`parse_map`](crate::parse_map).
pub fn write_map<W: Write>(out: &mut W, grid: &ElevationGrid) -> io::Result<()> {
    writeln!(out, "{} {}", grid.rows(), grid.cols())?;
    for r in 0..grid.rows() {
        let Some(row) = grid.row(r) else { break };
        let mut sep = "";
        for v in row {
            write!(out, "{sep}{v}")?;
            sep = " ";
        }
        writeln!(out)?;
    }
    Ok(())
}
