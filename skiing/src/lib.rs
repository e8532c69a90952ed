//! skiing: find the longest, steepest ski run on an elevation map.
//!
//! Wires the map-file loader, the descent solver and the report sink
//! together. The binary in `main.rs` is a thin CLI over [`run_solve`] and
//! [`run_generate`].

pub mod config;
pub mod generate;
pub mod loader;
pub mod report;

use std::error::Error;
use std::io::Write;

use skiing_core::ElevationGrid;
use skiing_paths::{PathFinder, SolveError, Strategy};

pub use config::{GenerateConfig, OutputFormat, RunConfig};
pub use loader::{MapError, load_map, parse_map};
pub use report::Report;

/// Solve `grid` with `strategy` and build the report for the best run.
///
/// Solver failures surface as [`SolveError`].
pub fn solve_grid(grid: &ElevationGrid, strategy: Strategy) -> Result<Report, Box<dyn Error>> {
    let mut finder = PathFinder::new(grid);
    let path = finder.solve_with(strategy)?;
    Ok(Report::new(&path, grid)?)
}

/// Load the configured map, solve it and write the report to `out`.
///
/// Returns `Ok(false)` when the map is empty and no run exists.
pub fn run_solve<W: Write>(cfg: &RunConfig, out: &mut W) -> Result<bool, Box<dyn Error>> {
    let grid = load_map(&cfg.map)?;
    log::info!("loaded {} map from {}", grid.bounds(), cfg.map.display());
    match solve_grid(&grid, cfg.strategy) {
        Ok(report) => {
            report.write(out, cfg.format)?;
            Ok(true)
        }
        Err(e) if matches!(e.downcast_ref::<SolveError>(), Some(SolveError::EmptyGrid)) => {
            log::warn!("{} holds no cells", cfg.map.display());
            Ok(false)
        }
        Err(e) => Err(e),
    }
}

/// Generate a random map and write it to `out` in the loader's format.
pub fn run_generate<W: Write>(cfg: &GenerateConfig, out: &mut W) -> Result<(), Box<dyn Error>> {
    let grid = generate::generate(cfg)?;
    log::info!(
        "generated {} map, elevations 0..={}",
        grid.bounds(),
        cfg.max_elevation
    );
    generate::write_map(out, &grid)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solve_grid_reports_best_run() {
        let grid = parse_map("4 4\n4 8 7 3\n2 5 9 3\n6 3 2 5\n4 4 1 6\n").unwrap();
        let report = solve_grid(&grid, Strategy::default()).unwrap();
        assert_eq!(report.elevations, vec![9, 5, 3, 2, 1]);
        assert_eq!(report.length, 5);
        assert_eq!(report.drop, 8);
    }

    #[test]
    fn solve_grid_empty() {
        let grid = parse_map("0 0\n").unwrap();
        let err = solve_grid(&grid, Strategy::Peaks).unwrap_err();
        assert_eq!(err.downcast_ref::<SolveError>(), Some(&SolveError::EmptyGrid));
    }
}
