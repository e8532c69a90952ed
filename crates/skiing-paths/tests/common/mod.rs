//! Shared helpers for skiing-paths integration tests.

#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use skiing_core::{ElevationGrid, Pos};

pub fn grid(rows: Vec<Vec<i32>>) -> ElevationGrid {
    ElevationGrid::from_rows(rows).unwrap()
}

/// A seeded random grid with elevations in `0..max`.
pub fn random_grid(seed: u64, rows: usize, cols: usize, max: i32) -> ElevationGrid {
    let mut rng = StdRng::seed_from_u64(seed);
    let cells = (0..rows * cols).map(|_| rng.random_range(0..max)).collect();
    ElevationGrid::from_vec(rows, cols, cells).unwrap()
}

/// Best `(cells, drop)` over every descent in the grid, by plain
/// enumeration without any caching.
pub fn brute_force_rank(g: &ElevationGrid) -> (usize, i64) {
    let mut best = (0, 0);
    for (p, h) in g.iter() {
        walk(g, p, h, 1, &mut best);
    }
    best
}

fn walk(g: &ElevationGrid, p: Pos, top: i32, len: usize, best: &mut (usize, i64)) {
    let h = g.get(p).unwrap();
    let rank = (len, i64::from(top) - i64::from(h));
    if rank > *best {
        *best = rank;
    }
    for n in g.neighbors(p) {
        if g.get(n).unwrap() < h {
            walk(g, n, top, len + 1, best);
        }
    }
}
