//! Whole-grid solving: resolve cells, then pick the global best.

use crate::error::SolveError;
use crate::finder::PathFinder;
use crate::path::Path;
use crate::strategy::Strategy;
use crate::traits::Terrain;

impl<T: Terrain + ?Sized> PathFinder<'_, T> {
    /// Best descent over the whole terrain.
    ///
    /// Resolves every cell and returns the path ranked highest (most cells,
    /// then largest drop). Among equally ranked paths the one starting
    /// first in row-major order is returned. Fails with
    /// [`SolveError::EmptyGrid`] when there are no cells.
    pub fn solve(&mut self) -> Result<Path, SolveError> {
        self.solve_with(Strategy::Exhaustive)
    }

    /// Like [`solve`](Self::solve), visiting the grid with `strategy`.
    pub fn solve_with(&mut self, strategy: Strategy) -> Result<Path, SolveError> {
        if self.bounds.is_empty() {
            return Err(SolveError::EmptyGrid);
        }
        let best = match strategy {
            Strategy::Exhaustive => self.solve_exhaustive(),
            Strategy::Peaks => self.solve_peaks(),
            Strategy::Ascending => {
                self.resolve_ascending();
                self.best_start(0..self.memo.len())
            }
            Strategy::Parallel => {
                self.resolve_parallel();
                self.best_start(0..self.memo.len())
            }
        };
        let path = self.materialize(best);
        let stats = self.stats;
        log::debug!(
            "{strategy} solve of {} grid: {} cells, drop {} from {} ({} resolutions, {} cache hits)",
            self.bounds,
            path.len(),
            path.drop(),
            path.start(),
            stats.resolutions,
            stats.cache_hits,
        );
        Ok(path)
    }

    fn solve_exhaustive(&mut self) -> usize {
        for i in 0..self.memo.len() {
            self.resolve_idx(i);
        }
        self.best_start(0..self.memo.len())
    }

    /// A cell with a strictly higher neighbour never starts the best path:
    /// that neighbour's path is one cell longer. Resolving the peaks still
    /// resolves every cell, since each cell lies below some peak.
    fn solve_peaks(&mut self) -> usize {
        let peaks: Vec<usize> = (0..self.memo.len()).filter(|&i| self.is_peak(i)).collect();
        log::trace!("{} of {} cells are peaks", peaks.len(), self.memo.len());
        for &i in &peaks {
            self.resolve_idx(i);
        }
        self.best_start(peaks)
    }

    fn is_peak(&self, i: usize) -> bool {
        let p = self.bounds.pos(i);
        let h = self.terrain.height(p);
        self.bounds.neighbors(p).all(|n| self.terrain.height(n) <= h)
    }

    /// Index of the best resolved start among `candidates`; the first seen
    /// wins ties. `candidates` must be non-empty and resolved.
    fn best_start(&self, candidates: impl IntoIterator<Item = usize>) -> usize {
        let mut best: Option<(usize, (u32, i64))> = None;
        for i in candidates {
            let rank = self.rank_of(i);
            match best {
                Some((_, best_rank)) if rank <= best_rank => {}
                _ => best = Some((i, rank)),
            }
        }
        // Every non-empty grid has at least one peak, so there is a candidate.
        best.map_or(0, |(i, _)| i)
    }
}
