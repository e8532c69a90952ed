//! Stackless resolution in ascending elevation order.
//!
//! A cell's best path depends only on strictly lower neighbours, so after
//! sorting cells by elevation each one can be computed directly from the
//! memo. Cells sharing an elevation ("a level") never depend on each other,
//! which is what lets the `parallel` feature hand a whole level to rayon.

use crate::finder::{PathFinder, select};
use crate::traits::Terrain;

impl<T: Terrain + ?Sized> PathFinder<'_, T> {
    /// Cell indices sorted by ascending elevation, row-major within a level.
    pub(crate) fn ascending_order(&self) -> Vec<usize> {
        let (terrain, bounds) = (self.terrain, self.bounds);
        let mut order: Vec<usize> = (0..self.memo.len()).collect();
        order.sort_by_key(|&i| terrain.height(bounds.pos(i)));
        order
    }

    pub(crate) fn resolve_ascending(&mut self) {
        for i in self.ascending_order() {
            if self.memo[i].is_resolved() {
                continue;
            }
            let entry = select(self.terrain, self.bounds, &self.memo, self.bounds.pos(i));
            self.memo[i] = entry;
            self.stats.resolutions += 1;
        }
    }

    #[cfg(feature = "parallel")]
    pub(crate) fn resolve_parallel(&mut self) {
        use rayon::prelude::*;

        let (terrain, bounds) = (self.terrain, self.bounds);
        let order = self.ascending_order();
        let levels = order.chunk_by(|&a, &b| {
            terrain.height(bounds.pos(a)) == terrain.height(bounds.pos(b))
        });
        for level in levels {
            let memo = &self.memo;
            let computed: Vec<_> = level
                .par_iter()
                .filter(|&&i| !memo[i].is_resolved())
                .map(|&i| (i, select(terrain, bounds, memo, bounds.pos(i))))
                .collect();
            self.stats.resolutions += computed.len();
            for (i, entry) in computed {
                self.memo[i] = entry;
            }
        }
    }

    #[cfg(not(feature = "parallel"))]
    pub(crate) fn resolve_parallel(&mut self) {
        log::warn!("built without the `parallel` feature; resolving sequentially");
        self.resolve_ascending();
    }
}
