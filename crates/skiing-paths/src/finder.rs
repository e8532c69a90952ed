use skiing_core::{Bounds, Pos};

use crate::error::SolveError;
use crate::path::Path;
use crate::traits::Terrain;

/// Traversal state of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellState {
    /// Not reached yet.
    #[default]
    Unvisited,
    /// On the traversal stack, waiting for lower neighbours.
    InProgress,
    /// Best path computed and cached.
    Resolved,
}

/// Counters describing the work done by a [`PathFinder`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveStats {
    /// Cells whose best path was computed from scratch.
    pub resolutions: usize,
    /// Requests answered directly from the memo.
    pub cache_hits: usize,
}

/// Sentinel `next` link of a path's last cell.
pub(crate) const NO_NEXT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// Memo entry
// ---------------------------------------------------------------------------

/// Best path starting at one cell, stored as a link to the next cell.
///
/// Following `next` links from a resolved cell reproduces its whole path,
/// so the memo stays O(cells) regardless of path lengths.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Entry {
    pub(crate) len: u32,
    pub(crate) low: i32,
    pub(crate) next: usize,
    pub(crate) state: CellState,
}

impl Default for Entry {
    fn default() -> Self {
        Self {
            len: 0,
            low: 0,
            next: NO_NEXT,
            state: CellState::Unvisited,
        }
    }
}

impl Entry {
    #[inline]
    fn resolved(len: u32, low: i32, next: usize) -> Self {
        Self {
            len,
            low,
            next,
            state: CellState::Resolved,
        }
    }

    #[inline]
    pub(crate) fn is_resolved(&self) -> bool {
        self.state == CellState::Resolved
    }
}

/// Compute the best path from `p`, given that every strictly lower
/// neighbour is already resolved in `memo`.
///
/// Neighbours are tried in fixed order and a candidate replaces the current
/// best only when strictly better, so the first-seen optimum wins ties.
pub(crate) fn select<T: Terrain + ?Sized>(
    terrain: &T,
    bounds: Bounds,
    memo: &[Entry],
    p: Pos,
) -> Entry {
    let h = terrain.height(p);
    let mut best = Entry::resolved(1, h, NO_NEXT);
    for n in bounds.neighbors(p) {
        if terrain.height(n) >= h {
            continue;
        }
        let Some(ni) = bounds.idx(n) else {
            continue;
        };
        let below = &memo[ni];
        debug_assert!(below.is_resolved(), "lower neighbour {n} unresolved");
        let len = below.len + 1;
        // Same start elevation, so a lower end means a larger drop.
        if len > best.len || (len == best.len && below.low < best.low) {
            best = Entry::resolved(len, below.low, ni);
        }
    }
    best
}

// ---------------------------------------------------------------------------
// PathFinder
// ---------------------------------------------------------------------------

/// Longest steepest descent search over a [`Terrain`].
///
/// `PathFinder` borrows the terrain and owns the memo table: for every cell
/// the best strictly decreasing path starting there. Entries are filled
/// lazily and never invalidated, so each cell is computed at most once per
/// session. Call [`reset`](Self::reset) to start a new session.
pub struct PathFinder<'t, T: Terrain + ?Sized> {
    pub(crate) terrain: &'t T,
    pub(crate) bounds: Bounds,
    pub(crate) memo: Vec<Entry>,
    pub(crate) stack: Vec<usize>,
    pub(crate) stats: SolveStats,
}

impl<'t, T: Terrain + ?Sized> PathFinder<'t, T> {
    /// Create a finder with an empty memo for `terrain`.
    pub fn new(terrain: &'t T) -> Self {
        let bounds = terrain.bounds();
        Self {
            terrain,
            bounds,
            memo: vec![Entry::default(); bounds.len()],
            stack: Vec::new(),
            stats: SolveStats::default(),
        }
    }

    /// The terrain being searched.
    #[inline]
    pub fn terrain(&self) -> &'t T {
        self.terrain
    }

    /// Extent of the terrain.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Work counters since construction or the last [`reset`](Self::reset).
    #[inline]
    pub fn stats(&self) -> SolveStats {
        self.stats
    }

    /// Traversal state of `p`, or `None` outside the terrain.
    pub fn state(&self, p: Pos) -> Option<CellState> {
        self.bounds.idx(p).map(|i| self.memo[i].state)
    }

    /// Number of cells currently resolved.
    pub fn resolved_count(&self) -> usize {
        self.memo.iter().filter(|e| e.is_resolved()).count()
    }

    /// Drop every cached path and zero the counters.
    pub fn reset(&mut self) {
        self.memo.fill(Entry::default());
        self.stack.clear();
        self.stats = SolveStats::default();
    }

    /// Best descent starting at `p`.
    ///
    /// Resolves `p` and every cell below it that is not cached yet. Repeated
    /// calls return the same path from the memo.
    pub fn resolve(&mut self, p: Pos) -> Result<Path, SolveError> {
        let Some(i) = self.bounds.idx(p) else {
            return Err(SolveError::OutOfBounds(p));
        };
        self.resolve_idx(i);
        Ok(self.materialize(i))
    }

    /// Memoized depth-first resolution of cell `start`.
    ///
    /// Uses an explicit stack. Only one unresolved lower neighbour is pushed
    /// at a time, so the stack is a strictly descending chain and no cell
    /// below the top can be `InProgress`.
    pub(crate) fn resolve_idx(&mut self, start: usize) {
        if self.memo[start].is_resolved() {
            self.stats.cache_hits += 1;
            return;
        }

        self.stack.clear();
        self.stack.push(start);
        self.memo[start].state = CellState::InProgress;

        while let Some(&ci) = self.stack.last() {
            let cp = self.bounds.pos(ci);
            if let Some(ni) = self.pending_below(cp) {
                self.memo[ni].state = CellState::InProgress;
                self.stack.push(ni);
                continue;
            }
            let entry = select(self.terrain, self.bounds, &self.memo, cp);
            self.memo[ci] = entry;
            self.stack.pop();
            self.stats.resolutions += 1;
        }
    }

    /// First strictly lower neighbour of `p` that still needs resolving.
    fn pending_below(&self, p: Pos) -> Option<usize> {
        let h = self.terrain.height(p);
        self.bounds
            .neighbors(p)
            .filter(|&n| self.terrain.height(n) < h)
            .filter_map(|n| self.bounds.idx(n))
            .find(|&ni| {
                let state = self.memo[ni].state;
                debug_assert!(state != CellState::InProgress, "descent revisited a cell");
                state != CellState::Resolved
            })
    }

    /// Rebuild the full path of a resolved cell from its `next` links.
    pub(crate) fn materialize(&self, start: usize) -> Path {
        let head = self.memo[start];
        debug_assert!(head.is_resolved());
        let mut steps = Vec::with_capacity(head.len as usize);
        let mut ci = start;
        while ci != NO_NEXT {
            steps.push(self.bounds.pos(ci));
            ci = self.memo[ci].next;
        }
        Path::from_parts(steps, self.terrain.height(self.bounds.pos(start)), head.low)
    }

    /// `(cells, drop)` of a resolved cell's best path.
    #[inline]
    pub(crate) fn rank_of(&self, i: usize) -> (u32, i64) {
        let e = &self.memo[i];
        let top = self.terrain.height(self.bounds.pos(i));
        (e.len, i64::from(top) - i64::from(e.low))
    }
}
