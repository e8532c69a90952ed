//! Geometry primitives: [`Pos`] and [`Bounds`].
//!
//! Positions are `(row, col)` pairs with rows growing downwards. A
//! [`Bounds`] is the half-open rectangle `[0, rows) × [0, cols)` of a grid
//! and owns the flat row-major index mapping used by the solver caches.

use std::fmt;

// ---------------------------------------------------------------------------
// Pos
// ---------------------------------------------------------------------------

/// A cell position on the grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pos {
    pub row: i32,
    pub col: i32,
}

impl Pos {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new position.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a position shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// The four axis neighbours in search order: up, left, down, right.
    ///
    /// The order is part of the tie-breaking contract of the solver and
    /// must not change.
    #[inline]
    pub const fn neighbors_4(self) -> [Pos; 4] {
        [
            self.shift(-1, 0),
            self.shift(0, -1),
            self.shift(1, 0),
            self.shift(0, 1),
        ]
    }

    /// Manhattan (L1) distance to `other`.
    #[inline]
    pub fn manhattan(self, other: Pos) -> i32 {
        (self.row - other.row).abs() + (self.col - other.col).abs()
    }

    /// Whether `other` is one of the four axis neighbours.
    #[inline]
    pub fn is_adjacent(self, other: Pos) -> bool {
        self.manhattan(other) == 1
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// The extent of a grid: `rows × cols` cells anchored at the origin.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub rows: i32,
    pub cols: i32,
}

impl Bounds {
    /// Create bounds, clamping negative extents to zero.
    #[inline]
    pub fn new(rows: i32, cols: i32) -> Self {
        Self {
            rows: rows.max(0),
            cols: cols.max(0),
        }
    }

    /// Total number of cells.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.rows as usize) * (self.cols as usize)
    }

    /// Whether there are zero rows or zero columns.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.rows <= 0 || self.cols <= 0
    }

    /// Whether `p` lies inside the bounds.
    #[inline]
    pub fn contains(self, p: Pos) -> bool {
        p.row >= 0 && p.row < self.rows && p.col >= 0 && p.col < self.cols
    }

    /// Flat row-major index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn idx(self, p: Pos) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.row as usize * self.cols as usize + p.col as usize)
    }

    /// Position of a flat row-major index.
    ///
    /// `idx` must be smaller than [`len`](Self::len).
    #[inline]
    pub fn pos(self, idx: usize) -> Pos {
        let cols = self.cols.max(1) as usize;
        Pos::new((idx / cols) as i32, (idx % cols) as i32)
    }

    /// In-bounds axis neighbours of `p`, in [`Pos::neighbors_4`] order.
    #[inline]
    pub fn neighbors(self, p: Pos) -> impl Iterator<Item = Pos> {
        p.neighbors_4().into_iter().filter(move |&n| self.contains(n))
    }

    /// Row-major iterator over every position.
    #[inline]
    pub fn iter(self) -> BoundsIter {
        BoundsIter {
            bounds: self,
            next: 0,
            len: self.len(),
        }
    }
}

impl IntoIterator for Bounds {
    type Item = Pos;
    type IntoIter = BoundsIter;
    #[inline]
    fn into_iter(self) -> BoundsIter {
        self.iter()
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

// ---------------------------------------------------------------------------
// BoundsIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the positions of a [`Bounds`].
#[derive(Clone, Debug)]
pub struct BoundsIter {
    bounds: Bounds,
    next: usize,
    len: usize,
}

impl Iterator for BoundsIter {
    type Item = Pos;

    #[inline]
    fn next(&mut self) -> Option<Pos> {
        if self.next >= self.len {
            return None;
        }
        let p = self.bounds.pos(self.next);
        self.next += 1;
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BoundsIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pos_shift() {
        let a = Pos::new(1, 2);
        assert_eq!(a.shift(-1, 1), Pos::new(0, 3));
        assert_eq!(a.shift(2, -2), Pos::new(3, 0));
    }

    #[test]
    fn neighbor_order_is_up_left_down_right() {
        let p = Pos::new(5, 5);
        assert_eq!(
            p.neighbors_4(),
            [
                Pos::new(4, 5),
                Pos::new(5, 4),
                Pos::new(6, 5),
                Pos::new(5, 6)
            ]
        );
        for n in p.neighbors_4() {
            assert!(p.is_adjacent(n));
        }
        assert!(!p.is_adjacent(Pos::new(6, 6)));
        assert!(!p.is_adjacent(p));
    }

    #[test]
    fn pos_orders_row_major() {
        let mut v = vec![Pos::new(1, 0), Pos::new(0, 2), Pos::new(0, 1)];
        v.sort();
        assert_eq!(v, vec![Pos::new(0, 1), Pos::new(0, 2), Pos::new(1, 0)]);
    }

    #[test]
    fn bounds_basics() {
        let b = Bounds::new(2, 3);
        assert_eq!(b.len(), 6);
        assert!(!b.is_empty());
        assert!(b.contains(Pos::new(1, 2)));
        assert!(!b.contains(Pos::new(2, 0)));
        assert!(!b.contains(Pos::new(0, 3)));
        assert!(!b.contains(Pos::new(-1, 0)));
    }

    #[test]
    fn bounds_negative_clamped() {
        let b = Bounds::new(-3, 4);
        assert!(b.is_empty());
        assert_eq!(b.len(), 0);
        assert_eq!(b.iter().count(), 0);
    }

    #[test]
    fn idx_pos_inverse() {
        let b = Bounds::new(3, 4);
        for (i, p) in b.iter().enumerate() {
            assert_eq!(b.idx(p), Some(i));
            assert_eq!(b.pos(i), p);
        }
        assert_eq!(b.idx(Pos::new(3, 0)), None);
    }

    #[test]
    fn bounds_iter_row_major() {
        let pts: Vec<_> = Bounds::new(2, 3).iter().collect();
        assert_eq!(pts.len(), 6);
        assert_eq!(pts[0], Pos::new(0, 0));
        assert_eq!(pts[2], Pos::new(0, 2));
        assert_eq!(pts[3], Pos::new(1, 0));
        assert_eq!(pts[5], Pos::new(1, 2));
    }

    #[test]
    fn neighbors_clipped_at_corner() {
        let b = Bounds::new(2, 2);
        let n: Vec<_> = b.neighbors(Pos::new(0, 0)).collect();
        assert_eq!(n, vec![Pos::new(1, 0), Pos::new(0, 1)]);
        let n: Vec<_> = b.neighbors(Pos::new(1, 1)).collect();
        assert_eq!(n, vec![Pos::new(0, 1), Pos::new(1, 0)]);
    }

    #[test]
    fn single_row_neighbors() {
        let b = Bounds::new(1, 3);
        let n: Vec<_> = b.neighbors(Pos::new(0, 1)).collect();
        assert_eq!(n, vec![Pos::new(0, 0), Pos::new(0, 2)]);
    }
}
