//! The [`ElevationGrid`] type: an immutable rectangular matrix of elevations.
//!
//! Cells are stored in one flat row-major buffer. The grid is never
//! mutated after construction, so it can be shared by reference with any
//! number of readers (including worker threads).

use crate::error::GridError;
use crate::geom::{Bounds, Pos};

/// A rectangular grid of integer elevations.
///
/// Deserialized grids go through [`from_vec`](ElevationGrid::from_vec), so
/// the buffer always matches the bounds.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGrid"))]
pub struct ElevationGrid {
    cells: Vec<i32>,
    bounds: Bounds,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGrid {
    cells: Vec<i32>,
    bounds: Bounds,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGrid> for ElevationGrid {
    type Error = GridError;

    fn try_from(raw: RawGrid) -> Result<Self, GridError> {
        let rows = usize::try_from(raw.bounds.rows).unwrap_or(0);
        let cols = usize::try_from(raw.bounds.cols).unwrap_or(0);
        Self::from_vec(rows, cols, raw.cells)
    }
}

impl ElevationGrid {
    /// Build a grid from nested rows.
    ///
    /// Every row must have the length of the first one. An empty outer
    /// vector, or rows of length zero, yield an empty grid.
    pub fn from_rows(rows: Vec<Vec<i32>>) -> Result<Self, GridError> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(GridError::Ragged {
                    row: i,
                    expected: cols,
                    got: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }
        let n_rows = if cols == 0 { 0 } else { rows.len() };
        Self::from_vec(n_rows, cols, cells)
    }

    /// Build a grid from a flat row-major buffer.
    ///
    /// Fails with [`GridError::TooLarge`] when `rows * cols` overflows or a
    /// dimension does not fit a [`Pos`] coordinate.
    pub fn from_vec(rows: usize, cols: usize, cells: Vec<i32>) -> Result<Self, GridError> {
        let too_large = || GridError::TooLarge { rows, cols };
        let expected = rows.checked_mul(cols).ok_or_else(too_large)?;
        let r = i32::try_from(rows).map_err(|_| too_large())?;
        let c = i32::try_from(cols).map_err(|_| too_large())?;
        if cells.len() != expected {
            return Err(GridError::SizeMismatch {
                expected,
                got: cells.len(),
            });
        }
        let bounds = if expected == 0 {
            Bounds::default()
        } else {
            Bounds::new(r, c)
        };
        Ok(Self { cells, bounds })
    }

    /// The extent of the grid.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Pos) -> bool {
        self.bounds.contains(p)
    }

    /// Elevation at `p`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, p: Pos) -> Option<i32> {
        self.bounds.idx(p).map(|i| self.cells[i])
    }

    /// Elevation at `p`.
    ///
    /// Fails with [`GridError::OutOfBounds`] outside `[0, rows) × [0, cols)`.
    pub fn elevation(&self, p: Pos) -> Result<i32, GridError> {
        self.get(p).ok_or(GridError::OutOfBounds {
            pos: p,
            rows: self.bounds.rows,
            cols: self.bounds.cols,
        })
    }

    /// In-bounds axis neighbours of `p`: up, left, down, right.
    #[inline]
    pub fn neighbors(&self, p: Pos) -> impl Iterator<Item = Pos> + use<> {
        self.bounds.neighbors(p)
    }

    /// Cells of row `r`, or `None` if `r` is out of range.
    pub fn row(&self, r: i32) -> Option<&[i32]> {
        if r < 0 || r >= self.bounds.rows {
            return None;
        }
        let cols = self.bounds.cols as usize;
        let start = r as usize * cols;
        Some(&self.cells[start..start + cols])
    }

    /// The flat row-major buffer.
    #[inline]
    pub fn as_slice(&self) -> &[i32] {
        &self.cells
    }

    /// Row-major iterator over `(Pos, elevation)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Pos, i32)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ElevationGrid {
        ElevationGrid::from_rows(vec![vec![4, 8, 7, 3], vec![2, 5, 9, 3]]).unwrap()
    }

    #[test]
    fn from_rows_dimensions() {
        let g = sample();
        assert_eq!(g.rows(), 2);
        assert_eq!(g.cols(), 4);
        assert_eq!(g.len(), 8);
        assert_eq!(g.row(1), Some(&[2, 5, 9, 3][..]));
        assert_eq!(g.row(2), None);
    }

    #[test]
    fn elevation_lookup() {
        let g = sample();
        assert_eq!(g.elevation(Pos::new(0, 1)), Ok(8));
        assert_eq!(g.elevation(Pos::new(1, 2)), Ok(9));
        assert_eq!(g.get(Pos::new(1, 3)), Some(3));
    }

    #[test]
    fn elevation_out_of_bounds() {
        let g = sample();
        let err = g.elevation(Pos::new(2, 0)).unwrap_err();
        assert_eq!(
            err,
            GridError::OutOfBounds {
                pos: Pos::new(2, 0),
                rows: 2,
                cols: 4
            }
        );
        assert!(g.elevation(Pos::new(0, -1)).is_err());
        assert_eq!(g.get(Pos::new(0, 4)), None);
    }

    #[test]
    fn ragged_rows_rejected() {
        let err = ElevationGrid::from_rows(vec![vec![1, 2], vec![3]]).unwrap_err();
        assert_eq!(
            err,
            GridError::Ragged {
                row: 1,
                expected: 2,
                got: 1
            }
        );
    }

    #[test]
    fn from_vec_size_checked() {
        assert!(ElevationGrid::from_vec(2, 2, vec![1, 2, 3]).is_err());
        let g = ElevationGrid::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
        assert_eq!(g.elevation(Pos::new(1, 0)), Ok(3));
    }

    #[test]
    fn from_vec_rejects_huge_dimensions() {
        assert_eq!(
            ElevationGrid::from_vec(usize::MAX, 2, Vec::new()),
            Err(GridError::TooLarge {
                rows: usize::MAX,
                cols: 2
            })
        );
        let wide = i32::MAX as usize + 1;
        assert_eq!(
            ElevationGrid::from_vec(1, wide, Vec::new()),
            Err(GridError::TooLarge { rows: 1, cols: wide })
        );
    }

    #[test]
    fn empty_grids() {
        let g = ElevationGrid::from_rows(Vec::new()).unwrap();
        assert!(g.is_empty());
        assert!(g.bounds().is_empty());
        let g = ElevationGrid::from_rows(vec![vec![], vec![]]).unwrap();
        assert!(g.is_empty());
        assert_eq!(g.rows(), 0);
        let g = ElevationGrid::from_vec(3, 0, Vec::new()).unwrap();
        assert!(g.bounds().is_empty());
    }

    #[test]
    fn neighbors_fixed_order() {
        let g = sample();
        let n: Vec<_> = g.neighbors(Pos::new(1, 1)).collect();
        assert_eq!(n, vec![Pos::new(0, 1), Pos::new(1, 0), Pos::new(1, 2)]);
    }

    #[test]
    fn iter_pairs() {
        let g = sample();
        let items: Vec<_> = g.iter().collect();
        assert_eq!(items.len(), 8);
        assert_eq!(items[1], (Pos::new(0, 1), 8));
        assert_eq!(items[6], (Pos::new(1, 2), 9));
    }
}
