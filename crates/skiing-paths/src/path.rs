//! The [`Path`] value type and the "better than" ranking.

use std::cmp::Ordering;
use std::fmt;

use skiing_core::Pos;

use crate::error::PathError;
use crate::traits::Terrain;

/// A strictly decreasing walk over axis-adjacent cells.
///
/// The first position is the start (highest cell), the last the end
/// (lowest cell). A path always holds at least one position.
///
/// Paths are ranked by [`cmp_rank`](Path::cmp_rank): more cells first, then
/// the larger drop. Two different paths can rank equal, so `Path` does not
/// implement `Ord`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawPath"))]
pub struct Path {
    steps: Vec<Pos>,
    top: i32,
    bottom: i32,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawPath {
    steps: Vec<Pos>,
    top: i32,
    bottom: i32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawPath> for Path {
    type Error = PathError;

    fn try_from(raw: RawPath) -> Result<Self, PathError> {
        if raw.steps.is_empty() {
            return Err(PathError::Empty);
        }
        Ok(Self::from_parts(raw.steps, raw.top, raw.bottom))
    }
}

impl Path {
    pub(crate) fn from_parts(steps: Vec<Pos>, top: i32, bottom: i32) -> Self {
        debug_assert!(!steps.is_empty());
        Self { steps, top, bottom }
    }

    /// Positions from start to end.
    #[inline]
    pub fn positions(&self) -> &[Pos] {
        &self.steps
    }

    /// The starting (highest) position.
    #[inline]
    pub fn start(&self) -> Pos {
        self.steps[0]
    }

    /// The final (lowest) position.
    #[inline]
    pub fn end(&self) -> Pos {
        self.steps[self.steps.len() - 1]
    }

    /// Number of cells on the path.
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always `false`: a path holds at least its start cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Elevation of the start cell.
    #[inline]
    pub fn top(&self) -> i32 {
        self.top
    }

    /// Elevation of the end cell.
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.bottom
    }

    /// Total elevation drop: start elevation minus end elevation.
    #[inline]
    pub fn drop(&self) -> i64 {
        i64::from(self.top) - i64::from(self.bottom)
    }

    /// `(cells, drop)`, the key the ranking compares lexicographically.
    #[inline]
    pub fn rank(&self) -> (usize, i64) {
        (self.len(), self.drop())
    }

    /// Compare by cell count, then by drop.
    ///
    /// `Ordering::Equal` means the paths are equally good, not identical.
    #[inline]
    pub fn cmp_rank(&self, other: &Path) -> Ordering {
        self.rank().cmp(&other.rank())
    }

    /// Whether `self` ranks strictly above `other`.
    #[inline]
    pub fn is_better_than(&self, other: &Path) -> bool {
        self.cmp_rank(other) == Ordering::Greater
    }

    /// Elevations along the path, looked up on `terrain`.
    ///
    /// Fails with [`PathError::OutOfBounds`] at the first position outside
    /// the terrain, so the result always has [`len`](Self::len) entries.
    pub fn elevations<T: Terrain + ?Sized>(&self, terrain: &T) -> Result<Vec<i32>, PathError> {
        let bounds = terrain.bounds();
        self.steps
            .iter()
            .map(|&p| {
                if bounds.contains(p) {
                    Ok(terrain.height(p))
                } else {
                    Err(PathError::OutOfBounds(p))
                }
            })
            .collect()
    }

    /// Check that the path is a valid descent on `terrain`.
    ///
    /// Every position must be in bounds, consecutive positions adjacent and
    /// strictly decreasing, and the recorded end elevations current.
    pub fn validate<T: Terrain + ?Sized>(&self, terrain: &T) -> Result<(), PathError> {
        let bounds = terrain.bounds();
        if let Some(&p) = self.steps.iter().find(|&&p| !bounds.contains(p)) {
            return Err(PathError::OutOfBounds(p));
        }
        for w in self.steps.windows(2) {
            let (from, to) = (w[0], w[1]);
            if !from.is_adjacent(to) {
                return Err(PathError::NotAdjacent { from, to });
            }
            if terrain.height(to) >= terrain.height(from) {
                return Err(PathError::NotDescending { from, to });
            }
        }
        if terrain.height(self.start()) != self.top {
            return Err(PathError::ElevationMismatch(self.start()));
        }
        if terrain.height(self.end()) != self.bottom {
            return Err(PathError::ElevationMismatch(self.end()));
        }
        Ok(())
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, p) in self.steps.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{p}")?;
        }
        Ok(())
    }
}
