use skiing_core::{Bounds, ElevationGrid, Pos};

/// Read-only elevation source searched by [`PathFinder`](crate::PathFinder).
///
/// Terrains are shared by reference with solver threads, hence `Sync`.
pub trait Terrain: Sync {
    /// Extent of the searchable area.
    fn bounds(&self) -> Bounds;

    /// Elevation of `p`. Only called with positions inside [`bounds`](Self::bounds).
    fn height(&self, p: Pos) -> i32;
}

impl Terrain for ElevationGrid {
    #[inline]
    fn bounds(&self) -> Bounds {
        ElevationGrid::bounds(self)
    }

    #[inline]
    fn height(&self, p: Pos) -> i32 {
        self.as_slice()[p.row as usize * self.cols() as usize + p.col as usize]
    }
}
