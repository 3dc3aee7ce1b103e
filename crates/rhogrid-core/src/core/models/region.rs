use std::fmt;

use super::grid::{GridError, GridShape};
use itertools::iproduct;

/// An axis-aligned sub-block of a grid, `start` inclusive and `end` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoxRegion {
    start: [usize; 3],
    end: [usize; 3],
}

impl BoxRegion {
    pub fn new(start: [usize; 3], end: [usize; 3]) -> Result<Self, GridError> {
        for axis in 0..3 {
            if end[axis] < start[axis] {
                return Err(GridError::InvertedRegion {
                    axis,
                    start: start[axis],
                    end: end[axis],
                });
            }
        }
        Ok(Self { start, end })
    }

    /// Builds a region from bounds already known to be ordered.
    pub(crate) fn from_ordered_bounds(start: [usize; 3], end: [usize; 3]) -> Self {
        debug_assert!(start.iter().zip(end.iter()).all(|(s, e)| s <= e));
        Self { start, end }
    }

    /// The region covering an entire grid.
    pub fn whole(shape: GridShape) -> Self {
        Self {
            start: [0; 3],
            end: shape.dims(),
        }
    }

    #[inline]
    pub fn start(&self) -> [usize; 3] {
        self.start
    }

    #[inline]
    pub fn end(&self) -> [usize; 3] {
        self.end
    }

    pub fn extent(&self) -> [usize; 3] {
        [
            self.end[0] - self.start[0],
            self.end[1] - self.start[1],
            self.end[2] - self.start[2],
        ]
    }

    pub fn num_points(&self) -> usize {
        self.extent().iter().product()
    }

    pub fn is_empty(&self) -> bool {
        self.num_points() == 0
    }

    pub fn fits_within(&self, shape: GridShape) -> bool {
        self.end
            .iter()
            .zip(shape.dims().iter())
            .all(|(&e, &n)| e <= n)
    }

    /// Whether a grid of `shape`, addressed from its origin, covers this region's extent.
    pub fn extent_fits_within(&self, shape: GridShape) -> bool {
        self.extent()
            .iter()
            .zip(shape.dims().iter())
            .all(|(&e, &n)| e <= n)
    }

    /// Pairs of (local index from the region origin, absolute grid index), in C order.
    pub fn indices(&self) -> impl Iterator<Item = ([usize; 3], [usize; 3])> + use<> {
        let [s0, s1, s2] = self.start;
        let [e0, e1, e2] = self.end;
        iproduct!(s0..e0, s1..e1, s2..e2)
            .map(move |(i, j, k)| ([i - s0, j - s1, k - s2], [i, j, k]))
    }
}

impl fmt::Display for BoxRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{},{},{})..[{},{},{})",
            self.start[0], self.start[1], self.start[2], self.end[0], self.end[1], self.end[2]
        )
    }
}
