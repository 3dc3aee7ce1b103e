use crate::core::models::grid::{GridError, GridShape};
use crate::core::models::region::BoxRegion;
use itertools::iproduct;
use tracing::debug;

pub const DEFAULT_MAX_BOXES: usize = 2000;

const MIN_EDGE_POINTS: usize = 3;
const BASE_EDGE_CAP: usize = 10;
const MAX_REPEATED_COUNTS: usize = 3;

/// Tiling of a grid into boxes whose edges are roughly a fixed fraction of each axis.
///
/// Boxes cover the grid exactly once. Along each axis they share one step size,
/// with any remainder absorbed by the last box.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxPartition {
    shape: GridShape,
    edge_points: [usize; 3],
    regions: Vec<BoxRegion>,
}

impl BoxPartition {
    pub fn new(shape: GridShape, fraction: f64, max_boxes: usize) -> Result<Self, GridError> {
        if !fraction.is_finite() || fraction <= 0.0 {
            return Err(GridError::InvalidParameter {
                name: "fraction",
                value: fraction,
            });
        }
        let dims = shape.dims();
        let mut seen_counts: Vec<usize> = Vec::new();
        let mut attempt = 0;
        loop {
            let edge_points: [usize; 3] = std::array::from_fn(|axis| {
                let by_fraction = (dims[axis] as f64 * fraction) as usize;
                (BASE_EDGE_CAP + attempt).min(by_fraction.max(MIN_EDGE_POINTS))
            });
            let regions = generate_boxes(dims, edge_points);
            let n_boxes = regions.len();
            let repeated = seen_counts.iter().filter(|&&n| n == n_boxes).count();
            if n_boxes <= max_boxes || repeated > MAX_REPEATED_COUNTS {
                debug!(
                    "Partitioned {} grid into {} boxes ({:?} points per edge).",
                    shape, n_boxes, edge_points
                );
                return Ok(Self {
                    shape,
                    edge_points,
                    regions,
                });
            }
            seen_counts.push(n_boxes);
            attempt += 1;
        }
    }

    pub fn with_default_limit(shape: GridShape, fraction: f64) -> Result<Self, GridError> {
        Self::new(shape, fraction, DEFAULT_MAX_BOXES)
    }

    pub fn shape(&self) -> GridShape {
        self.shape
    }

    /// Points per box edge used for the initial split along each axis.
    pub fn edge_points(&self) -> [usize; 3] {
        self.edge_points
    }

    pub fn regions(&self) -> &[BoxRegion] {
        &self.regions
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

fn generate_boxes(dims: [usize; 3], edge_points: [usize; 3]) -> Vec<BoxRegion> {
    let edges: [Vec<(usize, usize)>; 3] =
        std::array::from_fn(|axis| regroup(&box_edges(dims[axis], edge_points[axis])));
    iproduct!(edges[0].iter(), edges[1].iter(), edges[2].iter())
        .map(|(&(s0, e0), &(s1, e1), &(s2, e2))| {
            BoxRegion::from_ordered_bounds([s0, s1, s2], [e0, e1, e2])
        })
        .collect()
}

fn box_edges(n: usize, step: usize) -> Vec<(usize, usize)> {
    let mut limits: Vec<usize> = (0..n).step_by(step).collect();
    limits.push(n);
    limits.windows(2).map(|w| (w[0], w[1])).collect()
}

/// Re-spaces `edges` into equal steps over the same span, the last box taking the remainder.
fn regroup(edges: &[(usize, usize)]) -> Vec<(usize, usize)> {
    let Some(&(_, max_end)) = edges.last() else {
        return Vec::new();
    };
    let count = edges.len();
    let step = max_end / count;
    (0..count)
        .map(|i| {
            let start = i * step;
            let end = if i == count - 1 { max_end } else { (i + 1) * step };
            (start, end)
        })
        .collect()
}
