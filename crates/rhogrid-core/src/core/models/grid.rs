use std::fmt;
use std::ops::{Index, IndexMut};
use thiserror::Error;

use super::region::BoxRegion;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GridError {
    #[error("Grid dimension along axis {axis} must be strictly positive")]
    ZeroDimension { axis: usize },

    #[error("Grid data length mismatch: shape {shape} needs {expected} values, got {actual}")]
    DataLength {
        shape: GridShape,
        expected: usize,
        actual: usize,
    },

    #[error("Grid shapes differ: {left} vs {right}")]
    ShapeMismatch { left: GridShape, right: GridShape },

    #[error("Box region has end {end} before start {start} along axis {axis}")]
    InvertedRegion {
        axis: usize,
        start: usize,
        end: usize,
    },

    #[error("Box region {region} does not fit inside grid of shape {shape}")]
    RegionOutOfBounds { region: BoxRegion, shape: GridShape },

    #[error("Invalid value for '{name}': {value}")]
    InvalidParameter { name: &'static str, value: f64 },
}

/// Number of samples along each axis of a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridShape([usize; 3]);

impl GridShape {
    pub fn new(nx: usize, ny: usize, nz: usize) -> Result<Self, GridError> {
        Self::try_from([nx, ny, nz])
    }

    #[inline]
    pub fn dims(&self) -> [usize; 3] {
        self.0
    }

    #[inline]
    pub fn num_points(&self) -> usize {
        self.0.iter().product()
    }

    /// C-order offset of `(i, j, k)`; the last axis varies fastest.
    #[inline]
    pub fn offset(&self, [i, j, k]: [usize; 3]) -> usize {
        (i * self.0[1] + j) * self.0[2] + k
    }

    pub fn contains(&self, index: [usize; 3]) -> bool {
        index.iter().zip(self.0.iter()).all(|(&i, &n)| i < n)
    }
}

impl TryFrom<[usize; 3]> for GridShape {
    type Error = GridError;

    fn try_from(dims: [usize; 3]) -> Result<Self, Self::Error> {
        if let Some(axis) = dims.iter().position(|&n| n == 0) {
            return Err(GridError::ZeroDimension { axis });
        }
        Ok(Self(dims))
    }
}

impl fmt::Display for GridShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.0[0], self.0[1], self.0[2])
    }
}

/// A 3-D map of density samples on a regular grid.
///
/// Samples are stored in C order. The shape is fixed for the lifetime of the
/// grid; only the values change. Every modification routine in this crate
/// borrows a grid mutably and rewrites it in place.
#[derive(Debug, Clone, PartialEq)]
pub struct DensityGrid {
    shape: GridShape,
    data: Vec<f64>,
}

impl DensityGrid {
    pub fn new(shape: GridShape) -> Self {
        Self::filled(shape, 0.0)
    }

    pub fn filled(shape: GridShape, value: f64) -> Self {
        Self {
            shape,
            data: vec![value; shape.num_points()],
        }
    }

    pub fn from_vec(shape: GridShape, data: Vec<f64>) -> Result<Self, GridError> {
        let expected = shape.num_points();
        if data.len() != expected {
            return Err(GridError::DataLength {
                shape,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { shape, data })
    }

    #[inline]
    pub fn shape(&self) -> GridShape {
        self.shape
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, index: [usize; 3]) -> Option<f64> {
        if self.shape.contains(index) {
            Some(self.data[self.shape.offset(index)])
        } else {
            None
        }
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut f64> {
        self.data.iter_mut()
    }

    pub fn count_non_zero(&self) -> usize {
        self.data.iter().filter(|&&rho| rho != 0.0).count()
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    pub(crate) fn ensure_same_shape(&self, other: &DensityGrid) -> Result<(), GridError> {
        if self.shape != other.shape {
            return Err(GridError::ShapeMismatch {
                left: self.shape,
                right: other.shape,
            });
        }
        Ok(())
    }
}

impl Index<[usize; 3]> for DensityGrid {
    type Output = f64;

    fn index(&self, index: [usize; 3]) -> &Self::Output {
        assert!(
            self.shape.contains(index),
            "grid index {:?} out of bounds for shape {}",
            index,
            self.shape
        );
        &self.data[self.shape.offset(index)]
    }
}

impl IndexMut<[usize; 3]> for DensityGrid {
    fn index_mut(&mut self, index: [usize; 3]) -> &mut Self::Output {
        assert!(
            self.shape.contains(index),
            "grid index {:?} out of bounds for shape {}",
            index,
            self.shape
        );
        let offset = self.shape.offset(index);
        &mut self.data[offset]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_rejects_zero_dimension() {
        assert_eq!(
            GridShape::new(4, 0, 2),
            Err(GridError::ZeroDimension { axis: 1 })
        );
    }

    #[test]
    fn offset_uses_c_order_with_last_axis_fastest() {
        let shape = GridShape::new(2, 3, 4).unwrap();
        assert_eq!(shape.offset([0, 0, 1]), 1);
        assert_eq!(shape.offset([0, 1, 0]), 4);
        assert_eq!(shape.offset([1, 0, 0]), 12);
        assert_eq!(shape.offset([1, 2, 3]), 23);
        assert_eq!(shape.num_points(), 24);
    }

    #[test]
    fn from_vec_rejects_wrong_length() {
        let shape = GridShape::new(2, 2, 2).unwrap();
        let result = DensityGrid::from_vec(shape, vec![0.0; 7]);
        assert!(matches!(
            result,
            Err(GridError::DataLength {
                expected: 8,
                actual: 7,
                ..
            })
        ));
    }

    #[test]
    fn indexing_reads_and_writes_the_addressed_cell() {
        let shape = GridShape::new(2, 3, 4).unwrap();
        let mut grid = DensityGrid::new(shape);
        grid[[1, 2, 3]] = 5.0;
        assert_eq!(grid.get([1, 2, 3]), Some(5.0));
        assert_eq!(grid.as_slice()[23], 5.0);
        assert_eq!(grid.count_non_zero(), 1);
    }

    #[test]
    fn get_returns_none_outside_the_grid() {
        let grid = DensityGrid::new(GridShape::new(2, 2, 2).unwrap());
        assert_eq!(grid.get([2, 0, 0]), None);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn index_outside_the_grid_panics() {
        let grid = DensityGrid::new(GridShape::new(2, 2, 2).unwrap());
        let _ = grid[[0, 0, 2]];
    }

    #[test]
    fn ensure_same_shape_reports_both_shapes() {
        let a = DensityGrid::new(GridShape::new(2, 2, 2).unwrap());
        let b = DensityGrid::new(GridShape::new(2, 2, 3).unwrap());
        assert_eq!(
            a.ensure_same_shape(&b),
            Err(GridError::ShapeMismatch {
                left: a.shape(),
                right: b.shape(),
            })
        );
    }
}
