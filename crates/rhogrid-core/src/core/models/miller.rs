use std::fmt;

use super::grid::{GridError, GridShape};

/// A reciprocal-space lattice point `(h, k, l)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MillerIndex([i32; 3]);

impl MillerIndex {
    #[inline]
    pub const fn new(h: i32, k: i32, l: i32) -> Self {
        Self([h, k, l])
    }

    #[inline]
    pub fn components(&self) -> [i32; 3] {
        self.0
    }

    #[inline]
    pub fn h(&self) -> i32 {
        self.0[0]
    }

    #[inline]
    pub fn k(&self) -> i32 {
        self.0[1]
    }

    #[inline]
    pub fn l(&self) -> i32 {
        self.0[2]
    }
}

impl From<[i32; 3]> for MillerIndex {
    fn from(hkl: [i32; 3]) -> Self {
        Self(hkl)
    }
}

impl fmt::Display for MillerIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.0[0], self.0[1], self.0[2])
    }
}

fn validate_extent(dims: [usize; 3]) -> Result<[usize; 3], GridError> {
    match dims.iter().position(|&n| n == 0) {
        Some(axis) => Err(GridError::ZeroDimension { axis }),
        None => Ok(dims),
    }
}

/// Sampling extent of a truncated-complex (Hermitian-reduced) grid.
///
/// Distinct from [`RealExtent`] so an extent from one storage convention can
/// never be handed to the other convention's index mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComplexExtent([usize; 3]);

impl ComplexExtent {
    pub fn new(n0: usize, n1: usize, n2: usize) -> Result<Self, GridError> {
        validate_extent([n0, n1, n2]).map(Self)
    }

    #[inline]
    pub fn dims(&self) -> [usize; 3] {
        self.0
    }
}

impl TryFrom<[usize; 3]> for ComplexExtent {
    type Error = GridError;

    fn try_from(dims: [usize; 3]) -> Result<Self, Self::Error> {
        validate_extent(dims).map(Self)
    }
}

/// Sampling extent of a full periodic real-space grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RealExtent([usize; 3]);

impl RealExtent {
    pub fn new(n0: usize, n1: usize, n2: usize) -> Result<Self, GridError> {
        validate_extent([n0, n1, n2]).map(Self)
    }

    #[inline]
    pub fn dims(&self) -> [usize; 3] {
        self.0
    }
}

impl TryFrom<[usize; 3]> for RealExtent {
    type Error = GridError;

    fn try_from(dims: [usize; 3]) -> Result<Self, Self::Error> {
        validate_extent(dims).map(Self)
    }
}

impl From<GridShape> for RealExtent {
    fn from(shape: GridShape) -> Self {
        Self(shape.dims())
    }
}
