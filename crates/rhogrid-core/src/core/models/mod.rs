//! # Models Module
//!
//! Value types shared by every algorithm in the crate.
//!
//! - [`grid`] - [`DensityGrid`](grid::DensityGrid), its [`GridShape`](grid::GridShape)
//!   and the [`GridError`](grid::GridError) raised on construction or precondition failures
//! - [`miller`] - Miller indices and the per-convention grid extents
//! - [`region`] - End-exclusive box regions used for sub-block copies
//!
//! Grids are always owned by the caller. Nothing in this crate allocates or
//! resizes a grid behind the caller's back.

pub mod grid;
pub mod miller;
pub mod region;
