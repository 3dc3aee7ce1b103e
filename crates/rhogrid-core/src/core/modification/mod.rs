//! # Modification Module
//!
//! In-place transformations of density grids.
//!
//! - [`sharpen`] - Iterative cubic sharpening toward a two-level solvent/protein map,
//!   either unconditional or scaled by the positive mean and maximum
//! - [`region`] - Copying blocks into and out of box regions of a larger grid
//! - [`combine`] - Giving two maps of the same shape a shared support
//! - [`threshold`] - Substituting values below a cutoff
//!
//! Every routine mutates the grids it is given and allocates none of its own.
//! Routines over two grids check that the shapes agree before touching any cell.

pub mod combine;
pub mod region;
pub mod sharpen;
pub mod threshold;
