//! # Core Module
//!
//! The computational foundation of rhogrid: grid value types, reciprocal-space
//! index mapping and the in-place map modifications used during density
//! modification and refinement.
//!
//! ## Architecture
//!
//! - **Value Types** ([`models`]) - Density grids, Miller indices, grid extents and box regions
//! - **Index Mapping** ([`indexing`]) - Miller index to storage offset for truncated-complex
//!   and full periodic grids
//! - **Map Modification** ([`modification`]) - Sharpening, block copies, map combination and clipping
//! - **Utilities** ([`utils`]) - Grid statistics and box partitioning
//!
//! Everything here is a plain function or value type. There is no global state, and
//! every grid is borrowed from the caller.

pub mod indexing;
pub mod models;
pub mod modification;
pub mod utils;
