//! # Indexing Module
//!
//! Conversion between Miller indices and storage offsets of a sampled grid.
//!
//! Two storage conventions are supported and deliberately kept apart:
//!
//! - [`exact`] - truncated-complex grids that store only part of reciprocal space.
//!   An index outside the stored range has no cell and maps to `None`.
//! - [`periodic`] - full periodic grids. Every index wraps onto a cell, so the
//!   mapping cannot fail.
//!
//! Each convention takes its own extent type ([`ComplexExtent`](crate::core::models::miller::ComplexExtent)
//! or [`RealExtent`](crate::core::models::miller::RealExtent)).

pub mod exact;
pub mod periodic;
