//! # rhogrid Core Library
//!
//! Grid-level building blocks for crystallographic density modification: mapping
//! Miller indices to storage offsets of sampled maps, and rewriting density maps
//! in place.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer layout:
//!
//! - **[`core`]: The Foundation.** Stateless value types (`DensityGrid`, `MillerIndex`,
//!   `BoxRegion`) and pure routines: the exact and periodic index mappings, cubic
//!   sharpening, block copies, map combination and clipping.
//!
//! - **[`engine`]: Configuration.** Validated pipeline and combination settings,
//!   buildable in code or parsed from TOML, plus the crate-level error type.
//!
//! - **[`workflows`]: The Public API.** Runs configured pipelines over caller-owned
//!   grids, globally or box by box, and reports what changed.

pub mod core;
pub mod engine;
pub mod workflows;
