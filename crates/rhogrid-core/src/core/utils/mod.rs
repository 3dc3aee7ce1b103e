//! # Utilities Module
//!
//! Helpers shared by the modification routines and the workflows.
//!
//! - [`statistics`] - Whole-grid summaries and the positive-cell statistics used for sharpening
//! - [`boxes`] - Tiling a grid into box regions for block-wise processing

pub mod boxes;
pub mod statistics;
