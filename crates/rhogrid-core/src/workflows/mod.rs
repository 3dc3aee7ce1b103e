//! # Workflows Module
//!
//! High-level entry points that run configured map modifications end to end.
//!
//! - **Modification** ([`modify`]) - Apply a [`ModificationPipeline`](crate::engine::config::ModificationPipeline)
//!   to a whole grid and report statistics before and after
//! - **Local Modification** ([`local`]) - Apply a pipeline box by box over a tiling of the grid
//! - **Combination** ([`combine`]) - Reduce two maps to a common support with `cut_by`
//!   or `intersection`
//!
//! Workflows log their progress through `tracing`; install a subscriber to see it.

pub mod combine;
pub mod local;
pub mod modify;
