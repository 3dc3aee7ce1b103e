//! # Engine Module
//!
//! Configuration and error types that connect the pure routines in
//! [`core`](crate::core) to the [`workflows`](crate::workflows).
//!
//! - **Configuration** ([`config`]) - Modification pipelines, map-combination settings and
//!   box tiling, built with validating builders or parsed from TOML
//! - **Error Handling** ([`error`]) - [`EngineError`](error::EngineError), wrapping grid and
//!   configuration failures

pub mod config;
pub mod error;
