use thiserror::Error;

use super::config::ConfigError;
use crate::core::models::grid::GridError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Grid operation failed: {source}")]
    Grid {
        #[from]
        source: GridError,
    },

    #[error("Invalid configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },
}
