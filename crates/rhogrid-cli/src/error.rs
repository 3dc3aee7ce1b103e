use rhogrid::core::models::grid::GridError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Grid error: {0}")]
    Grid(#[from] GridError),

    #[error("Invalid argument: {0}")]
    Argument(String),

    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_errors_convert_and_keep_their_message() {
        let error: CliError = GridError::ZeroDimension { axis: 1 }.into();
        assert!(matches!(
            error,
            CliError::Grid(GridError::ZeroDimension { axis: 1 })
        ));
        assert_eq!(
            error.to_string(),
            "Grid error: Grid dimension along axis 1 must be strictly positive"
        );
    }
}
