use crate::core::models::grid::DensityGrid;
use tracing::trace;

/// Replaces every strictly negative cell with `substitute_value`.
pub fn convert_to_non_negative(grid: &mut DensityGrid, substitute_value: f64) {
    reset(grid, substitute_value, 0.0);
}

/// Replaces every cell below `less_than_threshold` with `substitute_value`.
pub fn reset(grid: &mut DensityGrid, substitute_value: f64, less_than_threshold: f64) {
    let mut replaced = 0usize;
    for rho in grid.iter_mut() {
        if *rho < less_than_threshold {
            *rho = substitute_value;
            replaced += 1;
        }
    }
    trace!(
        "Replaced {} of {} cells below {} with {}.",
        replaced,
        grid.len(),
        less_than_threshold,
        substitute_value
    );
}
