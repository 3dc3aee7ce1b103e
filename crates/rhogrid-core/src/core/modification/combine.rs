use crate::core::models::grid::{DensityGrid, GridError};

/// Cells of the kick map below this value are treated as insignificant.
pub const KICK_SIGNIFICANCE_CUTOFF: f64 = 0.5;
/// Cells of the FEM map below this value are treated as insignificant.
pub const FEM_SIGNIFICANCE_CUTOFF: f64 = 1.0;

/// Gives two significance maps a common support.
///
/// `kick` is zeroed below [`KICK_SIGNIFICANCE_CUTOFF`] and `fem` below
/// [`FEM_SIGNIFICANCE_CUTOFF`]; afterwards any cell that is zero in either map is
/// zeroed in both. Shapes must match; on mismatch neither grid is touched.
pub fn cut_by(kick: &mut DensityGrid, fem: &mut DensityGrid) -> Result<(), GridError> {
    kick.ensure_same_shape(fem)?;
    for (rk, rf) in kick.iter_mut().zip(fem.iter_mut()) {
        if *rk < KICK_SIGNIFICANCE_CUTOFF {
            *rk = 0.0;
        }
        if *rf < FEM_SIGNIFICANCE_CUTOFF {
            *rf = 0.0;
        }
        if *rk == 0.0 || *rf == 0.0 {
            *rk = 0.0;
            *rf = 0.0;
        }
    }
    Ok(())
}

/// Zeroes both maps wherever exactly one of them exceeds `threshold`.
///
/// A value equal to `threshold` does not exceed it, so a cell at the threshold
/// paired with one above it is zeroed in both maps.
pub fn intersection(
    map_1: &mut DensityGrid,
    map_2: &mut DensityGrid,
    threshold: f64,
) -> Result<(), GridError> {
    map_1.ensure_same_shape(map_2)?;
    for (rho_1, rho_2) in map_1.iter_mut().zip(map_2.iter_mut()) {
        if (*rho_1 > threshold) != (*rho_2 > threshold) {
            *rho_1 = 0.0;
            *rho_2 = 0.0;
        }
    }
    Ok(())
}
