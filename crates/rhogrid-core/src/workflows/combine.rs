use crate::core::models::grid::DensityGrid;
use crate::core::modification::combine::{cut_by, intersection};
use crate::engine::config::CombinationConfig;
use crate::engine::error::EngineError;
use tracing::{info, instrument};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CombinationReport {
    pub non_zero_before: [usize; 2],
    pub non_zero_after: [usize; 2],
}

/// Reduces `map_1` and `map_2` to a common support as selected by `config`.
#[instrument(skip_all, name = "combination_workflow")]
pub fn run(
    map_1: &mut DensityGrid,
    map_2: &mut DensityGrid,
    config: &CombinationConfig,
) -> Result<CombinationReport, EngineError> {
    config.validate()?;
    let non_zero_before = [map_1.count_non_zero(), map_2.count_non_zero()];

    match *config {
        CombinationConfig::CutBy => cut_by(map_1, map_2)?,
        CombinationConfig::Intersection { threshold } => intersection(map_1, map_2, threshold)?,
    }

    let non_zero_after = [map_1.count_non_zero(), map_2.count_non_zero()];
    info!(
        "Combined maps with {:?}: non-zero cells {:?} -> {:?}.",
        config, non_zero_before, non_zero_after
    );
    Ok(CombinationReport {
        non_zero_before,
        non_zero_after,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::grid::{GridError, GridShape};

    fn grid_of(values: Vec<f64>) -> DensityGrid {
        let shape = GridShape::new(1, 1, values.len()).unwrap();
        DensityGrid::from_vec(shape, values).unwrap()
    }

    #[test]
    fn cut_by_reports_support_reduction() {
        let mut kick = grid_of(vec![0.4, 0.6, 0.9]);
        let mut fem = grid_of(vec![0.5, 1.5, 0.8]);
        let report = run(&mut kick, &mut fem, &CombinationConfig::CutBy).unwrap();
        assert_eq!(report.non_zero_before, [3, 3]);
        assert_eq!(report.non_zero_after, [1, 1]);
        assert_eq!(kick.as_slice(), &[0.0, 0.6, 0.0]);
        assert_eq!(fem.as_slice(), &[0.0, 1.5, 0.0]);
    }

    #[test]
    fn intersection_keeps_agreeing_cells() {
        let mut map_1 = grid_of(vec![2.0, 2.0]);
        let mut map_2 = grid_of(vec![0.0, 2.0]);
        let config = CombinationConfig::Intersection { threshold: 1.0 };
        let report = run(&mut map_1, &mut map_2, &config).unwrap();
        assert_eq!(report.non_zero_after, [1, 1]);
        assert_eq!(map_1.as_slice(), &[0.0, 2.0]);
    }

    #[test]
    fn shape_mismatch_surfaces_as_grid_error() {
        let mut map_1 = grid_of(vec![1.0]);
        let mut map_2 = grid_of(vec![1.0, 1.0]);
        let result = run(&mut map_1, &mut map_2, &CombinationConfig::CutBy);
        assert!(matches!(
            result,
            Err(EngineError::Grid {
                source: GridError::ShapeMismatch { .. }
            })
        ));
    }

    #[test]
    fn nan_threshold_is_rejected_before_touching_maps() {
        let mut map_1 = grid_of(vec![2.0]);
        let mut map_2 = grid_of(vec![0.0]);
        let config = CombinationConfig::Intersection {
            threshold: f64::NAN,
        };
        assert!(matches!(
            run(&mut map_1, &mut map_2, &config),
            Err(EngineError::Config { .. })
        ));
        assert_eq!(map_1.as_slice(), &[2.0]);
    }
}
