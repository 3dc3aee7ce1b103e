use crate::core::models::grid::DensityGrid;

/// Summary statistics over every sample of a grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridStatistics {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    /// Population standard deviation.
    pub sigma: f64,
}

impl GridStatistics {
    pub fn of(grid: &DensityGrid) -> Self {
        Self::from_values(grid.as_slice())
    }

    pub(crate) fn from_values(values: &[f64]) -> Self {
        let n = values.len().max(1) as f64;
        let (min, max, sum) = values.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY, 0.0),
            |(min, max, sum), &rho| (min.min(rho), max.max(rho), sum + rho),
        );
        let mean = sum / n;
        let variance = values
            .iter()
            .map(|&rho| (rho - mean) * (rho - mean))
            .sum::<f64>()
            / n;
        Self {
            min,
            max,
            mean,
            sigma: variance.sqrt(),
        }
    }
}

/// Mean and maximum of the strictly positive samples of a grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositiveStatistics {
    pub mean: f64,
    pub max: f64,
    pub count: usize,
}

impl PositiveStatistics {
    /// Returns `None` when no sample is strictly positive.
    pub fn of(grid: &DensityGrid) -> Option<Self> {
        Self::from_values(grid.as_slice())
    }

    pub(crate) fn from_values(values: &[f64]) -> Option<Self> {
        let (sum, max, count) = values
            .iter()
            .filter(|&&rho| rho > 0.0)
            .fold((0.0, 0.0f64, 0usize), |(sum, max, count), &rho| {
                (sum + rho, max.max(rho), count + 1)
            });
        if count == 0 {
            return None;
        }
        Some(Self {
            mean: sum / count as f64,
            max,
            count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::grid::GridShape;

    const TOLERANCE: f64 = 1e-12;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    fn grid_of(values: Vec<f64>) -> DensityGrid {
        let shape = GridShape::new(1, 1, values.len()).unwrap();
        DensityGrid::from_vec(shape, values).unwrap()
    }

    #[test]
    fn grid_statistics_reports_extrema_mean_and_sigma() {
        let stats = GridStatistics::of(&grid_of(vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]));
        assert!(f64_approx_equal(stats.min, 2.0));
        assert!(f64_approx_equal(stats.max, 9.0));
        assert!(f64_approx_equal(stats.mean, 5.0));
        assert!(f64_approx_equal(stats.sigma, 2.0));
    }

    #[test]
    fn constant_grid_has_zero_sigma() {
        let stats = GridStatistics::of(&grid_of(vec![0.3; 5]));
        assert!(f64_approx_equal(stats.sigma, 0.0));
        assert!(f64_approx_equal(stats.mean, 0.3));
    }

    #[test]
    fn positive_statistics_ignore_zero_and_negative_cells() {
        let stats = PositiveStatistics::of(&grid_of(vec![-3.0, 0.0, 1.0, 3.0])).unwrap();
        assert_eq!(stats.count, 2);
        assert!(f64_approx_equal(stats.mean, 2.0));
        assert!(f64_approx_equal(stats.max, 3.0));
    }

    #[test]
    fn positive_statistics_are_absent_for_non_positive_grid() {
        assert_eq!(PositiveStatistics::of(&grid_of(vec![-1.0, 0.0, -0.5])), None);
    }
}
