use crate::core::models::grid::DensityGrid;
use crate::core::modification::sharpen::sharpen;
use crate::core::modification::threshold::{convert_to_non_negative, reset};
use crate::core::utils::statistics::GridStatistics;
use crate::engine::config::{ModificationPipeline, ModificationStep};
use tracing::{debug, info, instrument};

#[derive(Debug, Clone, PartialEq)]
pub struct ModificationReport {
    pub before: GridStatistics,
    pub after: GridStatistics,
    pub steps_applied: usize,
}

/// Applies every step of `pipeline` to `grid`, in order.
#[instrument(skip_all, name = "modification_workflow")]
pub fn run(grid: &mut DensityGrid, pipeline: &ModificationPipeline) -> ModificationReport {
    let before = GridStatistics::of(grid);
    info!(
        "Modifying {} grid with {} steps (mean {:.4}, sigma {:.4}).",
        grid.shape(),
        pipeline.len(),
        before.mean,
        before.sigma
    );

    apply_steps(grid, pipeline);

    let after = GridStatistics::of(grid);
    info!(
        "Modification finished (min {:.4}, max {:.4}, mean {:.4}).",
        after.min, after.max, after.mean
    );
    ModificationReport {
        before,
        after,
        steps_applied: pipeline.len(),
    }
}

pub(crate) fn apply_steps(grid: &mut DensityGrid, pipeline: &ModificationPipeline) {
    for (index, step) in pipeline.steps().iter().enumerate() {
        debug!("Step {}: {:?}", index, step);
        apply_step(grid, step);
    }
}

fn apply_step(grid: &mut DensityGrid, step: &ModificationStep) {
    match *step {
        ModificationStep::Sharpen { mode, n_iterations } => sharpen(grid, mode, n_iterations),
        ModificationStep::ConvertToNonNegative { substitute_value } => {
            convert_to_non_negative(grid, substitute_value)
        }
        ModificationStep::Reset {
            substitute_value,
            less_than_threshold,
        } => reset(grid, substitute_value, less_than_threshold),
    }
}
