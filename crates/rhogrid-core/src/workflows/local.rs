use super::modify::apply_steps;
use crate::core::models::grid::{DensityGrid, GridShape};
use crate::core::modification::region::{copy_box, set_box};
use crate::core::utils::boxes::BoxPartition;
use crate::engine::config::{LocalConfig, ModificationPipeline};
use crate::engine::error::EngineError;
use tracing::{debug, info, instrument};

#[derive(Debug, Clone, PartialEq)]
pub struct LocalModificationReport {
    pub n_boxes: usize,
    pub edge_points: [usize; 3],
}

/// Applies `pipeline` independently inside each box of a tiling of `grid`.
///
/// Statistics-driven steps, such as mean-scaled sharpening, then see only the
/// density of their own box. The boxes are disjoint, so each one is read,
/// modified and written back before the next.
#[instrument(skip_all, name = "local_modification_workflow")]
pub fn run(
    grid: &mut DensityGrid,
    pipeline: &ModificationPipeline,
    config: &LocalConfig,
) -> Result<LocalModificationReport, EngineError> {
    let partition = BoxPartition::new(grid.shape(), config.fraction, config.max_boxes)?;
    info!(
        "Applying {} steps locally over {} boxes of {} grid.",
        pipeline.len(),
        partition.len(),
        grid.shape()
    );

    for region in partition.regions().iter().filter(|region| !region.is_empty()) {
        let mut block = DensityGrid::new(GridShape::try_from(region.extent())?);
        copy_box(grid, region, &mut block)?;
        apply_steps(&mut block, pipeline);
        set_box(&block, grid, region)?;
        debug!("Box {} done.", region);
    }

    Ok(LocalModificationReport {
        n_boxes: partition.len(),
        edge_points: partition.edge_points(),
    })
}
