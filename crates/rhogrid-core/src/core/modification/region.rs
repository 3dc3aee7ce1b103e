use crate::core::models::grid::{DensityGrid, GridError};
use crate::core::models::region::BoxRegion;

fn check_region(
    region: &BoxRegion,
    placed: &DensityGrid,
    origin_addressed: &DensityGrid,
) -> Result<(), GridError> {
    if !region.fits_within(placed.shape()) {
        return Err(GridError::RegionOutOfBounds {
            region: *region,
            shape: placed.shape(),
        });
    }
    if !region.extent_fits_within(origin_addressed.shape()) {
        return Err(GridError::RegionOutOfBounds {
            region: *region,
            shape: origin_addressed.shape(),
        });
    }
    Ok(())
}

/// Writes `src`, read from its own origin, into the `region` sub-block of `dst`.
///
/// Cell `(i, j, k)` of `src` lands on `start + (i, j, k)` of `dst`. Both grids are
/// checked before anything is written: `region` must lie inside `dst` and `src`
/// must be at least as large as the region.
pub fn set_box(
    src: &DensityGrid,
    dst: &mut DensityGrid,
    region: &BoxRegion,
) -> Result<(), GridError> {
    check_region(region, dst, src)?;
    for (local, absolute) in region.indices() {
        dst[absolute] = src[local];
    }
    Ok(())
}

/// Reads the `region` sub-block of `src` into `dst` starting at `dst`'s origin.
pub fn copy_box(
    src: &DensityGrid,
    region: &BoxRegion,
    dst: &mut DensityGrid,
) -> Result<(), GridError> {
    check_region(region, src, dst)?;
    for (local, absolute) in region.indices() {
        dst[local] = src[absolute];
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::grid::GridShape;

    fn ramp(shape: GridShape) -> DensityGrid {
        let values = (0..shape.num_points()).map(|v| v as f64).collect();
        DensityGrid::from_vec(shape, values).unwrap()
    }

    #[test]
    fn set_box_places_source_at_region_start() {
        let src = ramp(GridShape::new(2, 2, 2).unwrap());
        let mut dst = DensityGrid::filled(GridShape::new(4, 4, 4).unwrap(), -1.0);
        let region = BoxRegion::new([1, 2, 0], [3, 4, 2]).unwrap();

        set_box(&src, &mut dst, &region).unwrap();

        assert_eq!(dst[[1, 2, 0]], src[[0, 0, 0]]);
        assert_eq!(dst[[1, 3, 1]], src[[0, 1, 1]]);
        assert_eq!(dst[[2, 3, 1]], src[[1, 1, 1]]);
        assert_eq!(dst[[0, 0, 0]], -1.0);
        assert_eq!(dst[[3, 3, 3]], -1.0);
        assert_eq!(dst.iter().filter(|&&v| v != -1.0).count(), 8);
    }

    #[test]
    fn set_box_reads_only_the_region_extent_from_a_larger_source() {
        let src = ramp(GridShape::new(3, 3, 3).unwrap());
        let mut dst = DensityGrid::new(GridShape::new(3, 3, 3).unwrap());
        let region = BoxRegion::new([2, 2, 2], [3, 3, 3]).unwrap();

        set_box(&src, &mut dst, &region).unwrap();

        assert_eq!(dst[[2, 2, 2]], src[[0, 0, 0]]);
        assert_eq!(dst.count_non_zero(), 0);
    }

    #[test]
    fn set_box_rejects_region_outside_destination() {
        let src = ramp(GridShape::new(2, 2, 2).unwrap());
        let mut dst = DensityGrid::new(GridShape::new(3, 3, 3).unwrap());
        let region = BoxRegion::new([2, 0, 0], [4, 2, 2]).unwrap();

        let result = set_box(&src, &mut dst, &region);

        assert!(matches!(result, Err(GridError::RegionOutOfBounds { .. })));
        assert_eq!(dst.count_non_zero(), 0);
    }

    #[test]
    fn set_box_rejects_source_smaller_than_region() {
        let src = ramp(GridShape::new(1, 2, 2).unwrap());
        let mut dst = DensityGrid::new(GridShape::new(3, 3, 3).unwrap());
        let region = BoxRegion::new([0, 0, 0], [2, 2, 2]).unwrap();

        assert!(set_box(&src, &mut dst, &region).is_err());
    }

    #[test]
    fn copy_box_then_set_box_restores_the_block() {
        let original = ramp(GridShape::new(4, 3, 5).unwrap());
        let region = BoxRegion::new([1, 0, 2], [3, 2, 5]).unwrap();
        let mut block = DensityGrid::new(GridShape::try_from(region.extent()).unwrap());
        copy_box(&original, &region, &mut block).unwrap();
        assert_eq!(block[[0, 0, 0]], original[[1, 0, 2]]);
        assert_eq!(block[[1, 1, 2]], original[[2, 1, 4]]);

        let mut rebuilt = DensityGrid::new(original.shape());
        set_box(&block, &mut rebuilt, &region).unwrap();
        for (_, absolute) in region.indices() {
            assert_eq!(rebuilt[absolute], original[absolute]);
        }
    }

    #[test]
    fn empty_region_is_a_no_op() {
        let src = ramp(GridShape::new(2, 2, 2).unwrap());
        let mut dst = DensityGrid::new(GridShape::new(2, 2, 2).unwrap());
        let region = BoxRegion::new([1, 1, 1], [1, 1, 1]).unwrap();
        set_box(&src, &mut dst, &region).unwrap();
        assert_eq!(dst.count_non_zero(), 0);
    }
}
