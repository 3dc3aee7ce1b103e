use crate::cli::{IndexArgs, IndexCommands};
use crate::error::{CliError, Result};
use rhogrid::core::indexing::exact::ExactIndexMap;
use rhogrid::core::indexing::periodic::PeriodicIndexMap;
use rhogrid::core::models::grid::GridShape;
use rhogrid::core::models::miller::{ComplexExtent, MillerIndex, RealExtent};
use tracing::info;

pub fn run(args: IndexArgs) -> Result<()> {
    let lines = match args.command {
        IndexCommands::Exact {
            n_complex,
            anomalous,
            hkl,
        } => exact_lines(n_complex, anomalous, &hkl)?,
        IndexCommands::Periodic { n_real, hkl } => periodic_lines(n_real, &hkl)?,
        IndexCommands::Centered { n_real, offset } => centered_lines(n_real, &offset)?,
    };
    for line in lines {
        println!("{}", line);
    }
    Ok(())
}

fn exact_lines(n_complex: [usize; 3], anomalous: bool, hkl: &[[i32; 3]]) -> Result<Vec<String>> {
    let map = ExactIndexMap::new(ComplexExtent::try_from(n_complex)?, anomalous);
    info!(
        "Exact lookup on complex grid {:?} (anomalous: {}).",
        n_complex, anomalous
    );
    Ok(hkl
        .iter()
        .map(|&h| {
            let h = MillerIndex::from(h);
            match map.offset_of(h) {
                Some(ih) => format!("{} -> {}", h, format_offset(ih)),
                None => format!("{} -> absent", h),
            }
        })
        .collect())
}

fn periodic_lines(n_real: [usize; 3], hkl: &[[i32; 3]]) -> Result<Vec<String>> {
    let map = PeriodicIndexMap::new(RealExtent::try_from(n_real)?);
    info!("Periodic lookup on real grid {:?}.", n_real);
    Ok(hkl
        .iter()
        .map(|&h| {
            let h = MillerIndex::from(h);
            format!("{} -> {}", h, format_offset(map.offset_of(h)))
        })
        .collect())
}

fn centered_lines(n_real: [usize; 3], offsets: &[[usize; 3]]) -> Result<Vec<String>> {
    let shape = GridShape::try_from(n_real)?;
    let map = PeriodicIndexMap::new(RealExtent::from(shape));
    offsets
        .iter()
        .map(|&ih| {
            if !shape.contains(ih) {
                return Err(CliError::Argument(format!(
                    "offset {} lies outside the {} grid",
                    format_offset(ih),
                    shape
                )));
            }
            Ok(format!("{} -> {}", format_offset(ih), map.miller_index_of(ih)))
        })
        .collect()
}

fn format_offset(ih: [usize; 3]) -> String {
    format!("[{}, {}, {}]", ih[0], ih[1], ih[2])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_reports_offsets_and_absent_indices() {
        let lines = exact_lines([8, 8, 5], false, &[[-3, 0, 1], [0, 0, -1], [4, 0, 0]]).unwrap();
        assert_eq!(
            lines,
            vec![
                "(-3,0,1) -> [5, 0, 1]".to_string(),
                "(0,0,-1) -> absent".to_string(),
                "(4,0,0) -> absent".to_string(),
            ]
        );
    }

    #[test]
    fn exact_anomalous_wraps_third_axis() {
        let lines = exact_lines([8, 8, 5], true, &[[0, 0, -1]]).unwrap();
        assert_eq!(lines, vec!["(0,0,-1) -> [0, 0, 4]".to_string()]);
    }

    #[test]
    fn periodic_wraps_every_index() {
        let lines = periodic_lines([8, 8, 8], &[[-1, 9, -16]]).unwrap();
        assert_eq!(lines, vec!["(-1,9,-16) -> [7, 1, 0]".to_string()]);
    }

    #[test]
    fn centered_converts_offsets_to_signed_indices() {
        let lines = centered_lines([8, 8, 8], &[[4, 5, 0]]).unwrap();
        assert_eq!(lines, vec!["[4, 5, 0] -> (4,-3,0)".to_string()]);
    }

    #[test]
    fn centered_rejects_offsets_outside_the_grid() {
        let result = centered_lines([8, 8, 8], &[[8, 0, 0]]);
        assert!(matches!(result, Err(CliError::Argument(_))));
    }

    #[test]
    fn zero_extent_is_a_grid_error() {
        let result = periodic_lines([8, 0, 8], &[[0, 0, 0]]);
        assert!(matches!(result, Err(CliError::Grid(_))));
    }
}
