use crate::cli::BoxesArgs;
use crate::error::Result;
use rhogrid::core::models::grid::GridShape;
use rhogrid::core::utils::boxes::BoxPartition;
use tracing::info;

pub fn run(args: BoxesArgs) -> Result<()> {
    for line in partition_lines(&args)? {
        println!("{}", line);
    }
    Ok(())
}

fn partition_lines(args: &BoxesArgs) -> Result<Vec<String>> {
    let shape = GridShape::try_from(args.n_real)?;
    let partition = BoxPartition::new(shape, args.fraction, args.max_boxes)?;
    info!(
        "Grid {} split into {} boxes (limit {}).",
        shape,
        partition.len(),
        args.max_boxes
    );

    let edge = partition.edge_points();
    let mut lines = Vec::with_capacity(partition.len() + 1);
    lines.push(format!(
        "{} boxes, {}x{}x{} points per edge",
        partition.len(),
        edge[0],
        edge[1],
        edge[2]
    ));
    lines.extend(
        partition
            .regions()
            .iter()
            .enumerate()
            .map(|(i, region)| format!("{:>5}  {}", i, region)),
    );
    Ok(lines)
}
