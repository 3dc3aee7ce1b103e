use crate::utils::parser::{parse_triple_i32, parse_triple_usize};
use clap::{Args, Parser, Subcommand};

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Tony Kan, Ted Yu, William A. Goddard III, Victor Wai Tak Kam",
    version,
    about = "rhogrid CLI - Inspect Miller-index mappings and box partitions of sampled density grids.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Map Miller indices to grid offsets and back.
    Index(IndexArgs),
    /// Show how a grid is tiled into boxes for local modification.
    Boxes(BoxesArgs),
}

/// Arguments for the `index` subcommand.
#[derive(Args, Debug)]
pub struct IndexArgs {
    #[command(subcommand)]
    pub command: IndexCommands,
}

#[derive(Subcommand, Debug)]
pub enum IndexCommands {
    /// Exact lookup on a complex (reciprocal-space) grid; out-of-range indices are reported absent.
    Exact {
        /// Complex grid extent, e.g. '8,8,5'.
        #[arg(long, value_name = "NX,NY,NZ", value_parser = parse_triple_usize)]
        n_complex: [usize; 3],

        /// Store the third axis with signed wrap instead of non-negative only.
        #[arg(long)]
        anomalous: bool,

        /// Miller index to look up. Can be used multiple times.
        #[arg(
            long = "hkl",
            value_name = "H,K,L",
            required = true,
            allow_hyphen_values = true,
            value_parser = parse_triple_i32
        )]
        hkl: Vec<[i32; 3]>,
    },
    /// Periodic lookup on a real-space grid; every index wraps to a valid offset.
    Periodic {
        /// Real grid extent, e.g. '16,16,16'.
        #[arg(long, value_name = "NX,NY,NZ", value_parser = parse_triple_usize)]
        n_real: [usize; 3],

        /// Miller index to wrap. Can be used multiple times.
        #[arg(
            long = "hkl",
            value_name = "H,K,L",
            required = true,
            allow_hyphen_values = true,
            value_parser = parse_triple_i32
        )]
        hkl: Vec<[i32; 3]>,
    },
    /// Convert real-space grid offsets to centered Miller indices.
    Centered {
        /// Real grid extent, e.g. '16,16,16'.
        #[arg(long, value_name = "NX,NY,NZ", value_parser = parse_triple_usize)]
        n_real: [usize; 3],

        /// Grid offset to convert. Can be used multiple times.
        #[arg(
            long,
            value_name = "I,J,K",
            required = true,
            value_parser = parse_triple_usize
        )]
        offset: Vec<[usize; 3]>,
    },
}

/// Arguments for the `boxes` subcommand.
#[derive(Args, Debug)]
pub struct BoxesArgs {
    /// Real grid extent, e.g. '64,64,64'.
    #[arg(long, value_name = "NX,NY,NZ", value_parser = parse_triple_usize)]
    pub n_real: [usize; 3],

    /// Box edge as a fraction of each axis length.
    #[arg(long, value_name = "FLOAT", default_value_t = 0.03)]
    pub fraction: f64,

    /// Upper bound on the number of boxes; edges grow until it is met.
    #[arg(long, value_name = "INT", default_value_t = rhogrid::core::utils::boxes::DEFAULT_MAX_BOXES)]
    pub max_boxes: usize,
}
