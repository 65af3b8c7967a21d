//! CLI argument definitions using clap derive

use clap::Parser;
use std::path::PathBuf;

use crate::logging::Verbosity;

#[derive(Parser, Debug)]
#[command(name = "aerocode")]
#[command(author, version, about = "Aerocode aircraft production tracker")]
#[command(
    long_about = "An interactive menu for tracking aircraft production: aircraft, parts, stages, staff and test results, kept as JSON files in a data directory."
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Directory holding the data files (default: ./data)
    #[arg(long, env = "AEROCODE_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Log more (-v for debug, -vv for trace); logs go to stderr
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(long, short = 'q', conflicts_with = "verbose")]
    pub quiet: bool,
}

impl GlobalOpts {
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.verbose)
    }
}
