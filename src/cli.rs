use std::path::PathBuf;

use clap::Parser;

use crate::config::{constant, DispatchConfig};
use crate::domain::types::Point;
use crate::error::Result;

/// Assigns pickup/drop-off loads to drivers working out of a single depot.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Load file: a header line, then `label (px,py) (dx,dy)` per line
    pub input: PathBuf,

    /// Fixed cost of putting one more driver on the road
    #[arg(long, default_value_t = constant::FIXED_DRIVER_COST)]
    pub driver_cost: f64,

    /// Working-time budget per driver, in distance units
    #[arg(long, default_value_t = constant::MAX_WORKING_TIME)]
    pub max_working_time: f64,

    #[arg(long, default_value_t = constant::DEPOT_X, allow_negative_numbers = true)]
    pub depot_x: f64,

    #[arg(long, default_value_t = constant::DEPOT_Y, allow_negative_numbers = true)]
    pub depot_y: f64,

    /// Evaluate candidate drivers on the rayon thread pool
    #[arg(long)]
    pub parallel: bool,

    /// Print driver count and total cost to stderr
    #[arg(long)]
    pub summary: bool,

    /// Print the full report as JSON instead of one manifest line per driver
    #[arg(long)]
    pub json: bool,

    /// Also write the per-driver report to this CSV file
    #[arg(long, value_name = "PATH")]
    pub csv: Option<PathBuf>,

    /// Raise log verbosity (-v debug, -vv trace) unless RUST_LOG is set
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn dispatch_config(&self) -> Result<DispatchConfig> {
        DispatchConfig {
            depot: Point::new(self.depot_x, self.depot_y),
            fixed_driver_cost: self.driver_cost,
            max_working_time: self.max_working_time,
            parallel_evaluation: self.parallel,
        }
        .validate()
    }
}
