use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Parser;
use vrp_dispatch::fixtures::{generate_random_loads, render_load_file};
use vrp_dispatch::runner::init_tracing_and_env;

/// Writes a reproducible random load file in the dispatch input format.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 100)]
    count: usize,

    #[arg(short, long, default_value_t = 12345)]
    seed: u64,

    /// Coordinates are drawn from [-extent, extent] on both axes
    #[arg(short, long, default_value_t = 200.0)]
    extent: f64,

    /// Output path, stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_tracing_and_env(0);

    if !(args.extent.is_finite() && args.extent > 0.0) {
        return Err(format!("extent must be a positive number, got {}", args.extent).into());
    }

    let text = render_load_file(&generate_random_loads(args.count, args.extent, args.seed));
    match args.output {
        Some(path) => fs::write(path, text)?,
        None => print!("{text}"),
    }
    Ok(())
}
