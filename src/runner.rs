use std::io::Write;
use std::path::Path;

use colored::Colorize;
use csv::Writer;
use dotenv::dotenv;
use itertools::Itertools;
use tracing::{debug, info, span, Level};
use tracing_subscriber::{fmt, fmt::format::FmtSpan, prelude::*, EnvFilter};

use crate::cli::Cli;
use crate::error::Result;
use crate::evaluation::report::{build_report, DispatchReport};
use crate::setup::init::setup;
use crate::solver::greedy::AssignmentEngine;

/// Loads `.env` and installs the stderr log subscriber. `RUST_LOG` wins over `verbose`.
pub fn init_tracing_and_env(verbose: u8) {
    dotenv().ok();

    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // a second init (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE)
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}

/// Reads the input, assigns every load and writes the requested outputs to `out`.
pub fn run(cli: &Cli, out: &mut impl Write) -> Result<DispatchReport> {
    let config = cli.dispatch_config()?;
    info!(
        "Starting dispatch: depot {}, driver cost {}, max working time {}",
        config.depot, config.fixed_driver_cost, config.max_working_time
    );

    let loads = {
        let span = span!(Level::INFO, "setup");
        let _guard = span.enter();
        setup(&cli.input)?
    };

    let drivers = AssignmentEngine::new(config).assign(loads)?.into_drivers()?;
    let report = build_report(&drivers, &config);

    if cli.json {
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
    } else {
        write_manifests(&report, out)?;
    }
    out.flush()?;

    if let Some(path) = &cli.csv {
        save_to_csv(&report, path)?;
    }
    if cli.summary {
        print_summary(&report);
    }

    Ok(report)
}

/// One line per driver with its load ids in assignment order.
pub fn write_manifests(report: &DispatchReport, out: &mut impl Write) -> Result<()> {
    for driver in &report.drivers {
        writeln!(out, "{}", driver.manifest())?;
    }
    Ok(())
}

pub fn save_to_csv(report: &DispatchReport, path: &Path) -> Result<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record([
        "driver",
        "loads",
        "working_time",
        "route_distance",
        "loaded_distance",
        "cost",
        "over_budget",
    ])?;

    for driver in &report.drivers {
        wtr.write_record([
            driver.driver.to_string(),
            driver.load_ids.iter().join(" "),
            format!("{:.4}", driver.working_time),
            format!("{:.4}", driver.route_distance),
            format!("{:.4}", driver.loaded_distance),
            format!("{:.4}", driver.cost),
            driver.over_budget.to_string(),
        ])?;
    }

    wtr.flush()?;
    debug!("Wrote {} driver rows to {}", report.drivers.len(), path.display());
    Ok(())
}

fn print_summary(report: &DispatchReport) {
    let over_budget = report.drivers.iter().filter(|d| d.over_budget).count();
    let drivers = format!("Drivers: {}", report.driver_count);
    let cost = format!(
        "Total cost: {:.2} (distance {:.2})",
        report.total_cost, report.total_distance
    );

    if over_budget > 0 {
        eprintln!(
            "{} , {} , {}",
            drivers,
            cost,
            format!("{} over budget", over_budget).red()
        );
    } else {
        eprintln!("{} , {}", drivers.green(), cost);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracing_init_is_idempotent() {
        init_tracing_and_env(0);
        init_tracing_and_env(2);
        let span = span!(Level::INFO, "setup");
        let _guard = span.enter();
        info!("still logging after a second init");
    }
}
