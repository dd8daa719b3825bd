use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use vrp_dispatch::cli::Cli;
use vrp_dispatch::runner::{init_tracing_and_env, run};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            println!("{}", e.render());
            return ExitCode::from(2);
        }
    };

    init_tracing_and_env(cli.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match run(&cli, &mut out) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            println!("Error: {e}");
            error!(error = ?e, "dispatch run failed");
            ExitCode::FAILURE
        }
    }
}
