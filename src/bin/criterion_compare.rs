use std::{env, ffi::OsString, io, process};

use criterion_compare::{CommandLineConfig, CompareConfig, run};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "CRITERION_COMPARE_LOG";

fn main() {
    init_tracing();

    let args: Vec<OsString> = env::args_os().collect();
    let target_dir = match CommandLineConfig::from_args(&args) {
        Ok(CommandLineConfig::Help) => {
            println!("{}", CommandLineConfig::help());
            return;
        }
        Ok(CommandLineConfig::Compare { target_dir }) => target_dir,
        Err(err) => {
            eprintln!("{err}");
            process::exit(err.exit_code());
        }
    };

    let config = match CompareConfig::from_env() {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(err.exit_code());
        }
    };

    let stdout = io::stdout();
    match run(&target_dir, &config, &mut stdout.lock()) {
        Ok(outcome) => process::exit(outcome.exit_code()),
        Err(err) => {
            eprintln!("{err}");
            process::exit(err.exit_code());
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
