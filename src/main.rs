mod app;
mod cli;
mod config;
mod consts;
mod core;
mod data;
mod error;
mod output;
mod utils;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use config::Config;

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    let cli = cli.with_config(&config);

    match app::run(&cli, &config) {
        Ok(summary) if cli.dry_run => {
            println!("Would write {} rows (dry run, nothing written)", summary.written);
        }
        Ok(summary) => {
            println!("Wrote {} rows (filtered, sorted by date)", summary.written);
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
