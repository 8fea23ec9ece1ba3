use std::io;
use std::process;

use clap::Parser;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};

use fielderr::cli::{self, Cli, EXIT_USAGE};

fn main() {
    let args = Cli::parse();

    let config = args.config();
    let default_level: tracing::Level = config.log_level.into();
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(default_level).into())
        .from_env_lossy();

    // stdout carries the JSON, logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let stdout = io::stdout();
    let code = match cli::run(&args, &mut stdout.lock()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("fielderr: {}", e);
            EXIT_USAGE
        }
    };

    process::exit(code);
}
