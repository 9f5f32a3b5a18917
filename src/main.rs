// glyphls - Directory listing with rule-driven file icons

use std::io;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use glyphls::command_line::{CommandLine, LogLevel};

fn main() {
    let cmd = CommandLine::parse();
    init_tracing(cmd.log_level);

    if let Err(e) = glyphls::run(&cmd) {
        eprintln!("{}", e);
        process::exit(1);
    }
}

/// Initialize tracing subscriber.  RUST_LOG overrides --log-level.
fn init_tracing(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_tracing_level().to_string()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}
