mod args;
mod commands;
mod error;

use clap::Parser;
use env_logger::{Builder, Target};

use crate::args::Cli;

fn main() {
    let cli = Cli::parse();

    Builder::new()
        .filter_level(cli.log_level)
        .parse_default_env()
        .target(Target::Stderr)
        .format_timestamp(None)
        .init();

    if let Err(e) = commands::run(&cli) {
        if e.is_broken_pipe() {
            return;
        }
        eprintln!("{e}");
        std::process::exit(e.exit_code());
    }
}
