mod cli;

use std::error::Error;

use clap::Parser;
use cli::{Cli, Command};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result = match cli.cmd {
        Command::Diff(args) => cli::diff::handle_diff_command(args),
        Command::Apply(args) => cli::apply::handle_apply_command(args),
    };

    result.map_err(|e| {
        eprintln!("Error: {}", e);
        e
    })
}
