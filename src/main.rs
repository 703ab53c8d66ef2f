use std::{io, process::ExitCode};

use catalog_auth::{
    config::AppConfig,
    password_manager::PasswordManager,
    presentation::handlers::password_handler::{Cli, handle},
};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = AppConfig::from_env()?;
    let password_manager = PasswordManager::new(config.hashing)?;

    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();
    let ok = handle(&cli.command, &password_manager, &mut input, &mut output)?;

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

// RUST_LOG wins over -v; logs go to stderr so stdout carries only results
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
