use clap::Parser;
use colored::*;
use std::io;
use std::process;

use nodejoin_cli::logging::init_logging;
use nodejoin_cli::{run, Cli, Config};

fn main() {
    // Load .env file
    dotenvy::dotenv().ok();
    init_logging();

    let cli = Cli::parse();
    let config = Config::from_env();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = run(cli.command, &config, &mut out) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        if e.is_invalid_token() {
            eprintln!(
                "  Expected format: {}",
                "<6 hex chars>.<16 hex chars>".yellow()
            );
        }
        process::exit(1);
    }
}
