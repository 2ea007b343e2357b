// ABOUTME: Command-line interface definition and token command handlers
// ABOUTME: Generates new bootstrap tokens and validates user-supplied ones

use clap::{Parser, Subcommand};
use nodejoin_security::{generate_token, use_given_token_if_valid, TracingObserver};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::config::Config;
use crate::error::CliResult;

#[derive(Parser, Debug)]
#[command(name = "nodejoin")]
#[command(about = "Generate and validate bootstrap tokens for joining nodes to a cluster")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage bootstrap tokens
    #[command(subcommand)]
    Token(TokenCommands),
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum TokenCommands {
    /// Generate a new bootstrap token
    Generate {
        #[arg(long, help = "Print the token as JSON")]
        json: bool,
    },
    /// Validate a bootstrap token of the form <token-id>.<bearer-secret>
    Validate {
        /// Token to validate (falls back to NODEJOIN_TOKEN)
        token: Option<String>,
        #[arg(long, help = "Read discovery.givenToken from a JSON params file")]
        params: Option<PathBuf>,
        #[arg(long, help = "Print the result as JSON")]
        json: bool,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeneratedToken<'a> {
    token_id: &'a str,
    bearer_token: &'a str,
    given_token: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ValidationReport<'a> {
    provided: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    token_id: Option<&'a str>,
}

pub fn run(command: Commands, config: &Config, out: &mut impl Write) -> CliResult<()> {
    match command {
        Commands::Token(token_cmd) => run_token_command(token_cmd, config, out),
    }
}

pub fn run_token_command(
    command: TokenCommands,
    config: &Config,
    out: &mut impl Write,
) -> CliResult<()> {
    match command {
        TokenCommands::Generate { json } => generate_command(json, out),
        TokenCommands::Validate {
            token,
            params,
            json,
        } => validate_command(config, token.as_deref(), params.as_deref(), json, out),
    }
}

fn generate_command(json: bool, out: &mut impl Write) -> CliResult<()> {
    let token = generate_token()?;
    info!(token_id = %token.token_id(), "generated bootstrap token");

    if json {
        let output = GeneratedToken {
            token_id: token.token_id(),
            bearer_token: token.bearer_token(),
            given_token: token.given_token(),
        };
        serde_json::to_writer_pretty(&mut *out, &output)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", token.given_token())?;
    }
    Ok(())
}

fn validate_command(
    config: &Config,
    token: Option<&str>,
    params: Option<&Path>,
    json: bool,
    out: &mut impl Write,
) -> CliResult<()> {
    let mut discovery = config.discovery_params(token, params)?;
    let provided = use_given_token_if_valid(&mut discovery, Some(&TracingObserver))?;

    if provided {
        info!(token_id = %discovery.token_id, "bootstrap token is valid");
    } else {
        debug!("no bootstrap token provided");
    }

    if json {
        let report = ValidationReport {
            provided,
            token_id: provided.then_some(discovery.token_id.as_str()),
        };
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
    } else if provided {
        writeln!(out, "valid token {}", discovery.token_id)?;
    } else {
        writeln!(out, "no token provided")?;
    }
    Ok(())
}
