//! Command-line front end for the URL core.
//!
//! # Usage
//!
//! ```bash
//! # Resolve a URL
//! cargo run --bin urlctl -- resolve "example.com//search/"
//!
//! # Resolve a path against a base URL
//! cargo run --bin urlctl -- resolve /foo/bar --base api.example.com/pets
//!
//! # Validate a URL (exit status 1 when invalid)
//! cargo run --bin urlctl -- validate "http://example.com"
//!
//! # Expand a route template
//! cargo run --bin urlctl -- expand "/api/v1/user/:id" -p id=7
//!
//! # Parse a URL into its components (JSON)
//! cargo run --bin urlctl -- parse "https://example.com/search?q=rust"
//! ```

use std::collections::HashMap;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use urlkit::domain::template::param_names;
use urlkit::prelude::*;

/// CLI tool for resolving, validating, expanding and parsing URLs.
#[derive(Parser)]
#[command(name = "urlctl")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// Resolve a URL into a sanitized, fully-qualified URL
    Resolve {
        /// URL to resolve (a URL path when --base is given)
        url: String,

        /// Base URL to resolve the path against
        #[arg(short, long)]
        base: Option<String>,
    },

    /// Check whether a string is a fully-qualified URL
    Validate {
        /// Candidate URL
        url: String,
    },

    /// Substitute values into a route template
    Expand {
        /// Template with colon-prefixed tokens (e.g. "/user/:id")
        template: String,

        /// Parameter value as name=value (repeatable)
        #[arg(short, long = "param", value_parser = parse_param)]
        params: Vec<(String, String)>,
    },

    /// Decompose a URL into its components
    Parse {
        /// URL to parse
        url: String,

        /// Print JSON on a single line
        #[arg(long)]
        compact: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli.command) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

/// Dispatches a command and returns the process exit status.
fn run(command: Commands) -> Result<ExitCode> {
    match command {
        Commands::Resolve { url, base } => {
            let resolved = resolve(&url, base.as_deref())?;
            println!("{}", resolved);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Validate { url } => {
            if is_valid_url(&url) {
                println!("{} {}", "✓ valid".green().bold(), url);
                Ok(ExitCode::SUCCESS)
            } else {
                println!("{} {}", "✗ invalid".red().bold(), url);
                Ok(ExitCode::FAILURE)
            }
        }
        Commands::Expand { template, params } => {
            let values: HashMap<String, String> = params.into_iter().collect();

            for name in param_names(&template) {
                if !values.contains_key(name) {
                    eprintln!(
                        "{}",
                        format!("⚠  No value for `:{name}`, substituting an empty string")
                            .yellow()
                    );
                }
            }

            println!("{}", expand(&template, &values));
            Ok(ExitCode::SUCCESS)
        }
        Commands::Parse { url, compact } => {
            let parsed = parse(&url)?;
            let json = if compact {
                serde_json::to_string(&parsed)
            } else {
                serde_json::to_string_pretty(&parsed)
            }
            .context("Failed to serialize parsed URL")?;
            println!("{}", json);
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Parses a `name=value` pair. The value may be empty or contain `=`.
fn parse_param(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected name=value, got `{raw}`"))?;

    let name = name.trim_start_matches(':');
    if name.is_empty() {
        return Err(format!("parameter name is empty in `{raw}`"));
    }

    Ok((name.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_param() {
        assert_eq!(
            parse_param("id=7").unwrap(),
            ("id".to_string(), "7".to_string())
        );
        assert_eq!(
            parse_param(":q=a=b").unwrap(),
            ("q".to_string(), "a=b".to_string())
        );
        assert_eq!(
            parse_param("empty=").unwrap(),
            ("empty".to_string(), String::new())
        );
    }

    #[test]
    fn test_parse_param_rejects_malformed() {
        assert!(parse_param("novalue").is_err());
        assert!(parse_param("=7").is_err());
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
