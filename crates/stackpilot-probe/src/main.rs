use anyhow::{Context, Result};
use clap::Parser;
use stackpilot_common::config::{Config, LogFormat};
use stackpilot_common::models::ApiResponse;
use std::io::Read;
use std::path::Path;
use std::process::ExitCode;
use tracing::{error, info};

use crate::cli::{Args, Command, TracingFormat};

mod cli;
mod report;

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let args = Args::parse();

    // Logging is not up yet, so configuration errors go straight to stderr
    let config = match load_config(args.tracing) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Setup logging
    stackpilot_common::logging::setup_logging(&config);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        environment = if cfg!(debug_assertions) {
            "development"
        } else {
            "production"
        },
        "starting stackpilot-probe"
    );

    match run(args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %format!("{e:#}"), "Command failed");
            ExitCode::FAILURE
        }
    }
}

/// Load configuration from the environment, letting `--tracing` override the format
fn load_config(tracing: Option<TracingFormat>) -> Result<Config, figment::Error> {
    let mut config = Config::load()?;
    if let Some(format) = tracing {
        config.log_format = match format {
            TracingFormat::Pretty => LogFormat::Pretty,
            TracingFormat::Json => LogFormat::Json,
        };
    }
    Ok(config)
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Parse { kind, values } => {
            for raw in values {
                println!("{raw:?} -> {}", kind.describe(&raw));
            }
        }
        Command::Variants { kind } => {
            for variant in kind.variants() {
                println!("{variant}");
            }
        }
        Command::Decode { path } => {
            let body = read_body(&path)?;
            let response = ApiResponse::from_json(&body)
                .with_context(|| format!("Failed to decode {}", path.display()))?;
            info!(records = response.len(), "Decoded response");
            for line in report::summarize(&response) {
                println!("{line}");
            }
        }
    }
    Ok(())
}

fn read_body(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut body = String::new();
        std::io::stdin()
            .read_to_string(&mut body)
            .context("Failed to read response from stdin")?;
        return Ok(body);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn bad_log_format_is_an_error_not_a_panic() {
        Jail::expect_with(|jail| {
            jail.set_env("STACKPILOT_LOG_FORMAT", "xml");
            let err = load_config(None).unwrap_err();
            assert!(err.to_string().contains("xml"));
            Ok(())
        });
    }

    #[test]
    fn tracing_flag_overrides_environment() {
        Jail::expect_with(|jail| {
            jail.set_env("STACKPILOT_LOG_FORMAT", "pretty");
            let config = load_config(Some(TracingFormat::Json))?;
            assert_eq!(config.log_format, LogFormat::Json);
            let config = load_config(None)?;
            assert_eq!(config.log_format, LogFormat::Pretty);
            Ok(())
        });
    }
}
