use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::report::Kind;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Log formatter to use (overrides STACKPILOT_LOG_FORMAT)
    #[arg(long, value_enum, global = true)]
    pub tracing: Option<TracingFormat>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Map raw API values onto a value kind
    Parse {
        /// Kind of value to parse
        #[arg(value_enum)]
        kind: Kind,
        /// Values as they appear in an API response
        #[arg(required = true)]
        values: Vec<String>,
    },
    /// List every variant of a value kind
    Variants {
        #[arg(value_enum)]
        kind: Kind,
    },
    /// Decode a saved listHosts, listStoragePools or listSystemVms response
    Decode {
        /// Path to the JSON body, or "-" for stdin
        path: PathBuf,
    },
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TracingFormat {
    /// Use pretty formatter (default in debug mode)
    Pretty,
    /// Use JSON formatter (default in release mode)
    Json,
}
