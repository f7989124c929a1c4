//! CLI for the cpurl classpath path/URL codec.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use cpurl_core::config;
use cpurl_core::HostOs;

use commands::{run_decode, run_encode, run_normalize};

/// Top-level CLI for the cpurl codec.
#[derive(Debug, Parser)]
#[command(name = "cpurl")]
#[command(about = "cpurl: classpath path to URL codec", long_about = None)]
pub struct Cli {
    /// Assume this OS family for drive-letter handling instead of the
    /// configured/detected one ("windows" or "posix").
    #[arg(long, global = true, value_name = "OS")]
    pub os: Option<HostOs>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Percent-encode a raw path for use inside a URL.
    Encode {
        /// Path to encode, or "-" to encode each line from stdin.
        path: String,
    },

    /// Decode a percent-encoded path (with optional ?query) back to text.
    Decode {
        /// Encoded path to decode, or "-" to decode each line from stdin.
        path: String,
    },

    /// Rewrite a path, URL, or archive path into a canonical encoded URL.
    Normalize {
        /// Path to normalize, or "-" to normalize each line from stdin.
        path: String,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let os = cli.os.unwrap_or_else(|| cfg.os.resolve());

        match cli.command {
            CliCommand::Encode { path } => run_encode(&path, os)?,
            CliCommand::Decode { path } => run_decode(&path)?,
            CliCommand::Normalize { path } => run_normalize(&path, os)?,
        }

        Ok(())
    }
}
