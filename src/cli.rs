// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::manifest::default_manifest_path;

/// Command-line arguments for `scalegroup`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "scalegroup",
    version,
    about = "Validate EC2 auto scaling group declarations and plan their convergence.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the manifest (TOML).
    ///
    /// Default: `Scalegroup.toml` in the current working directory.
    #[arg(long, value_name = "PATH", global = true)]
    pub manifest: Option<PathBuf>,

    /// Require `min_size <= desired_capacity <= max_size` instead of the
    /// lenient check, regardless of `[settings]` in the manifest.
    #[arg(long, global = true)]
    pub strict_capacity: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `SCALEGROUP_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL", global = true)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Validate every group and print its properties and dependency edges.
    Check,

    /// Compare groups against observed state and print what would change.
    Plan {
        /// Observed-state file (TOML). Without it every group is treated as
        /// not existing yet.
        #[arg(long, value_name = "PATH")]
        observed: Option<String>,
    },
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl CliArgs {
    /// The manifest to load: `--manifest` if given, else the default location.
    pub fn manifest_path(&self) -> PathBuf {
        self.manifest.clone().unwrap_or_else(default_manifest_path)
    }
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
