use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use npm_license_auditor::output::DEFAULT_ROW_LIMIT;

#[derive(Parser)]
#[command(name = "npm-license-auditor")]
#[command(about = "Audit licenses of installed node_modules packages against a policy")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Show every package and enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run license audit on installed packages
    Check {
        /// Project directory or node_modules directory (default: current directory)
        path: Option<PathBuf>,

        /// Config file (default: <project>/license-audit.toml)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Licenses that fail the check (replaces the config list)
        #[arg(long, value_delimiter = ',')]
        disallow: Option<Vec<String>>,

        /// Licenses that only warn (replaces the config list)
        #[arg(long, value_delimiter = ',')]
        warn: Option<Vec<String>>,

        /// Treat packages without a license as errors, whatever the config says
        #[arg(long)]
        no_allow_unlicensed: bool,

        /// Maximum rows shown in the table
        #[arg(long, default_value_t = DEFAULT_ROW_LIMIT)]
        limit: usize,

        /// Exit with code 0 even on violations
        #[arg(long)]
        exit_zero: bool,
    },
    /// Write a preset policy to license-audit.toml
    Init {
        /// Policy preset
        policy: InitPreset,

        /// Project directory (default: current directory)
        path: Option<PathBuf>,
    },
    /// Add every failing package to the policy ignore list
    Fix {
        /// Project directory or node_modules directory (default: current directory)
        path: Option<PathBuf>,

        /// Config file (default: <project>/license-audit.toml)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Show changes without applying them
        #[arg(long)]
        dry_run: bool,
    },
    /// Show or validate configuration
    Config {
        /// Project directory (default: current directory)
        path: Option<PathBuf>,

        /// Config file (default: <project>/license-audit.toml)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Validate configuration file
        #[arg(long)]
        validate: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum InitPreset {
    Green,
    Yellow,
    Red,
}
