use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::{CheckArgs, EXIT_PRECONDITION};
use npm_license_auditor::config::PolicyOverrides;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let result = match cli.command {
        Commands::Check {
            path,
            config,
            format,
            output,
            disallow,
            warn,
            no_allow_unlicensed,
            limit,
            exit_zero,
        } => commands::handle_check(CheckArgs {
            path,
            config,
            format,
            output,
            overrides: PolicyOverrides {
                disallow,
                warn,
                forbid_unlicensed: no_allow_unlicensed,
            },
            limit,
            exit_zero,
            quiet: cli.quiet,
            verbose: cli.verbose,
        }),
        Commands::Init { policy, path } => commands::handle_init(policy, path, cli.quiet),
        Commands::Fix { path, config, dry_run } => {
            commands::handle_fix(path, config, dry_run, cli.quiet)
        }
        Commands::Config { path, config, show, validate } => {
            commands::handle_config(path, config, show, validate, cli.quiet)
        }
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(EXIT_PRECONDITION)
        }
    }
}

fn init_logging(verbose: bool, quiet: bool) {
    let default_level = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
