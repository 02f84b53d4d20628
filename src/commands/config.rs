use anyhow::Result;
use std::path::PathBuf;
use std::process::ExitCode;

use super::{resolve_project_dir, EXIT_PRECONDITION};
use npm_license_auditor::config::load_config;

pub fn handle_config(
    path: Option<PathBuf>,
    config: Option<PathBuf>,
    show: bool,
    validate: bool,
    quiet: bool,
) -> Result<ExitCode> {
    if !show && !validate {
        if !quiet {
            eprintln!("Use --show or --validate");
        }
        return Ok(ExitCode::from(EXIT_PRECONDITION));
    }

    let project_dir = resolve_project_dir(path)?;

    match load_config(&project_dir, config.as_deref()) {
        Ok(loaded) => {
            if show && !quiet {
                println!("{}", serde_json::to_string_pretty(&loaded)?);
            }
            if validate && !quiet {
                println!("✅ Configuration is valid");
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            if !quiet {
                eprintln!("❌ Configuration validation failed: {:#}", e);
            }
            Ok(ExitCode::from(EXIT_PRECONDITION))
        }
    }
}
