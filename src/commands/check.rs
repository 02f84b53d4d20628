use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::warn;

use super::{resolve_project_dir, EXIT_FAIL};
use crate::cli::OutputFormat;
use npm_license_auditor::config::{load_config, PolicyOverrides};
use npm_license_auditor::output::{format_json_output, format_table_output};
use npm_license_auditor::scanner::{find_dependency_tree, scan};

pub struct CheckArgs {
    pub path: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub overrides: PolicyOverrides,
    pub limit: usize,
    pub exit_zero: bool,
    pub quiet: bool,
    pub verbose: bool,
}

pub fn handle_check(args: CheckArgs) -> Result<ExitCode> {
    let project_dir = resolve_project_dir(args.path.clone())?;

    let mut config = load_config(&project_dir, args.config.as_deref())?;
    config.apply_overrides(args.overrides);

    let tree = find_dependency_tree(args.path.or(Some(project_dir)))?;

    let records = scan(&tree);
    let report = config.policy.evaluate(&records);

    if report.fail {
        warn!(
            errors = report.errors,
            warnings = report.warnings,
            "license policy violated"
        );
    }

    let format = args.format.unwrap_or_else(|| match config.format.as_deref() {
        Some("json") => OutputFormat::Json,
        Some("table") | None => OutputFormat::Table,
        Some(other) => {
            warn!("unknown format {:?} in config, using table", other);
            OutputFormat::Table
        }
    });

    let output_content = match format {
        OutputFormat::Json => format_json_output(&config.policy, &report)?,
        OutputFormat::Table => format_table_output(&report, args.verbose, args.limit),
    };

    match args.output {
        Some(path) => fs::write(&path, output_content)
            .with_context(|| format!("Failed to write report: {}", path.display()))?,
        None => {
            if !args.quiet {
                println!("{}", output_content);
            }
        }
    }

    if report.fail && !args.exit_zero {
        return Ok(ExitCode::from(EXIT_FAIL));
    }
    Ok(ExitCode::SUCCESS)
}
