use anyhow::Result;
use std::path::PathBuf;
use std::process::ExitCode;

use super::resolve_project_dir;
use npm_license_auditor::config::{add_ignores_to_config, config_path, load_config};
use npm_license_auditor::policy::Status;
use npm_license_auditor::scanner::{find_dependency_tree, scan};

pub fn handle_fix(
    path: Option<PathBuf>,
    config: Option<PathBuf>,
    dry_run: bool,
    quiet: bool,
) -> Result<ExitCode> {
    let project_dir = resolve_project_dir(path.clone())?;
    let loaded = load_config(&project_dir, config.as_deref())?;
    let tree = find_dependency_tree(path.or(Some(project_dir.clone())))?;

    let report = loaded.policy.evaluate(&scan(&tree));

    let failing: Vec<String> = report
        .rows
        .iter()
        .filter(|row| row.status == Status::Error)
        .map(|row| row.key())
        .collect();

    if failing.is_empty() {
        if !quiet {
            println!("No violations found, nothing to fix");
        }
        return Ok(ExitCode::SUCCESS);
    }

    let target = config_path(&project_dir, config.as_deref());

    if dry_run {
        if !quiet {
            println!("Would add {} entries to policy.ignore in {}:", failing.len(), target.display());
            for key in &failing {
                println!("  - {}", key);
            }
        }
        return Ok(ExitCode::SUCCESS);
    }

    let added = add_ignores_to_config(&target, &failing)?;

    if !quiet {
        println!("Added {} entries to policy.ignore in {}:", added.len(), target.display());
        for key in &added {
            println!("  ✅ {}", key);
        }
    }

    Ok(ExitCode::SUCCESS)
}
