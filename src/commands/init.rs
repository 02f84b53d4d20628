use anyhow::Result;
use std::path::PathBuf;
use std::process::ExitCode;

use super::resolve_project_dir;
use crate::cli::InitPreset;
use npm_license_auditor::config::CONFIG_FILE;
use npm_license_auditor::init;

pub fn handle_init(policy: InitPreset, path: Option<PathBuf>, quiet: bool) -> Result<ExitCode> {
    let init_preset = match policy {
        InitPreset::Green => init::InitPreset::Green,
        InitPreset::Yellow => init::InitPreset::Yellow,
        InitPreset::Red => init::InitPreset::Red,
    };

    let config_path = resolve_project_dir(path)?.join(CONFIG_FILE);
    init::generate_config_at_path(&config_path, init_preset)?;

    if !quiet {
        println!("✅ Wrote {:?} policy to {}", init_preset, config_path.display());
    }

    Ok(ExitCode::SUCCESS)
}
