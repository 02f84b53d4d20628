use anyhow::Result;
use std::path::PathBuf;

use npm_license_auditor::scanner::DEPENDENCY_DIR;

pub mod check;
pub mod init;
pub mod fix;
pub mod config;

pub use check::{handle_check, CheckArgs};
pub use init::handle_init;
pub use fix::handle_fix;
pub use config::handle_config;

/// Policy failure
pub const EXIT_FAIL: u8 = 1;
/// Missing dependency tree, bad config, or any other error before a report exists
pub const EXIT_PRECONDITION: u8 = 2;

/// Project directory for a path that may point at the project or at its node_modules.
pub fn resolve_project_dir(path: Option<PathBuf>) -> Result<PathBuf> {
    let path = match path {
        Some(path) => path,
        None => std::env::current_dir()?,
    };

    if path.file_name().is_some_and(|name| name == DEPENDENCY_DIR) {
        if let Some(parent) = path.parent() {
            return Ok(parent.to_path_buf());
        }
    }
    Ok(path)
}
