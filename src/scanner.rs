use anyhow::Result;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::AuditError;
use crate::license::extractor::MANIFEST_FILE;
use crate::license::{read_manifest, PackageRecord};

pub const DEPENDENCY_DIR: &str = "node_modules";

/// Executable shims live here; never a package.
const BIN_DIR: &str = ".bin";
const SCOPE_PREFIX: char = '@';

/// Resolve the dependency tree for a project path.
///
/// Accepts either a project directory (its `node_modules` is used) or a
/// `node_modules` directory itself. Fails if no tree exists.
pub fn find_dependency_tree(path: Option<PathBuf>) -> Result<PathBuf> {
    let path = match path {
        Some(path) => path,
        None => std::env::current_dir()?,
    };

    let candidate = if path.file_name().is_some_and(|name| name == DEPENDENCY_DIR) {
        path
    } else {
        path.join(DEPENDENCY_DIR)
    };

    if !candidate.is_dir() {
        return Err(AuditError::MissingTree(candidate).into());
    }
    Ok(candidate)
}

/// Per-scan traversal state.
#[derive(Default)]
struct Walk {
    seen: HashSet<String>,
    listed: HashSet<PathBuf>,
    records: Vec<PackageRecord>,
}

/// Discover every unique package under `root`, sorted by `(name, version)`.
///
/// Unreadable directories and broken manifests are skipped; this never fails.
pub fn scan(root: &Path) -> Vec<PackageRecord> {
    let mut walk = Walk::default();
    walk.visit_dir(root);

    let mut records = walk.records;
    records.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.version.cmp(&b.version)));

    info!(packages = records.len(), root = %root.display(), "scan complete");
    records
}

impl Walk {
    fn visit_dir(&mut self, dir: &Path) {
        // Symlinked layouts can loop back on themselves.
        if let Ok(canonical) = fs::canonicalize(dir) {
            if !self.listed.insert(canonical) {
                return;
            }
        }

        for entry in list_dir(dir) {
            let file_name = entry.file_name();
            let name = file_name.to_string_lossy();
            let path = entry.path();

            if name == BIN_DIR {
                continue;
            }

            if name.starts_with(SCOPE_PREFIX) {
                self.visit_dir(&path);
                continue;
            }

            if path.join(MANIFEST_FILE).is_file() {
                self.visit_package(&path);
            } else if path.is_dir() {
                let nested = path.join(DEPENDENCY_DIR);
                if nested.is_dir() {
                    self.visit_dir(&nested);
                }
            }
        }
    }

    fn visit_package(&mut self, package_dir: &Path) {
        let record = match read_manifest(package_dir) {
            Ok(record) => record,
            Err(e) => {
                debug!("skipping package: {}", e);
                return;
            }
        };

        if !self.seen.insert(record.key()) {
            debug!(package = %record.key(), path = %package_dir.display(), "duplicate, not descending");
            return;
        }

        debug!(package = %record.key(), license = %record.license, "found package");
        self.records.push(record);

        let nested = package_dir.join(DEPENDENCY_DIR);
        if nested.is_dir() {
            self.visit_dir(&nested);
        }
    }
}

/// Entries of `dir`, or nothing if it cannot be read.
fn list_dir(dir: &Path) -> Vec<fs::DirEntry> {
    match fs::read_dir(dir) {
        Ok(entries) => entries.filter_map(|entry| entry.ok()).collect(),
        Err(e) => {
            debug!(path = %dir.display(), "cannot read directory: {}", e);
            Vec::new()
        }
    }
}
