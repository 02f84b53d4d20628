use std::path::PathBuf;
use thiserror::Error;

/// Why a single package manifest could not be turned into a record.
///
/// These never abort a scan; the scanner logs them and moves on.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{path} has no usable `{field}` field")]
    MissingField { path: PathBuf, field: &'static str },
}

/// Fatal conditions detected before a scan starts.
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("dependency tree not found at {0}\nInstall dependencies first (npm install, yarn, pnpm install).")]
    MissingTree(PathBuf),
}
