use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

use super::{normalize_license, LicenseField, PackageRecord};
use crate::error::ManifestError;

pub const MANIFEST_FILE: &str = "package.json";

/// The subset of `package.json` the auditor cares about.
#[derive(Debug, Deserialize)]
struct Manifest {
    name: Option<Value>,
    version: Option<Value>,
    #[serde(default)]
    license: Value,
    #[serde(default)]
    licenses: Value,
}

/// Read `<package_dir>/package.json` into a record.
pub fn read_manifest(package_dir: &Path) -> Result<PackageRecord, ManifestError> {
    let path = package_dir.join(MANIFEST_FILE);

    let content = fs::read_to_string(&path).map_err(|source| ManifestError::Io {
        path: path.clone(),
        source,
    })?;

    let manifest: Manifest = serde_json::from_str(&content).map_err(|source| ManifestError::Parse {
        path: path.clone(),
        source,
    })?;

    let name = match manifest.name.as_ref().and_then(Value::as_str) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => return Err(ManifestError::MissingField { path, field: "name" }),
    };
    let version = match manifest.version.as_ref().and_then(Value::as_str) {
        Some(version) => version.to_string(),
        None => return Err(ManifestError::MissingField { path, field: "version" }),
    };

    let license = normalize_license(
        &LicenseField::from(&manifest.license),
        &LicenseField::from(&manifest.licenses),
    );

    Ok(PackageRecord {
        name,
        version,
        license,
        source_path: package_dir.to_path_buf(),
    })
}
