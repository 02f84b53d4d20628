use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;

pub mod extractor;

pub use extractor::read_manifest;

/// Sentinel license for packages that declare nothing usable.
pub const UNKNOWN_LICENSE: &str = "UNKNOWN";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageRecord {
    pub name: String,
    pub version: String,
    pub license: String,
    /// Directory the manifest was read from. Diagnostics only.
    #[serde(skip)]
    pub source_path: PathBuf,
}

impl PackageRecord {
    /// `name@version`, the identity used for dedup and ignore lists.
    pub fn key(&self) -> String {
        identity_key(&self.name, &self.version)
    }
}

pub fn identity_key(name: &str, version: &str) -> String {
    format!("{}@{}", name, version)
}

/// The shapes a manifest `license` / `licenses` value shows up in the wild.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LicenseField {
    /// `"license": "MIT"`
    Text(String),
    /// `"license": { "type": "MIT", "url": "..." }`
    Structured(Option<String>),
    /// `"licenses": [ "MIT", { "type": "Apache-2.0" } ]`
    List(Vec<LicenseField>),
    #[default]
    Absent,
}

impl From<&Value> for LicenseField {
    fn from(value: &Value) -> Self {
        match value {
            Value::String(s) => LicenseField::Text(s.clone()),
            Value::Object(map) => LicenseField::Structured(
                map.get("type").and_then(Value::as_str).map(str::to_string),
            ),
            Value::Array(items) => LicenseField::List(items.iter().map(LicenseField::from).collect()),
            _ => LicenseField::Absent,
        }
    }
}

impl LicenseField {
    /// The single identifier this value carries directly, if any.
    fn single(&self) -> Option<&str> {
        match self {
            LicenseField::Text(s) => Some(s.as_str()),
            LicenseField::Structured(Some(kind)) => Some(kind.as_str()),
            _ => None,
        }
    }
}

/// Resolve the declared license of a package.
///
/// Precedence: `license` string, then `license.type`, then every entry of
/// `licenses` joined with `" OR "`, then [`UNKNOWN_LICENSE`].
pub fn normalize_license(license: &LicenseField, licenses: &LicenseField) -> String {
    if let Some(value) = license.single() {
        return value.trim().to_string();
    }

    if let LicenseField::List(entries) = licenses {
        let joined: Vec<&str> = entries
            .iter()
            .filter_map(LicenseField::single)
            .map(str::trim)
            .collect();
        if !joined.is_empty() {
            return joined.join(" OR ");
        }
    }

    UNKNOWN_LICENSE.to_string()
}
