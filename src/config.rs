use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use toml_edit::{Array, DocumentMut, Item, Table};

use crate::policy::PolicyConfig;

pub const CONFIG_FILE: &str = "license-audit.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Output format (table, json)
    pub format: Option<String>,

    /// License policy
    #[serde(default)]
    pub policy: PolicyConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: Some("table".to_string()),
            policy: PolicyConfig::default(),
        }
    }
}

/// Policy values given on the command line.
#[derive(Debug, Clone, Default)]
pub struct PolicyOverrides {
    pub disallow: Option<Vec<String>>,
    pub warn: Option<Vec<String>>,
    pub forbid_unlicensed: bool,
}

impl Config {
    /// CLI lists replace the file's lists; `forbid_unlicensed` can only tighten.
    pub fn apply_overrides(&mut self, overrides: PolicyOverrides) {
        if let Some(disallow) = overrides.disallow {
            self.policy.disallow = disallow;
        }
        if let Some(warn) = overrides.warn {
            self.policy.warn = warn;
        }
        if overrides.forbid_unlicensed {
            self.policy.allow_unlicensed = false;
        }
    }
}

/// Where the config for a project lives, honouring an explicit override.
pub fn config_path(project_dir: &Path, config_override: Option<&Path>) -> PathBuf {
    match config_override {
        Some(path) => path.to_path_buf(),
        None => project_dir.join(CONFIG_FILE),
    }
}

/// Load configuration from `license-audit.toml`.
///
/// A missing default file yields [`Config::default`]; a missing override is an error.
pub fn load_config(project_dir: &Path, config_override: Option<&Path>) -> Result<Config> {
    let path = config_path(project_dir, config_override);

    if config_override.is_none() && !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.display()))?;

    Ok(config)
}

/// Append identity keys to `policy.ignore`, keeping the rest of the file intact.
///
/// Returns the keys that were actually new.
pub fn add_ignores_to_config(path: &Path, keys: &[String]) -> Result<Vec<String>> {
    let content = if path.exists() {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?
    } else {
        String::new()
    };

    let mut doc = content
        .parse::<DocumentMut>()
        .with_context(|| format!("Failed to parse config: {}", path.display()))?;

    if !doc.contains_key("policy") {
        doc["policy"] = Item::Table(Table::new());
    }
    let policy = doc["policy"]
        .as_table_mut()
        .ok_or_else(|| anyhow::anyhow!("`policy` in {} is not a table", path.display()))?;

    if !policy.contains_key("ignore") {
        policy["ignore"] = toml_edit::value(Array::new());
    }
    let ignore = policy["ignore"]
        .as_array_mut()
        .ok_or_else(|| anyhow::anyhow!("`policy.ignore` in {} is not an array", path.display()))?;

    let mut added = Vec::new();
    for key in keys {
        let present = ignore.iter().any(|v| v.as_str() == Some(key.as_str()));
        if !present && !added.contains(key) {
            ignore.push(key.as_str());
            added.push(key.clone());
        }
    }

    fs::write(path, doc.to_string())
        .with_context(|| format!("Failed to write config: {}", path.display()))?;

    Ok(added)
}
