use serde::{Deserialize, Serialize};

/// License policy applied to a scanned tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PolicyConfig {
    /// Licenses that fail the audit (compared case-insensitively)
    #[serde(default)]
    pub disallow: Vec<String>,
    /// Licenses that are reported but do not fail
    #[serde(default)]
    pub warn: Vec<String>,
    /// Whether packages without a license declaration pass
    #[serde(default, alias = "allowUnlicensed")]
    pub allow_unlicensed: bool,
    /// Exact `name@version` keys excluded from evaluation
    #[serde(default)]
    pub ignore: Vec<String>,
}
