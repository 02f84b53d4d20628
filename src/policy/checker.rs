use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

use super::config::PolicyConfig;
use crate::license::{PackageRecord, UNKNOWN_LICENSE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Ok,
    Warn,
    Error,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Ok => write!(f, "ok"),
            Status::Warn => write!(f, "warn"),
            Status::Error => write!(f, "error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluatedRow {
    pub name: String,
    pub version: String,
    pub license: String,
    pub status: Status,
}

impl EvaluatedRow {
    pub fn key(&self) -> String {
        crate::license::identity_key(&self.name, &self.version)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Report {
    pub total: usize,
    pub errors: usize,
    pub warnings: usize,
    pub fail: bool,
    pub rows: Vec<EvaluatedRow>,
}

impl Report {
    /// Row counts per license, most common first, ties by name.
    pub fn license_summary(&self) -> IndexMap<String, usize> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for row in &self.rows {
            *counts.entry(row.license.as_str()).or_insert(0) += 1;
        }

        let mut sorted: Vec<(&str, usize)> = counts.into_iter().collect();
        sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        sorted
            .into_iter()
            .map(|(license, count)| (license.to_string(), count))
            .collect()
    }
}

impl PolicyConfig {
    /// Classify a license string. First match wins:
    /// unknown (when not allowed), disallow, warn, otherwise ok.
    pub fn classify(&self, license: &str) -> Status {
        let rules = Rules::new(self);
        rules.classify(license)
    }

    /// Evaluate scanner output against this policy.
    pub fn evaluate(&self, records: &[PackageRecord]) -> Report {
        let rules = Rules::new(self);
        let ignore: HashSet<&str> = self.ignore.iter().map(String::as_str).collect();
        let mut report = Report::default();

        for record in records {
            if ignore.contains(record.key().as_str()) {
                continue;
            }

            let status = rules.classify(&record.license);
            match status {
                Status::Error => report.errors += 1,
                Status::Warn => report.warnings += 1,
                Status::Ok => {}
            }

            report.rows.push(EvaluatedRow {
                name: record.name.clone(),
                version: record.version.clone(),
                license: record.license.clone(),
                status,
            });
        }

        report.total = report.rows.len();
        report.fail = report.errors > 0;
        report
    }
}

/// Uppercased lookup sets built once per evaluation.
struct Rules {
    disallow: HashSet<String>,
    warn: HashSet<String>,
    allow_unlicensed: bool,
}

impl Rules {
    fn new(policy: &PolicyConfig) -> Self {
        Self {
            disallow: policy.disallow.iter().map(|l| l.to_uppercase()).collect(),
            warn: policy.warn.iter().map(|l| l.to_uppercase()).collect(),
            allow_unlicensed: policy.allow_unlicensed,
        }
    }

    fn classify(&self, license: &str) -> Status {
        let license = license.to_uppercase();

        if license == UNKNOWN_LICENSE && !self.allow_unlicensed {
            return Status::Error;
        }
        if self.disallow.contains(&license) {
            return Status::Error;
        }
        if self.warn.contains(&license) {
            return Status::Warn;
        }
        Status::Ok
    }
}

/// Convenience wrapper for callers holding records and a policy separately.
pub fn evaluate(records: &[PackageRecord], policy: &PolicyConfig) -> Report {
    policy.evaluate(records)
}
