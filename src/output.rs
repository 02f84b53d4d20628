use anyhow::Result;
use indexmap::IndexMap;
use serde::Serialize;

use crate::policy::{EvaluatedRow, PolicyConfig, Report, Status};

const NAME_WIDTH: usize = 28;
const VERSION_WIDTH: usize = 12;
const LICENSE_WIDTH: usize = 20;
const STATUS_WIDTH: usize = 6;

pub const DEFAULT_ROW_LIMIT: usize = 50;

/// Machine-readable rendering: the effective policy plus the report.
#[derive(Debug, Serialize)]
pub struct JsonOutput<'a> {
    pub config: &'a PolicyConfig,
    #[serde(flatten)]
    pub report: &'a Report,
    pub summary: IndexMap<String, usize>,
}

pub fn format_json_output(policy: &PolicyConfig, report: &Report) -> Result<String> {
    let output = JsonOutput {
        config: policy,
        report,
        summary: report.license_summary(),
    };
    Ok(serde_json::to_string_pretty(&output)?)
}

pub fn format_table_output(report: &Report, verbose: bool, limit: usize) -> String {
    let mut output = String::new();

    let ok = report.total - report.errors - report.warnings;
    output.push_str(&format!("📦 License Summary ({} packages)\n", report.total));
    output.push_str(&format!(
        "✅ {} ok  ⚠️ {} warnings  🚫 {} errors\n\n",
        ok, report.warnings, report.errors
    ));

    if verbose {
        output.push_str("📦 All Packages:\n");
        let rows: Vec<&EvaluatedRow> = report.rows.iter().collect();
        output.push_str(&format_row_table(&rows, limit));
    } else {
        let issues: Vec<&EvaluatedRow> = report
            .rows
            .iter()
            .filter(|row| row.status != Status::Ok)
            .collect();

        if issues.is_empty() {
            output.push_str("✅ No issues found!\n");
        } else {
            output.push_str("⚠️  Issues Found:\n");
            output.push_str(&format_row_table(&issues, limit));
        }

        if report.rows.len() > issues.len() {
            output.push_str(&format!(
                "\n💡 Run with --verbose to see all {} packages\n",
                report.rows.len()
            ));
        }
    }

    if report.fail {
        output.push_str("\n❌ License check failed\n");
    } else {
        output.push_str("\n✅ License check passed\n");
    }

    output
}

fn format_row_table(rows: &[&EvaluatedRow], limit: usize) -> String {
    if rows.is_empty() {
        return "No packages found.\n".to_string();
    }

    let mut output = String::new();

    output.push_str(&border('┌', '┬', '┐'));
    output.push_str(&format!(
        "│ {:<nw$} │ {:<vw$} │ {:<lw$} │ {:<sw$} │\n",
        "Package",
        "Version",
        "License",
        "Status",
        nw = NAME_WIDTH,
        vw = VERSION_WIDTH,
        lw = LICENSE_WIDTH,
        sw = STATUS_WIDTH,
    ));
    output.push_str(&border('├', '┼', '┤'));

    for row in rows.iter().take(limit) {
        output.push_str(&format!(
            "│ {:<nw$} │ {:<vw$} │ {:<lw$} │ {:<sw$} │\n",
            truncate(&row.name, NAME_WIDTH),
            truncate(&row.version, VERSION_WIDTH),
            truncate(&row.license, LICENSE_WIDTH),
            row.status.to_string(),
            nw = NAME_WIDTH,
            vw = VERSION_WIDTH,
            lw = LICENSE_WIDTH,
            sw = STATUS_WIDTH,
        ));
    }

    output.push_str(&border('└', '┴', '┘'));

    if rows.len() > limit {
        output.push_str(&format!("… and {} more\n", rows.len() - limit));
    }

    output
}

fn border(left: char, mid: char, right: char) -> String {
    let segment = |width: usize| "─".repeat(width + 2);
    format!(
        "{left}{}{mid}{}{mid}{}{mid}{}{right}\n",
        segment(NAME_WIDTH),
        segment(VERSION_WIDTH),
        segment(LICENSE_WIDTH),
        segment(STATUS_WIDTH),
    )
}

/// Cut to `max_len` characters, marking the cut with `…`.
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len - 1).collect();
        format!("{}…", kept)
    }
}
