use super::helpers::{json, TestProject};

#[test]
fn test_scoped_package_with_licenses_array() {
    let project = TestProject::new();
    project.add_package(
        "@scope/d",
        r#"{"name":"@scope/d","version":"3.0.0","licenses":[{"type":"MIT"},"Apache-2.0"]}"#,
    );

    let output = project.run_auditor(&["check", "--format", "json"]);
    assert_eq!(output.status.code(), Some(0));

    let report = json(&output);
    assert_eq!(report["rows"][0]["name"], "@scope/d");
    assert_eq!(report["rows"][0]["license"], "MIT OR Apache-2.0");
}

#[test]
fn test_nested_duplicates_are_reported_once() {
    let project = TestProject::new();
    project.add_simple("shared", "shared", "1.0.0", "MIT");
    project.add_simple("app", "app", "1.0.0", "MIT");
    project.add_simple("app/node_modules/shared", "shared", "1.0.0", "MIT");
    project.add_simple("app/node_modules/other", "other", "2.0.0", "ISC");
    project.add_simple("old/node_modules/shared", "shared", "0.9.0", "MIT");
    project.add_simple("old", "old", "1.0.0", "MIT");

    let report = json(&project.run_auditor(&["check", "--format", "json"]));
    let keys: Vec<String> = report["rows"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| format!("{}@{}", row["name"].as_str().unwrap(), row["version"].as_str().unwrap()))
        .collect();

    assert_eq!(
        keys,
        vec!["app@1.0.0", "old@1.0.0", "other@2.0.0", "shared@0.9.0", "shared@1.0.0"]
    );
}

#[test]
fn test_pnpm_style_indirection() {
    let project = TestProject::new();
    project.add_simple(".pnpm/node_modules/hidden", "hidden", "1.0.0", "BSD-3-Clause");
    project.add_simple(".bin/not-a-package", "shim", "0.0.0", "GPL-3.0");

    let report = json(&project.run_auditor(&["check", "--format", "json", "--disallow", "GPL-3.0"]));
    assert_eq!(report["total"], 1);
    assert_eq!(report["rows"][0]["name"], "hidden");
    assert_eq!(report["fail"], false);
}

#[test]
fn test_malformed_manifest_is_skipped() {
    let project = TestProject::new();
    project.add_package("e", "{ definitely not json");
    project.add_simple("f", "f", "1.0.0", "MIT");

    let output = project.run_auditor(&["check", "--format", "json"]);
    assert_eq!(output.status.code(), Some(0));

    let report = json(&output);
    assert_eq!(report["total"], 1);
    assert_eq!(report["rows"][0]["name"], "f");
}

#[test]
fn test_node_modules_path_is_accepted() {
    let project = TestProject::new();
    project.add_simple("a", "a", "1.0.0", "MIT");

    let nm = project.node_modules();
    let output = project.run_auditor(&["check", "--format", "json", nm.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(json(&output)["total"], 1);
}
