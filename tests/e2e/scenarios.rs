use super::helpers::{json, stderr, stdout, TestProject};

#[test]
fn test_disallowed_license_fails_check() {
    let project = TestProject::new();
    project.add_simple("a", "a", "1.0.0", "MIT");
    project.add_package("b", r#"{"name":"b","version":"2.0.0","license":{"type":"GPL-3.0"}}"#);
    project.write_config("[policy]\ndisallow = [\"GPL-3.0\"]\n");

    let output = project.run_auditor(&["check", "--format", "json"]);
    assert_eq!(output.status.code(), Some(1));

    let report = json(&output);
    assert_eq!(report["total"], 2);
    assert_eq!(report["errors"], 1);
    assert_eq!(report["warnings"], 0);
    assert_eq!(report["fail"], true);
    assert_eq!(report["rows"][1]["name"], "b");
    assert_eq!(report["rows"][1]["status"], "error");
    assert_eq!(report["config"]["disallow"][0], "GPL-3.0");
}

#[test]
fn test_unlicensed_package_handling() {
    let project = TestProject::new();
    project.add_package("c", r#"{"name":"c","version":"1.0.0"}"#);

    let strict = project.run_auditor(&["check", "--format", "json"]);
    assert_eq!(strict.status.code(), Some(1));
    assert_eq!(json(&strict)["rows"][0]["status"], "error");

    project.write_config("[policy]\nallow_unlicensed = true\n");
    let lenient = project.run_auditor(&["check", "--format", "json"]);
    assert_eq!(lenient.status.code(), Some(0));
    assert_eq!(json(&lenient)["rows"][0]["status"], "ok");

    let forced = project.run_auditor(&["check", "--format", "json", "--no-allow-unlicensed"]);
    assert_eq!(forced.status.code(), Some(1));
}

#[test]
fn test_ignored_package_is_excluded() {
    let project = TestProject::new();
    project.add_package("c", r#"{"name":"c","version":"1.0.0"}"#);
    project.write_config("[policy]\nignore = [\"c@1.0.0\"]\n");

    let output = project.run_auditor(&["check", "--format", "json"]);
    assert_eq!(output.status.code(), Some(0));

    let report = json(&output);
    assert_eq!(report["total"], 0);
    assert_eq!(report["rows"].as_array().unwrap().len(), 0);
}

#[test]
fn test_cli_flags_override_config_lists() {
    let project = TestProject::new();
    project.add_simple("a", "a", "1.0.0", "MIT");
    project.add_simple("b", "b", "1.0.0", "MPL-2.0");
    project.write_config("[policy]\ndisallow = [\"MIT\"]\n");

    let output = project.run_auditor(&[
        "check", "--format", "json", "--disallow", "GPL-3.0,AGPL-3.0", "--warn", "mpl-2.0",
    ]);
    assert_eq!(output.status.code(), Some(0));

    let report = json(&output);
    assert_eq!(report["errors"], 0);
    assert_eq!(report["warnings"], 1);
    assert_eq!(report["rows"][1]["status"], "warn");
}

#[test]
fn test_missing_tree_is_precondition_failure() {
    let project = TestProject::new();

    let output = project.run_auditor(&["check"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("dependency tree not found"));
}

#[test]
fn test_exit_zero_and_table_output() {
    let project = TestProject::new();
    project.add_simple("bad", "bad", "1.0.0", "GPL-3.0");
    project.write_config("[policy]\ndisallow = [\"gpl-3.0\"]\n");

    let output = project.run_auditor(&["check", "--exit-zero"]);
    assert_eq!(output.status.code(), Some(0));

    let table = stdout(&output);
    assert!(table.contains("License Summary (1 packages)"));
    assert!(table.contains("bad"));
    assert!(table.contains("error"));
}

#[test]
fn test_report_written_to_file_is_deterministic() {
    let project = TestProject::new();
    for name in ["zeta", "alpha", "mid"] {
        project.add_simple(name, name, "1.0.0", "MIT");
    }

    let first = project.root().join("first.json");
    let second = project.root().join("second.json");
    project.run_auditor(&["check", "--format", "json", "--output", first.to_str().unwrap()]);
    project.run_auditor(&["check", "--format", "json", "--output", second.to_str().unwrap()]);

    let a = std::fs::read(&first).unwrap();
    let b = std::fs::read(&second).unwrap();
    assert!(!a.is_empty());
    assert_eq!(a, b);
}

#[test]
fn test_init_then_fix() {
    let project = TestProject::new();
    project.add_simple("copyleft", "copyleft", "1.0.0", "GPL-3.0");
    project.add_simple("fine", "fine", "1.0.0", "MIT");

    let init = project.run_auditor(&["init", "green"]);
    assert!(init.status.success());
    assert!(project.read_config().contains("GPL-3.0"));

    let before = project.run_auditor(&["check"]);
    assert_eq!(before.status.code(), Some(1));

    let dry_run = project.run_auditor(&["fix", "--dry-run"]);
    assert!(dry_run.status.success());
    assert!(stdout(&dry_run).contains("Would add 1 entries"));
    assert!(!project.read_config().contains("copyleft@1.0.0"));

    let fix = project.run_auditor(&["fix"]);
    assert!(fix.status.success());
    assert!(project.read_config().contains("copyleft@1.0.0"));

    let after = project.run_auditor(&["check"]);
    assert_eq!(after.status.code(), Some(0));
}

#[test]
fn test_config_subcommand() {
    let project = TestProject::new();
    project.write_config("format = \"json\"\n[policy]\nwarn = [\"ISC\"]\n");

    let show = project.run_auditor(&["config", "--show"]);
    assert!(show.status.success());
    assert!(stdout(&show).contains("\"ISC\""));

    project.write_config("[policy]\nwarn = \"ISC\"\n");
    let validate = project.run_auditor(&["config", "--validate"]);
    assert_eq!(validate.status.code(), Some(2));
}
