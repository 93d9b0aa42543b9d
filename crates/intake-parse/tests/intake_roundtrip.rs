use intake_core::BugReport;
use intake_parse::{blank, diagnostics, render, validate};

fn sample_submission() -> String {
    r#"
**Describe the bug**
Removing a group leaves its packages orphaned in the lockfile.

**Affected version**
2.0.1

**Python version**
3.12.1

**Operating System**
Arch Linux

**To Reproduce**
1. add a group with two packages
2. remove the group
3. inspect the lockfile

**Expected behavior**
The lockfile no longer mentions the removed packages.

**Logs and outputs**
warning: dangling entry `foo`
warning: dangling entry `bar`
"#
    .to_string()
}

#[test]
fn validate_then_render_is_idempotent() {
    let report = validate(&sample_submission()).unwrap();
    let rendered = render(&report);
    let reparsed = validate(&rendered).unwrap();
    assert_eq!(reparsed, report);
}

#[test]
fn render_of_sparse_report_round_trips() {
    let raw = "**Describe the bug**\ncrash\n\n**Expected behavior**\nno crash\n";
    let report = validate(raw).unwrap();
    assert_eq!(report.affected_version, None);
    assert_eq!(report.reproduction_steps, Vec::<String>::new());

    let reparsed = validate(&render(&report)).unwrap();
    assert_eq!(reparsed, report);
}

#[test]
fn blank_form_validates_cleanly() {
    let form = blank();
    let report = validate(&form).unwrap();
    assert!(!report.description.is_empty());
    assert!(!report.expected_behavior.is_empty());
    assert_eq!(report.reproduction_steps, vec!["...", "...", "..."]);
    assert!(diagnostics(&form).is_empty());
}

#[test]
fn structured_payload_matches_parsed_submission() {
    let report = validate(&sample_submission()).unwrap();
    let payload = serde_json::to_value(&report).unwrap();
    assert_eq!(payload["operating_system"], "Arch Linux");
    assert_eq!(payload["reproduction_steps"][1], "remove the group");

    let from_payload: BugReport = serde_json::from_value(payload).unwrap();
    assert_eq!(from_payload, report);
}
