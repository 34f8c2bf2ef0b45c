use explorer_checks::{check_status_filter, write_report, CheckReport};
use pretty_assertions::assert_eq;

fn sample_report() -> CheckReport {
    let passing = check_status_filter(&["ZOWE1:J001 [ACTIVE]".to_string()], &["ACTIVE"]);
    let failing = check_status_filter(&["OTHER1:J003 [CANCELED]".to_string()], &["ACTIVE"]);

    let mut report = CheckReport::new("job filtering");
    report.push("status filter shows ACTIVE jobs", passing);
    report.push("status filter hides CANCELED jobs", failing);
    report
}

#[test]
fn report_aggregates_the_overall_verdict() {
    let report = sample_report();
    assert!(!report.passed());
    assert_eq!(report.entries.len(), 2);
    assert!(report.entries[0].passed);
    assert!(!report.entries[1].passed);
}

#[test]
fn report_serializes_with_diagnostics() {
    let json = sample_report().to_json().expect("serializable report");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(value["suite"], "job filtering");
    assert_eq!(value["entries"][1]["passed"], false);
    assert_eq!(
        value["entries"][1]["diagnostics"][0]["row"],
        "OTHER1:J003 [CANCELED]"
    );
}

#[test]
fn write_report_produces_the_file_atomically() {
    let dir = tempfile::tempdir().expect("temp dir");
    let report = sample_report();

    let path = write_report(dir.path(), "checks.json", &report).expect("report written");
    assert!(path.exists());

    // A second write replaces the file deterministically.
    let path_again = write_report(dir.path(), "checks.json", &report).expect("report rewritten");
    assert_eq!(path, path_again);

    let content = std::fs::read_to_string(&path).expect("readable report");
    let value: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    assert_eq!(value["entries"].as_array().map(Vec::len), Some(2));
}
