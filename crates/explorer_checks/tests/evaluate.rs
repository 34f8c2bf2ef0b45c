use explorer_checks::{
    check_filter_summary, check_id_filter, check_owner_filter, check_prefix_filter,
    check_status_filter, parse_rows, DiagnosticKind,
};
use explorer_core::FilterRecord;
use pretty_assertions::assert_eq;

fn captured(rows: &[&str]) -> Vec<String> {
    rows.iter().map(|row| row.to_string()).collect()
}

#[test]
fn status_filter_accepts_fragments_spanning_token_boundaries() {
    check_logging::initialize_for_tests();
    let rows = captured(&["ZOWE1:J001 [ACTIVE]", "ZOWE2:J002 [CC 0000]"]);
    let outcome = check_status_filter(&rows, &["ACTIVE", "CC 0000"]);
    assert!(outcome.passed);
    assert!(outcome.diagnostics.is_empty());
}

#[test]
fn status_filter_reports_every_offending_row() {
    check_logging::initialize_for_tests();
    let rows = captured(&[
        "ZOWE1:J001 [ACTIVE]",
        "OTHER1:J003 [CANCELED]",
        "OTHER2:J004 [JCL ERROR]",
    ]);
    let outcome = check_status_filter(&rows, &["ACTIVE"]);
    assert!(!outcome.passed);
    assert_eq!(outcome.diagnostics.len(), 2);
    assert!(outcome
        .diagnostics
        .iter()
        .all(|diagnostic| diagnostic.kind == DiagnosticKind::PredicateFalse));
    assert_eq!(outcome.diagnostics[0].row, "OTHER1:J003 [CANCELED]");
}

#[test]
fn id_filter_flags_malformed_rows_without_aborting_the_batch() {
    check_logging::initialize_for_tests();
    let rows = captured(&["no jobs found", "ZOWE1:J001 [ACTIVE]"]);
    let outcome = check_id_filter(&rows, &["J001"]);
    assert!(!outcome.passed);
    assert_eq!(outcome.diagnostics.len(), 1);
    assert_eq!(outcome.diagnostics[0].kind, DiagnosticKind::ParseMismatch);
    assert_eq!(outcome.diagnostics[0].row, "no jobs found");
}

#[test]
fn id_filter_passes_when_every_parsed_id_is_expected() {
    let rows = captured(&["ZOWE1:J001 [ACTIVE]", "ZOWE2:J002 [OUTPUT]"]);
    assert!(check_id_filter(&rows, &["J001", "J002"]).passed);
}

#[test]
fn owner_filter_with_no_expected_owners_requires_no_jobs() {
    let no_rows: Vec<String> = Vec::new();
    assert!(check_owner_filter(&no_rows, &[]).passed);

    let rows = captured(&["ZOWE1:J001 [ACTIVE]"]);
    let outcome = check_owner_filter(&rows, &[]);
    assert!(!outcome.passed);
    assert_eq!(outcome.diagnostics[0].detail, "job present but no jobs expected");
}

#[test]
fn owner_filter_accepts_any_expected_owner_token() {
    let rows = captured(&["IZUSVR1:J010 [ACTIVE]", "ZOWESVR:J011 [OUTPUT]"]);
    assert!(check_owner_filter(&rows, &["IZU", "ZOWE"]).passed);
    assert!(!check_owner_filter(&rows, &["IZU"]).passed);
}

#[test]
fn prefix_filter_strips_a_trailing_wildcard() {
    let rows = captured(&["ZOWE1:J001 [ACTIVE]"]);
    assert!(check_prefix_filter(&rows, "ZOWE*").passed);

    let outcome = check_prefix_filter(&rows, "OTHER*");
    assert!(!outcome.passed);
    assert!(outcome.diagnostics[0].detail.contains("OTHER*"));
}

#[test]
fn parse_rows_keeps_raw_text_for_diagnostics() {
    check_logging::initialize_for_tests();
    let rows = captured(&["garbage", "ZOWE1:J001 [ACTIVE]"]);
    let records = parse_rows(&rows);
    assert_eq!(records.len(), 2);
    assert!(!records[0].is_parsed());
    assert_eq!(records[0].text, "garbage");
    assert!(records[1].is_parsed());
}

#[test]
fn filter_summary_matches_case_insensitively() {
    let expected = FilterRecord {
        owner: Some("ibmuser".to_string()),
        prefix: Some("zowe*".to_string()),
        job_id: Some("*".to_string()),
        status: Some("active".to_string()),
    };
    let outcome =
        check_filter_summary("Owner=IBMUSER Prefix=ZOWE* JobId=* Status=ACTIVE", &expected);
    assert!(outcome.passed);
}

#[test]
fn filter_summary_mismatch_is_a_predicate_diagnostic() {
    let outcome = check_filter_summary(
        "Owner=IBMUSER Prefix=ZOWE* JobId=* Status=ACTIVE",
        &FilterRecord::wildcard(),
    );
    assert!(!outcome.passed);
    assert_eq!(outcome.diagnostics[0].kind, DiagnosticKind::PredicateFalse);
}

#[test]
fn unreadable_filter_summary_is_a_parse_diagnostic() {
    let outcome = check_filter_summary("Job Filters", &FilterRecord::wildcard());
    assert!(!outcome.passed);
    assert_eq!(outcome.diagnostics[0].kind, DiagnosticKind::ParseMismatch);
}
