use check_logging::check_warn;
use explorer_core::{
    attribute_offenders, compare_filters, owner_offenders, parse_filter_text, parse_job_text,
    prefix_offenders, status_text_offenders, FilterRecord, JobAttribute, JobRecord,
};
use serde::Serialize;

/// The two ways a captured row can fail a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DiagnosticKind {
    /// The text did not match the expected fixed format.
    ParseMismatch,
    /// The text parsed, but the expected condition did not hold.
    PredicateFalse,
}

/// One offending captured line, with the raw text retained for the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub row: String,
    pub detail: String,
}

impl Diagnostic {
    fn predicate_false(row: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            kind: DiagnosticKind::PredicateFalse,
            row: row.into(),
            detail: detail.into(),
        }
    }

    fn parse_mismatch(row: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            kind: DiagnosticKind::ParseMismatch,
            row: row.into(),
            detail: detail.into(),
        }
    }
}

/// Result of one batch check: a verdict plus the diagnostics behind it.
///
/// Failures are values, never panics, so a suite can evaluate every capture
/// and report all offending rows at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
    pub passed: bool,
    pub diagnostics: Vec<Diagnostic>,
}

impl CheckOutcome {
    pub(crate) fn from_diagnostics(diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            passed: diagnostics.is_empty(),
            diagnostics,
        }
    }
}

/// Parse every captured row into a [`JobRecord`], warn-logging the rows whose
/// extraction failed. No row aborts the batch.
pub fn parse_rows(rows: &[String]) -> Vec<JobRecord> {
    rows.iter()
        .map(|row| {
            let record = parse_job_text(row);
            if !record.is_parsed() {
                check_warn!("{} did not match the job row shape", record.text);
            }
            record
        })
        .collect()
}

/// Every row must show one of the expected status fragments in its text.
pub fn check_status_filter(rows: &[String], expected_statuses: &[&str]) -> CheckOutcome {
    let jobs: Vec<JobRecord> = rows.iter().map(|row| parse_job_text(row)).collect();
    let diagnostics = status_text_offenders(&jobs, expected_statuses)
        .into_iter()
        .map(|job| {
            check_warn!("{} is not an expected status", job.text);
            Diagnostic::predicate_false(&job.text, "no expected status fragment in row text")
        })
        .collect();
    CheckOutcome::from_diagnostics(diagnostics)
}

/// Every row must start with one of the expected owner tokens; an empty
/// expected list means no jobs were expected at all.
pub fn check_owner_filter(rows: &[String], expected_owners: &[&str]) -> CheckOutcome {
    let jobs: Vec<JobRecord> = rows.iter().map(|row| parse_job_text(row)).collect();
    if expected_owners.is_empty() {
        let diagnostics = jobs
            .iter()
            .map(|job| {
                check_warn!("{} present but no jobs were expected", job.text);
                Diagnostic::predicate_false(&job.text, "job present but no jobs expected")
            })
            .collect();
        return CheckOutcome::from_diagnostics(diagnostics);
    }
    let diagnostics = owner_offenders(&jobs, expected_owners)
        .into_iter()
        .map(|job| {
            check_warn!("{} is not an expected owner", job.text);
            Diagnostic::predicate_false(&job.text, "row text starts with no expected owner")
        })
        .collect();
    CheckOutcome::from_diagnostics(diagnostics)
}

/// Every row must start with the search prefix (trailing `*` stripped); an
/// empty prefix means no jobs were expected at all.
pub fn check_prefix_filter(rows: &[String], expected_prefix: &str) -> CheckOutcome {
    let jobs: Vec<JobRecord> = rows.iter().map(|row| parse_job_text(row)).collect();
    let detail = if expected_prefix.is_empty() {
        "job present but no jobs expected".to_string()
    } else {
        format!("row text does not start with prefix {expected_prefix}")
    };
    let diagnostics = prefix_offenders(&jobs, expected_prefix)
        .into_iter()
        .map(|job| {
            check_warn!("{} is not an expected prefix", job.text);
            Diagnostic::predicate_false(&job.text, detail.clone())
        })
        .collect();
    CheckOutcome::from_diagnostics(diagnostics)
}

/// Every row's parsed job id must contain one of the expected values.
///
/// Rows whose extraction failed become ParseMismatch diagnostics and fail the
/// check; they never abort it.
pub fn check_id_filter(rows: &[String], expected_ids: &[&str]) -> CheckOutcome {
    let jobs = parse_rows(rows);
    let mut diagnostics: Vec<Diagnostic> = jobs
        .iter()
        .filter(|job| !job.is_parsed())
        .map(|job| Diagnostic::parse_mismatch(&job.text, "row did not match the job row shape"))
        .collect();
    let parsed: Vec<JobRecord> = jobs.iter().filter(|job| job.is_parsed()).cloned().collect();
    diagnostics.extend(
        attribute_offenders(&parsed, JobAttribute::JobId, expected_ids)
            .into_iter()
            .map(|job| {
                check_warn!("{} is not an expected job id", job.text);
                Diagnostic::predicate_false(&job.text, "no expected job id in parsed field")
            }),
    );
    CheckOutcome::from_diagnostics(diagnostics)
}

/// The rendered filter summary must parse to the expected filter state
/// (case-insensitive, absent fields as empty).
pub fn check_filter_summary(summary_text: &str, expected: &FilterRecord) -> CheckOutcome {
    let actual = parse_filter_text(summary_text);
    if compare_filters(&actual, expected) {
        return CheckOutcome::from_diagnostics(Vec::new());
    }
    check_warn!("{summary_text} does not describe the expected filter state");
    let diagnostic = if actual == FilterRecord::default() {
        Diagnostic::parse_mismatch(summary_text, "summary did not match the filter summary shape")
    } else {
        Diagnostic::predicate_false(
            summary_text,
            format!("parsed filters {actual:?} differ from expected {expected:?}"),
        )
    };
    CheckOutcome::from_diagnostics(vec![diagnostic])
}
