use crate::JobRecord;

/// Parsed job attribute a predicate can match against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobAttribute {
    Status,
    JobId,
}

impl JobAttribute {
    fn value<'a>(&self, job: &'a JobRecord) -> Option<&'a str> {
        match self {
            JobAttribute::Status => job.status.as_deref(),
            JobAttribute::JobId => job.job_id.as_deref(),
        }
    }
}

/// Jobs whose parsed attribute value contains none of the expected
/// substrings. A job whose attribute was never extracted always offends.
pub fn attribute_offenders<'a>(
    jobs: &'a [JobRecord],
    attr: JobAttribute,
    expected: &[&str],
) -> Vec<&'a JobRecord> {
    jobs.iter()
        .filter(|job| match attr.value(job) {
            Some(value) => !expected.iter().any(|want| value.contains(want)),
            None => true,
        })
        .collect()
}

/// True iff every job's parsed attribute value contains at least one expected
/// substring (AND over jobs, OR over expected values per job).
///
/// An empty expected list is satisfiable by no job, so the check holds only
/// for an empty job list, matching the "expect no jobs" reading of the owner
/// and prefix checks.
pub fn check_jobs_attribute(jobs: &[JobRecord], attr: JobAttribute, expected: &[&str]) -> bool {
    attribute_offenders(jobs, attr, expected).is_empty()
}

/// True iff every job's parsed status contains one of the expected values.
pub fn check_jobs_status(jobs: &[JobRecord], expected: &[&str]) -> bool {
    check_jobs_attribute(jobs, JobAttribute::Status, expected)
}

/// True iff every job's parsed id contains one of the expected values.
pub fn check_jobs_id(jobs: &[JobRecord], expected: &[&str]) -> bool {
    check_jobs_attribute(jobs, JobAttribute::JobId, expected)
}

/// Jobs whose raw row text starts with none of the expected owner tokens.
pub fn owner_offenders<'a>(jobs: &'a [JobRecord], expected_owners: &[&str]) -> Vec<&'a JobRecord> {
    jobs.iter()
        .filter(|job| !expected_owners.iter().any(|owner| job.text.starts_with(owner)))
        .collect()
}

/// True iff every row text starts with one of the expected owner tokens.
///
/// Ownership is not a parsed attribute, so the full row text is checked.
/// An empty expected list means no jobs were expected at all.
pub fn check_jobs_owner(jobs: &[JobRecord], expected_owners: &[&str]) -> bool {
    if expected_owners.is_empty() {
        return jobs.is_empty();
    }
    owner_offenders(jobs, expected_owners).is_empty()
}

/// Jobs whose raw row text does not start with the search prefix.
///
/// A trailing `*` on `expected_prefix` is stripped before matching. An empty
/// prefix matches nothing, so every job offends.
pub fn prefix_offenders<'a>(jobs: &'a [JobRecord], expected_prefix: &str) -> Vec<&'a JobRecord> {
    if expected_prefix.is_empty() {
        return jobs.iter().collect();
    }
    let search_prefix = expected_prefix
        .strip_suffix('*')
        .unwrap_or(expected_prefix);
    jobs.iter()
        .filter(|job| !job.text.starts_with(search_prefix))
        .collect()
}

/// True iff every row text starts with the search prefix (trailing `*`
/// stripped). An empty prefix requires an empty job list.
pub fn check_jobs_prefix(jobs: &[JobRecord], expected_prefix: &str) -> bool {
    prefix_offenders(jobs, expected_prefix).is_empty()
}

/// Jobs whose raw row text contains none of the expected status fragments.
pub fn status_text_offenders<'a>(
    jobs: &'a [JobRecord],
    expected_statuses: &[&str],
) -> Vec<&'a JobRecord> {
    jobs.iter()
        .filter(|job| !expected_statuses.iter().any(|status| job.text.contains(status)))
        .collect()
}

/// True iff every row text contains one of the expected status fragments.
///
/// Status fragments like `CC 0000` span the token boundary the job parser
/// splits on, so the status-filter scenarios match against the full row text
/// rather than the parsed status field.
pub fn check_jobs_status_text(jobs: &[JobRecord], expected_statuses: &[&str]) -> bool {
    status_text_offenders(jobs, expected_statuses).is_empty()
}

/// True iff at least one row text contains the status fragment.
pub fn any_job_shows_status(jobs: &[JobRecord], status: &str) -> bool {
    jobs.iter().any(|job| job.text.contains(status))
}
