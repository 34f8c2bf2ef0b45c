use std::sync::OnceLock;

use regex::Regex;

use crate::{FilterRecord, JobRecord};

fn filter_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"Owner= ?([^ ]*) ?Prefix= ?([^ ]*) ?JobId= ?([^ ]*) ?Status= ?([^ ]*) ?")
            .expect("filter summary pattern")
    })
}

fn job_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(.*):([^ ]*) ?\[([^ ]*) ?(.*)\]").expect("job row pattern")
    })
}

/// Parse a rendered filter summary line (`Owner=<o> Prefix=<p> JobId=<j>
/// Status=<s>`) into a [`FilterRecord`].
///
/// Total: a line that does not match yields a record with all fields `None`.
pub fn parse_filter_text(text: &str) -> FilterRecord {
    match filter_pattern().captures(text) {
        Some(tokens) => FilterRecord {
            owner: tokens.get(1).map(|m| m.as_str().to_string()),
            prefix: tokens.get(2).map(|m| m.as_str().to_string()),
            job_id: tokens.get(3).map(|m| m.as_str().to_string()),
            status: tokens.get(4).map(|m| m.as_str().to_string()),
        },
        None => FilterRecord::default(),
    }
}

/// Parse a rendered job row (`<prefix>:<jobId> [<status> <extra>]`) into a
/// [`JobRecord`].
///
/// Total: a row that does not match yields an unparsed record that still
/// carries the raw text, and [`JobRecord::is_parsed`] reports the failure.
/// Callers evaluating many rows stay alive past a single malformed one.
pub fn parse_job_text(text: &str) -> JobRecord {
    match job_pattern().captures(text) {
        Some(tokens) => JobRecord {
            text: text.to_string(),
            prefix: tokens.get(1).map(|m| m.as_str().to_string()),
            job_id: tokens.get(2).map(|m| m.as_str().to_string()),
            status: tokens.get(3).map(|m| m.as_str().to_string()),
        },
        None => JobRecord::unparsed(text),
    }
}
