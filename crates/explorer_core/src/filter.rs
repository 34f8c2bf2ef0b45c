use url::Url;

use crate::FilterRecord;

impl FilterRecord {
    /// The default search filter the UI falls back to: `*` for every field.
    pub fn wildcard() -> Self {
        Self {
            owner: Some("*".to_string()),
            prefix: Some("*".to_string()),
            job_id: Some("*".to_string()),
            status: Some("*".to_string()),
        }
    }

    /// Merge this record over `defaults`, field-wise. Present fields win.
    pub fn with_defaults(&self, defaults: &FilterRecord) -> FilterRecord {
        FilterRecord {
            owner: self.owner.clone().or_else(|| defaults.owner.clone()),
            prefix: self.prefix.clone().or_else(|| defaults.prefix.clone()),
            job_id: self.job_id.clone().or_else(|| defaults.job_id.clone()),
            status: self.status.clone().or_else(|| defaults.status.clone()),
        }
    }
}

/// Case-insensitive equality across the four filter fields.
///
/// Absent fields compare as empty string. Total over all inputs.
pub fn compare_filters(a: &FilterRecord, b: &FilterRecord) -> bool {
    let fields = [
        (&a.owner, &b.owner),
        (&a.prefix, &b.prefix),
        (&a.job_id, &b.job_id),
        (&a.status, &b.status),
    ];
    fields.iter().all(|(left, right)| {
        let left = left.as_deref().unwrap_or("");
        let right = right.as_deref().unwrap_or("");
        left.eq_ignore_ascii_case(right)
    })
}

/// Build the page URL carrying the filter state as query parameters.
///
/// Present fields are appended in `owner`, `prefix`, `jobId`, `status` order;
/// absent fields are omitted.
pub fn attach_filters_to_url(
    page_url: &str,
    filters: &FilterRecord,
) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(page_url)?;
    {
        let mut pairs = url.query_pairs_mut();
        if let Some(owner) = filters.owner.as_deref() {
            pairs.append_pair("owner", owner);
        }
        if let Some(prefix) = filters.prefix.as_deref() {
            pairs.append_pair("prefix", prefix);
        }
        if let Some(job_id) = filters.job_id.as_deref() {
            pairs.append_pair("jobId", job_id);
        }
        if let Some(status) = filters.status.as_deref() {
            pairs.append_pair("status", status);
        }
    }
    Ok(url)
}
