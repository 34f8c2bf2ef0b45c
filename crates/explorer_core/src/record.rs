/// Active search filter state as rendered by the filter summary line.
///
/// Fields are `None` when the summary text did not match the expected
/// pattern; the parser applies no defaulting (see [`FilterRecord::wildcard`]).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterRecord {
    pub owner: Option<String>,
    pub prefix: Option<String>,
    pub job_id: Option<String>,
    pub status: Option<String>,
}

/// One rendered job row.
///
/// `text` always retains the raw source line for diagnostics; the derived
/// fields are `None` when the row did not match the expected shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRecord {
    pub text: String,
    pub prefix: Option<String>,
    pub job_id: Option<String>,
    pub status: Option<String>,
}

impl JobRecord {
    /// A record that keeps only the raw row text, with no derived fields.
    pub fn unparsed(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            prefix: None,
            job_id: None,
            status: None,
        }
    }

    /// Whether field extraction succeeded for this row.
    pub fn is_parsed(&self) -> bool {
        self.prefix.is_some() && self.job_id.is_some() && self.status.is_some()
    }
}

/// One rendered viewer line captured from the page: text content, class
/// attribute and computed colour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextLine {
    pub text: String,
    pub css_class: String,
    pub color: String,
}
