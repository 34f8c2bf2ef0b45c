use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tempfile::NamedTempFile;
use thiserror::Error;

use crate::evaluate::{CheckOutcome, Diagnostic};

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// One named check and the outcome it produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    pub check: String,
    pub passed: bool,
    pub diagnostics: Vec<Diagnostic>,
}

/// Structured record of a whole check run, for the assertion layer and CI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub suite: String,
    pub entries: Vec<ReportEntry>,
}

impl CheckReport {
    pub fn new(suite: impl Into<String>) -> Self {
        Self {
            suite: suite.into(),
            entries: Vec::new(),
        }
    }

    /// Record a named check outcome.
    pub fn push(&mut self, check: impl Into<String>, outcome: CheckOutcome) {
        self.entries.push(ReportEntry {
            check: check.into(),
            passed: outcome.passed,
            diagnostics: outcome.diagnostics,
        });
    }

    /// True iff every recorded check passed.
    pub fn passed(&self) -> bool {
        self.entries.iter().all(|entry| entry.passed)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Atomically write the report as JSON to `{dir}/{filename}` by writing a
/// temp file then renaming.
pub fn write_report(
    dir: &Path,
    filename: &str,
    report: &CheckReport,
) -> Result<PathBuf, ReportError> {
    fs::create_dir_all(dir)?;

    let content = report.to_json()?;
    let target = dir.join(filename);
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.flush()?;
    tmp.as_file_mut().sync_all()?;

    // Replace existing file if present to keep determinism.
    if target.exists() {
        fs::remove_file(&target)?;
    }
    tmp.persist(&target).map_err(|e| ReportError::Io(e.error))?;
    Ok(target)
}
