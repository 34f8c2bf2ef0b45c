//! Explorer checks: evaluation over captured page text and check reporting.
mod color;
mod evaluate;
mod report;

pub use color::{
    check_highlight_colors, check_status_color, check_status_colors, expected_status_color,
    highlight_color_for, ColorParseError, Rgb, COMMENT_ATTR_CLASS, COMMENT_CLASS,
    COMMENT_STR_CLASS, NO_CLASS, VAR_LANG_CLASS,
};
pub use evaluate::{
    check_filter_summary, check_id_filter, check_owner_filter, check_prefix_filter,
    check_status_filter, parse_rows, CheckOutcome, Diagnostic, DiagnosticKind,
};
pub use report::{write_report, CheckReport, ReportEntry, ReportError};
