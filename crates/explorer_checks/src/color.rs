use std::fmt;

use check_logging::check_warn;
use explorer_core::TextLine;

use crate::evaluate::{CheckOutcome, Diagnostic, DiagnosticKind};

/// Viewer syntax class for language variables.
pub const VAR_LANG_CLASS: &str = "variable-language";
/// Viewer syntax class for string literals.
pub const COMMENT_STR_CLASS: &str = "cm-string";
/// Viewer syntax class for comments.
pub const COMMENT_CLASS: &str = "comment";
/// Viewer syntax class for attributes.
pub const COMMENT_ATTR_CLASS: &str = "cm-attribute";
/// Fallback class for unhighlighted text.
pub const NO_CLASS: &str = "none";

const RED: Rgb = Rgb::new(255, 0, 0);
const GREY: Rgb = Rgb::new(128, 128, 128);

/// Colour every viewer line must render, keyed by syntax class.
const HIGHLIGHT_COLORS: &[(&str, Rgb)] = &[
    (VAR_LANG_CLASS, Rgb::new(127, 0, 85)),
    (COMMENT_STR_CLASS, Rgb::new(0, 0, 255)),
    (COMMENT_CLASS, Rgb::new(53, 125, 33)),
    (COMMENT_ATTR_CLASS, Rgb::new(127, 0, 127)),
    (NO_CLASS, Rgb::new(51, 51, 51)),
];

/// Colour a status label must render, keyed by the fragment shown in it.
const STATUS_COLOR_RULES: &[(&str, Rgb)] = &[
    ("ABEND", RED),
    ("JCL ERROR", RED),
    ("CC 00", GREY),
    ("OUTPUT", GREY),
];

/// A computed-style colour, parsed from the `rgb(r, g, b)` form the page
/// reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a computed-style colour string such as `rgb(128, 128, 128)`.
    pub fn parse(input: &str) -> Result<Rgb, ColorParseError> {
        let inner = input
            .trim()
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| ColorParseError::BadFormat {
                input: input.to_string(),
            })?;
        let mut components = inner.split(',').map(str::trim);
        let mut next = || {
            components
                .next()
                .ok_or_else(|| ColorParseError::BadFormat {
                    input: input.to_string(),
                })?
                .parse::<u8>()
                .map_err(|_| ColorParseError::BadComponent {
                    input: input.to_string(),
                })
        };
        let (r, g, b) = (next()?, next()?, next()?);
        if components.next().is_some() {
            return Err(ColorParseError::BadFormat {
                input: input.to_string(),
            });
        }
        Ok(Rgb::new(r, g, b))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("expected rgb(r, g, b), got {input:?}")]
    BadFormat { input: String },
    #[error("colour component out of range in {input:?}")]
    BadComponent { input: String },
}

/// Colour the palette assigns to an element's class attribute: the first
/// palette class present among its class tokens, else the fallback colour.
pub fn highlight_color_for(class_attr: &str) -> Rgb {
    for (class, color) in HIGHLIGHT_COLORS {
        if class_attr.split_whitespace().any(|token| token == *class) {
            return *color;
        }
    }
    // Unlisted classes render as plain text.
    Rgb::new(51, 51, 51)
}

/// Colour a status label is required to render, if any rule covers its text.
pub fn expected_status_color(text: &str) -> Option<Rgb> {
    STATUS_COLOR_RULES
        .iter()
        .find(|(fragment, _)| text.contains(fragment))
        .map(|(_, color)| *color)
}

fn compare_line_color(line: &TextLine, expected: Rgb) -> Option<Diagnostic> {
    match Rgb::parse(&line.color) {
        Ok(actual) if actual == expected => None,
        Ok(actual) => {
            check_warn!("{} renders {} instead of {}", line.text, actual, expected);
            Some(Diagnostic {
                kind: DiagnosticKind::PredicateFalse,
                row: line.text.clone(),
                detail: format!("renders {actual}, expected {expected}"),
            })
        }
        Err(err) => {
            check_warn!("{} has unreadable colour: {}", line.text, err);
            Some(Diagnostic {
                kind: DiagnosticKind::ParseMismatch,
                row: line.text.clone(),
                detail: err.to_string(),
            })
        }
    }
}

/// Every label containing the status fragment must render the expected
/// colour. Labels showing other statuses are ignored; no matching label is a
/// pass.
pub fn check_status_color(labels: &[TextLine], status_text: &str, expected: Rgb) -> CheckOutcome {
    let diagnostics = labels
        .iter()
        .filter(|label| label.text.contains(status_text))
        .filter_map(|label| compare_line_color(label, expected))
        .collect();
    CheckOutcome::from_diagnostics(diagnostics)
}

/// Every label covered by a status colour rule must render that rule's
/// colour.
pub fn check_status_colors(labels: &[TextLine]) -> CheckOutcome {
    let diagnostics = labels
        .iter()
        .filter_map(|label| {
            expected_status_color(&label.text)
                .and_then(|expected| compare_line_color(label, expected))
        })
        .collect();
    CheckOutcome::from_diagnostics(diagnostics)
}

/// Every viewer line must render its syntax class's palette colour.
pub fn check_highlight_colors(lines: &[TextLine]) -> CheckOutcome {
    let diagnostics = lines
        .iter()
        .filter_map(|line| compare_line_color(line, highlight_color_for(&line.css_class)))
        .collect();
    CheckOutcome::from_diagnostics(diagnostics)
}

#[cfg(test)]
mod tests {
    use super::{expected_status_color, highlight_color_for, ColorParseError, Rgb, NO_CLASS};

    #[test]
    fn parses_computed_style_colours() {
        assert_eq!(Rgb::parse("rgb(128, 128, 128)"), Ok(Rgb::new(128, 128, 128)));
        assert_eq!(Rgb::parse("rgb(255,0,0)"), Ok(Rgb::new(255, 0, 0)));
    }

    #[test]
    fn rejects_malformed_colours() {
        assert!(matches!(
            Rgb::parse("rgb(1, 2)"),
            Err(ColorParseError::BadFormat { .. })
        ));
        assert!(matches!(
            Rgb::parse("rgb(1, 2, 300)"),
            Err(ColorParseError::BadComponent { .. })
        ));
        assert!(matches!(
            Rgb::parse("#808080"),
            Err(ColorParseError::BadFormat { .. })
        ));
    }

    #[test]
    fn unknown_classes_fall_back_to_plain_text_colour() {
        assert_eq!(highlight_color_for("cm-unknown"), highlight_color_for(NO_CLASS));
    }

    #[test]
    fn status_rules_cover_the_known_fragments() {
        assert_eq!(expected_status_color("ABEND S0C4"), Some(Rgb::new(255, 0, 0)));
        assert_eq!(expected_status_color("CC 0000"), Some(Rgb::new(128, 128, 128)));
        assert_eq!(expected_status_color("ACTIVE"), None);
    }
}
