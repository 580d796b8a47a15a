use regex::Regex;
use std::sync::LazyLock;

/// Grade reported when the analysis carries no recognisable grade line.
pub const PENDING_GRADE: &str = "Pendiente";

/// `CALIFICACIÓN FINAL: <1-3 digits>/100` on one line, case-insensitive.
/// Spaces or tabs may surround the label and colon, and a markdown bold marker
/// may sit between the colon and the score (`**CALIFICACIÓN FINAL:** 85/100`).
static GRADE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)calificación[ \t]+final[ \t]*:[ \t]*(?:\*+[ \t]*)?([0-9]{1,3}/100)\b")
        .expect("grade line pattern is valid")
});

/// Pull the final grade token (`"85/100"`) out of free-form analysis text.
///
/// The first grade line from the top wins. Text without one yields
/// [`PENDING_GRADE`].
#[must_use]
pub fn extract_grade(text: &str) -> String {
    GRADE_LINE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map_or_else(|| PENDING_GRADE.to_string(), |m| m.as_str().to_string())
}
