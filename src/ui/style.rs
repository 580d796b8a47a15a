use console::style;
use std::fmt::Display;

/// Grades the rubric reserves for work that misses the assignment.
const FLAGGED_GRADES: [&str; 2] = ["0/100", "10/100"];

/// Green bold: success checkmarks, confirmations
pub fn success<D: Display>(text: D) -> String {
    style(text).green().bold().to_string()
}

/// White bold: section headers, titles
pub fn header<D: Display>(text: D) -> String {
    style(text).white().bold().to_string()
}

/// Dim: secondary text, ids, decorative lines
pub fn dim<D: Display>(text: D) -> String {
    style(text).dim().to_string()
}

/// Yellow: warnings, pending grades
pub fn yellow<D: Display>(text: D) -> String {
    style(text).yellow().to_string()
}

/// Green: confirmed values, paths, names
pub fn value<D: Display>(text: D) -> String {
    style(text).green().to_string()
}

/// Cyan bold: bullets, field labels
pub fn accent<D: Display>(text: D) -> String {
    style(text).cyan().bold().to_string()
}

/// A grade coloured for display only. Red for the out-of-scope grades,
/// yellow while pending, green otherwise.
pub fn grade(text: &str) -> String {
    if is_flagged_grade(text) {
        style(text).red().bold().to_string()
    } else if text == crate::grading::PENDING_GRADE {
        yellow(text)
    } else {
        value(text)
    }
}

pub fn is_flagged_grade(text: &str) -> bool {
    FLAGGED_GRADES.contains(&text.trim())
}
