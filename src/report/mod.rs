//! Plain-text evaluation reports.
//!
//! [`render_report`] is a pure function of the record and the [`ReportStyle`]
//! (plus the local timezone); everything except the date line is
//! byte-for-byte stable.

use crate::records::EvaluationRecord;
use anyhow::{Context, Result};
use chrono::{DateTime, Local, Locale, TimeZone};
use regex::Regex;
use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

pub const DEFAULT_REPORT_LOCALE: &str = "es_BO";
pub const DEFAULT_DATE_FORMAT: &str = "%-d de %B de %Y, %H:%M";

const RULE: &str = "================================================";

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Locale and strftime pattern used for the report's date line.
#[derive(Debug, Clone)]
pub struct ReportStyle {
    pub locale: Locale,
    pub date_format: String,
}

impl Default for ReportStyle {
    fn default() -> Self {
        Self {
            locale: Locale::es_BO,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl ReportStyle {
    /// Build from a POSIX locale name such as `"es_BO"`.
    pub fn new(locale: &str, date_format: &str) -> Result<Self> {
        let locale = Locale::try_from(locale)
            .map_err(|_| anyhow::anyhow!("unknown report locale: {locale}"))?;
        Ok(Self {
            locale,
            date_format: date_format.to_string(),
        })
    }

    /// `timestamp_ms` in the local timezone.
    pub fn local_date(&self, timestamp_ms: i64) -> String {
        self.format_timestamp(timestamp_ms, &Local)
    }

    /// Falls back to the raw millisecond value when out of chrono's range.
    pub fn format_timestamp<Tz>(&self, timestamp_ms: i64, tz: &Tz) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        DateTime::from_timestamp_millis(timestamp_ms).map_or_else(
            || timestamp_ms.to_string(),
            |utc| {
                utc.with_timezone(tz)
                    .format_localized(&self.date_format, self.locale)
                    .to_string()
            },
        )
    }
}

/// Render `record` with dates in the local timezone.
#[must_use]
pub fn render_report(record: &EvaluationRecord, style: &ReportStyle) -> String {
    render_report_in(record, style, &Local)
}

/// Render `record` with dates in `tz`.
#[must_use]
pub fn render_report_in<Tz>(record: &EvaluationRecord, style: &ReportStyle, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let date = style.format_timestamp(record.timestamp, tz);

    let report = format!(
        "{RULE}\n\
         REPORTE DE EVALUACIÓN DE LOGOTIPO - 4º AÑO\n\
         {RULE}\n\
         \n\
         DATOS DEL ESTUDIANTE\n\
         --------------------\n\
         Nombre:   {name}\n\
         Paralelo: {parallel}\n\
         Fecha:    {date}\n\
         \n\
         RESULTADO FINAL\n\
         ---------------\n\
         Calificación: {grade}\n\
         \n\
         {RULE}\n\
         ANÁLISIS DETALLADO Y CORRECCIONES\n\
         {RULE}\n\
         \n\
         {analysis}",
        name = record.student_name,
        parallel = record.student_parallel,
        grade = record.grade,
        analysis = record.analysis_text,
    );

    report.trim_end().to_string()
}

/// `Evaluacion_<name with whitespace runs as '_'>_<parallel>.txt`
///
/// Path separators and `..` in either field become `_`, so the file always
/// lands directly inside the report directory.
#[must_use]
pub fn report_filename(record: &EvaluationRecord) -> String {
    let name = WHITESPACE_RUN.replace_all(&record.student_name, "_");
    format!(
        "Evaluacion_{}_{}.txt",
        filename_safe(&name),
        filename_safe(&record.student_parallel)
    )
}

fn filename_safe(part: &str) -> String {
    part.replace(['/', '\\'], "_").replace("..", "_")
}

/// Write the report for `record` into `dir` and return the file path.
pub fn write_report(record: &EvaluationRecord, style: &ReportStyle, dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed creating report directory: {}", dir.display()))?;
    let path = dir.join(report_filename(record));
    std::fs::write(&path, render_report(record, style))
        .with_context(|| format!("failed writing report: {}", path.display()))?;
    Ok(path)
}
