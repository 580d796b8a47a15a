use crate::records::EvaluationRecord;
use crate::report::ReportStyle;
use crate::ui::style as ui;

struct Row<'a> {
    id: &'a str,
    date: String,
    name: &'a str,
    parallel: &'a str,
    grade: &'a str,
}

fn width<'a>(header: &str, cells: impl Iterator<Item = &'a str>) -> usize {
    cells
        .map(|cell| cell.chars().count())
        .chain(std::iter::once(header.chars().count()))
        .max()
        .unwrap_or(0)
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.chars().count());
    format!("{text}{}", " ".repeat(fill))
}

/// Saved evaluations as an aligned table, newest first.
pub fn render_list(records: &[EvaluationRecord], style: &ReportStyle) -> String {
    let rows: Vec<Row<'_>> = records
        .iter()
        .map(|record| Row {
            id: record.short_id(),
            date: style.local_date(record.timestamp),
            name: &record.student_name,
            parallel: &record.student_parallel,
            grade: &record.grade,
        })
        .collect();

    let headers = [
        t!("list.id"),
        t!("list.date"),
        t!("list.student"),
        t!("list.parallel"),
        t!("list.grade"),
    ];
    let widths = [
        width(&headers[0], rows.iter().map(|r| r.id)),
        width(&headers[1], rows.iter().map(|r| r.date.as_str())),
        width(&headers[2], rows.iter().map(|r| r.name)),
        width(&headers[3], rows.iter().map(|r| r.parallel)),
    ];

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(ui::header(format!(
        "{}  {}  {}  {}  {}",
        pad(&headers[0], widths[0]),
        pad(&headers[1], widths[1]),
        pad(&headers[2], widths[2]),
        pad(&headers[3], widths[3]),
        headers[4],
    )));
    for row in &rows {
        lines.push(format!(
            "{}  {}  {}  {}  {}",
            ui::dim(pad(row.id, widths[0])),
            pad(&row.date, widths[1]),
            pad(row.name, widths[2]),
            pad(row.parallel, widths[3]),
            ui::grade(row.grade),
        ));
    }
    lines.push(String::new());
    lines.push(ui::dim(t!("list.total", count = records.len())));
    lines.join("\n")
}

/// Short confirmation printed after an evaluation is saved.
pub fn render_saved(record: &EvaluationRecord) -> String {
    format!(
        "{} {}\n  {} {}\n  {} {} ({})\n  {} {}",
        ui::success("✓"),
        t!("evaluate.saved"),
        ui::accent("id:"),
        ui::dim(&record.id),
        ui::accent(t!("evaluate.student")),
        ui::value(&record.student_name),
        record.student_parallel,
        ui::accent(t!("evaluate.grade")),
        ui::grade(&record.grade),
    )
}
