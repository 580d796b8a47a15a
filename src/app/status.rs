use crate::config::Config;
use crate::providers::GeminiProvider;
use crate::records::RecordStore;
use crate::ui::style as ui;

pub fn render_status(config: &Config, store: &RecordStore) -> String {
    let records = store.list();
    let api_key = if GeminiProvider::new(config.api_key.as_deref()).has_api_key() {
        ui::value(t!("status.api_key_set"))
    } else {
        ui::yellow(t!("status.api_key_missing"))
    };
    let rubric = config
        .rubric
        .template_path
        .as_deref()
        .map_or_else(|| t!("status.rubric_builtin").into_owned(), String::from);

    let mut lines = vec![
        format!("◆ {}", ui::header(t!("status.title"))),
        String::new(),
        format!("  {}     {}", t!("status.version"), env!("CARGO_PKG_VERSION")),
        format!("  {}      {}", t!("status.config"), config.config_path.display()),
        format!("  {}       {}", t!("status.store"), store.location()),
        format!("  {}     {}", t!("status.records"), records.len()),
        String::new(),
        format!("  {}       {}", t!("status.model"), config.model),
        format!("  {} {:.2}", t!("status.temperature"), config.temperature),
        format!("  {}     {}", t!("status.api_key"), api_key),
        format!("  {}      {}", t!("status.rubric"), rubric),
        format!(
            "  {}      {} ({})",
            t!("status.report"),
            config.report.locale,
            config.report.date_format
        ),
    ];

    if let Some(latest) = records.first() {
        lines.push(String::new());
        lines.push(format!(
            "  {}      {} · {} · {}",
            t!("status.latest"),
            latest.student_name,
            latest.student_parallel,
            ui::grade(&latest.grade)
        ));
    }

    lines.join("\n")
}
