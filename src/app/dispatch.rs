use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::evaluation::{Evaluator, Submission, open_store};
use crate::records::RecordStore;
use crate::report::{self, ReportStyle};
use crate::ui::style as ui;
use anyhow::{Context, Result};
use dialoguer::Confirm;
use std::path::{Path, PathBuf};

use super::history::{render_list, render_saved};
use super::status::render_status;

async fn run_evaluate(
    config: &Config,
    style: &ReportStyle,
    submission: Submission,
    report_dir: Option<PathBuf>,
) -> Result<()> {
    let evaluator = Evaluator::from_config(config)?;

    println!(
        "{} {}",
        ui::accent("▸"),
        t!("evaluate.analyzing", name = submission.student_name.trim())
    );
    let record = evaluator.evaluate(&submission).await?;

    println!();
    println!("{}", record.analysis_text);
    println!();
    println!("{}", render_saved(&record));

    if let Some(dir) = report_dir {
        let path = report::write_report(&record, style, &dir)?;
        println!(
            "  {} {}",
            ui::accent(t!("report.written")),
            ui::value(path.display())
        );
    }
    Ok(())
}

fn run_show(store: &RecordStore, style: &ReportStyle, id: &str) -> Result<()> {
    let record = store.resolve(id)?;
    println!("{}", ui::dim(&record.id));
    println!("{}", report::render_report(&record, style));
    Ok(())
}

fn run_report(
    store: &RecordStore,
    style: &ReportStyle,
    id: &str,
    output_dir: Option<&Path>,
) -> Result<()> {
    let record = store.resolve(id)?;
    let dir = output_dir.unwrap_or_else(|| Path::new("."));
    let path = report::write_report(&record, style, dir)?;
    println!(
        "{} {} {}",
        ui::success("✓"),
        t!("report.written"),
        ui::value(path.display())
    );
    Ok(())
}

fn run_delete(store: &RecordStore, id: &str, skip_confirm: bool) -> Result<()> {
    let record = store.resolve(id)?;

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "  {}",
                t!(
                    "delete.confirm",
                    name = record.student_name.as_str(),
                    parallel = record.student_parallel.as_str()
                )
            ))
            .default(false)
            .interact()
            .context("Failed to read confirmation")?;
        if !confirmed {
            println!("{}", ui::dim(t!("delete.cancelled")));
            return Ok(());
        }
    }

    let remaining = store.delete(&record.id)?;
    println!(
        "{} {}",
        ui::success("✓"),
        t!("delete.done", count = remaining.len())
    );
    Ok(())
}

pub async fn dispatch(cli: Cli, config: Config) -> Result<()> {
    let style = config.report_style()?;

    match cli.command {
        Commands::Evaluate {
            name,
            parallel,
            image,
            context,
            report_dir,
        } => {
            let submission = Submission {
                student_name: name,
                student_parallel: parallel,
                image_path: Some(image),
                context,
            };
            run_evaluate(&config, &style, submission, report_dir).await
        }

        Commands::List => {
            let records = open_store(&config).list();
            if records.is_empty() {
                println!("{}", ui::dim(t!("list.empty")));
            } else {
                println!("{}", render_list(&records, &style));
            }
            Ok(())
        }

        Commands::Show { id } => run_show(&open_store(&config), &style, &id),

        Commands::Report { id, output_dir } => {
            run_report(&open_store(&config), &style, &id, output_dir.as_deref())
        }

        Commands::Delete { id, yes } => run_delete(&open_store(&config), &id, yes),

        Commands::Status => {
            println!("{}", render_status(&config, &open_store(&config)));
            Ok(())
        }
    }
}
