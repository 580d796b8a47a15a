#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::unnecessary_literal_bound,
    clippy::module_name_repetitions,
    clippy::struct_field_names,
    clippy::must_use_candidate,
    clippy::new_without_default,
    clippy::return_self_not_must_use
)]

#[macro_use]
extern crate rust_i18n;

i18n!("locales", fallback = "es");

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod evaluation;
pub mod grading;
pub mod media;
pub mod providers;
pub mod records;
pub mod report;
pub mod ui;

pub use config::Config;
pub use error::{LogogradeError, Result};
pub use evaluation::{Evaluator, Submission};
pub use records::{EvaluationRecord, RecordStore};
