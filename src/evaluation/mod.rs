//! One evaluation end to end: validate the submission, send the image with the
//! rubric to the provider, pull the grade out of the critique and save the
//! record.
//!
//! A record is only written once the provider has answered. Validation,
//! media, prompt and provider failures all return before the store is touched.

use crate::config::Config;
use crate::error::{LogogradeError, ValidationError};
use crate::grading::{RubricPrompt, extract_grade};
use crate::media::{self, MediaConfig};
use crate::providers::{self, AnalysisRequest, Provider};
use crate::records::{EvaluationRecord, JsonFileBackend, NewEvaluation, RecordStore};
use std::path::{Path, PathBuf};
use tracing::info;

/// One student's entry: who they are, the logo file and their concept notes.
#[derive(Debug, Clone, Default)]
pub struct Submission {
    pub student_name: String,
    pub student_parallel: String,
    pub image_path: Option<PathBuf>,
    /// Free text from the student describing the logo's concept.
    pub context: String,
}

impl Submission {
    /// Check the required fields; returns the image path on success.
    pub fn validate(&self) -> Result<&Path, ValidationError> {
        if self.student_name.trim().is_empty() {
            return Err(ValidationError::MissingStudentName);
        }
        if self.student_parallel.trim().is_empty() {
            return Err(ValidationError::MissingStudentParallel);
        }
        self.image_path
            .as_deref()
            .ok_or(ValidationError::MissingImage)
    }
}

#[derive(Debug, Clone)]
pub struct AnalysisSettings {
    pub model: String,
    pub temperature: f64,
    pub media: MediaConfig,
}

impl AnalysisSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            model: config.model.clone(),
            temperature: config.temperature,
            media: config.media.clone(),
        }
    }
}

pub struct Evaluator {
    provider: Box<dyn Provider>,
    store: RecordStore,
    rubric: RubricPrompt,
    settings: AnalysisSettings,
}

impl Evaluator {
    pub fn new(
        provider: Box<dyn Provider>,
        store: RecordStore,
        rubric: RubricPrompt,
        settings: AnalysisSettings,
    ) -> Self {
        Self {
            provider,
            store,
            rubric,
            settings,
        }
    }

    /// Gemini provider, file-backed store and the configured rubric.
    pub fn from_config(config: &Config) -> Result<Self, LogogradeError> {
        let rubric = RubricPrompt::load(config.rubric.template_path.as_deref().map(Path::new))?;
        Ok(Self::new(
            providers::create_provider(config),
            open_store(config),
            rubric,
            AnalysisSettings::from_config(config),
        ))
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub async fn evaluate(
        &self,
        submission: &Submission,
    ) -> Result<EvaluationRecord, LogogradeError> {
        let image_path = submission.validate()?;

        let image = media::load_image(image_path, &self.settings.media).await?;
        let prompt = self.rubric.render(&submission.context)?;

        info!(
            provider = self.provider.name(),
            model = %self.settings.model,
            student = submission.student_name.trim(),
            "requesting logo analysis"
        );
        let analysis_text = self
            .provider
            .analyze_image(&AnalysisRequest {
                prompt: &prompt,
                image: &image,
                model: &self.settings.model,
                temperature: self.settings.temperature,
            })
            .await?;

        let grade = extract_grade(&analysis_text);
        let record = self.store.create(NewEvaluation {
            student_name: submission.student_name.trim().to_string(),
            student_parallel: submission.student_parallel.trim().to_string(),
            grade,
            analysis_text,
        })?;
        Ok(record)
    }
}

/// The record store under the configured data directory.
pub fn open_store(config: &Config) -> RecordStore {
    RecordStore::new(Box::new(JsonFileBackend::new(&config.data_dir())))
}
