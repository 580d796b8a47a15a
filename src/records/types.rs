use serde::{Deserialize, Serialize};

/// Fixed namespace key the whole record sequence is stored under.
pub const STORAGE_KEY: &str = "logo_evaluations_db";

/// One saved evaluation of a single student submission.
///
/// Field names serialize in camelCase so the persisted blob keeps the
/// `studentName` / `analysisText` layout of existing stores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationRecord {
    pub id: String,
    pub student_name: String,
    pub student_parallel: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
    pub grade: String,
    pub analysis_text: String,
}

/// Caller-supplied part of a record; the store assigns `id` and `timestamp`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvaluation {
    pub student_name: String,
    pub student_parallel: String,
    pub grade: String,
    pub analysis_text: String,
}

impl EvaluationRecord {
    /// First eight characters of the id, as shown in listings.
    #[must_use]
    pub fn short_id(&self) -> &str {
        self.id.get(..8).unwrap_or(&self.id)
    }
}

#[must_use]
pub fn new_record_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
