use super::backend::RecordBackend;
use super::types::{EvaluationRecord, NewEvaluation, new_record_id};
use crate::error::StoreError;
use tracing::{info, warn};

/// Newest-first sequence of evaluation records over a [`RecordBackend`].
///
/// Every write is a read-modify-write of the whole sequence. The store assumes
/// a single writer; two processes writing at once can lose an update.
pub struct RecordStore {
    backend: Box<dyn RecordBackend>,
}

impl RecordStore {
    pub fn new(backend: Box<dyn RecordBackend>) -> Self {
        Self { backend }
    }

    #[must_use]
    pub fn location(&self) -> String {
        self.backend.location()
    }

    /// Assign an id and timestamp, prepend the record and persist.
    pub fn create(&self, new: NewEvaluation) -> Result<EvaluationRecord, StoreError> {
        let existing = self.list();

        let mut id = new_record_id();
        while existing.iter().any(|record| record.id == id) {
            id = new_record_id();
        }

        let record = EvaluationRecord {
            id,
            student_name: new.student_name,
            student_parallel: new.student_parallel,
            timestamp: chrono::Utc::now().timestamp_millis(),
            grade: new.grade,
            analysis_text: new.analysis_text,
        };

        let mut updated = Vec::with_capacity(existing.len() + 1);
        updated.push(record.clone());
        updated.extend(existing);
        self.backend.save(&updated)?;

        info!(
            id = %record.id,
            student = %record.student_name,
            grade = %record.grade,
            total = updated.len(),
            "evaluation record saved"
        );
        Ok(record)
    }

    /// All records, newest first. Unreadable or corrupted storage lists as empty.
    pub fn list(&self) -> Vec<EvaluationRecord> {
        match self.backend.load() {
            Ok(records) => records,
            Err(error) => {
                warn!(
                    location = %self.backend.location(),
                    %error,
                    "evaluation store unreadable, treating as empty"
                );
                Vec::new()
            }
        }
    }

    /// Remove the record with `id` if present and persist the remainder.
    pub fn delete(&self, id: &str) -> Result<Vec<EvaluationRecord>, StoreError> {
        let existing = self.list();
        let before = existing.len();
        let remaining: Vec<EvaluationRecord> =
            existing.into_iter().filter(|record| record.id != id).collect();

        self.backend.save(&remaining)?;

        if remaining.len() < before {
            info!(id, total = remaining.len(), "evaluation record deleted");
        }
        Ok(remaining)
    }

    pub fn get(&self, id: &str) -> Option<EvaluationRecord> {
        self.list().into_iter().find(|record| record.id == id)
    }

    /// Find a record by exact id, or by an id prefix matching exactly one record.
    pub fn resolve(&self, id_or_prefix: &str) -> Result<EvaluationRecord, StoreError> {
        let needle = id_or_prefix.trim();
        if let Some(exact) = self.get(needle) {
            return Ok(exact);
        }
        if needle.is_empty() {
            return Err(StoreError::NotFound(needle.to_string()));
        }

        let mut matches = self
            .list()
            .into_iter()
            .filter(|record| record.id.starts_with(needle));
        match (matches.next(), matches.next()) {
            (Some(record), None) => Ok(record),
            (Some(_), Some(_)) => Err(StoreError::Ambiguous(needle.to_string())),
            (None, _) => Err(StoreError::NotFound(needle.to_string())),
        }
    }
}
