use super::types::{EvaluationRecord, STORAGE_KEY};
use crate::error::StoreError;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Durable home of the serialized record sequence.
///
/// A backend only moves the whole sequence in and out; ordering, id
/// assignment and soft failure on corrupted data live in [`super::RecordStore`].
pub trait RecordBackend: Send + Sync {
    /// Human-readable location, used in logs and `status`.
    fn location(&self) -> String;

    /// Load the stored sequence. Nothing stored yet is `Ok(vec![])`.
    fn load(&self) -> Result<Vec<EvaluationRecord>, StoreError>;

    /// Replace the stored sequence with `records`.
    fn save(&self, records: &[EvaluationRecord]) -> Result<(), StoreError>;
}

fn decode(location: &str, raw: &str) -> Result<Vec<EvaluationRecord>, StoreError> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(raw).map_err(|e| StoreError::Corrupted(format!("{location}: {e}")))
}

fn encode(location: &str, records: &[EvaluationRecord]) -> Result<String, StoreError> {
    serde_json::to_string_pretty(records).map_err(|e| StoreError::Write {
        location: location.to_string(),
        message: e.to_string(),
    })
}

// ── JSON file ────────────────────────────────────────────────────────────────

/// Stores the sequence as `<dir>/logo_evaluations_db.json`.
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(format!("{STORAGE_KEY}.json")),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordBackend for JsonFileBackend {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<Vec<EvaluationRecord>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(&self.path).map_err(|e| StoreError::Read {
            location: self.location(),
            message: e.to_string(),
        })?;
        decode(&self.location(), &raw)
    }

    fn save(&self, records: &[EvaluationRecord]) -> Result<(), StoreError> {
        let content = encode(&self.location(), records)?;
        write_atomic(&self.path, &content).map_err(|e| StoreError::Write {
            location: self.location(),
            message: e.to_string(),
        })
    }
}

fn write_atomic(path: &Path, content: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, content)?;

    if let Err(rename_error) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(rename_error);
    }

    Ok(())
}

// ── In-memory ────────────────────────────────────────────────────────────────

/// Keeps the serialized blob in memory, exactly as a key-value entry would.
#[derive(Default)]
pub struct MemoryBackend {
    blob: Mutex<Option<String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an arbitrary stored value, well-formed or not.
    pub fn with_raw(raw: &str) -> Self {
        Self {
            blob: Mutex::new(Some(raw.to_string())),
        }
    }

    /// Current stored value.
    pub fn raw(&self) -> Option<String> {
        self.blob
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }
}

impl RecordBackend for MemoryBackend {
    fn location(&self) -> String {
        format!("memory:{STORAGE_KEY}")
    }

    fn load(&self) -> Result<Vec<EvaluationRecord>, StoreError> {
        match self.raw() {
            Some(raw) => decode(&self.location(), &raw),
            None => Ok(Vec::new()),
        }
    }

    fn save(&self, records: &[EvaluationRecord]) -> Result<(), StoreError> {
        let content = encode(&self.location(), records)?;
        *self
            .blob
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = Some(content);
        Ok(())
    }
}
