pub mod backend;
pub mod store;
pub mod types;

pub use backend::{JsonFileBackend, MemoryBackend, RecordBackend};
pub use store::RecordStore;
pub use types::{EvaluationRecord, NewEvaluation, STORAGE_KEY, new_record_id};
