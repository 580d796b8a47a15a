pub mod extract;
pub mod prompt;

pub use extract::{PENDING_GRADE, extract_grade};
pub use prompt::{DEFAULT_RUBRIC, RubricPrompt};
