use thiserror::Error;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for `logograde`.
///
/// Each subsystem defines its own error variant. The CLI matches on these to
/// pick a user-facing message; internal code continues to use
/// `anyhow::Result` for ad-hoc context chains.
#[derive(Debug, Error)]
pub enum LogogradeError {
    // ── Config ───────────────────────────────────────────────────────────
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    // ── Input validation ────────────────────────────────────────────────
    #[error("validation: {0}")]
    Validation(#[from] ValidationError),

    // ── LLM / Provider ──────────────────────────────────────────────────
    #[error("llm: {0}")]
    Llm(#[from] LlmError),

    // ── Record store ────────────────────────────────────────────────────
    #[error("store: {0}")]
    Store(#[from] StoreError),

    // ── Media intake ────────────────────────────────────────────────────
    #[error("media: {0}")]
    Media(#[from] MediaError),

    // ── Prompt / Template ───────────────────────────────────────────────
    #[error("prompt: {0}")]
    Prompt(#[from] PromptError),

    // ── Generic fallthrough (wraps anyhow for interop) ──────────────────
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("validation failed: {0}")]
    Validation(String),
}

// ─── Validation errors ───────────────────────────────────────────────────────

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("student name is required")]
    MissingStudentName,

    #[error("student parallel is required")]
    MissingStudentParallel,

    #[error("an image file is required")]
    MissingImage,
}

// ─── LLM / Provider errors ──────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("provider {provider} request failed: {message}")]
    Request { provider: String, message: String },

    #[error("provider {provider} authentication failed")]
    Auth { provider: String },

    #[error("provider {provider} is missing an API key")]
    MissingApiKey { provider: String },
}

// ─── Store errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {location}: {message}")]
    Read { location: String, message: String },

    #[error("failed to write {location}: {message}")]
    Write { location: String, message: String },

    #[error("stored records are not valid: {0}")]
    Corrupted(String),

    #[error("no record matches id {0}")]
    NotFound(String),

    #[error("id prefix {0} matches more than one record")]
    Ambiguous(String),
}

// ─── Media errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum MediaError {
    #[error("unsupported file type {mime}: only images can be evaluated")]
    NotAnImage { mime: String },

    #[error("file size {size} exceeds maximum {max} bytes")]
    TooLarge { size: u64, max: u64 },

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

// ─── Prompt / Template errors ───────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("template render failed: {0}")]
    Render(String),

    #[error("template not found: {0}")]
    NotFound(String),
}

// ─── Convenience re-exports ─────────────────────────────────────────────────

/// Shorthand result type for the crate.
pub type Result<T> = std::result::Result<T, LogogradeError>;
