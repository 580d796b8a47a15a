use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaType {
    Image,
    Document,
    Other,
}

impl MediaType {
    #[must_use]
    pub fn from_mime(raw: &str) -> Self {
        let Ok(parsed) = raw.parse::<mime::Mime>() else {
            return Self::Other;
        };
        if parsed.type_() == mime::IMAGE {
            Self::Image
        } else if parsed.type_() == mime::TEXT || parsed.subtype() == mime::PDF {
            Self::Document
        } else {
            Self::Other
        }
    }
}

/// An image ready to travel inline in a provider request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAttachment {
    pub filename: Option<String>,
    pub mime_type: String,
    /// Standard base64 of the raw file bytes, without a `data:` prefix.
    pub data_base64: String,
    pub size_bytes: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaConfig {
    #[serde(default = "default_max_file_size_mb")]
    pub max_file_size_mb: u64,
}

fn default_max_file_size_mb() -> u64 {
    20
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            max_file_size_mb: default_max_file_size_mb(),
        }
    }
}

impl MediaConfig {
    #[must_use]
    pub fn max_file_size_bytes(&self) -> u64 {
        self.max_file_size_mb.saturating_mul(1_024 * 1_024)
    }
}
