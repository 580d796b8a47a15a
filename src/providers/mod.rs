pub mod gemini;
mod gemini_types;
pub mod http_client;
pub mod scrub;
pub mod traits;

pub use gemini::GeminiProvider;
pub use http_client::{build_provider_client, build_provider_client_with_timeout};
pub use scrub::{api_error, sanitize_api_error, scrub_secret_patterns};
pub use traits::{AnalysisRequest, Provider};

use crate::config::Config;

/// The configured analysis provider.
pub fn create_provider(config: &Config) -> Box<dyn Provider> {
    let provider = GeminiProvider::new(config.api_key.as_deref())
        .with_base_url(&config.api_base_url)
        .with_client(build_provider_client_with_timeout(
            config.request_timeout_secs,
        ));
    Box::new(provider)
}
