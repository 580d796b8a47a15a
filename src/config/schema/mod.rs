mod env_overrides;
mod loader;
mod locale;
#[cfg(test)]
pub(crate) mod test_env;
mod types;

pub use types::{Config, ReportConfig, RubricConfig};
