pub mod schema;

pub use crate::media::MediaConfig;
pub use schema::{Config, ReportConfig, RubricConfig};
