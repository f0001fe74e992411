mod loader;
mod types;
mod validate;

pub use loader::{load_config, load_config_from_str};
pub use types::*;
pub use validate::validate_config;

use thiserror::Error;

use crate::source::{DocumentSource, FileSource, HttpSource};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

/// Build a document source from a validated source section.
///
/// Call after `validate_config`; an unvalidated section missing its
/// sub-config is rejected here as well.
pub fn build_source(
    kind: SourceKind,
    file: Option<&FileSourceConfig>,
    http: Option<&HttpSourceConfig>,
) -> Result<Box<dyn DocumentSource>, ConfigError> {
    match kind {
        SourceKind::File => file
            .map(|cfg| Box::new(FileSource::new(&cfg.path)) as Box<dyn DocumentSource>)
            .ok_or_else(|| {
                ConfigError::ValidationError("file source selected but no [.file] config".into())
            }),
        SourceKind::Http => http
            .map(|cfg| {
                Box::new(HttpSource::new(&cfg.url, cfg.timeout_secs)) as Box<dyn DocumentSource>
            })
            .ok_or_else(|| {
                ConfigError::ValidationError("http source selected but no [.http] config".into())
            }),
    }
}
