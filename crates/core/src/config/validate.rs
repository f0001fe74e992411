use super::{types::Config, ConfigError, SourceKind};

/// Validate configuration
/// Currently validates:
/// - Catalog section exists (enforced by serde)
/// - Server port is not 0
/// - Each selected source kind has its matching sub-config
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    // Server validation
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    validate_source(
        "catalog",
        config.catalog.source,
        config.catalog.file.is_some(),
        config.catalog.http.is_some(),
    )?;

    if let Some(curated) = &config.curated {
        validate_source(
            "curated",
            curated.source,
            curated.file.is_some(),
            curated.http.is_some(),
        )?;
    }

    Ok(())
}

fn validate_source(
    section: &str,
    kind: SourceKind,
    has_file: bool,
    has_http: bool,
) -> Result<(), ConfigError> {
    match kind {
        SourceKind::File if !has_file => Err(ConfigError::ValidationError(format!(
            "{section}.source = \"file\" requires a [{section}.file] section"
        ))),
        SourceKind::Http if !has_http => Err(ConfigError::ValidationError(format!(
            "{section}.source = \"http\" requires a [{section}.http] section"
        ))),
        _ => Ok(()),
    }
}
