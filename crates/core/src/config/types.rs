use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::path::PathBuf;

/// Root configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
    /// Optional curated "best sellers" list. When absent, curated view mode
    /// is unavailable and requests fall back to the full catalog.
    #[serde(default)]
    pub curated: Option<CuratedConfig>,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> IpAddr {
    "0.0.0.0".parse().unwrap()
}

fn default_port() -> u16 {
    8080
}

/// Where a document comes from
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    File,
    Http,
}

/// Catalog document configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Source backend type
    pub source: SourceKind,
    /// File-specific configuration (required when source = "file")
    #[serde(default)]
    pub file: Option<FileSourceConfig>,
    /// HTTP-specific configuration (required when source = "http")
    #[serde(default)]
    pub http: Option<HttpSourceConfig>,
}

/// Curated-list document configuration, same shape as the catalog's
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CuratedConfig {
    pub source: SourceKind,
    #[serde(default)]
    pub file: Option<FileSourceConfig>,
    #[serde(default)]
    pub http: Option<HttpSourceConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FileSourceConfig {
    /// Path to the JSON document
    pub path: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HttpSourceConfig {
    /// Document URL (e.g. "https://cdn.example.com/catalog.json")
    pub url: String,
    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_timeout() -> u64 {
    30
}
