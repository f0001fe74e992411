pub mod catalog;
pub mod config;
pub mod curated;
pub mod metrics;
pub mod query;
pub mod source;
pub mod testing;

pub use catalog::{
    CatalogDocument, CatalogError, CatalogStats, CatalogStore, FilterVocabulary,
    PublicationRecord,
};
pub use config::{
    build_source, load_config, load_config_from_str, validate_config, CatalogConfig, Config,
    ConfigError, CuratedConfig, FileSourceConfig, HttpSourceConfig, ServerConfig, SourceKind,
};
pub use curated::{
    normalize_name, CuratedDocument, CuratedError, CuratedIndex, CuratedLoader, CuratedState,
};
pub use query::{
    turnaround_days, visible_results, QueryResult, QueryState, SortDirection, SortKey, ViewMode,
};
pub use source::{DocumentSource, FileSource, HttpSource, SourceError};
