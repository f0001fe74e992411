use pressdeck_core::{CatalogStore, Config, CuratedLoader};

/// Shared application state
pub struct AppState {
    config: Config,
    catalog: CatalogStore,
    catalog_error: Option<String>,
    curated: Option<CuratedLoader>,
}

impl AppState {
    pub fn new(
        config: Config,
        catalog: CatalogStore,
        catalog_error: Option<String>,
        curated: Option<CuratedLoader>,
    ) -> Self {
        Self {
            config,
            catalog,
            catalog_error,
            curated,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    /// The persistent "data unavailable" notice, if catalog loading failed.
    pub fn catalog_error(&self) -> Option<&str> {
        self.catalog_error.as_deref()
    }

    pub fn curated(&self) -> Option<&CuratedLoader> {
        self.curated.as_ref()
    }
}
