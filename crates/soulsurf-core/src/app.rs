use anyhow::Result;
use std::sync::Arc;

use soulsurf_community::CommunityStore;
use soulsurf_locations::LocationCatalog;

use crate::Config;

/// Main application state and lifecycle manager.
///
/// Holds the immutable location catalog and the community store; the UI
/// layer reads through the accessors and never reaches into the collections
/// directly.
pub struct App {
    config: Arc<Config>,
    catalog: LocationCatalog,
    community: Arc<CommunityStore>,
}

impl App {
    /// Create a new application instance from the on-disk config
    pub fn new() -> Result<Self> {
        let (config, _validation) = Config::load_validated()?;
        Ok(Self::with_config(config))
    }

    /// Create an application instance with an explicit config (tests)
    pub fn with_config(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            catalog: LocationCatalog::seed(),
            community: Arc::new(CommunityStore::seed()),
        }
    }

    /// Initialize application state
    pub fn initialize(&mut self) -> Result<()> {
        tracing::info!(
            "Initializing with {} locations, {} posts, {} comments",
            self.catalog.len(),
            self.community.post_count(),
            self.community.comment_count(),
        );
        Ok(())
    }

    /// Shutdown the application
    pub fn shutdown(&mut self) -> Result<()> {
        tracing::info!("Shutting down application");
        Ok(())
    }

    /// Get reference to application config
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The immutable location catalog
    pub fn catalog(&self) -> &LocationCatalog {
        &self.catalog
    }

    /// The community store (posts, comments, session logs)
    pub fn community(&self) -> &Arc<CommunityStore> {
        &self.community
    }
}
