//! Application state - dependency injection container.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::changefeed::ChangeFeed;
use crate::infra::Database;
use crate::jobs::PostgresCampaignQueue;
use crate::services::{ServiceContainer, Services};

/// Application state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    /// All business services
    pub services: Arc<dyn ServiceContainer>,
    /// Per-table change broadcast hub
    pub feed: Arc<ChangeFeed>,
    /// Database connection (health checks)
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state with production wiring.
    pub fn from_config(
        database: Arc<Database>,
        config: Config,
        campaign_queue: Arc<PostgresCampaignQueue>,
    ) -> Self {
        let feed = Arc::new(ChangeFeed::new());
        let services = Arc::new(Services::from_connection(
            database.get_connection(),
            feed.clone(),
            config,
            campaign_queue,
        ));

        Self {
            services,
            feed,
            database,
        }
    }

    /// Create application state with manually injected services, used by
    /// tests.
    pub fn new(
        services: Arc<dyn ServiceContainer>,
        feed: Arc<ChangeFeed>,
        database: Arc<Database>,
    ) -> Self {
        Self {
            services,
            feed,
            database,
        }
    }
}
