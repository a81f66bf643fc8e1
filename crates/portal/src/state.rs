//! Application state shared across handlers.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;

use ctu_cards::{CardStore, JsonFileStorage, MemoryStorage, Storage};

use crate::config::PortalConfig;
use crate::db::MockDb;

/// How long a rendered public profile stays cached.
const PROFILE_CACHE_TTL: Duration = Duration::from_secs(60);

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to shared
/// resources: configuration, the in-memory dataset, the card store, and the
/// public-profile render cache.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: PortalConfig,
    db: MockDb,
    cards: CardStore,
    profile_cache: Cache<String, String>,
}

impl AppState {
    /// Create a new application state.
    ///
    /// The card store backend follows the configuration: a file-backed store
    /// under `cards_dir` when set, an in-memory store (demo mode) otherwise.
    #[must_use]
    pub fn new(config: PortalConfig) -> Self {
        let storage: Arc<dyn Storage> = match &config.cards_dir {
            Some(dir) => {
                tracing::info!(dir = %dir.display(), "using file-backed card store");
                Arc::new(JsonFileStorage::new(dir.clone()))
            }
            None => {
                tracing::info!("CTU_CARDS_DIR not set, card store is in-memory (demo mode)");
                Arc::new(MemoryStorage::new())
            }
        };

        Self {
            inner: Arc::new(AppStateInner {
                config,
                db: MockDb::seeded(),
                cards: CardStore::new(storage),
                profile_cache: Cache::builder()
                    .max_capacity(1_000)
                    .time_to_live(PROFILE_CACHE_TTL)
                    .build(),
            }),
        }
    }

    /// Get a reference to the portal configuration.
    #[must_use]
    pub fn config(&self) -> &PortalConfig {
        &self.inner.config
    }

    /// Get a reference to the in-memory dataset.
    #[must_use]
    pub fn db(&self) -> &MockDb {
        &self.inner.db
    }

    /// Get a reference to the card store.
    #[must_use]
    pub fn cards(&self) -> &CardStore {
        &self.inner.cards
    }

    /// Get a reference to the rendered-profile cache.
    #[must_use]
    pub fn profile_cache(&self) -> &Cache<String, String> {
        &self.inner.profile_cache
    }

    /// Drop a supplier's cached public profile after a change that affects it.
    pub async fn invalidate_profile(&self, supplier_id: &str) {
        self.inner.profile_cache.invalidate(supplier_id).await;
    }
}
