use std::sync::Arc;

use storage::repository::Storage;

use crate::catalog::Catalog;
use crate::error::AppServicesError;
use crate::lookup::LookupService;
use crate::sessions::SessionController;
use crate::stats_service::StatsService;
use crate::stroke_order::StrokeOrderService;

/// Knobs the binary passes down when assembling services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServicesConfig {
    /// Base URL of the stroke-order SVG directory; `None` disables lookups.
    pub stroke_order_url: Option<String>,
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            stroke_order_url: Some(crate::stroke_order::DEFAULT_BASE_URL.to_owned()),
        }
    }
}

impl ServicesConfig {
    /// Configuration that never reaches the network.
    #[must_use]
    pub fn offline() -> Self {
        Self {
            stroke_order_url: None,
        }
    }
}

/// Assembles app-facing services over one storage backend.
#[derive(Clone)]
pub struct AppServices {
    catalog: Arc<Catalog>,
    stats: Arc<StatsService>,
    stroke_order: Arc<StrokeOrderService>,
    lookup: Arc<LookupService>,
}

impl AppServices {
    /// Build services over `storage` and load the persisted statistics.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the built-in catalog fails validation.
    pub async fn new(storage: Storage, config: &ServicesConfig) -> Result<Self, AppServicesError> {
        let catalog = Arc::new(Catalog::builtin()?);
        let stats = Arc::new(StatsService::new(Arc::clone(&storage.stats)));
        stats.load().await;

        let stroke_order = Arc::new(match &config.stroke_order_url {
            Some(url) => StrokeOrderService::new(url.clone()),
            None => StrokeOrderService::disabled(),
        });
        let lookup = Arc::new(LookupService::new(Arc::clone(&catalog)));

        tracing::info!(
            modules = catalog.modules().len(),
            stroke_order = stroke_order.enabled(),
            "services ready"
        );

        Ok(Self {
            catalog,
            stats,
            stroke_order,
            lookup,
        })
    }

    /// Build services backed by `SQLite` storage.
    ///
    /// A database that cannot be opened or migrated is not fatal: the app
    /// starts from zero counters held in memory and nothing is saved.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the built-in catalog fails validation.
    pub async fn new_sqlite(db_url: &str, config: &ServicesConfig) -> Result<Self, AppServicesError> {
        let storage = match Storage::sqlite(db_url).await {
            Ok(storage) => storage,
            Err(err) => {
                tracing::warn!(error = %err, db = db_url, "sqlite unavailable, stats will not be saved");
                Storage::in_memory()
            }
        };
        Self::new(storage, config).await
    }

    /// Build services over in-memory storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the built-in catalog fails validation.
    pub async fn in_memory(config: &ServicesConfig) -> Result<Self, AppServicesError> {
        Self::new(Storage::in_memory(), config).await
    }

    /// Fresh controller positioned at the menu.
    #[must_use]
    pub fn session_controller(&self) -> SessionController {
        SessionController::new(Arc::clone(&self.catalog), Arc::clone(&self.stats))
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn stats(&self) -> Arc<StatsService> {
        Arc::clone(&self.stats)
    }

    #[must_use]
    pub fn stroke_order(&self) -> Arc<StrokeOrderService> {
        Arc::clone(&self.stroke_order)
    }

    #[must_use]
    pub fn lookup(&self) -> Arc<LookupService> {
        Arc::clone(&self.lookup)
    }
}
