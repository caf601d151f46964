use std::sync::Arc;

use services::{Catalog, LookupService, SessionController, StatsService, StrokeOrderService};

/// Services the composition root hands to the UI.
pub trait UiApp: Send + Sync {
    fn catalog(&self) -> Arc<Catalog>;
    fn stats(&self) -> Arc<StatsService>;
    fn stroke_order(&self) -> Arc<StrokeOrderService>;
    fn lookup(&self) -> Arc<LookupService>;
}

#[derive(Clone)]
pub struct AppContext {
    catalog: Arc<Catalog>,
    stats: Arc<StatsService>,
    stroke_order: Arc<StrokeOrderService>,
    lookup: Arc<LookupService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            catalog: app.catalog(),
            stats: app.stats(),
            stroke_order: app.stroke_order(),
            lookup: app.lookup(),
        }
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

    /// Controller for a new session, starting at the menu.
    #[must_use]
    pub fn new_controller(&self) -> SessionController {
        SessionController::new(self.catalog(), self.stats())
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
