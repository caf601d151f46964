#![forbid(unsafe_code)]

pub mod app_services;
pub mod catalog;
pub mod error;
pub mod lookup;
pub mod sessions;
pub mod stats_service;
pub mod stroke_order;

pub use app_services::{AppServices, ServicesConfig};
pub use catalog::{Catalog, KanaEntry, SyllabaryGuide};
pub use error::{AppServicesError, CatalogError, ControllerError, StatsServiceError};
pub use lookup::{LookupResult, LookupService};
pub use sessions::{Dispatched, SessionController};
pub use stats_service::StatsService;
pub use stroke_order::{StrokeDiagram, StrokeDisplay, StrokeOrderService, StrokeOrderSlot};
