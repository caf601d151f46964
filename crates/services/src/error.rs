//! Shared error types for the services crate.

use thiserror::Error;

use kanji_core::SessionError;
use kanji_core::model::ModuleId;
use storage::repository::StorageError;

/// Errors raised while building the built-in catalog.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error(transparent)]
    Data(#[from] kanji_core::Error),
}

/// Errors emitted by `StatsService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StatsServiceError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `SessionController`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ControllerError {
    #[error("unknown module {0}")]
    UnknownModule(ModuleId),
    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Errors raised while fetching a stroke-order diagram.
///
/// These never reach callers of `StrokeOrderService::lookup`, which falls back
/// to the plain glyph instead.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StrokeOrderError {
    #[error("stroke order lookups are disabled")]
    Disabled,
    #[error("stroke order request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("stroke order resource is not an svg document")]
    Malformed,
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
