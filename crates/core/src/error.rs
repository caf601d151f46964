use thiserror::Error;

use crate::model::{CharacterError, ModuleError, StatsError};
use crate::session::SessionError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Character(#[from] CharacterError),
    #[error(transparent)]
    Module(#[from] ModuleError),
    #[error(transparent)]
    Stats(#[from] StatsError),
    #[error(transparent)]
    Session(#[from] SessionError),
}
