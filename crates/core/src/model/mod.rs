mod character;
mod ids;
mod module;
mod stats;

pub use ids::{ModuleId, ParseIdError};

pub use character::{CharacterError, CharacterRecord, Reading, ReadingKind};
pub use module::{ModuleError, StudyModule};
pub use stats::{AggregateStats, StatsDelta, StatsError};
