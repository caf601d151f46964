mod card_vm;
mod session_vm;
mod stats_vm;
mod summary_vm;

pub use card_vm::{CardVm, NO_READING, map_card};
pub use session_vm::{PromptKind, SessionIntent, apply_intent};
pub use stats_vm::{StatsVm, map_stats};
pub use summary_vm::{ResultChipVm, SummaryVm, map_summary};
