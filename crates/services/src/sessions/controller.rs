use std::sync::Arc;

use kanji_core::model::{AggregateStats, ModuleId, StudyModule};
use kanji_core::{Phase, SessionEvent, SessionState};

use crate::catalog::Catalog;
use crate::error::ControllerError;
use crate::stats_service::StatsService;

/// Outcome of an accepted event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dispatched {
    pub phase: Phase,
    /// Updated lifetime totals when the event completed a test pass.
    ///
    /// The caller is expected to follow up with `StatsService::persist`.
    pub committed: Option<AggregateStats>,
}

/// Drives one [`SessionState`] on behalf of the UI.
///
/// Every user intent is turned into a [`SessionEvent`]; rejected events leave
/// the state untouched and are logged at debug level.
pub struct SessionController {
    catalog: Arc<Catalog>,
    stats: Arc<StatsService>,
    state: SessionState,
}

impl SessionController {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, stats: Arc<StatsService>) -> Self {
        Self {
            catalog,
            stats,
            state: SessionState::Menu,
        }
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// # Errors
    ///
    /// Returns `ControllerError::UnknownModule` for an id outside the catalog.
    pub fn view_module(&mut self, id: ModuleId) -> Result<Dispatched, ControllerError> {
        let module = self.lookup(id)?;
        self.dispatch(SessionEvent::ViewModule(module))
    }

    /// # Errors
    ///
    /// Returns `ControllerError` for an unknown id or a refused transition.
    pub fn start_study(&mut self, id: ModuleId) -> Result<Dispatched, ControllerError> {
        let module = self.lookup(id)?;
        self.dispatch(SessionEvent::StartStudy(module))
    }

    /// Jump into study mode at a given character.
    ///
    /// # Errors
    ///
    /// Returns `ControllerError` for an unknown id or an index past the end.
    pub fn launch_module(
        &mut self,
        id: ModuleId,
        start_index: usize,
    ) -> Result<Dispatched, ControllerError> {
        let module = self.lookup(id)?;
        self.dispatch(SessionEvent::Launch {
            module,
            start_index,
        })
    }

    /// Start a test over the combined characters of the selected modules.
    ///
    /// Ids are resolved in catalog order; unknown ids are skipped.
    ///
    /// # Errors
    ///
    /// Returns `ControllerError::Session` when nothing valid was selected.
    pub fn start_custom_test(&mut self, ids: &[ModuleId]) -> Result<Dispatched, ControllerError> {
        let modules = self.catalog.select(ids);
        self.dispatch(SessionEvent::StartCustom(modules))
    }

    /// # Errors
    ///
    /// Returns `ControllerError::Session` outside study mode.
    pub fn advance(&mut self) -> Result<Dispatched, ControllerError> {
        self.dispatch(SessionEvent::Advance)
    }

    /// # Errors
    ///
    /// Returns `ControllerError::Session` outside study mode.
    pub fn retreat(&mut self) -> Result<Dispatched, ControllerError> {
        self.dispatch(SessionEvent::Retreat)
    }

    /// # Errors
    ///
    /// Returns `ControllerError::Session` outside study mode.
    pub fn start_test(&mut self) -> Result<Dispatched, ControllerError> {
        self.dispatch(SessionEvent::StartTest)
    }

    /// # Errors
    ///
    /// Returns `ControllerError::Session` outside study or test mode, or when
    /// the answer is already shown during a test.
    pub fn reveal(&mut self) -> Result<Dispatched, ControllerError> {
        self.dispatch(SessionEvent::Reveal)
    }

    /// Record a self-grade for the current test item.
    ///
    /// # Errors
    ///
    /// Returns `ControllerError::Session` before the answer is revealed.
    pub fn grade(&mut self, correct: bool) -> Result<Dispatched, ControllerError> {
        self.dispatch(SessionEvent::Grade(correct))
    }

    /// # Errors
    ///
    /// Never fails in practice; every phase accepts the exit.
    pub fn exit_to_menu(&mut self) -> Result<Dispatched, ControllerError> {
        self.dispatch(SessionEvent::ExitToMenu)
    }

    /// # Errors
    ///
    /// Returns `ControllerError::Session` outside the summary.
    pub fn retry(&mut self) -> Result<Dispatched, ControllerError> {
        self.dispatch(SessionEvent::Retry)
    }

    fn lookup(&self, id: ModuleId) -> Result<Arc<StudyModule>, ControllerError> {
        self.catalog
            .module(id)
            .ok_or(ControllerError::UnknownModule(id))
    }

    fn dispatch(&mut self, event: SessionEvent) -> Result<Dispatched, ControllerError> {
        let kind = event.kind();
        let from = self.state.phase();
        match self.state.apply(event) {
            Ok(delta) => {
                let committed = delta.map(|delta| self.stats.commit(delta));
                let phase = self.state.phase();
                tracing::debug!(event = %kind, %from, to = %phase, "session event applied");
                Ok(Dispatched { phase, committed })
            }
            Err(err) => {
                tracing::debug!(event = %kind, phase = %from, error = %err, "session event rejected");
                Err(err.into())
            }
        }
    }
}
