//! Study/test session state machine.
//!
//! The whole session is a single [`SessionState`] value advanced by the pure
//! [`transition`] function. A transition either yields the next state (plus an
//! optional statistics commit) or refuses the event, in which case the caller
//! keeps the previous state untouched.

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::model::{CharacterRecord, ModuleError, StatsDelta, StudyModule};

//
// ─── PHASE ─────────────────────────────────────────────────────────────────────
//

/// Field-less tag of a [`SessionState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Menu,
    Overview,
    Study,
    Test,
    Summary,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Menu => "menu",
            Phase::Overview => "overview",
            Phase::Study => "study",
            Phase::Test => "test",
            Phase::Summary => "summary",
        };
        f.write_str(name)
    }
}

//
// ─── EVENTS ────────────────────────────────────────────────────────────────────
//

/// User actions dispatched by the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// Preview a module before starting it.
    ViewModule(Arc<StudyModule>),
    /// Start studying a module from its first character.
    StartStudy(Arc<StudyModule>),
    /// Start a custom set combined from the given modules.
    StartCustom(Vec<Arc<StudyModule>>),
    /// Start studying a module at a given character.
    Launch {
        module: Arc<StudyModule>,
        start_index: usize,
    },
    Advance,
    Retreat,
    /// Skip the rest of the study pass and start the test.
    StartTest,
    Reveal,
    /// Self-grade the current test item.
    Grade(bool),
    ExitToMenu,
    Retry,
}

/// Payload-free name of a [`SessionEvent`], used in errors and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    ViewModule,
    StartStudy,
    StartCustom,
    Launch,
    Advance,
    Retreat,
    StartTest,
    Reveal,
    Grade,
    ExitToMenu,
    Retry,
}

impl SessionEvent {
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            SessionEvent::ViewModule(_) => EventKind::ViewModule,
            SessionEvent::StartStudy(_) => EventKind::StartStudy,
            SessionEvent::StartCustom(_) => EventKind::StartCustom,
            SessionEvent::Launch { .. } => EventKind::Launch,
            SessionEvent::Advance => EventKind::Advance,
            SessionEvent::Retreat => EventKind::Retreat,
            SessionEvent::StartTest => EventKind::StartTest,
            SessionEvent::Reveal => EventKind::Reveal,
            SessionEvent::Grade(_) => EventKind::Grade,
            SessionEvent::ExitToMenu => EventKind::ExitToMenu,
            SessionEvent::Retry => EventKind::Retry,
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EventKind::ViewModule => "view module",
            EventKind::StartStudy => "start study",
            EventKind::StartCustom => "start custom test",
            EventKind::Launch => "launch module",
            EventKind::Advance => "advance",
            EventKind::Retreat => "retreat",
            EventKind::StartTest => "start test",
            EventKind::Reveal => "reveal",
            EventKind::Grade => "grade",
            EventKind::ExitToMenu => "exit to menu",
            EventKind::Retry => "retry",
        };
        f.write_str(name)
    }
}

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("{event} is not allowed during {phase}")]
    NotAllowed { phase: Phase, event: EventKind },

    #[error("answer must be revealed before grading")]
    NotRevealed,

    #[error("answer is already revealed")]
    AlreadyRevealed,

    #[error("start index {index} is outside a module of {len} characters")]
    IndexOutOfRange { index: usize, len: usize },

    #[error(transparent)]
    Module(#[from] ModuleError),
}

//
// ─── STATE ─────────────────────────────────────────────────────────────────────
//

/// Self-graded outcome for one test item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestResult {
    pub glyph: char,
    pub correct: bool,
}

/// Complete session state.
///
/// During `Test` the cursor is `results.len()`: one result is recorded per
/// item, so the recorded count and the position cannot drift apart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Menu,
    Overview {
        module: Arc<StudyModule>,
    },
    Study {
        module: Arc<StudyModule>,
        index: usize,
        revealed: bool,
    },
    Test {
        module: Arc<StudyModule>,
        results: Vec<TestResult>,
        revealed: bool,
    },
    Summary {
        module: Arc<StudyModule>,
        results: Vec<TestResult>,
    },
}

/// Successful transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub next: SessionState,
    /// Present only on the edge from the last test item into `Summary`.
    pub commit: Option<StatsDelta>,
}

impl Step {
    fn to(next: SessionState) -> Self {
        Self { next, commit: None }
    }
}

impl SessionState {
    #[must_use]
    pub fn phase(&self) -> Phase {
        match self {
            SessionState::Menu => Phase::Menu,
            SessionState::Overview { .. } => Phase::Overview,
            SessionState::Study { .. } => Phase::Study,
            SessionState::Test { .. } => Phase::Test,
            SessionState::Summary { .. } => Phase::Summary,
        }
    }

    /// Module bound to the session, if any.
    #[must_use]
    pub fn active_module(&self) -> Option<&Arc<StudyModule>> {
        match self {
            SessionState::Menu => None,
            SessionState::Overview { module }
            | SessionState::Study { module, .. }
            | SessionState::Test { module, .. }
            | SessionState::Summary { module, .. } => Some(module),
        }
    }

    /// Cursor position; only defined while studying or testing.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        match self {
            SessionState::Study { index, .. } => Some(*index),
            SessionState::Test { results, .. } => Some(results.len()),
            _ => None,
        }
    }

    #[must_use]
    pub fn current_character(&self) -> Option<&CharacterRecord> {
        let index = self.current_index()?;
        self.active_module()?.character(index)
    }

    #[must_use]
    pub fn revealed(&self) -> bool {
        match self {
            SessionState::Study { revealed, .. } | SessionState::Test { revealed, .. } => *revealed,
            _ => false,
        }
    }

    /// Results recorded in the current (or just completed) test pass.
    #[must_use]
    pub fn results(&self) -> &[TestResult] {
        match self {
            SessionState::Test { results, .. } | SessionState::Summary { results, .. } => results,
            _ => &[],
        }
    }

    /// Number of correct results; always derived from `results`.
    #[must_use]
    pub fn score(&self) -> usize {
        count_correct(self.results())
    }

    /// Share of test items already graded, as a whole percentage.
    #[must_use]
    pub fn progress_percent(&self) -> u8 {
        match self {
            SessionState::Test { module, results, .. } => {
                let pct = results.len().saturating_mul(100) / module.len().max(1);
                u8::try_from(pct).unwrap_or(100)
            }
            SessionState::Summary { .. } => 100,
            _ => 0,
        }
    }

    /// Apply an event in place.
    ///
    /// On error the state is left exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` when the event is not valid for the current state.
    pub fn apply(&mut self, event: SessionEvent) -> Result<Option<StatsDelta>, SessionError> {
        let step = transition(self, event)?;
        *self = step.next;
        Ok(step.commit)
    }
}

fn count_correct(results: &[TestResult]) -> usize {
    results.iter().filter(|r| r.correct).count()
}

fn begin_test(module: &Arc<StudyModule>) -> SessionState {
    SessionState::Test {
        module: Arc::clone(module),
        results: Vec::new(),
        revealed: false,
    }
}

fn begin_study(module: Arc<StudyModule>, index: usize) -> Result<SessionState, SessionError> {
    if index >= module.len() {
        return Err(SessionError::IndexOutOfRange {
            index,
            len: module.len(),
        });
    }
    Ok(SessionState::Study {
        module,
        index,
        revealed: false,
    })
}

//
// ─── TRANSITION ────────────────────────────────────────────────────────────────
//

/// Compute the state that follows `state` after `event`.
///
/// # Errors
///
/// Returns `SessionError` for events the current state does not accept, a
/// custom selection with no modules, or a launch index past the module end.
#[allow(clippy::too_many_lines)]
pub fn transition(state: &SessionState, event: SessionEvent) -> Result<Step, SessionError> {
    use SessionEvent as E;
    use SessionState as S;

    let phase = state.phase();
    let kind = event.kind();
    let not_allowed = || SessionError::NotAllowed { phase, event: kind };

    match (state, event) {
        (S::Menu, E::ViewModule(module)) => Ok(Step::to(S::Overview { module })),

        (S::Menu, E::StartCustom(sources)) => {
            let combined = StudyModule::combine(sources.iter().map(AsRef::as_ref))?;
            Ok(Step::to(begin_study(Arc::new(combined), 0)?))
        }

        (S::Menu | S::Overview { .. }, E::StartStudy(module)) => {
            Ok(Step::to(begin_study(module, 0)?))
        }

        (
            S::Menu | S::Overview { .. },
            E::Launch {
                module,
                start_index,
            },
        ) => Ok(Step::to(begin_study(module, start_index)?)),

        (_, E::ExitToMenu) => Ok(Step::to(S::Menu)),

        (S::Study { module, index, .. }, E::Advance) => {
            if *index < module.last_index() {
                Ok(Step::to(S::Study {
                    module: Arc::clone(module),
                    index: index + 1,
                    revealed: false,
                }))
            } else {
                Ok(Step::to(begin_test(module)))
            }
        }

        (
            S::Study {
                module,
                index,
                revealed,
            },
            E::Retreat,
        ) => {
            if *index == 0 {
                return Ok(Step::to(S::Study {
                    module: Arc::clone(module),
                    index: 0,
                    revealed: *revealed,
                }));
            }
            Ok(Step::to(S::Study {
                module: Arc::clone(module),
                index: index - 1,
                revealed: false,
            }))
        }

        (S::Study { module, .. }, E::StartTest) => Ok(Step::to(begin_test(module))),

        (S::Study { module, index, .. }, E::Reveal) => Ok(Step::to(S::Study {
            module: Arc::clone(module),
            index: *index,
            revealed: true,
        })),

        (
            S::Test {
                module,
                results,
                revealed,
            },
            E::Reveal,
        ) => {
            if *revealed {
                return Err(SessionError::AlreadyRevealed);
            }
            Ok(Step::to(S::Test {
                module: Arc::clone(module),
                results: results.clone(),
                revealed: true,
            }))
        }

        (
            S::Test {
                module,
                results,
                revealed,
            },
            E::Grade(correct),
        ) => {
            if !*revealed {
                return Err(SessionError::NotRevealed);
            }
            let index = results.len();
            let record = module.character(index).ok_or_else(not_allowed)?;

            let mut results = results.clone();
            results.push(TestResult {
                glyph: record.glyph(),
                correct,
            });

            if index < module.last_index() {
                return Ok(Step::to(S::Test {
                    module: Arc::clone(module),
                    results,
                    revealed: false,
                }));
            }

            let reviews = u32::try_from(results.len()).unwrap_or(u32::MAX);
            let score = u32::try_from(count_correct(&results)).unwrap_or(u32::MAX);
            Ok(Step {
                next: S::Summary {
                    module: Arc::clone(module),
                    results,
                },
                commit: Some(StatsDelta::new(reviews, score)),
            })
        }

        (S::Summary { module, .. }, E::Retry) => Ok(Step::to(begin_study(Arc::clone(module), 0)?)),

        _ => Err(not_allowed()),
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AggregateStats, ModuleId};

    fn module_from(id: u32, glyphs: &str) -> Arc<StudyModule> {
        let characters = glyphs
            .chars()
            .map(|glyph| {
                CharacterRecord::new(glyph, "おん", Some("くん".into()), "gloss", "").unwrap()
            })
            .collect();
        Arc::new(StudyModule::new(ModuleId::new(id), format!("Module {id}"), characters).unwrap())
    }

    fn studying(module: &Arc<StudyModule>) -> SessionState {
        let mut state = SessionState::Menu;
        state
            .apply(SessionEvent::StartStudy(Arc::clone(module)))
            .unwrap();
        state
    }

    fn current_glyph(state: &SessionState) -> Option<char> {
        state.current_character().map(CharacterRecord::glyph)
    }

    #[test]
    fn study_advances_into_test_exactly_at_the_end() {
        for glyphs in ["日", "日木", "日木人水火", "一二三四五六七八九十"] {
            let module = module_from(1, glyphs);
            let n = module.len();
            let mut state = studying(&module);

            for step in 1..=n {
                state.apply(SessionEvent::Advance).unwrap();
                if step < n {
                    assert_eq!(state.phase(), Phase::Study, "left study early at {step}");
                    assert_eq!(state.current_index(), Some(step));
                }
            }

            assert_eq!(state.phase(), Phase::Test);
            assert_eq!(state.current_index(), Some(0));
            assert!(state.results().is_empty());
        }
    }

    #[test]
    fn test_pass_keeps_results_aligned_with_cursor_and_commits_once() {
        let module = module_from(1, "日木人水火");
        let mut state = studying(&module);
        state.apply(SessionEvent::StartTest).unwrap();

        let mut commits = Vec::new();
        for (i, correct) in [true, false, true, true, false].into_iter().enumerate() {
            state.apply(SessionEvent::Reveal).unwrap();
            if let Some(delta) = state.apply(SessionEvent::Grade(correct)).unwrap() {
                commits.push(delta);
            }
            assert_eq!(state.results().len(), i + 1);
            if state.phase() == Phase::Test {
                assert_eq!(state.current_index(), Some(state.results().len()));
            }
            let expected = state.results().iter().filter(|r| r.correct).count();
            assert_eq!(state.score(), expected);
        }

        assert_eq!(state.phase(), Phase::Summary);
        assert_eq!(commits, vec![StatsDelta::new(5, 3)]);

        // Lingering in summary never commits again.
        assert!(state.apply(SessionEvent::Grade(true)).is_err());
        assert!(state.apply(SessionEvent::Advance).is_err());
        assert_eq!(state.phase(), Phase::Summary);
    }

    #[test]
    fn worked_example_two_characters() {
        let module = module_from(1, "日木");
        let mut stats = AggregateStats::default();
        let mut state = studying(&module);
        assert_eq!(current_glyph(&state), Some('日'));

        state.apply(SessionEvent::Advance).unwrap();
        assert_eq!(current_glyph(&state), Some('木'));

        state.apply(SessionEvent::Advance).unwrap();
        assert_eq!(state.phase(), Phase::Test);
        assert_eq!(current_glyph(&state), Some('日'));
        assert!(state.results().is_empty());

        state.apply(SessionEvent::Reveal).unwrap();
        assert_eq!(state.apply(SessionEvent::Grade(true)).unwrap(), None);
        assert_eq!(
            state.results(),
            &[TestResult {
                glyph: '日',
                correct: true
            }]
        );
        assert_eq!(state.score(), 1);
        assert_eq!(current_glyph(&state), Some('木'));

        state.apply(SessionEvent::Reveal).unwrap();
        let delta = state.apply(SessionEvent::Grade(false)).unwrap().unwrap();
        stats = stats.apply(delta);

        assert_eq!(state.phase(), Phase::Summary);
        assert_eq!(state.results().len(), 2);
        assert!(!state.results()[1].correct);
        assert_eq!(state.score(), 1);
        assert_eq!(stats.total_reviews(), 2);
        assert_eq!(stats.correct_reviews(), 1);
        assert_eq!(stats.modules_completed(), 1);
    }

    #[test]
    fn retry_resets_pass_and_next_completion_commits_again() {
        let module = module_from(1, "日木");
        let mut state = studying(&module);
        state.apply(SessionEvent::StartTest).unwrap();
        let mut commits = 0;
        for _ in 0..2 {
            state.apply(SessionEvent::Reveal).unwrap();
            commits += usize::from(state.apply(SessionEvent::Grade(true)).unwrap().is_some());
        }
        assert_eq!(commits, 1);

        assert_eq!(state.apply(SessionEvent::Retry).unwrap(), None);
        assert_eq!(state.phase(), Phase::Study);
        assert_eq!(state.current_index(), Some(0));
        assert!(state.results().is_empty());
        assert!(!state.revealed());

        state.apply(SessionEvent::StartTest).unwrap();
        for _ in 0..2 {
            state.apply(SessionEvent::Reveal).unwrap();
            commits += usize::from(state.apply(SessionEvent::Grade(false)).unwrap().is_some());
        }
        assert_eq!(commits, 2);
    }

    #[test]
    fn custom_start_combines_sources_in_order() {
        let a = module_from(1, "日木人水火山川田口目");
        let b = module_from(2, "一二三四五六七八九十");
        let mut state = SessionState::Menu;

        state
            .apply(SessionEvent::StartCustom(vec![Arc::clone(&a), Arc::clone(&b)]))
            .unwrap();

        assert_eq!(state.phase(), Phase::Study);
        let active = state.active_module().unwrap();
        assert_eq!(active.len(), 20);
        assert!(active.is_custom());
        assert_eq!(current_glyph(&state), Some('日'));
        assert_eq!(active.character(10).map(CharacterRecord::glyph), Some('一'));
    }

    #[test]
    fn empty_custom_selection_is_rejected_in_menu() {
        let mut state = SessionState::Menu;
        let err = state
            .apply(SessionEvent::StartCustom(Vec::new()))
            .unwrap_err();
        assert_eq!(err, SessionError::Module(ModuleError::EmptySelection));
        assert_eq!(state, SessionState::Menu);
    }

    #[test]
    fn retreat_at_start_is_a_noop() {
        let module = module_from(1, "日木");
        let mut state = studying(&module);
        let before = state.clone();
        state.apply(SessionEvent::Retreat).unwrap();
        assert_eq!(state, before);

        state.apply(SessionEvent::Advance).unwrap();
        state.apply(SessionEvent::Reveal).unwrap();
        state.apply(SessionEvent::Retreat).unwrap();
        assert_eq!(state.current_index(), Some(0));
        assert!(!state.revealed());
    }

    #[test]
    fn overview_preview_then_start_or_back() {
        let module = module_from(4, "時分");
        let mut state = SessionState::Menu;
        state
            .apply(SessionEvent::ViewModule(Arc::clone(&module)))
            .unwrap();
        assert_eq!(state.phase(), Phase::Overview);
        assert_eq!(state.current_index(), None);

        let mut back = state.clone();
        back.apply(SessionEvent::ExitToMenu).unwrap();
        assert_eq!(back, SessionState::Menu);

        state
            .apply(SessionEvent::StartStudy(Arc::clone(&module)))
            .unwrap();
        assert_eq!(state.phase(), Phase::Study);
        assert_eq!(state.current_index(), Some(0));
    }

    #[test]
    fn launch_starts_at_index_and_checks_bounds() {
        let module = module_from(5, "行来食");
        let mut state = SessionState::Menu;
        state
            .apply(SessionEvent::Launch {
                module: Arc::clone(&module),
                start_index: 2,
            })
            .unwrap();
        assert_eq!(current_glyph(&state), Some('食'));

        let mut menu = SessionState::Menu;
        let err = menu
            .apply(SessionEvent::Launch {
                module,
                start_index: 3,
            })
            .unwrap_err();
        assert_eq!(err, SessionError::IndexOutOfRange { index: 3, len: 3 });
        assert_eq!(menu, SessionState::Menu);
    }

    #[test]
    fn precondition_violations_leave_state_untouched() {
        let module = module_from(1, "日木");

        let mut menu = SessionState::Menu;
        for event in [
            SessionEvent::Advance,
            SessionEvent::Retreat,
            SessionEvent::Reveal,
            SessionEvent::Grade(true),
            SessionEvent::StartTest,
            SessionEvent::Retry,
        ] {
            let kind = event.kind();
            let err = menu.apply(event).unwrap_err();
            assert_eq!(
                err,
                SessionError::NotAllowed {
                    phase: Phase::Menu,
                    event: kind
                }
            );
            assert_eq!(menu, SessionState::Menu);
        }

        let mut state = studying(&module);
        state.apply(SessionEvent::StartTest).unwrap();
        let before = state.clone();
        assert_eq!(
            state.apply(SessionEvent::Grade(true)).unwrap_err(),
            SessionError::NotRevealed
        );
        assert!(state.apply(SessionEvent::Advance).is_err());
        assert!(state.apply(SessionEvent::Retreat).is_err());
        assert_eq!(state, before);

        state.apply(SessionEvent::Reveal).unwrap();
        assert_eq!(
            state.apply(SessionEvent::Reveal).unwrap_err(),
            SessionError::AlreadyRevealed
        );
    }

    #[test]
    fn exit_clears_session_from_any_phase() {
        let module = module_from(1, "日木");
        let mut state = studying(&module);
        state.apply(SessionEvent::StartTest).unwrap();
        state.apply(SessionEvent::Reveal).unwrap();
        state.apply(SessionEvent::Grade(true)).unwrap();

        assert_eq!(state.apply(SessionEvent::ExitToMenu).unwrap(), None);
        assert_eq!(state, SessionState::Menu);
        assert!(state.results().is_empty());
        assert_eq!(state.active_module(), None);
    }

    #[test]
    fn progress_tracks_graded_share() {
        let module = module_from(1, "日木人水");
        let mut state = studying(&module);
        state.apply(SessionEvent::StartTest).unwrap();
        assert_eq!(state.progress_percent(), 0);
        state.apply(SessionEvent::Reveal).unwrap();
        state.apply(SessionEvent::Grade(true)).unwrap();
        assert_eq!(state.progress_percent(), 25);
    }
}
