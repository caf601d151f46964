use kanji_core::model::ModuleId;
use services::{ControllerError, Dispatched, SessionController};

/// User intents raised by the session views.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionIntent {
    ViewModule(ModuleId),
    StartStudy(ModuleId),
    StartCustom(Vec<ModuleId>),
    Launch(ModuleId, usize),
    Advance,
    Retreat,
    StartTest,
    Reveal,
    Grade(bool),
    ExitToMenu,
    Retry,
}

/// Which side of the card the test shows first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PromptKind {
    #[default]
    Meaning,
    Readings,
}

impl PromptKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            PromptKind::Meaning => "English",
            PromptKind::Readings => "Readings",
        }
    }

    #[must_use]
    pub fn instruction(self) -> &'static str {
        match self {
            PromptKind::Meaning => "Write the kanji for this meaning",
            PromptKind::Readings => "Write the kanji for these readings",
        }
    }
}

/// Route an intent to the matching controller call.
///
/// # Errors
///
/// Returns the controller's error when the intent is refused.
pub fn apply_intent(
    controller: &mut SessionController,
    intent: SessionIntent,
) -> Result<Dispatched, ControllerError> {
    match intent {
        SessionIntent::ViewModule(id) => controller.view_module(id),
        SessionIntent::StartStudy(id) => controller.start_study(id),
        SessionIntent::StartCustom(ids) => controller.start_custom_test(&ids),
        SessionIntent::Launch(id, index) => controller.launch_module(id, index),
        SessionIntent::Advance => controller.advance(),
        SessionIntent::Retreat => controller.retreat(),
        SessionIntent::StartTest => controller.start_test(),
        SessionIntent::Reveal => controller.reveal(),
        SessionIntent::Grade(correct) => controller.grade(correct),
        SessionIntent::ExitToMenu => controller.exit_to_menu(),
        SessionIntent::Retry => controller.retry(),
    }
}
