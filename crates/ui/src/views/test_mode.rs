use dioxus::prelude::*;

use super::handle::SessionHandle;
use super::stroke_viewer::StrokePanel;
use crate::vm::{PromptKind, SessionIntent, map_card};

const PROMPT_KINDS: [PromptKind; 2] = [PromptKind::Meaning, PromptKind::Readings];

#[component]
pub fn TestView() -> Element {
    let handle = use_context::<SessionHandle>();
    let state = handle.state();
    let (Some(module), Some(index), Some(record)) = (
        state.active_module(),
        state.current_index(),
        state.current_character(),
    ) else {
        return rsx! {};
    };
    let card = map_card(record, index, module.len());
    let glyph = card.glyph;
    let revealed = state.revealed();
    let progress = state.progress_percent();
    let prompt = handle.prompt();

    let (question, answer) = match prompt {
        PromptKind::Meaning => (card.gloss.clone(), card.readings_line()),
        PromptKind::Readings => (card.readings_line(), card.gloss.clone()),
    };
    let toggles: Vec<(PromptKind, &'static str)> = PROMPT_KINDS
        .iter()
        .map(|&kind| {
            let class = if kind == prompt { "toggle active" } else { "toggle" };
            (kind, class)
        })
        .collect();

    rsx! {
        div { class: "page test",
            div { class: "progress",
                div { class: "progress-fill", style: "width: {progress}%" }
            }
            header { class: "mode-header",
                button {
                    class: "link-button",
                    onclick: move |_| handle.dispatch(SessionIntent::ExitToMenu),
                    "Exit test"
                }
                span { class: "position", "{card.position}" }
            }

            div { class: "prompt-toggle",
                for (kind, class) in toggles {
                    button {
                        key: "{kind.label()}",
                        class,
                        onclick: move |_| handle.set_prompt(kind),
                        "{kind.label()}"
                    }
                }
            }

            div { class: "prompt",
                span { class: "mode-label", "Test Mode" }
                h2 { "{question}" }
                p { class: "muted", "{prompt.instruction()}" }
            }

            if revealed {
                div { class: "answer",
                    StrokePanel { glyph, slot: handle.stroke() }
                    p { class: "answer-detail", "{answer}" }
                }
                div { class: "grade-buttons",
                    button {
                        class: "incorrect",
                        onclick: move |_| handle.dispatch(SessionIntent::Grade(false)),
                        "Incorrect"
                    }
                    button {
                        class: "correct",
                        onclick: move |_| handle.dispatch(SessionIntent::Grade(true)),
                        "Correct"
                    }
                }
            } else {
                div { class: "answer-placeholder", "?" }
                button {
                    class: "primary",
                    onclick: move |_| handle.dispatch(SessionIntent::Reveal),
                    "Reveal answer"
                }
            }
        }
    }
}
