use dioxus::prelude::*;

use super::handle::SessionHandle;
use super::practice_pad::PracticePad;
use super::stroke_viewer::StrokePanel;
use crate::vm::{SessionIntent, map_card};

#[component]
pub fn StudyView() -> Element {
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
    let at_start = index == 0;

    rsx! {
        div { class: "page study",
            header { class: "mode-header",
                button {
                    class: "link-button",
                    onclick: move |_| handle.dispatch(SessionIntent::ExitToMenu),
                    "Exit"
                }
                span { class: "mode-label", "Study Mode" }
                button {
                    class: "link-button",
                    onclick: move |_| handle.dispatch(SessionIntent::StartTest),
                    "Test now"
                }
            }

            div { class: "card-header",
                span { class: "position", "{card.position}" }
                h2 { "{card.gloss}" }
            }

            StrokePanel { glyph, slot: handle.stroke() }

            div { class: "readings-grid",
                div { class: "reading",
                    span { class: "reading-label", "音読み (Onyomi)" }
                    span { class: "reading-value", "{card.on}" }
                }
                div { class: "reading",
                    span { class: "reading-label", "訓読み (Kunyomi)" }
                    span { class: "reading-value", "{card.kun}" }
                }
            }

            if revealed {
                p { class: "mnemonic", "{card.mnemonic}" }
            } else {
                button {
                    class: "link-button",
                    onclick: move |_| handle.dispatch(SessionIntent::Reveal),
                    "Show mnemonic"
                }
            }

            PracticePad { key: "{index}-{glyph}" }

            nav { class: "study-nav",
                button {
                    disabled: at_start,
                    onclick: move |_| handle.dispatch(SessionIntent::Retreat),
                    "Back"
                }
                button {
                    class: "primary",
                    onclick: move |_| handle.dispatch(SessionIntent::Advance),
                    "Next"
                }
            }
        }
    }
}
