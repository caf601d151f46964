use dioxus::prelude::*;

use super::handle::SessionHandle;
use crate::vm::SessionIntent;

#[component]
pub fn OverviewView() -> Element {
    let handle = use_context::<SessionHandle>();
    let state = handle.state();
    let Some(module) = state.active_module().cloned() else {
        return rsx! {};
    };
    let id = module.id();
    let glyphs: Vec<char> = module.characters().iter().map(|c| c.glyph()).collect();

    rsx! {
        div { class: "page overview",
            header { class: "overview-header",
                button {
                    class: "link-button",
                    onclick: move |_| handle.dispatch(SessionIntent::ExitToMenu),
                    "Back"
                }
                h2 { "{module.title()}" }
            }
            div { class: "glyph-grid",
                for (index, glyph) in glyphs.into_iter().enumerate() {
                    button {
                        key: "{glyph}",
                        class: "glyph-tile",
                        onclick: move |_| handle.dispatch(SessionIntent::Launch(id, index)),
                        "{glyph}"
                    }
                }
            }
            button {
                class: "primary",
                onclick: move |_| handle.dispatch(SessionIntent::StartStudy(id)),
                "Start"
            }
        }
    }
}
