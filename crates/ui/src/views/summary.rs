use dioxus::prelude::*;

use super::handle::SessionHandle;
use crate::vm::{SessionIntent, map_summary};

#[component]
pub fn SummaryView() -> Element {
    let handle = use_context::<SessionHandle>();
    let Some(summary) = map_summary(&handle.state()) else {
        return rsx! {};
    };
    let badge = if summary.perfect { "🏆" } else { "📝" };

    rsx! {
        div { class: "page summary",
            div { class: "badge", "{badge}" }
            h2 { "Module Complete!" }
            p { class: "summary-title", "{summary.title}" }
            p { class: "score", "{summary.score_line()}" }
            div { class: "chips",
                for (i, chip) in summary.chips.iter().enumerate() {
                    span { key: "{i}", class: chip.class(), "{chip.glyph}" }
                }
            }
            div { class: "summary-actions",
                button {
                    onclick: move |_| handle.dispatch(SessionIntent::ExitToMenu),
                    "Menu"
                }
                button {
                    class: "primary",
                    onclick: move |_| handle.dispatch(SessionIntent::Retry),
                    "Retry"
                }
            }
        }
    }
}
