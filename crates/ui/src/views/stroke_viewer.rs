use dioxus::prelude::*;
use services::{StrokeDisplay, StrokeOrderSlot};

/// Animated stroke-order diagram, or the bare glyph when none is available.
#[component]
pub fn StrokeViewer(glyph: char, display: StrokeDisplay, replays: u32) -> Element {
    match display {
        StrokeDisplay::Diagram { glyph: shown, svg } if shown == glyph => rsx! {
            div {
                key: "{glyph}-{replays}",
                class: "stroke-order-svg",
                dangerous_inner_html: "{svg}",
            }
        },
        StrokeDisplay::Loading(pending) if pending == glyph => rsx! {
            div { class: "stroke-loading", "Loading..." }
        },
        _ => rsx! {
            div { class: "glyph-large", "{glyph}" }
        },
    }
}

/// Stroke viewer bound to a slot, with a replay control.
#[component]
pub fn StrokePanel(glyph: char, slot: Signal<StrokeOrderSlot>) -> Element {
    let mut slot = slot;
    let display = slot.read().display().clone();
    let replays = slot.read().replays();
    let can_replay = matches!(display, StrokeDisplay::Diagram { .. });

    rsx! {
        div { class: "stroke-panel",
            StrokeViewer { glyph, display, replays }
            if can_replay {
                button {
                    class: "link-button",
                    onclick: move |_| slot.write().replay(),
                    "Replay"
                }
            }
        }
    }
}
