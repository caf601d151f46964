use std::sync::Arc;

use dioxus::prelude::*;
use services::{LookupResult, StrokeOrderSlot};

use super::stroke_viewer::StrokePanel;
use crate::context::AppContext;
use crate::vm::map_card;

/// Quick search by glyph, reading, or meaning.
#[component]
pub fn LookupPanel() -> Element {
    let ctx = use_context::<AppContext>();
    let lookup = ctx.lookup();
    let stroke_order = ctx.stroke_order();
    let mut query = use_signal(String::new);
    let mut result = use_signal(|| None::<LookupResult>);
    let mut slot = use_signal(StrokeOrderSlot::new);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let found = lookup.resolve(&query.read());
        let glyph = match &found {
            LookupResult::Record(record) => Some(record.glyph()),
            LookupResult::Glyph(glyph) => Some(*glyph),
            LookupResult::NotFound => None,
        };
        match glyph {
            Some(glyph) => {
                let ticket = slot.write().request(glyph);
                let service = Arc::clone(&stroke_order);
                spawn(async move {
                    let diagram = service.lookup(glyph).await;
                    slot.write().resolve(ticket, diagram);
                });
            }
            None => slot.write().clear(),
        }
        result.set(Some(found));
    };

    rsx! {
        section { class: "lookup-panel",
            form { onsubmit,
                input {
                    r#type: "text",
                    placeholder: "Kanji, reading, or meaning",
                    value: "{query}",
                    oninput: move |evt| query.set(evt.value()),
                }
                button { r#type: "submit", "Look up" }
            }
            match result() {
                Some(LookupResult::Record(record)) => {
                    let card = map_card(&record, 0, 1);
                    rsx! {
                        div { class: "lookup-result",
                            StrokePanel { glyph: card.glyph, slot }
                            h3 { "{card.gloss}" }
                            p { class: "readings", "{card.readings_line()}" }
                            p { class: "mnemonic", "{card.mnemonic}" }
                        }
                    }
                }
                Some(LookupResult::Glyph(glyph)) => rsx! {
                    div { class: "lookup-result",
                        StrokePanel { glyph, slot }
                        p { class: "muted", "Not in the study modules" }
                    }
                },
                Some(LookupResult::NotFound) => rsx! {
                    p { class: "lookup-miss", "No match found" }
                },
                None => rsx! {},
            }
        }
    }
}
