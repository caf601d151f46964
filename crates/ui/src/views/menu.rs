use dioxus::prelude::*;
use kanji_core::model::ModuleId;

use super::guide::GuidePanel;
use super::handle::SessionHandle;
use super::lookup::LookupPanel;
use crate::context::AppContext;
use crate::vm::{SessionIntent, map_stats};

#[derive(Clone, Debug, PartialEq, Eq)]
struct ModuleRow {
    id: ModuleId,
    title: String,
    preview: String,
    count: usize,
}

const PREVIEW_GLYPHS: usize = 5;

#[component]
pub fn MenuView() -> Element {
    let ctx = use_context::<AppContext>();
    let handle = use_context::<SessionHandle>();
    let mut selected = use_signal(Vec::<ModuleId>::new);

    let rows: Vec<ModuleRow> = ctx
        .catalog()
        .modules()
        .iter()
        .map(|module| ModuleRow {
            id: module.id(),
            title: module.title().to_owned(),
            preview: module
                .characters()
                .iter()
                .take(PREVIEW_GLYPHS)
                .map(|c| c.glyph())
                .collect(),
            count: module.len(),
        })
        .collect();
    let stats = map_stats(&handle.stats());
    let nothing_selected = selected.read().is_empty();

    rsx! {
        div { class: "page menu",
            header { class: "menu-header",
                h1 { "Kanji Drill" }
                p { class: "subtitle", "Pen & Paper Mastery" }
            }

            LookupPanel {}

            section { class: "stats-panel",
                h2 { "Your progress" }
                dl {
                    dt { "Reviews" }
                    dd { "{stats.reviews}" }
                    dt { "Accuracy" }
                    dd { "{stats.accuracy}" }
                    dt { "Modules completed" }
                    dd { "{stats.modules_completed}" }
                }
            }

            section { class: "module-list",
                h2 { "Modules" }
                ul {
                    for row in rows.iter().cloned() {
                        li { key: "{row.id}", class: "module-row",
                            input {
                                r#type: "checkbox",
                                title: "Include in custom test",
                                checked: selected.read().contains(&row.id),
                                onchange: move |_| {
                                    let mut ids = selected.write();
                                    if let Some(pos) = ids.iter().position(|id| *id == row.id) {
                                        ids.remove(pos);
                                    } else {
                                        ids.push(row.id);
                                    }
                                },
                            }
                            button {
                                class: "module-button",
                                onclick: move |_| handle.dispatch(SessionIntent::ViewModule(row.id)),
                                span { class: "module-title", "{row.title}" }
                                span { class: "module-preview", "{row.preview}" }
                                span { class: "module-count", "{row.count} kanji" }
                            }
                        }
                    }
                }
                button {
                    class: "primary",
                    disabled: nothing_selected,
                    onclick: move |_| {
                        let ids = selected.read().clone();
                        handle.dispatch(SessionIntent::StartCustom(ids));
                    },
                    "Start custom test"
                }
            }

            GuidePanel {}
        }
    }
}
