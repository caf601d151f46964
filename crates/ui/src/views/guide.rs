use dioxus::prelude::*;

use crate::context::AppContext;

/// Hiragana and katakana reference charts.
#[component]
pub fn GuidePanel() -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();
    let mut active = use_signal(|| 0_usize);

    let current = active();
    let tabs: Vec<(usize, String, &'static str)> = catalog
        .guides()
        .iter()
        .enumerate()
        .map(|(i, g)| {
            let class = if i == current { "tab active" } else { "tab" };
            (i, g.title().to_owned(), class)
        })
        .collect();
    let Some(guide) = catalog.guides().get(current) else {
        return rsx! {};
    };
    let entries = guide.entries().to_vec();

    rsx! {
        section { class: "guide-panel",
            div { class: "tabs",
                for (i, title, class) in tabs {
                    button {
                        key: "{title}",
                        class,
                        onclick: move |_| active.set(i),
                        "{title}"
                    }
                }
            }
            div { class: "kana-grid",
                for entry in entries {
                    div { key: "{entry.kana}", class: "kana-cell",
                        span { class: "kana", "{entry.kana}" }
                        span { class: "romaji", "{entry.romaji}" }
                    }
                }
            }
        }
    }
}
