use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::{SessionRoot, use_session_handle};

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    let handle = use_session_handle(&ctx);
    use_context_provider(|| handle);

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        document::Title { "Kanji Drill" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                SessionRoot {}
            }
        }
    }
}
