use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::ScrollIndicator;

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "Scroll Indicator" }

        div { class: "App",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                ScrollIndicator { url: ctx.source_url() }
            }
        }
    }
}
