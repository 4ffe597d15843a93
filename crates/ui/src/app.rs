use dioxus::prelude::*;
use dioxus_router::Router;

use crate::routes::Route;
use crate::views::Toasts;

#[component]
pub fn App() -> Element {
    use_context_provider(Toasts::new);

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        // Stable OS/window title. Per-route titles are rendered inside the right pane.
        document::Title { "Drive Admin" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
