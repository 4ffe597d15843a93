use dioxus::prelude::*;
use dioxus_router::Link;

use crate::paths;

#[component]
pub fn NotFoundView(segments: Vec<String>) -> Element {
    let attempted = segments.join("/");
    rsx! {
        div { class: "page not-found",
            h2 { "Page not found" }
            if !attempted.is_empty() {
                p { "Nothing lives at /{attempted}." }
            }
            Link { to: paths::DASHBOARD, "Back to start" }
        }
    }
}
