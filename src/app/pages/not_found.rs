//! Fallback page for paths with no route.

use dioxus::prelude::*;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        section { class: "max-w-7xl mx-auto px-5 md:px-10 py-16",
            h1 { class: "text-3xl font-bold", "Page not found" }
            p { class: "mt-4 text-white/70",
                "Nothing lives at "
                code { "{path}" }
            }
        }
    }
}
