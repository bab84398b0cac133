//! Landing page.

use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "max-w-7xl mx-auto px-5 md:px-10 py-24",
            h1 { class: "text-4xl md:text-6xl font-extrabold tracking-tight", "Quaid Tahir" }
            p { class: "mt-4 text-lg text-white/70", "Software engineer. Selected projects, writing, and ways to get in touch." }
        }
    }
}
