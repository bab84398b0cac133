//! Contact page.

use dioxus::prelude::*;

#[component]
pub fn Contact() -> Element {
    rsx! {
        section { class: "max-w-7xl mx-auto px-5 md:px-10 py-16",
            h1 { class: "text-3xl font-bold uppercase tracking-wide", "Contact" }
            p { class: "mt-4 text-white/70", "The best way to reach me is by email." }
        }
    }
}
