use dioxus::prelude::*;

#[component]
pub fn Works() -> Element {
    rsx! {
        section { class: "max-w-7xl mx-auto px-5 md:px-10 py-16",
            h1 { class: "text-3xl font-bold uppercase tracking-wide", "Works" }
        }
    }
}
