//! Dioxus fullstack application entry point.
//!
//! This module provides the main App component that serves as the root
//! of the Dioxus application with client-side hydration.

use dioxus::prelude::*;

pub mod components;
pub mod menu;
pub mod motion;
pub mod navigation;
pub mod pages;

use components::SiteLayout;
use pages::{Contact, Home, NotFound, Portfolio, Works};

/// Tailwind browser build; generates utility CSS from the rendered classes.
const TAILWIND_CDN: &str = "https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4";

/// Root app component with routing
#[component]
pub fn App() -> Element {
    rsx! {
        document::Title { "Quaid Tahir" }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        document::Script { src: TAILWIND_CDN }

        Router::<Route> {}
    }
}

/// Application routes
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(SiteLayout)]
        #[route("/")]
        Home {},
        #[route("/portfolio")]
        Portfolio {},
        #[route("/works")]
        Works {},
        #[route("/contact")]
        Contact {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}
