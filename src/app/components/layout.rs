//! Layout component wrapping all pages with the site header and footer.

use dioxus::prelude::*;

use super::header::Header;
use crate::app::Route;

/// Footer text: crate version plus the commit stamped in by `build.rs`.
fn build_label() -> String {
    format!("v{} ({})", env!("CARGO_PKG_VERSION"), env!("SITE_GIT_SHA"))
}

/// Route layout: binds the router to the header and renders the page outlet.
#[component]
pub fn SiteLayout() -> Element {
    let route = use_route::<Route>();
    let navigator = use_navigator();
    let build = build_label();

    rsx! {
        Header {
            current_path: Some(route.to_string()),
            on_navigate: move |path: String| {
                match path.parse::<Route>() {
                    Ok(target) => {
                        navigator.push(target);
                    }
                    Err(e) => tracing::warn!("No route for {path}: {e}"),
                }
            },
        }
        // Spacer for the fixed header
        main { class: "pt-16 min-h-screen bg-black text-white",
            Outlet::<Route> {}
        }
        footer { class: "bg-black border-t border-gray-800 text-center py-3",
            small { class: "text-white/50", "{build}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_label_carries_version_and_commit() {
        let label = build_label();
        assert!(label.starts_with(&format!("v{} (", env!("CARGO_PKG_VERSION"))));
        let sha = env!("SITE_GIT_SHA");
        assert!(!sha.is_empty());
        assert!(!sha.contains(char::is_whitespace));
        assert!(label.ends_with(&format!("({sha})")));
    }
}
