//! Site header: brand link, desktop link row, and the mobile menu drawer.

use dioxus::prelude::*;

use crate::app::menu::{use_menu, MenuHandle};
use crate::app::motion::{
    Breakpoint, IndicatorPlacement, Transition, DRAWER_TWEEN, INDICATOR_SPRING,
};
use crate::app::navigation::{active_index, Brand, NavEntry, BRAND, NAV_ENTRIES};

/// Element id of the mobile drawer (target of the toggle's `aria-controls`).
pub const DRAWER_ID: &str = "mobile-nav-drawer";

const ACTIVE_GRADIENT: &str = "bg-gradient-to-r from-purple-500 via-pink-500 to-red-500";

/// Classes for a link in the desktop row.
pub fn desktop_link_class(active: bool) -> String {
    let state = if active {
        format!("text-white {ACTIVE_GRADIENT} shadow-lg")
    } else {
        "text-white/70 hover:text-white focus:text-white".to_string()
    };
    format!(
        "relative block text-center font-semibold uppercase tracking-wide transition-colors px-3 py-2 rounded-md {state}"
    )
}

/// Classes for a link inside the mobile drawer.
pub fn drawer_link_class(active: bool) -> String {
    let state = if active {
        format!("text-white {ACTIVE_GRADIENT}")
    } else {
        "text-white/80 hover:text-white focus:text-white".to_string()
    };
    format!(
        "block px-6 py-3 text-lg font-semibold uppercase tracking-wide transition-colors {state}"
    )
}

/// Classes for the three hamburger bars (top, middle, bottom).
///
/// Open draws an "X": outer bars rotate toward each other, middle bar fades out.
pub fn toggle_bar_classes(open: bool) -> [String; 3] {
    const BAR: &str = "block w-7 h-0.5 bg-white rounded-sm";
    let (top, middle, bottom) = if open {
        ("rotate-45 translate-y-1.5", "opacity-0", "-rotate-45 -translate-y-1.5")
    } else {
        ("", "opacity-100", "")
    };
    [
        format!("{BAR} transition-transform origin-center {top}")
            .trim_end()
            .to_string(),
        format!("{BAR} my-1 transition-opacity {middle}"),
        format!("{BAR} transition-transform origin-center {bottom}")
            .trim_end()
            .to_string(),
    ]
}

/// Label describing what the toggle would do if pressed.
pub fn toggle_label(open: bool) -> &'static str {
    if open {
        "Close menu"
    } else {
        "Open menu"
    }
}

/// Hand a link click to the router when one is wired; otherwise let the
/// browser follow the `href`.
fn navigate(evt: &MouseEvent, on_navigate: Option<EventHandler<String>>, path: &str) {
    if request_navigation(on_navigate, path) {
        evt.prevent_default();
    }
}

/// Returns whether a router handled the request.
fn request_navigation(on_navigate: Option<EventHandler<String>>, path: &str) -> bool {
    let Some(handler) = on_navigate else {
        return false;
    };
    tracing::debug!(path, "header navigation");
    handler.call(path.to_string());
    true
}

/// A drawer link always closes the menu, whatever its state, then navigates.
fn follow_drawer_link(
    menu: MenuHandle,
    on_navigate: Option<EventHandler<String>>,
    path: &str,
) -> bool {
    menu.close();
    request_navigation(on_navigate, path)
}

#[derive(Props, Clone, PartialEq)]
pub struct HeaderProps {
    /// Path reported by the router; `None` while it is unavailable
    #[props(!optional)]
    pub current_path: Option<String>,
    /// Navigation entries in presentation order
    #[props(default = NAV_ENTRIES)]
    pub entries: &'static [NavEntry],
    #[props(default = BRAND)]
    pub brand: Brand,
    /// Width at which the drawer gives way to the desktop row
    #[props(default)]
    pub breakpoint: Breakpoint,
    /// Render with the drawer already open (applies on mount only)
    #[props(default = false)]
    pub initially_open: bool,
    /// Navigation request for a link's path
    pub on_navigate: Option<EventHandler<String>>,
}

/// Fixed site header with responsive navigation.
#[component]
pub fn Header(props: HeaderProps) -> Element {
    let menu = use_menu(props.initially_open);
    let on_navigate = props.on_navigate;
    let brand = props.brand;
    let padding = props.breakpoint.nav_padding();

    rsx! {
        header { class: "fixed top-0 w-full bg-black/90 backdrop-blur-sm z-50 border-b border-gray-800",
            nav { class: "max-w-7xl mx-auto {padding} flex justify-between items-center h-16",
                a {
                    href: brand.href,
                    class: "text-white font-extrabold text-xl tracking-wider",
                    onclick: move |evt: MouseEvent| navigate(&evt, on_navigate, brand.href),
                    "{brand.label}"
                }

                DesktopLinks {
                    entries: props.entries,
                    current_path: props.current_path.clone(),
                    breakpoint: props.breakpoint,
                    on_navigate: on_navigate,
                }

                MenuToggle { menu: menu, breakpoint: props.breakpoint }

                MobileDrawer {
                    menu: menu,
                    entries: props.entries,
                    current_path: props.current_path.clone(),
                    breakpoint: props.breakpoint,
                    on_navigate: on_navigate,
                }
            }
        }
    }
}

/// Desktop link row with a single underline that slides between links.
#[component]
fn DesktopLinks(
    entries: &'static [NavEntry],
    #[props(!optional)] current_path: Option<String>,
    breakpoint: Breakpoint,
    on_navigate: Option<EventHandler<String>>,
) -> Element {
    let current = current_path.as_deref();
    let underline = active_index(entries, current)
        .and_then(|index| IndicatorPlacement::new(index, entries.len()))
        .map(|placement| placement.style(&INDICATOR_SPRING));
    let row = breakpoint.desktop_row();

    rsx! {
        div { class: "{row} grid-flow-col auto-cols-fr relative",
            for entry in entries.iter() {
                NavLink {
                    key: "{entry.path}",
                    entry: *entry,
                    active: entry.is_active(current),
                    on_navigate: on_navigate,
                }
            }
            {underline.map(|style| rsx! {
                span {
                    class: "absolute bottom-0 h-0.5 rounded-full pointer-events-none {ACTIVE_GRADIENT}",
                    "aria-hidden": "true",
                    style: "{style}",
                }
            })}
        }
    }
}

/// Hamburger button that toggles the drawer.
#[component]
fn MenuToggle(menu: MenuHandle, breakpoint: Breakpoint) -> Element {
    let open = menu.is_open();
    let [top, middle, bottom] = toggle_bar_classes(open);
    let visibility = breakpoint.mobile_only();

    rsx! {
        button {
            r#type: "button",
            class: "{visibility} flex flex-col justify-center items-center w-10 h-10 relative group",
            "aria-label": toggle_label(open),
            "aria-expanded": "{open}",
            "aria-controls": DRAWER_ID,
            onclick: move |_| menu.toggle(),
            span { class: "{top}" }
            span { class: "{middle}" }
            span { class: "{bottom}" }
        }
    }
}

/// Mobile drawer; absent from the output unless the menu is open or closing.
#[component]
fn MobileDrawer(
    menu: MenuHandle,
    entries: &'static [NavEntry],
    #[props(!optional)] current_path: Option<String>,
    breakpoint: Breakpoint,
    on_navigate: Option<EventHandler<String>>,
) -> Element {
    let phase = menu.phase();
    if !phase.is_mounted() {
        return rsx! {};
    }

    let current = current_path.as_deref();
    let pose = phase.pose().classes();
    let transition = drawer_transition(&DRAWER_TWEEN);
    let visibility = breakpoint.mobile_only();

    rsx! {
        div {
            id: DRAWER_ID,
            class: "absolute top-full left-0 w-full bg-black/95 backdrop-blur-md border-t border-gray-800 {visibility} {pose}",
            style: "{transition}",
            ul { class: "flex flex-col py-4",
                for entry in entries.iter() {
                    li {
                        key: "{entry.path}",
                        class: "border-b border-gray-700 last:border-none",
                        a {
                            href: entry.path,
                            class: drawer_link_class(entry.is_active(current)),
                            "aria-current": entry.is_active(current).then_some("page"),
                            onclick: move |evt: MouseEvent| {
                                if follow_drawer_link(menu, on_navigate, entry.path) {
                                    evt.prevent_default();
                                }
                            },
                            "{entry.label}"
                        }
                    }
                }
            }
        }
    }
}

/// A desktop navigation link.
#[component]
fn NavLink(entry: NavEntry, active: bool, on_navigate: Option<EventHandler<String>>) -> Element {
    rsx! {
        a {
            href: entry.path,
            class: desktop_link_class(active),
            "aria-current": active.then_some("page"),
            onclick: move |evt: MouseEvent| navigate(&evt, on_navigate, entry.path),
            "{entry.label}"
        }
    }
}

fn drawer_transition(transition: &Transition) -> String {
    // `translate` covers Tailwind v4, `transform` covers v3
    format!(
        "transition: {};",
        transition.css(&["opacity", "transform", "translate"])
    )
}
