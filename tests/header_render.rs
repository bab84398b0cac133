//! Server-rendered header output.
//!
//! Renders the header with `dioxus::ssr` and checks the markup a browser
//! would receive: which links carry active styling and `aria-current`,
//! whether the drawer exists, and the toggle's accessibility attributes.

use dioxus::prelude::*;
use portfolio_site::app::components::header::DRAWER_ID;
use portfolio_site::app::components::Header;
use portfolio_site::app::motion::Breakpoint;
use portfolio_site::app::navigation::NavEntry;

const ACTIVE_MARKER: &str = "aria-current=\"page\"";
const GRADIENT: &str = "from-purple-500";

fn render(current_path: Option<&str>, open: bool) -> String {
    let current_path = current_path.map(str::to_string);
    dioxus::ssr::render_element(rsx! {
        Header { current_path: current_path, initially_open: open }
    })
}

/// Strip `<!--...-->` markers the renderer may place around text.
fn strip_comments(s: &str) -> String {
    let mut out = String::new();
    let mut rest = s;
    while let Some(start) = rest.find("<!--") {
        out.push_str(&rest[..start]);
        match rest[start..].find("-->") {
            Some(end) => rest = &rest[start + end + 3..],
            None => {
                rest = "";
                break;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Labels of every link marked as the current page, in document order.
fn active_labels(html: &str) -> Vec<String> {
    html.split(ACTIVE_MARKER)
        .skip(1)
        .filter_map(|chunk| {
            let open_end = chunk.find('>')?;
            let body = &chunk[open_end + 1..];
            let close = body.find("</a>")?;
            Some(strip_comments(&body[..close]).trim().to_string())
        })
        .collect()
}

fn drawer_present(html: &str) -> bool {
    html.contains(&format!("id=\"{DRAWER_ID}\""))
}

#[test]
fn portfolio_is_the_only_active_link() {
    let html = render(Some("/portfolio"), true);

    // Desktop row and drawer each mark Portfolio, nothing else
    assert_eq!(active_labels(&html), ["Portfolio", "Portfolio"]);
    assert_eq!(html.matches(ACTIVE_MARKER).count(), 2);
}

#[test]
fn closed_menu_marks_only_the_desktop_link() {
    let html = render(Some("/portfolio"), false);

    assert_eq!(active_labels(&html), ["Portfolio"]);
    // Active desktop link plus the shared underline
    assert_eq!(html.matches(GRADIENT).count(), 2);
}

#[test]
fn unknown_route_has_no_active_link() {
    for open in [false, true] {
        let html = render(Some("/unknown-route"), open);
        assert!(!html.contains(ACTIVE_MARKER), "open={open}: {html}");
        assert!(!html.contains(GRADIENT), "open={open}: {html}");
    }
}

#[test]
fn missing_path_has_no_active_link() {
    let html = render(None, true);
    assert!(!html.contains(ACTIVE_MARKER));
    assert!(!html.contains(GRADIENT));
}

#[test]
fn home_only_matches_root() {
    let html = render(Some("/"), true);
    assert_eq!(active_labels(&html), ["Home", "Home"]);

    let html = render(Some("/works"), true);
    assert_eq!(active_labels(&html), ["Works", "Works"]);
}

#[test]
fn underline_sits_under_the_active_cell() {
    let html = render(Some("/portfolio"), false);
    assert!(html.contains("left: 25.0000%; width: 25.0000%;"), "{html}");

    let html = render(Some("/contact"), false);
    assert!(html.contains("left: 75.0000%;"), "{html}");
    assert_eq!(html.matches("left: ").count(), 1);
}

/// Percentage offsets only line up with the cells when the row has no gaps.
#[test]
fn desktop_row_cells_are_gapless() {
    let html = render(Some("/works"), false);
    let row_class = html
        .split("class=\"")
        .filter_map(|attr| attr.split('"').next())
        .find(|class| class.contains("auto-cols-fr"))
        .expect("desktop row rendered");
    assert!(!row_class.contains("gap-"), "{row_class}");
    assert!(!row_class.contains("space-x-"), "{row_class}");
    assert!(html.contains("left: 50.0000%; width: 25.0000%;"), "{html}");
}

#[test]
fn drawer_absent_while_closed() {
    let html = render(Some("/"), false);
    assert!(!drawer_present(&html));
    assert!(html.contains("aria-label=\"Open menu\""));
    assert!(html.contains("aria-expanded=\"false\""));
    assert!(!html.contains("rotate-45"));
}

#[test]
fn drawer_present_while_open() {
    let html = render(Some("/"), true);
    assert!(drawer_present(&html));
    assert!(html.contains("aria-label=\"Close menu\""));
    assert!(html.contains("aria-expanded=\"true\""));
    assert!(html.contains(&format!("aria-controls=\"{DRAWER_ID}\"")));
    assert!(html.contains("-rotate-45 -translate-y-1.5"));
    assert!(html.contains("opacity-0"));
    // Rendered open on mount, so the drawer is already at rest
    assert!(html.contains("opacity-100 translate-y-0"));
}

#[test]
fn links_follow_table_order() {
    let html = render(Some("/"), false);
    let positions: Vec<usize> = ["Home", "Portfolio", "Works", "Contact"]
        .iter()
        .map(|label| html.find(&format!(">{label}<")).unwrap_or_else(|| panic!("{label} missing: {html}")))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");

    for path in ["/", "/portfolio", "/works", "/contact"] {
        assert!(html.contains(&format!("href=\"{path}\"")), "{path}");
    }
}

#[test]
fn brand_links_home() {
    let html = render(Some("/works"), false);
    assert!(html.contains("QuaidTahir"));
    assert!(html.contains("<header"));
}

const EXTENDED: &[NavEntry] = &[
    NavEntry::new("/", "Home"),
    NavEntry::new("/portfolio", "Portfolio"),
    NavEntry::new("/works", "Works"),
    NavEntry::new("/papers", "Papers"),
    NavEntry::new("/about", "About"),
    NavEntry::new("/contact", "Contact"),
];

#[test]
fn custom_entries_render_without_other_changes() {
    let html = dioxus::ssr::render_element(rsx! {
        Header {
            current_path: Some("/papers".to_string()),
            entries: EXTENDED,
            initially_open: true,
        }
    });

    assert_eq!(active_labels(&html), ["Papers", "Papers"]);
    assert!(html.contains("href=\"/about\""));
    // Sixth-width cells
    assert!(html.contains("left: 50.0000%;"), "{html}");
}

#[test]
fn breakpoint_controls_visibility_classes() {
    let html = dioxus::ssr::render_element(rsx! {
        Header {
            current_path: None,
            breakpoint: Breakpoint::Lg,
            initially_open: true,
        }
    });

    assert!(html.contains("hidden lg:grid"));
    assert!(html.contains("lg:hidden"));
    assert!(!html.contains("md:hidden"));
}
