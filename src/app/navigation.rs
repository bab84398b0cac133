//! Site navigation table and active-link matching.
//!
//! `NAV_ENTRIES` is the only place routes are listed for the header. Adding,
//! removing, or reordering entries needs no other change.

use thiserror::Error;

/// A single link in the site navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavEntry {
    /// Route this entry links to (e.g., "/portfolio")
    pub path: &'static str,
    /// Display text
    pub label: &'static str,
}

impl NavEntry {
    pub const fn new(path: &'static str, label: &'static str) -> Self {
        Self { path, label }
    }

    /// True only when `current_path` is exactly this entry's path.
    pub fn is_active(&self, current_path: Option<&str>) -> bool {
        current_path == Some(self.path)
    }
}

/// Brand link shown at the left of the header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Brand {
    pub label: &'static str,
    pub href: &'static str,
}

pub const BRAND: Brand = Brand {
    label: "QuaidTahir",
    href: "/",
};

/// Navigation entries in presentation order.
pub const NAV_ENTRIES: &[NavEntry] = &[
    NavEntry::new("/", "Home"),
    NavEntry::new("/portfolio", "Portfolio"),
    NavEntry::new("/works", "Works"),
    // NavEntry::new("/papers", "Papers"),
    // NavEntry::new("/about", "About"),
    NavEntry::new("/contact", "Contact"),
];

/// Index of the entry matching `current_path`, if any.
pub fn active_index(entries: &[NavEntry], current_path: Option<&str>) -> Option<usize> {
    entries.iter().position(|e| e.is_active(current_path))
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavConfigError {
    #[error("navigation table is empty")]
    Empty,
    #[error("entry {index} ({label:?}) has path {path:?}, which does not start with '/'")]
    RelativePath {
        index: usize,
        label: &'static str,
        path: &'static str,
    },
    #[error("entry {index} has a blank label")]
    BlankLabel { index: usize },
    #[error("path {path:?} is listed twice (entries {first} and {second})")]
    DuplicatePath {
        path: &'static str,
        first: usize,
        second: usize,
    },
}

/// Check a navigation table for mistakes that would break active matching.
///
/// Duplicate paths would mark two links active at once; relative paths never
/// equal a router path.
pub fn validate(entries: &[NavEntry]) -> Result<(), NavConfigError> {
    if entries.is_empty() {
        return Err(NavConfigError::Empty);
    }

    for (index, entry) in entries.iter().enumerate() {
        if !entry.path.starts_with('/') {
            return Err(NavConfigError::RelativePath {
                index,
                label: entry.label,
                path: entry.path,
            });
        }
        if entry.label.trim().is_empty() {
            return Err(NavConfigError::BlankLabel { index });
        }
        if let Some(first) = entries[..index].iter().position(|e| e.path == entry.path) {
            return Err(NavConfigError::DuplicatePath {
                path: entry.path,
                first,
                second: index,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_table_is_valid() {
        assert_eq!(validate(NAV_ENTRIES), Ok(()));
    }

    #[test]
    fn shipped_table_order() {
        let labels: Vec<_> = NAV_ENTRIES.iter().map(|e| e.label).collect();
        assert_eq!(labels, ["Home", "Portfolio", "Works", "Contact"]);
    }

    #[test]
    fn exact_match_only() {
        let portfolio = NavEntry::new("/portfolio", "Portfolio");
        assert!(portfolio.is_active(Some("/portfolio")));
        assert!(!portfolio.is_active(Some("/portfolio/")));
        assert!(!portfolio.is_active(Some("/portfolio/item-1")));
        assert!(!portfolio.is_active(Some("/Portfolio")));
        assert!(!portfolio.is_active(None));
    }

    #[test]
    fn home_does_not_match_everything() {
        // "/" is a prefix of every path but must only match itself
        let home = NavEntry::new("/", "Home");
        assert!(home.is_active(Some("/")));
        assert!(!home.is_active(Some("/works")));
        assert!(!home.is_active(Some("")));
    }

    #[test]
    fn at_most_one_active_for_any_path() {
        let paths = [
            Some("/"),
            Some("/portfolio"),
            Some("/works"),
            Some("/contact"),
            Some("/unknown-route"),
            Some(""),
            None,
        ];
        for path in paths {
            let active = NAV_ENTRIES.iter().filter(|e| e.is_active(path)).count();
            let expected = usize::from(NAV_ENTRIES.iter().any(|e| Some(e.path) == path));
            assert_eq!(active, expected, "path {path:?}");
        }
    }

    #[test]
    fn active_index_lookup() {
        assert_eq!(active_index(NAV_ENTRIES, Some("/portfolio")), Some(1));
        assert_eq!(active_index(NAV_ENTRIES, Some("/contact")), Some(3));
        assert_eq!(active_index(NAV_ENTRIES, Some("/unknown-route")), None);
        assert_eq!(active_index(NAV_ENTRIES, None), None);
    }

    #[test]
    fn rejects_duplicate_paths() {
        let entries = [
            NavEntry::new("/", "Home"),
            NavEntry::new("/works", "Works"),
            NavEntry::new("/works", "Projects"),
        ];
        assert_eq!(
            validate(&entries),
            Err(NavConfigError::DuplicatePath {
                path: "/works",
                first: 1,
                second: 2,
            })
        );
    }

    #[test]
    fn rejects_relative_path_and_blank_label() {
        let relative = [NavEntry::new("works", "Works")];
        assert!(matches!(
            validate(&relative),
            Err(NavConfigError::RelativePath { index: 0, .. })
        ));

        let blank = [NavEntry::new("/", "Home"), NavEntry::new("/works", "  ")];
        assert_eq!(validate(&blank), Err(NavConfigError::BlankLabel { index: 1 }));

        assert_eq!(validate(&[]), Err(NavConfigError::Empty));
    }
}
