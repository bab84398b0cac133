//! Shared UI components.

pub mod header;
pub mod layout;

pub use header::Header;
pub use layout::SiteLayout;
