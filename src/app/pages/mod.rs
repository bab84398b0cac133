//! Page components, one per route.

mod contact;
mod home;
mod not_found;
mod portfolio;
mod works;

pub use contact::Contact;
pub use home::Home;
pub use not_found::NotFound;
pub use portfolio::Portfolio;
pub use works::Works;
