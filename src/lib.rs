//! Portfolio site
//!
//! A personal portfolio website built with Dioxus fullstack.
//!
//! This library provides:
//! - The site header with desktop links and a mobile menu drawer
//! - Routes and page components
//! - Server configuration and start-up (server feature)

pub mod app;
#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod server;
