//! Shared UI crate for Flashdeck. Session logic, history persistence and views live here.

use dioxus::prelude::*;

pub mod core;
pub mod deck;
pub mod history;
pub mod i18n;
pub mod session;
pub mod views;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;
}

/// Shared theme stylesheet for platforms that link assets (web).
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
