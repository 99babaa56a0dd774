//! UI library for the personal homepage
//! Contains Dioxus components with custom CSS (offline)

mod components;
pub mod config;
mod helpers;
pub mod routes;
mod state;
mod styles;

pub use components::App;
pub use config::{load_theme, save_theme, Theme};
pub use helpers::{copy_to_clipboard, format_session};
pub use routes::{site_router, PageView, Route, SiteRouter};
pub use state::*;
pub use styles::{theme_css, CUSTOM_STYLES};
