//! Main application component with routing

use std::sync::Arc;

use dioxus::prelude::*;
use routing::{Renderable, Resolution};

use crate::helpers::format_session;
use crate::routes::{PageView, Route, SiteRouter};
use crate::state::ACTIVE_THEME;
use crate::styles::{theme_css, CUSTOM_STYLES};

/// Main application component
#[component]
pub fn App() -> Element {
    rsx! {
        Router::<Route> {}
    }
}

/// Layout component wrapping all routes
#[component]
pub fn Layout() -> Element {
    let router = use_context::<Arc<SiteRouter>>();
    let mut session_seconds = use_signal(|| 0u64);
    let route: Route = use_route();
    let current_path = route.path();

    // Session clock, refreshed every second
    use_future(move || async move {
        loop {
            tokio::time::sleep(std::time::Duration::from_secs(1)).await;
            session_seconds += 1;
        }
    });

    let theme = *ACTIVE_THEME.read();
    let version = option_env!("CARGO_PKG_VERSION").unwrap_or("unknown");

    rsx! {
        style { {theme_css(theme)} }
        style { {CUSTOM_STYLES} }

        div {
            class: "main-container",

            // Custom title bar
            div { class: "title-bar",
                div {
                    class: "title-bar-drag",
                    onmousedown: move |_| {
                        let window = dioxus::desktop::window();
                        let _ = window.drag_window();
                    },
                    span { class: "title-text", "⌂ Personal Homepage v{version}" }
                }
                div { class: "title-bar-buttons",
                    button {
                        class: "title-btn",
                        onclick: move |_| {
                            let window = dioxus::desktop::window();
                            window.set_minimized(true);
                        },
                        "─"
                    }
                    button {
                        class: "title-btn",
                        onclick: move |_| {
                            let window = dioxus::desktop::window();
                            window.set_maximized(!window.is_maximized());
                        },
                        "□"
                    }
                    button {
                        class: "title-btn title-btn-close",
                        onclick: move |_| {
                            let window = dioxus::desktop::window();
                            window.close();
                        },
                        "✕"
                    }
                }
            }

            // Navigation, generated from the route table
            div { class: "nav-bar",
                for entry in router.entries() {
                    Link {
                        to: Route::page(entry.path()),
                        class: if current_path == entry.path() { "nav-link nav-active" } else { "nav-link" },
                        {nav_label(entry.name())}
                    }
                }
            }

            // Content Area with Router Outlet
            div { class: "content-area",
                Outlet::<Route> {}
            }

            div { class: "footer-bar",
                span { "personal homepage • built with Dioxus" }
                span { "session {format_session(session_seconds())}" }
            }
        }
    }
}

/// Resolves the current path against the route table and renders the
/// matched view, or the not-found view when nothing matches
#[component]
pub fn Page(segments: Vec<String>) -> Element {
    let router = use_context::<Arc<SiteRouter>>();
    let path = Route::Page { segments }.path();

    // Keyed by path so each view gets its own scope across navigations
    match router.resolve_or_fallback(&path) {
        Resolution::Matched(entry) => rsx! {
            ResolvedView { key: "{entry.path()}", view: *entry.component() }
        },
        Resolution::Fallback(view) => rsx! {
            ResolvedView { key: "__fallback__", view: *view }
        },
        Resolution::Unmatched => rsx! {
            div { class: "page not-found",
                p { "Nothing registered for {path}" }
            }
        },
    }
}

/// Renders one resolved view handle in a scope of its own
#[component]
fn ResolvedView(view: PageView) -> Element {
    view.render()
}

/// Short label shown in the nav bar for a route name
fn nav_label(name: &str) -> &str {
    match name {
        "Home" => "🏠 Home",
        "About" => "👤 About",
        "Projects" => "🛠️ Projects",
        "Contact" => "✉️ Contact",
        "Settings" => "⚙️ Settings",
        "DatabaseInteraction" => "🗄️ Database",
        "NetworkTopology" => "🌐 Network",
        other => other,
    }
}
