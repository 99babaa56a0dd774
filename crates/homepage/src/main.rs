//! Personal homepage
//! A desktop single-page application built with Dioxus

use std::env;
use std::process;
use std::sync::Arc;

use dioxus::desktop::{LogicalSize, WindowBuilder};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use ui::{site_router, App};

/// Base path under which all routes are resolved, from deployment config
fn base_path() -> String {
    env::var("HOMEPAGE_BASE_PATH").unwrap_or_else(|_| "/".to_string())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // A malformed route table is a programming error: fail fast at startup.
    let router = match site_router(&base_path()) {
        Ok(router) => Arc::new(router),
        Err(err) => {
            error!(%err, "invalid route table");
            process::exit(1);
        }
    };
    info!(
        routes = router.len(),
        base = %router.base_path(),
        "route table ready"
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_disable_context_menu(true)
                .with_window(
                    WindowBuilder::new()
                        .with_title("Personal Homepage")
                        .with_decorations(false)
                        .with_inner_size(LogicalSize::new(1100.0, 700.0))
                        .with_resizable(true),
                ),
        )
        .with_context(router)
        .launch(App);
}
