//! Fallback view for unmatched navigation targets

use std::sync::Arc;

use dioxus::prelude::*;

use crate::routes::{Route, SiteRouter};

/// NotFound view
#[component]
pub fn NotFound() -> Element {
    let router = use_context::<Arc<SiteRouter>>();
    let home = router.path_of("Home").unwrap_or("/").to_string();

    rsx! {
        div { class: "page not-found",
            div { class: "not-found-code", "404" }
            p { "There is no page at this address." }
            Link { to: Route::page(&home), class: "btn", "Back to Home" }
        }
    }
}
