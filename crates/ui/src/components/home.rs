//! Landing page

use std::sync::Arc;

use dioxus::prelude::*;

use crate::routes::{Route, SiteRouter};

/// Home view
#[component]
pub fn Home() -> Element {
    let router = use_context::<Arc<SiteRouter>>();
    // Navigate by route name rather than hard-coded paths
    let projects = router.path_of("Projects").unwrap_or("/").to_string();
    let contact = router.path_of("Contact").unwrap_or("/").to_string();

    rsx! {
        div { class: "page",
            div { class: "hero",
                h1 { class: "hero-title", "I build tools for the terminal and the desktop." }
                p { class: "hero-tagline",
                    "Systems programming, small sharp utilities and the occasional web experiment."
                }
            }

            div { class: "card-grid",
                div { class: "card",
                    div { class: "card-title", "Recent work" }
                    div { class: "card-body",
                        "A selection of tools and experiments, from process monitors to network visualisers."
                    }
                    Link { to: Route::page(&projects), "Browse projects →" }
                }
                div { class: "card",
                    div { class: "card-title", "Get in touch" }
                    div { class: "card-body",
                        "Open to collaboration on Rust, tooling and systems projects."
                    }
                    Link { to: Route::page(&contact), "Contact →" }
                }
            }
        }
    }
}
