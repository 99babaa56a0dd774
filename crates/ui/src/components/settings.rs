//! Settings page: theme selection and route table overview

use std::sync::Arc;

use dioxus::prelude::*;

use crate::config::{save_theme, Theme};
use crate::routes::SiteRouter;
use crate::state::ACTIVE_THEME;

/// Settings view
#[component]
pub fn Settings() -> Element {
    let router = use_context::<Arc<SiteRouter>>();
    let active = *ACTIVE_THEME.read();

    rsx! {
        div { class: "page",
            h1 { "Settings" }

            h2 { "Theme" }
            for theme in Theme::all().iter().copied() {
                label { class: "theme-option",
                    input {
                        r#type: "radio",
                        name: "theme",
                        checked: active == theme,
                        onchange: move |_| {
                            *ACTIVE_THEME.write() = theme;
                            save_theme(theme);
                        },
                    }
                    "{theme.display_name()}"
                }
            }

            h2 { "Registered routes" }
            p { "The table below is the live route table this application was booted with." }
            table { class: "route-table",
                thead {
                    tr {
                        th { "Name" }
                        th { "Path" }
                    }
                }
                tbody {
                    for entry in router.entries() {
                        tr {
                            td { "{entry.name()}" }
                            td { "{entry.path()}" }
                        }
                    }
                }
            }
        }
    }
}
