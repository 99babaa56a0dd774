//! Contact page with copy-to-clipboard channels

use dioxus::prelude::*;

use crate::helpers::copy_to_clipboard;

const CHANNELS: &[(&str, &str)] = &[
    ("Email", "hello@example.dev"),
    ("GitHub", "https://github.com/example"),
    ("Mastodon", "@example@hachyderm.io"),
    ("Matrix", "@example:matrix.org"),
];

/// Contact view
#[component]
pub fn Contact() -> Element {
    let mut status_message = use_signal(String::new);

    rsx! {
        div { class: "page",
            h1 { "Contact" }
            p { "Pick whichever channel suits you. The buttons copy the address straight to your clipboard." }

            for (channel, value) in CHANNELS.iter() {
                div { class: "contact-row",
                    div {
                        div { class: "contact-channel", "{channel}" }
                        div { class: "contact-value", "{value}" }
                    }
                    button {
                        class: "btn",
                        onclick: move |_| {
                            if copy_to_clipboard(value) {
                                status_message.set(format!("✓ Copied {channel} address"));
                            } else {
                                status_message.set("✗ Clipboard unavailable".to_string());
                            }
                            spawn(async move {
                                tokio::time::sleep(std::time::Duration::from_secs(3)).await;
                                status_message.set(String::new());
                            });
                        },
                        "Copy"
                    }
                }
            }

            div { class: "status-message", "{status_message}" }
        }
    }
}
