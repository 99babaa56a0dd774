//! About page with bio and skills

use dioxus::prelude::*;

const SKILLS: &[(&str, u32)] = &[
    ("Rust", 90),
    ("TypeScript / Vue", 75),
    ("SQL", 70),
    ("Networking", 65),
    ("CI / DevOps", 55),
];

/// About view
#[component]
pub fn About() -> Element {
    rsx! {
        div { class: "page",
            h1 { "About" }
            p {
                "I'm a software engineer who likes the layers most people avoid: "
                "memory layouts, wire formats and the plumbing between a UI and the "
                "operating system underneath it."
            }
            p {
                "This site is itself one of those experiments — a single-page app "
                "rendered in a native webview, with its navigation driven by a "
                "validated route table instead of scattered links."
            }

            h2 { "Skills" }
            for (name, level) in SKILLS.iter() {
                div { class: "skill-row",
                    span { class: "skill-label", "{name}" }
                    div { class: "skill-bar",
                        div {
                            class: "skill-bar-fill",
                            style: "width: {level}%",
                        }
                    }
                }
            }
        }
    }
}
