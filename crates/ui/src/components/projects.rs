//! Projects page with live search filtering

use dioxus::prelude::*;

/// A showcased project
struct Project {
    name: &'static str,
    description: &'static str,
    tags: &'static [&'static str],
    url: &'static str,
}

const PROJECTS: &[Project] = &[
    Project {
        name: "dioprocess",
        description: "Desktop process and network monitor with a frameless webview UI.",
        tags: &["rust", "dioxus", "desktop"],
        url: "https://github.com/example/dioprocess",
    },
    Project {
        name: "routing",
        description: "Validated route table registrar: duplicate detection, base-path resolution and not-found fallback.",
        tags: &["rust", "library"],
        url: "https://github.com/example/routing",
    },
    Project {
        name: "topoview",
        description: "Static SVG renderer for small service topologies.",
        tags: &["svg", "visualisation"],
        url: "https://github.com/example/topoview",
    },
    Project {
        name: "notekeep",
        description: "Tiny SQLite-backed note store, embedded in this site's database page.",
        tags: &["rust", "sqlite"],
        url: "https://github.com/example/notekeep",
    },
    Project {
        name: "homepage",
        description: "This site. A Dioxus single-page app whose navigation is a route table built at startup.",
        tags: &["rust", "dioxus", "spa"],
        url: "https://github.com/example/homepage",
    },
];

/// Case-insensitive match against name, description and tags
fn matches_query(project: &Project, query: &str) -> bool {
    let query = query.to_lowercase();
    query.is_empty()
        || project.name.to_lowercase().contains(&query)
        || project.description.to_lowercase().contains(&query)
        || project.tags.iter().any(|t| t.contains(&query))
}

/// Projects view
#[component]
pub fn Projects() -> Element {
    let mut search_query = use_signal(String::new);

    let query = search_query.read().clone();
    let visible: Vec<&Project> = PROJECTS
        .iter()
        .filter(|p| matches_query(p, &query))
        .collect();

    rsx! {
        div { class: "page",
            h1 { "Projects" }
            div { class: "form-row",
                input {
                    class: "input",
                    placeholder: "🔍 Filter by name, description or tag...",
                    value: "{search_query}",
                    oninput: move |e| search_query.set(e.value()),
                }
            }

            div { class: "card-grid",
                for project in visible {
                    div { class: "card",
                        div { class: "card-title",
                            a {
                                href: project.url,
                                target: "_blank",
                                "{project.name}"
                            }
                        }
                        div { class: "card-body", "{project.description}" }
                        div {
                            for tag in project.tags.iter() {
                                span { class: "tag", "{tag}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_matches_everything() {
        assert!(PROJECTS.iter().all(|p| matches_query(p, "")));
    }

    #[test]
    fn query_filters_by_tag_and_name() {
        let hits: Vec<&str> = PROJECTS
            .iter()
            .filter(|p| matches_query(p, "sqlite"))
            .map(|p| p.name)
            .collect();
        assert_eq!(hits, vec!["notekeep"]);

        assert!(PROJECTS.iter().any(|p| matches_query(p, "DIOPROCESS")));
        assert!(!PROJECTS.iter().any(|p| matches_query(p, "haskell")));
    }
}
