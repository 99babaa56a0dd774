//! Database interaction demo: a small SQLite-backed note store

use dioxus::prelude::*;

use crate::config::{storage, Note};

/// DatabaseInteraction view
#[component]
pub fn DatabaseInteraction() -> Element {
    let mut draft = use_signal(String::new);
    let mut status_message = use_signal(String::new);
    let mut notes = use_signal(|| match storage() {
        Some(s) => s.list_notes().unwrap_or_default(),
        None => Vec::<Note>::new(),
    });

    let refresh = move || {
        if let Some(s) = storage() {
            notes.set(s.list_notes().unwrap_or_default());
        }
    };

    let add_note = move |_| {
        let body = draft.read().trim().to_string();
        if body.is_empty() {
            return;
        }
        match storage() {
            Some(s) => match s.add_note(&body) {
                Ok(()) => {
                    draft.set(String::new());
                    status_message.set("✓ Note saved".to_string());
                    refresh();
                }
                Err(err) => status_message.set(format!("✗ {err}")),
            },
            None => status_message.set("✗ Storage unavailable".to_string()),
        }
    };

    let current_notes = notes.read().clone();

    rsx! {
        div { class: "page",
            h1 { "Database interaction" }
            p {
                "Notes are written to a local SQLite database — the same store "
                "that keeps the theme preference. Add a few, restart the app, "
                "and they will still be here."
            }

            div { class: "form-row",
                input {
                    class: "input",
                    placeholder: "Write a note...",
                    value: "{draft}",
                    oninput: move |e| draft.set(e.value()),
                    onkeydown: move |e| {
                        if e.key() == Key::Enter {
                            add_note(());
                        }
                    },
                }
                button { class: "btn", onclick: move |_| add_note(()), "Add" }
            }
            div { class: "status-message", "{status_message}" }

            for note in current_notes {
                div { class: "note-row",
                    div {
                        div { class: "note-body", "{note.body}" }
                        div { class: "note-meta", "{note.created_at}" }
                    }
                    button {
                        class: "btn btn-danger",
                        onclick: move |_| {
                            match storage() {
                                Some(s) => match s.delete_note(note.id) {
                                    Ok(()) => {
                                        status_message.set("✓ Note deleted".to_string());
                                        refresh();
                                    }
                                    Err(err) => status_message.set(format!("✗ {err}")),
                                },
                                None => status_message.set("✗ Storage unavailable".to_string()),
                            }
                        },
                        "Delete"
                    }
                }
            }
        }
    }
}
