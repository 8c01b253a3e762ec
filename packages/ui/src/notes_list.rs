use api::{Note, NoteId};
use dioxus::prelude::*;
use store::clock::now_ms;
use store::format::{excerpt, format_timestamp};

const EXCERPT_CHARS: usize = 100;
const SKELETON_ROWS: usize = 5;

/// Scrollable note list. `notes == None` renders the loading skeleton.
#[component]
pub fn NotesList(
    notes: Option<Vec<Note>>,
    selected: Option<NoteId>,
    on_select: EventHandler<NoteId>,
    #[props(default = "No notes yet".to_string())] empty_title: String,
    #[props(default = "Create your first note to get started.".to_string())] empty_message: String,
) -> Element {
    let Some(notes) = notes else {
        return rsx! {
            div {
                class: "notes-list",
                for i in 0..SKELETON_ROWS {
                    div {
                        key: "{i}",
                        class: "note-card skeleton",
                        div { class: "skeleton-line wide" }
                        div { class: "skeleton-line" }
                    }
                }
            }
        };
    };

    if notes.is_empty() {
        return rsx! {
            div {
                class: "notes-empty",
                h3 { "{empty_title}" }
                p { "{empty_message}" }
            }
        };
    }

    let now = now_ms();

    rsx! {
        div {
            class: "notes-list",
            for note in notes {
                NoteCard {
                    key: "{note.id}",
                    active: selected.as_ref() == Some(&note.id),
                    updated: format_timestamp(Some(note.updated_at), now),
                    note: note,
                    on_select: on_select,
                }
            }
        }
    }
}

#[component]
fn NoteCard(note: Note, active: bool, updated: String, on_select: EventHandler<NoteId>) -> Element {
    let summary = excerpt(&note.content, EXCERPT_CHARS);
    let title = if note.title.trim().is_empty() {
        "Untitled".to_string()
    } else {
        note.title.clone()
    };

    rsx! {
        div {
            class: if active { "note-card active" } else { "note-card" },
            onclick: {
                let id = note.id.clone();
                move |_| on_select.call(id.clone())
            },
            div { class: "note-card-title", "{title}" }
            p { class: "note-card-excerpt", "{summary}" }
            div {
                class: "note-card-meta",
                div {
                    class: "note-card-tags",
                    for (i, tag) in note.tags.iter().enumerate() {
                        span { key: "{i}", class: "tag-badge", "{tag}" }
                    }
                }
                span { class: "note-card-time", "{updated}" }
            }
        }
    }
}
