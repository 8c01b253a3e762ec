use api::{Note, NoteId};
use dioxus::prelude::*;
use store::{NoteListView, SelectAction};

use crate::layout::use_viewport;
use crate::navigation::use_navigation;
use crate::note_preview::NotePreview;
use crate::notes_list::NotesList;

/// List with a preview pane on wide viewports.
///
/// `notes` is the visible set, already filtered; `None` while it loads.
#[component]
pub fn NoteBrowser(
    notes: Memo<Option<Vec<Note>>>,
    #[props(default = "No notes yet".to_string())] empty_title: String,
    #[props(default = "Create your first note to get started.".to_string())] empty_message: String,
) -> Element {
    let viewport = use_viewport();
    let nav = use_navigation();
    let mut view = use_signal(NoteListView::new);

    // Reruns on new data or a viewport change; the selection is only peeked.
    use_effect(move || {
        let viewport = viewport();
        let Some(visible) = notes() else {
            return;
        };
        let visible: Vec<&Note> = visible.iter().collect();
        let mut next = view.peek().clone();
        if next.auto_select(&visible, viewport) {
            view.set(next);
        }
    });

    let on_select = move |id: NoteId| {
        let action = view.write().select(id, viewport());
        if let SelectAction::Navigate(target) = action {
            nav.go(target);
        }
    };

    let current = notes();
    let selected = view().selected_id().cloned();
    let preview = current.as_ref().and_then(|visible| {
        let visible: Vec<&Note> = visible.iter().collect();
        view().selected_note(&visible).cloned()
    });

    rsx! {
        div {
            class: "note-browser",
            div {
                class: "note-browser-list",
                NotesList {
                    notes: current,
                    selected: selected,
                    on_select: on_select,
                    empty_title: empty_title,
                    empty_message: empty_message,
                }
            }
            if !viewport().is_narrow() {
                div {
                    class: "note-browser-preview",
                    if let Some(note) = preview {
                        NotePreview { key: "{note.id}", note: note }
                    } else {
                        div { class: "view-placeholder", "Select a note to preview" }
                    }
                }
            }
        }
    }
}
