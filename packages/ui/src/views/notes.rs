use api::Note;
use dioxus::prelude::*;
use store::filter_notes;

use crate::notes_data::use_note_search;
use crate::note_browser::NoteBrowser;

use super::SearchBox;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Active notes at `/`.
///
/// A non-blank term goes to the backend search; the same term is applied
/// locally as well so the visible set never lags behind the input.
#[component]
pub fn NotesView() -> Element {
    let term = use_signal(String::new);
    let notes = use_note_search(term);

    let visible = use_memo(move || {
        let term = term();
        notes().map(|list| filter_notes(&list, &term).into_iter().cloned().collect::<Vec<Note>>())
    });

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "view-page",
            div {
                class: "view-header",
                h1 { class: "view-title", "All Notes" }
                SearchBox { term: term }
            }
            NoteBrowser {
                notes: visible,
                empty_title: "No notes yet",
                empty_message: "Create your first note with the New Note button or Ctrl/Cmd+M.",
            }
        }
    }
}
