use api::Note;
use dioxus::prelude::*;
use store::filter_notes;

use crate::notes_data::use_notes;
use crate::note_browser::NoteBrowser;

use super::SearchBox;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Archived notes at `/archived`, filtered locally.
#[component]
pub fn ArchiveView() -> Element {
    let term = use_signal(String::new);
    let notes = use_notes(true);

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
                h1 { class: "view-title", "Archive" }
                SearchBox { term: term, placeholder: "Search archive..." }
            }
            NoteBrowser {
                notes: visible,
                empty_title: "No archived notes",
                empty_message: "Notes you archive will show up here.",
            }
        }
    }
}
