use api::Note;
use dioxus::prelude::*;
use store::{filter_notes, SearchStats};

use crate::note_browser::NoteBrowser;
use crate::notes_data::use_note_search;

use super::SearchBox;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Backend search at `/search` with result statistics.
#[component]
pub fn SearchView() -> Element {
    let mut term = use_signal(String::new);
    let results = use_note_search(term);

    // `None` until a non-blank term has results.
    let visible = use_memo(move || {
        let term = term();
        if term.trim().is_empty() {
            return None;
        }
        results().map(|list| filter_notes(&list, &term).into_iter().cloned().collect::<Vec<Note>>())
    });

    let searching = !term().trim().is_empty();
    let stats = visible().map(|notes| SearchStats::from_notes(&notes));

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "view-page",
            div {
                class: "view-header",
                h1 { class: "view-title", "Search" }
                SearchBox { term: term, placeholder: "Search titles, content and tags..." }
                if searching {
                    // Unmounting the browser also drops its selection.
                    button {
                        class: "btn btn-ghost",
                        onclick: move |_| term.set(String::new()),
                        "Clear all"
                    }
                }
            }

            if !searching {
                div {
                    class: "notes-empty",
                    h3 { "Search your notes" }
                    p { "Type to search across titles, content and tags." }
                }
            } else {
                if let Some(stats) = stats {
                    div {
                        class: "search-stats",
                        span { "{stats.results} results" }
                        span { "{stats.words} words" }
                        span { "{stats.tags} tags" }
                    }
                }
                NoteBrowser {
                    notes: visible,
                    empty_title: "No results",
                    empty_message: "No notes match \"{term}\".",
                }
            }
        }
    }
}
